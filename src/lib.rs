#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LightArrangement`**: Lights at fixed positions, addressed by index, nearest point, radius or box
//! - **`ArrangementConfig`**: The position source, one `D`-dimensional point per light
//! - **`LightStrip`**: Trait to implement for your output hardware
//! - **`Loc`**: A location in Cartesian, polar or cylindrical coordinates
//! - **`Region`**: A target set of lights described by shape
//! - **`BlendMode`**: Whether a write replaces or adds to the current color
//! - **`Color`**: 8-bit RGB (`palette::Srgb<u8>`)
//!
//! All geometry is evaluated in Cartesian space. Polar and cylindrical input is
//! converted once, before any light is visited.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

mod logging;

pub mod arrangement;
pub mod buffer;
pub mod colors;
pub mod compositor;
pub mod config;
pub mod error;
pub mod geometry;
pub mod query;
pub mod registry;

pub use arrangement::{LightArrangement, LightStrip, PolarCoords};
pub use buffer::ColorBuffer;
pub use colors::{
    BLUE, CYAN, Color, GREEN, MAGENTA, OFF, RED, WHITE, YELLOW, color_from_channels,
    color_from_reals,
};
pub use compositor::BlendMode;
pub use config::ArrangementConfig;
pub use error::{ArrangementError, Result};
pub use geometry::{Loc, Point};
pub use query::{Region, RegionLights};
pub use registry::LightRegistry;

/// Highest supported number of coordinates per light.
pub const MAX_DIMENSIONS: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_compile() {
        let _ = BlendMode::Overwrite;
        let _ = BlendMode::Merge;
        let _ = Loc::<2>::Cartesian([0.0, 0.0]);
        let _: Color = OFF;
    }
}
