//! Shared test infrastructure for light-arrangements integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use light_arrangements::{ArrangementConfig, Color, LightArrangement, LightStrip};

// ============================================================================
// Fixtures
// ============================================================================

/// Lights in the 2D fixture.
pub const NUMBER_LIGHTS: usize = 100;

/// Capacity used by the 2D fixture.
pub const CAPACITY: usize = 128;

pub type GridArrangement = LightArrangement<MockStrip, 2, CAPACITY>;

/// A 10x10 grid of lights at cell centers of the unit square.
///
/// Light `row * 10 + col` sits at `((col + 0.5) / 10, (row + 0.5) / 10)`.
pub fn grid_positions() -> heapless::Vec<[f64; 2], CAPACITY> {
    let mut positions = heapless::Vec::new();
    for row in 0..10 {
        for col in 0..10 {
            let _ = positions.push([(col as f64 + 0.5) / 10.0, (row as f64 + 0.5) / 10.0]);
        }
    }
    positions
}

/// The same grid as CSV text.
pub fn grid_csv() -> String {
    let mut text = String::from("# x, y\n");
    for [x, y] in grid_positions() {
        text.push_str(&format!("{}, {}\n", x, y));
    }
    text
}

pub fn grid_arrangement() -> GridArrangement {
    let config = ArrangementConfig::from_positions(grid_positions()).unwrap();
    LightArrangement::new(MockStrip::new(), config).unwrap()
}

// ============================================================================
// Mock Strip
// ============================================================================

/// Mock strip that records every frame it is shown
pub struct MockStrip {
    frames: Vec<Vec<Color>>,
}

impl MockStrip {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn frames(&self) -> &[Vec<Color>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[Color]> {
        self.frames.last().map(|f| f.as_slice())
    }
}

impl LightStrip for MockStrip {
    fn show(&mut self, colors: &[Color]) {
        self.frames.push(colors.to_vec());
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Sum of all channels, used to compare brightness.
pub fn brightness(color: Color) -> u32 {
    color.red as u32 + color.green as u32 + color.blue as u32
}
