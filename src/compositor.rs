//! Writing colors into a [`ColorBuffer`].
//!
//! Targets arrive as light indices (or index/distance pairs for falloff)
//! produced by the query layer. Every index handed in here comes from the
//! registry the buffer was sized for, so writes cannot fail part way.

use crate::buffer::ColorBuffer;
use crate::colors::{self, Color};
use crate::error::Result;

/// How a computed color combines with what a light already shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlendMode {
    /// Replace the current color.
    #[default]
    Overwrite,

    /// Add to the current color, saturating each channel at 255.
    Merge,
}

impl BlendMode {
    /// Combines `incoming` with `current`.
    #[inline]
    pub fn blend(self, current: Color, incoming: Color) -> Color {
        match self {
            BlendMode::Overwrite => incoming,
            BlendMode::Merge => colors::saturating_add(current, incoming),
        }
    }
}

/// Linear intensity falloff: 1.0 at the center, 0.0 at `radius`.
///
/// A zero radius only ever contains lights sitting on the center, which get
/// full intensity.
#[inline]
pub fn falloff(distance: f64, radius: f64) -> f64 {
    if radius <= 0.0 {
        return if distance <= 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - distance / radius).clamp(0.0, 1.0)
}

/// Writes `color` to every target light, replacing its current color.
///
/// # Returns
/// Number of lights written.
pub fn overwrite<const MAX_LIGHTS: usize>(
    buffer: &mut ColorBuffer<MAX_LIGHTS>,
    targets: impl IntoIterator<Item = usize>,
    color: Color,
) -> Result<usize> {
    let mut written = 0;
    for index in targets {
        buffer.set(index, color)?;
        written += 1;
    }
    Ok(written)
}

/// Writes `color` scaled by distance falloff to every target light.
///
/// `targets` yields `(index, distance)` pairs, all with `distance <= radius`.
/// Each channel is scaled by [`falloff`], rounded to the nearest integer, then
/// combined with the light's current color according to `mode`.
///
/// # Returns
/// Number of lights written.
pub fn decreasing_intensity<const MAX_LIGHTS: usize>(
    buffer: &mut ColorBuffer<MAX_LIGHTS>,
    targets: impl IntoIterator<Item = (usize, f64)>,
    radius: f64,
    color: Color,
    mode: BlendMode,
) -> Result<usize> {
    let mut written = 0;
    for (index, distance) in targets {
        let contribution = colors::scale(color, falloff(distance, radius));
        let current = buffer.get(index)?;
        buffer.set(index, mode.blend(current, contribution))?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{OFF, RED, WHITE};
    use palette::Srgb;

    #[test]
    fn falloff_is_linear() {
        assert_eq!(falloff(0.0, 2.0), 1.0);
        assert_eq!(falloff(1.0, 2.0), 0.5);
        assert_eq!(falloff(2.0, 2.0), 0.0);
        assert_eq!(falloff(0.0, 0.0), 1.0);
    }

    #[test]
    fn overwrite_replaces_targets_only() {
        let mut buffer = ColorBuffer::<4>::new(4).unwrap();
        buffer.fill(WHITE);
        assert_eq!(overwrite(&mut buffer, [1, 3], RED), Ok(2));
        assert_eq!(buffer.as_slice(), &[WHITE, RED, WHITE, RED]);
    }

    #[test]
    fn intensity_overwrite_scales_by_distance() {
        let mut buffer = ColorBuffer::<4>::new(3).unwrap();
        buffer.fill(WHITE);
        let targets = [(0, 0.0), (1, 0.5), (2, 1.0)];
        decreasing_intensity(&mut buffer, targets, 1.0, Srgb::new(200, 100, 0), BlendMode::Overwrite)
            .unwrap();
        assert_eq!(
            buffer.as_slice(),
            &[Srgb::new(200, 100, 0), Srgb::new(100, 50, 0), OFF]
        );
    }

    #[test]
    fn intensity_merge_adds_and_saturates() {
        let mut buffer = ColorBuffer::<4>::new(2).unwrap();
        buffer.set(0, Srgb::new(100, 250, 0)).unwrap();
        let targets = [(0, 0.5), (1, 0.5)];
        decreasing_intensity(&mut buffer, targets, 1.0, Srgb::new(100, 100, 100), BlendMode::Merge)
            .unwrap();
        assert_eq!(buffer.get(0), Ok(Srgb::new(150, 255, 50)));
        assert_eq!(buffer.get(1), Ok(Srgb::new(50, 50, 50)));
    }

    #[test]
    fn merge_blend_is_saturating_sum() {
        assert_eq!(BlendMode::Merge.blend(Srgb::new(250, 0, 1), Srgb::new(10, 0, 1)), Srgb::new(255, 0, 2));
        assert_eq!(BlendMode::Overwrite.blend(WHITE, RED), RED);
    }
}
