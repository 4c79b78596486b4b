//! Color type and channel helpers.
//!
//! Lights are driven with plain 8-bit RGB triples. [`Color`] is
//! `palette::Srgb<u8>`, so every value that exists is already in range; the
//! fallible constructors here are for boundaries that hand over raw numbers
//! (bindings, config files) and must reject bad channels instead of clamping.

use crate::error::{ArrangementError, Result};
use palette::{FromColor, Hsv, Srgb};

/// An 8-bit RGB color.
pub type Color = Srgb<u8>;

pub const OFF: Color = Srgb::new(0, 0, 0);
pub const WHITE: Color = Srgb::new(255, 255, 255);
pub const RED: Color = Srgb::new(255, 0, 0);
pub const GREEN: Color = Srgb::new(0, 255, 0);
pub const BLUE: Color = Srgb::new(0, 0, 255);
pub const YELLOW: Color = Srgb::new(255, 255, 0);
pub const CYAN: Color = Srgb::new(0, 255, 255);
pub const MAGENTA: Color = Srgb::new(255, 0, 255);

/// Builds a color from integer channels.
///
/// # Errors
/// * `ColorArity` - Not exactly three channels
/// * `ColorRange` - A channel outside `0..=255`
pub fn color_from_channels(channels: &[i64]) -> Result<Color> {
    let [r, g, b] = three(channels)?;
    Ok(Srgb::new(channel(r)?, channel(g)?, channel(b)?))
}

/// Builds a color from real-valued channels.
///
/// Every channel must hold an integral value; `2.0` is accepted, `2.5` is not.
///
/// # Errors
/// * `ColorArity` - Not exactly three channels
/// * `ColorType` - A channel with a fractional part, or NaN/infinite
/// * `ColorRange` - An integral channel outside `0..=255`
pub fn color_from_reals(channels: &[f64]) -> Result<Color> {
    let [r, g, b] = three(channels)?;

    for value in [r, g, b] {
        if !value.is_finite() || libm::trunc(value) != value {
            return Err(ArrangementError::ColorType);
        }
    }

    Ok(Srgb::new(
        channel(r as i64)?,
        channel(g as i64)?,
        channel(b as i64)?,
    ))
}

fn three<T: Copy>(channels: &[T]) -> Result<[T; 3]> {
    match channels {
        &[r, g, b] => Ok([r, g, b]),
        _ => Err(ArrangementError::ColorArity {
            got: channels.len(),
        }),
    }
}

fn channel(value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| ArrangementError::ColorRange)
}

/// Creates a color from HSV (Hue, Saturation, Value) components.
///
/// Hue is in degrees, saturation and value in `0.0..=1.0`.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Color {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::<f32>::from_color(hsv).into_format()
}

/// Creates a color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Color {
    hsv(hue, 1.0, 1.0)
}

/// Scales every channel by `factor`, rounding to the nearest integer.
///
/// `factor` is clamped to `0.0..=1.0`.
pub fn scale(color: Color, factor: f64) -> Color {
    let factor = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
    let scale_channel = |c: u8| libm::round(c as f64 * factor) as u8;
    Srgb::new(
        scale_channel(color.red),
        scale_channel(color.green),
        scale_channel(color.blue),
    )
}

/// Adds two colors channel by channel, saturating at 255.
pub fn saturating_add(a: Color, b: Color) -> Color {
    Srgb::new(
        a.red.saturating_add(b.red),
        a.green.saturating_add(b.green),
        a.blue.saturating_add(b.blue),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_accept_full_range() {
        assert_eq!(color_from_channels(&[0, 128, 255]), Ok(Srgb::new(0, 128, 255)));
    }

    #[test]
    fn channels_reject_out_of_range() {
        assert_eq!(color_from_channels(&[256, 0, 0]), Err(ArrangementError::ColorRange));
        assert_eq!(color_from_channels(&[0, -1, 0]), Err(ArrangementError::ColorRange));
    }

    #[test]
    fn channels_reject_wrong_arity() {
        assert_eq!(
            color_from_channels(&[1, 2]),
            Err(ArrangementError::ColorArity { got: 2 })
        );
        assert_eq!(
            color_from_reals(&[1.0, 2.0, 3.0, 4.0]),
            Err(ArrangementError::ColorArity { got: 4 })
        );
    }

    #[test]
    fn reals_require_integral_values() {
        assert_eq!(color_from_reals(&[10.0, 20.0, 30.0]), Ok(Srgb::new(10, 20, 30)));
        assert_eq!(
            color_from_reals(&[2.5, 3.5, 0.334]),
            Err(ArrangementError::ColorType)
        );
        assert_eq!(
            color_from_reals(&[f64::NAN, 0.0, 0.0]),
            Err(ArrangementError::ColorType)
        );
    }

    #[test]
    fn reals_check_type_before_range() {
        assert_eq!(
            color_from_reals(&[300.5, 0.0, 0.0]),
            Err(ArrangementError::ColorType)
        );
        assert_eq!(
            color_from_reals(&[300.0, 0.0, 0.0]),
            Err(ArrangementError::ColorRange)
        );
    }

    #[test]
    fn scale_rounds_to_nearest() {
        assert_eq!(scale(Srgb::new(255, 100, 3), 0.5), Srgb::new(128, 50, 2));
        assert_eq!(scale(WHITE, 0.0), OFF);
        assert_eq!(scale(WHITE, 1.5), WHITE);
    }

    #[test]
    fn saturating_add_clamps_at_255() {
        assert_eq!(
            saturating_add(Srgb::new(200, 10, 0), Srgb::new(100, 20, 0)),
            Srgb::new(255, 30, 0)
        );
    }

    #[test]
    fn hue_produces_primaries() {
        assert_eq!(hue(0.0), RED);
        assert_eq!(hue(120.0), GREEN);
        assert_eq!(hue(240.0), BLUE);
    }
}
