//! Position source for an arrangement.
//!
//! An [`ArrangementConfig`] is the ordered list of light positions, one per
//! light index, read once when the arrangement is built. Positions usually come
//! from a CSV file with one light per line:
//!
//! ```text
//! # x, y
//! 0.05, 0.05
//! 0.15, 0.05
//! ```

use crate::error::{ArrangementError, Result};
use crate::geometry::{self, Point};
use heapless::Vec;

/// Light positions loaded from a position source.
///
/// # Type Parameters
/// * `D` - Number of coordinates per light
/// * `MAX_LIGHTS` - Maximum number of lights this config can hold
#[derive(Debug, Clone, PartialEq)]
pub struct ArrangementConfig<const D: usize, const MAX_LIGHTS: usize> {
    positions: Vec<Point<D>, MAX_LIGHTS>,
}

impl<const D: usize, const MAX_LIGHTS: usize> ArrangementConfig<D, MAX_LIGHTS> {
    /// Creates a config from positions in light index order.
    ///
    /// # Errors
    /// * `UnsupportedDimension` - `D` is 0 or above `MAX_DIMENSIONS`
    /// * `NonFinite` - A coordinate is NaN or infinite
    /// * `CapacityExceeded` - More than `MAX_LIGHTS` positions
    /// * `NoLights` - No positions supplied
    pub fn from_positions<I>(positions: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point<D>>,
    {
        geometry::check_dimensions::<D>()?;

        let mut stored = Vec::new();
        for position in positions {
            let position = geometry::point::<D>(&position)?;
            stored
                .push(position)
                .map_err(|_| ArrangementError::CapacityExceeded)?;
        }

        if stored.is_empty() {
            return Err(ArrangementError::NoLights);
        }

        Ok(Self { positions: stored })
    }

    /// Parses positions from CSV text.
    ///
    /// Each non-blank line that does not start with `#` holds `D`
    /// comma-separated numbers. Whitespace around fields is ignored.
    ///
    /// # Errors
    /// * `Parse` - A field is not a number
    /// * `RowArity` - A line does not hold exactly `D` fields
    /// * plus every error of [`from_positions`](Self::from_positions)
    pub fn from_csv_str(text: &str) -> Result<Self> {
        geometry::check_dimensions::<D>()?;

        let mut rows: Vec<Point<D>, MAX_LIGHTS> = Vec::new();
        for (line_idx, line) in text.lines().enumerate() {
            let line_no = line_idx + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let row = parse_row::<D>(line, line_no)?;
            rows.push(row)
                .map_err(|_| ArrangementError::CapacityExceeded)?;
        }

        Self::from_positions(rows)
    }

    /// Reads and parses a CSV position file.
    ///
    /// # Errors
    /// * `Io` - The file could not be read
    /// * plus every error of [`from_csv_str`](Self::from_csv_str)
    #[cfg(feature = "std")]
    pub fn from_csv<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|_| ArrangementError::Io)?;
        Self::from_csv_str(&text)
    }

    /// Number of lights.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false for a successfully built config.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions in light index order.
    pub fn positions(&self) -> &[Point<D>] {
        &self.positions
    }

    pub(crate) fn into_positions(self) -> Vec<Point<D>, MAX_LIGHTS> {
        self.positions
    }
}

fn parse_row<const D: usize>(line: &str, line_no: usize) -> Result<Point<D>> {
    let mut row = [0.0; D];
    let mut count = 0;

    for field in line.split(',') {
        let value: f64 = field
            .trim()
            .parse()
            .map_err(|_| ArrangementError::Parse { line: line_no })?;
        if let Some(slot) = row.get_mut(count) {
            *slot = value;
        }
        count += 1;
    }

    if count != D {
        return Err(ArrangementError::RowArity {
            line: line_no,
            expected: D,
            got: count,
        });
    }

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_skipping_comments_and_blanks() {
        let text = "# x, y\n0.1, 0.2\n\n  0.3,0.4  \n";
        let config = ArrangementConfig::<2, 8>::from_csv_str(text).unwrap();
        assert_eq!(config.positions(), &[[0.1, 0.2], [0.3, 0.4]]);
    }

    #[test]
    fn rejects_non_numeric_field() {
        let text = "0.1, 0.2\n0.3, abc\n";
        assert_eq!(
            ArrangementConfig::<2, 8>::from_csv_str(text),
            Err(ArrangementError::Parse { line: 2 })
        );
    }

    #[test]
    fn rejects_mismatched_row_arity() {
        let text = "0.1, 0.2\n0.3, 0.4, 0.5\n";
        assert_eq!(
            ArrangementConfig::<2, 8>::from_csv_str(text),
            Err(ArrangementError::RowArity {
                line: 2,
                expected: 2,
                got: 3
            })
        );
    }

    #[test]
    fn rejects_empty_source() {
        assert_eq!(
            ArrangementConfig::<2, 8>::from_csv_str("# nothing\n"),
            Err(ArrangementError::NoLights)
        );
    }

    #[test]
    fn rejects_too_many_lights() {
        let positions = [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]];
        assert_eq!(
            ArrangementConfig::<2, 2>::from_positions(positions),
            Err(ArrangementError::CapacityExceeded)
        );
    }

    #[test]
    fn rejects_unsupported_dimension() {
        assert_eq!(
            ArrangementConfig::<5, 2>::from_positions([[0.0; 5]]),
            Err(ArrangementError::UnsupportedDimension(5))
        );
    }

    #[test]
    fn rejects_non_finite_position() {
        assert_eq!(
            ArrangementConfig::<2, 2>::from_positions([[f64::NAN, 0.0]]),
            Err(ArrangementError::NonFinite)
        );
    }
}
