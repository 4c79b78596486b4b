//! Error type shared by every arrangement operation.

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, ArrangementError>;

/// Errors raised by arrangement loading, queries and color writes.
///
/// All variants describe invalid input. None of them are transient, and every
/// operation that returns one has left the color buffer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArrangementError {
    /// Light index outside `0..len`.
    Index {
        /// The requested index.
        index: usize,
        /// Number of lights in the arrangement.
        len: usize,
    },

    /// Coordinate or angle count does not match the arrangement.
    Dimension {
        /// Number of values the arrangement requires.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// Dimensionality outside `1..=MAX_DIMENSIONS`.
    UnsupportedDimension(usize),

    /// A coordinate, radius or angle was NaN or infinite.
    NonFinite,

    /// A color channel outside `0..=255`.
    ColorRange,

    /// A color channel that is not an integer.
    ColorType,

    /// A color with other than three channels.
    ColorArity {
        /// Number of channels supplied.
        got: usize,
    },

    /// More positions than the arrangement capacity.
    CapacityExceeded,

    /// Position source contained no lights.
    NoLights,

    /// Non-numeric field in a position row.
    Parse {
        /// 1-based line number in the source.
        line: usize,
    },

    /// Position row with the wrong number of fields.
    RowArity {
        /// 1-based line number in the source.
        line: usize,
        /// Fields required per row.
        expected: usize,
        /// Fields found.
        got: usize,
    },

    /// Position file could not be read.
    Io,
}

impl core::fmt::Display for ArrangementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArrangementError::Index { index, len } => {
                write!(
                    f,
                    "index {} is out of bounds for arrangement with {} lights",
                    index, len
                )
            }
            ArrangementError::Dimension { expected, got } => {
                write!(f, "expected {} coordinates, got {}", expected, got)
            }
            ArrangementError::UnsupportedDimension(d) => {
                write!(
                    f,
                    "dimension number must be between 1 and {}, got {}",
                    crate::MAX_DIMENSIONS,
                    d
                )
            }
            ArrangementError::NonFinite => {
                write!(f, "coordinates, radii and angles must be finite")
            }
            ArrangementError::ColorRange => {
                write!(f, "color channels must be within 0..=255")
            }
            ArrangementError::ColorType => {
                write!(f, "color channels must be integers")
            }
            ArrangementError::ColorArity { got } => {
                write!(f, "colors have exactly 3 channels, got {}", got)
            }
            ArrangementError::CapacityExceeded => {
                write!(f, "arrangement capacity exceeded")
            }
            ArrangementError::NoLights => {
                write!(f, "position source contains no lights")
            }
            ArrangementError::Parse { line } => {
                write!(f, "line {}: position fields must be numbers", line)
            }
            ArrangementError::RowArity {
                line,
                expected,
                got,
            } => {
                write!(
                    f,
                    "line {}: expected {} coordinates, got {}",
                    line, expected, got
                )
            }
            ArrangementError::Io => {
                write!(f, "position file could not be read")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArrangementError {}
