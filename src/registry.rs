//! Fixed light positions, addressed by index.

use crate::config::ArrangementConfig;
use crate::error::{ArrangementError, Result};
use crate::geometry::Point;
use heapless::Vec;

/// Immutable positions of every light in an arrangement.
///
/// Built once from an [`ArrangementConfig`]; the light count and
/// dimensionality never change afterwards. Index `i` always refers to the
/// `i`-th position of the source.
#[derive(Debug, Clone)]
pub struct LightRegistry<const D: usize, const MAX_LIGHTS: usize> {
    positions: Vec<Point<D>, MAX_LIGHTS>,
}

impl<const D: usize, const MAX_LIGHTS: usize> LightRegistry<D, MAX_LIGHTS> {
    /// Creates a registry from loaded positions.
    pub fn new(config: ArrangementConfig<D, MAX_LIGHTS>) -> Self {
        Self {
            positions: config.into_positions(),
        }
    }

    /// Returns the position of light `index`.
    ///
    /// # Errors
    /// * `Index` - `index` is not below [`count`](Self::count)
    pub fn position_of(&self, index: usize) -> Result<&Point<D>> {
        self.positions.get(index).ok_or(ArrangementError::Index {
            index,
            len: self.positions.len(),
        })
    }

    /// Number of lights.
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// All positions in index order.
    pub fn positions(&self) -> &[Point<D>] {
        &self.positions
    }

    /// Iterates `(index, position)` pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Point<D>)> + '_ {
        self.positions.iter().enumerate()
    }

    /// Per-axis minimum and maximum over all lights.
    pub fn bounds(&self) -> Option<(Point<D>, Point<D>)> {
        let (first, rest) = self.positions.split_first()?;
        let mut min = *first;
        let mut max = *first;

        for position in rest {
            for axis in 0..D {
                min[axis] = min[axis].min(position[axis]);
                max[axis] = max[axis].max(position[axis]);
            }
        }

        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LightRegistry<2, 4> {
        let config =
            ArrangementConfig::from_positions([[0.0, 1.0], [2.0, -1.0], [1.0, 0.5]]).unwrap();
        LightRegistry::new(config)
    }

    #[test]
    fn position_of_returns_load_order() {
        let registry = registry();
        assert_eq!(registry.count(), 3);
        assert_eq!(registry.position_of(1), Ok(&[2.0, -1.0]));
    }

    #[test]
    fn position_of_rejects_out_of_range() {
        assert_eq!(
            registry().position_of(3),
            Err(ArrangementError::Index { index: 3, len: 3 })
        );
    }

    #[test]
    fn iteration_is_restartable() {
        let registry = registry();
        let first: heapless::Vec<usize, 4> = registry.iter().map(|(i, _)| i).collect();
        let second: heapless::Vec<usize, 4> = registry.iter().map(|(i, _)| i).collect();
        assert_eq!(first, second);
        assert_eq!(first.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn bounds_cover_every_axis() {
        assert_eq!(registry().bounds(), Some(([0.0, -1.0], [2.0, 1.0])));
    }
}
