//! Spatial queries over a [`LightRegistry`].
//!
//! Every query is a linear scan in registry order. At the light counts this
//! crate targets (hundreds) that is cheaper than maintaining an index, and it
//! makes tie-breaking trivially deterministic: the earliest index wins.
//!
//! Query points are Cartesian. Resolve polar or cylindrical input with
//! [`Loc::to_cartesian`] first, or describe the target as a [`Region`], which
//! does it for you.

use crate::error::Result;
use crate::geometry::{Loc, Point, distance};
use crate::registry::LightRegistry;
use core::iter::Enumerate;
use core::slice::Iter;

/// Finds the light closest to `center`.
///
/// With `max_radius`, a closest light farther away than the bound is no match.
/// A negative bound never matches.
///
/// # Returns
/// * `Some((index, distance))` - Closest light, earliest index on ties
/// * `None` - No light within `max_radius`
pub fn nearest<const D: usize, const MAX_LIGHTS: usize>(
    registry: &LightRegistry<D, MAX_LIGHTS>,
    center: &Point<D>,
    max_radius: Option<f64>,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (index, position) in registry.iter() {
        let d = distance(center, position);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((index, d)),
        }
    }

    match (best, max_radius) {
        (Some((_, d)), Some(bound)) if d > bound => None,
        _ => best,
    }
}

/// Lights whose distance to `center` is at most `radius`, with that distance.
///
/// A negative radius yields nothing.
pub fn within_radius<'a, const D: usize, const MAX_LIGHTS: usize>(
    registry: &'a LightRegistry<D, MAX_LIGHTS>,
    center: Point<D>,
    radius: f64,
) -> impl Iterator<Item = (usize, f64)> + 'a {
    registry
        .iter()
        .map(move |(index, position)| (index, distance(&center, position)))
        .filter(move |&(_, d)| d <= radius)
}

/// Lights inside the axis-aligned box spanned by two opposite corners.
///
/// Corners may be given in any order; bounds are inclusive on every axis, so
/// a box that is flat on some axis still matches lights exactly on it.
pub fn within_box<'a, const D: usize, const MAX_LIGHTS: usize>(
    registry: &'a LightRegistry<D, MAX_LIGHTS>,
    corner1: Point<D>,
    corner2: Point<D>,
) -> impl Iterator<Item = usize> + 'a {
    let bounds = BoxBounds::new(corner1, corner2);
    registry
        .iter()
        .filter(move |(_, position)| bounds.contains(position))
        .map(|(index, _)| index)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct BoxBounds<const D: usize> {
    min: Point<D>,
    max: Point<D>,
}

impl<const D: usize> BoxBounds<D> {
    fn new(corner1: Point<D>, corner2: Point<D>) -> Self {
        let mut min = corner1;
        let mut max = corner2;
        for (lo, hi) in min.iter_mut().zip(max.iter_mut()) {
            if *lo > *hi {
                core::mem::swap(lo, hi);
            }
        }
        Self { min, max }
    }

    fn contains(&self, position: &Point<D>) -> bool {
        position
            .iter()
            .zip(self.min.iter().zip(self.max.iter()))
            .all(|(p, (lo, hi))| lo <= p && p <= hi)
    }
}

/// A target set of lights described by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Region<const D: usize> {
    /// Axis-aligned box between two opposite corners.
    Box { corner1: Loc<D>, corner2: Loc<D> },

    /// Every light within `radius` of `center`.
    Ball { center: Loc<D>, radius: f64 },

    /// The single closest light, optionally bounded.
    Nearest {
        center: Loc<D>,
        max_radius: Option<f64>,
    },
}

impl<const D: usize> Region<D> {
    /// Resolves the region against a registry.
    ///
    /// All locations are converted to Cartesian before any light is visited,
    /// so a conversion error leaves nothing half-matched.
    pub fn lights<'a, const MAX_LIGHTS: usize>(
        &self,
        registry: &'a LightRegistry<D, MAX_LIGHTS>,
    ) -> Result<RegionLights<'a, D>> {
        let shape = match self {
            Region::Box { corner1, corner2 } => {
                Shape::Box(BoxBounds::new(corner1.to_cartesian()?, corner2.to_cartesian()?))
            }
            Region::Ball { center, radius } => Shape::Ball {
                center: center.to_cartesian()?,
                radius: *radius,
            },
            Region::Nearest { center, max_radius } => {
                let center = center.to_cartesian()?;
                Shape::Single(nearest(registry, &center, *max_radius).map(|(i, _)| i))
            }
        };

        Ok(RegionLights {
            positions: registry.positions().iter().enumerate(),
            shape,
        })
    }
}

#[derive(Debug, Clone)]
enum Shape<const D: usize> {
    Box(BoxBounds<D>),
    Ball { center: Point<D>, radius: f64 },
    Single(Option<usize>),
}

/// Indices matched by a [`Region`], in registry order.
#[derive(Debug, Clone)]
pub struct RegionLights<'a, const D: usize> {
    positions: Enumerate<Iter<'a, Point<D>>>,
    shape: Shape<D>,
}

impl<const D: usize> Iterator for RegionLights<'_, D> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        for (index, position) in self.positions.by_ref() {
            let hit = match &self.shape {
                Shape::Box(bounds) => bounds.contains(position),
                Shape::Ball { center, radius } => distance(center, position) <= *radius,
                Shape::Single(target) => *target == Some(index),
            };
            if hit {
                return Some(index);
            }
        }
        None
    }
}
