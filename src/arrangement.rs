//! Spatially addressed light arrangement.
//!
//! Provides [`LightArrangement`], which ties the light registry, the color
//! buffer and an output strip together behind the operations callers use each
//! frame, and the [`LightStrip`] trait for the output hardware.

use crate::buffer::ColorBuffer;
use crate::colors::Color;
use crate::compositor::{self, BlendMode};
use crate::config::ArrangementConfig;
use crate::error::{ArrangementError, Result};
use crate::geometry::{self, Loc, Point};
use crate::query::{self, Region};
use crate::registry::LightRegistry;

/// Trait for abstracting light strip hardware.
///
/// Implement this for your output (WS281x driver, simulator, test recorder)
/// to let the arrangement push its colors to it.
pub trait LightStrip {
    /// Displays `colors`, one per light in index order.
    ///
    /// Called synchronously from [`LightArrangement::show`]. Handle any
    /// hardware errors internally - this method cannot fail.
    fn show(&mut self, colors: &[Color]);
}

impl<S: LightStrip + ?Sized> LightStrip for &mut S {
    fn show(&mut self, colors: &[Color]) {
        (**self).show(colors);
    }
}

/// Polar coordinates as `(rho, angles, center)`.
pub type PolarCoords<'a> = (f64, &'a [f64], &'a [f64]);

/// A fixed set of lights addressable by index or by position.
///
/// Positions are loaded once; colors live in a buffer that every operation
/// edits in place and [`show`](Self::show) hands to the strip. Each operation
/// validates all of its input before touching the buffer, so a failed call
/// leaves every light as it was.
///
/// # Type Parameters
/// * `S` - Output strip implementation
/// * `D` - Number of coordinates per light (1 to `MAX_DIMENSIONS`)
/// * `MAX_LIGHTS` - Maximum number of lights
pub struct LightArrangement<S: LightStrip, const D: usize, const MAX_LIGHTS: usize> {
    strip: S,
    registry: LightRegistry<D, MAX_LIGHTS>,
    buffer: ColorBuffer<MAX_LIGHTS>,
}

impl<S: LightStrip, const D: usize, const MAX_LIGHTS: usize> LightArrangement<S, D, MAX_LIGHTS> {
    /// Creates an arrangement with every light off.
    ///
    /// # Errors
    /// * `UnsupportedDimension` - `D` is 0 or above `MAX_DIMENSIONS`
    /// * `NoLights` - The config holds no positions
    pub fn new(strip: S, config: ArrangementConfig<D, MAX_LIGHTS>) -> Result<Self> {
        geometry::check_dimensions::<D>()?;
        if config.is_empty() {
            return Err(ArrangementError::NoLights);
        }

        let registry = LightRegistry::new(config);
        let buffer = ColorBuffer::new(registry.count())?;

        crate::logging::debug!(
            "light arrangement ready: {} lights in {} dimensions",
            registry.count(),
            D
        );

        Ok(Self {
            strip,
            registry,
            buffer,
        })
    }

    /// Number of lights.
    pub fn number_lights(&self) -> usize {
        self.registry.count()
    }

    /// Number of coordinates per light.
    pub fn dimensions(&self) -> usize {
        D
    }

    /// Sets every light to `color`.
    pub fn fill(&mut self, color: Color) {
        self.buffer.fill(color);
    }

    /// Sets the color of light `index`.
    ///
    /// # Errors
    /// * `Index` - `index` is not below [`number_lights`](Self::number_lights)
    pub fn set_by_index(&mut self, index: usize, color: Color) -> Result<()> {
        self.buffer.set(index, color)
    }

    /// Returns the color of light `index`.
    ///
    /// # Errors
    /// * `Index` - `index` is not below [`number_lights`](Self::number_lights)
    pub fn get_by_index(&self, index: usize) -> Result<Color> {
        self.buffer.get(index)
    }

    /// Sets the light closest to `point`, if one lies within `max_radius`.
    ///
    /// Pass `f64::INFINITY` for an unbounded search.
    ///
    /// # Returns
    /// * `Ok(Some(index))` - The light that was set
    /// * `Ok(None)` - No light within `max_radius`; nothing changed
    pub fn set_closest(
        &mut self,
        point: &[f64],
        max_radius: f64,
        color: Color,
    ) -> Result<Option<usize>> {
        self.set_closest_loc(&Loc::cartesian(point)?, Some(max_radius), color)
    }

    /// Returns the color of the light closest to `point`, if one lies within
    /// `max_radius`.
    pub fn get_closest(&self, point: &[f64], max_radius: f64) -> Result<Option<Color>> {
        self.get_closest_loc(&Loc::cartesian(point)?, Some(max_radius))
    }

    /// Sets every light within `radius` of `point`, fading linearly from full
    /// `color` at the center to off at the edge. Replaces current colors.
    pub fn set_decreasing_intensity(
        &mut self,
        point: &[f64],
        radius: f64,
        color: Color,
    ) -> Result<()> {
        self.set_decreasing_intensity_loc(&Loc::cartesian(point)?, radius, color, BlendMode::Overwrite)
    }

    /// Like [`set_decreasing_intensity`](Self::set_decreasing_intensity), but
    /// adds to current colors so overlapping sources combine.
    pub fn set_decreasing_intensity_merge(
        &mut self,
        point: &[f64],
        radius: f64,
        color: Color,
    ) -> Result<()> {
        self.set_decreasing_intensity_loc(&Loc::cartesian(point)?, radius, color, BlendMode::Merge)
    }

    /// Sets every light within `radius` of `point`.
    pub fn set_all_in_radius(&mut self, point: &[f64], radius: f64, color: Color) -> Result<()> {
        self.set_all_in_radius_loc(&Loc::cartesian(point)?, radius, color)
    }

    /// Sets every light inside the box spanned by two opposite corners.
    pub fn set_all_in_box(&mut self, corner1: &[f64], corner2: &[f64], color: Color) -> Result<()> {
        let corner1 = Loc::cartesian(corner1)?;
        let corner2 = Loc::cartesian(corner2)?;
        self.set_all_in_box_loc(&corner1, &corner2, color)
    }

    /// Polar form of [`set_closest`](Self::set_closest).
    pub fn set_closest_polar(
        &mut self,
        rho: f64,
        angles: &[f64],
        center: &[f64],
        max_radius: f64,
        color: Color,
    ) -> Result<Option<usize>> {
        self.set_closest_loc(&Loc::polar(rho, angles, center)?, Some(max_radius), color)
    }

    /// Polar form of [`get_closest`](Self::get_closest).
    pub fn get_closest_polar(
        &self,
        rho: f64,
        angles: &[f64],
        center: &[f64],
        max_radius: f64,
    ) -> Result<Option<Color>> {
        self.get_closest_loc(&Loc::polar(rho, angles, center)?, Some(max_radius))
    }

    /// Polar form of [`set_decreasing_intensity`](Self::set_decreasing_intensity).
    pub fn set_decreasing_intensity_polar(
        &mut self,
        rho: f64,
        angles: &[f64],
        center: &[f64],
        radius: f64,
        color: Color,
    ) -> Result<()> {
        let loc = Loc::polar(rho, angles, center)?;
        self.set_decreasing_intensity_loc(&loc, radius, color, BlendMode::Overwrite)
    }

    /// Polar form of [`set_decreasing_intensity_merge`](Self::set_decreasing_intensity_merge).
    pub fn set_decreasing_intensity_merge_polar(
        &mut self,
        rho: f64,
        angles: &[f64],
        center: &[f64],
        radius: f64,
        color: Color,
    ) -> Result<()> {
        let loc = Loc::polar(rho, angles, center)?;
        self.set_decreasing_intensity_loc(&loc, radius, color, BlendMode::Merge)
    }

    /// Polar form of [`set_all_in_radius`](Self::set_all_in_radius).
    pub fn set_all_in_radius_polar(
        &mut self,
        rho: f64,
        angles: &[f64],
        center: &[f64],
        radius: f64,
        color: Color,
    ) -> Result<()> {
        self.set_all_in_radius_loc(&Loc::polar(rho, angles, center)?, radius, color)
    }

    /// Polar form of [`set_all_in_box`](Self::set_all_in_box), with both
    /// corners given as `(rho, angles, center)`.
    pub fn set_all_in_box_polar(
        &mut self,
        corner1: PolarCoords<'_>,
        corner2: PolarCoords<'_>,
        color: Color,
    ) -> Result<()> {
        let corner1 = Loc::polar(corner1.0, corner1.1, corner1.2)?;
        let corner2 = Loc::polar(corner2.0, corner2.1, corner2.2)?;
        self.set_all_in_box_loc(&corner1, &corner2, color)
    }

    /// Sets the light closest to `loc`, optionally bounded by `max_radius`.
    pub fn set_closest_loc(
        &mut self,
        loc: &Loc<D>,
        max_radius: Option<f64>,
        color: Color,
    ) -> Result<Option<usize>> {
        let center = loc.to_cartesian()?;
        max_radius.map(check_radius).transpose()?;

        match query::nearest(&self.registry, &center, max_radius) {
            Some((index, _)) => {
                self.buffer.set(index, color)?;
                Ok(Some(index))
            }
            None => Ok(None),
        }
    }

    /// Returns the color of the light closest to `loc`, optionally bounded by
    /// `max_radius`.
    pub fn get_closest_loc(&self, loc: &Loc<D>, max_radius: Option<f64>) -> Result<Option<Color>> {
        let center = loc.to_cartesian()?;
        max_radius.map(check_radius).transpose()?;

        query::nearest(&self.registry, &center, max_radius)
            .map(|(index, _)| self.buffer.get(index))
            .transpose()
    }

    /// Writes a linear falloff of `color` around `loc`, blended by `mode`.
    pub fn set_decreasing_intensity_loc(
        &mut self,
        loc: &Loc<D>,
        radius: f64,
        color: Color,
        mode: BlendMode,
    ) -> Result<()> {
        let center = loc.to_cartesian()?;
        check_radius(radius)?;

        let targets = query::within_radius(&self.registry, center, radius);
        compositor::decreasing_intensity(&mut self.buffer, targets, radius, color, mode)?;
        Ok(())
    }

    /// Sets every light within `radius` of `loc`.
    pub fn set_all_in_radius_loc(&mut self, loc: &Loc<D>, radius: f64, color: Color) -> Result<()> {
        let center = loc.to_cartesian()?;
        check_radius(radius)?;

        let targets = query::within_radius(&self.registry, center, radius).map(|(index, _)| index);
        compositor::overwrite(&mut self.buffer, targets, color)?;
        Ok(())
    }

    /// Sets every light inside the box spanned by `corner1` and `corner2`.
    pub fn set_all_in_box_loc(&mut self, corner1: &Loc<D>, corner2: &Loc<D>, color: Color) -> Result<()> {
        let corner1 = corner1.to_cartesian()?;
        let corner2 = corner2.to_cartesian()?;

        let targets = query::within_box(&self.registry, corner1, corner2);
        compositor::overwrite(&mut self.buffer, targets, color)?;
        Ok(())
    }

    /// Sets every light in `region`.
    ///
    /// # Returns
    /// Number of lights written.
    pub fn set_region(&mut self, region: &Region<D>, color: Color) -> Result<usize> {
        if let Region::Ball { radius, .. } = region {
            check_radius(*radius)?;
        }
        if let Region::Nearest {
            max_radius: Some(bound),
            ..
        } = region
        {
            check_radius(*bound)?;
        }

        let targets = region.lights(&self.registry)?;
        compositor::overwrite(&mut self.buffer, targets, color)
    }

    /// Pushes the current colors to the strip.
    pub fn show(&mut self) {
        crate::logging::trace!("show: {} lights", self.buffer.len());
        self.strip.show(self.buffer.as_slice());
    }

    /// Current colors in index order.
    pub fn colors(&self) -> &[Color] {
        self.buffer.as_slice()
    }

    /// Position of light `index`.
    pub fn position_of(&self, index: usize) -> Result<&Point<D>> {
        self.registry.position_of(index)
    }

    /// The light registry.
    pub fn registry(&self) -> &LightRegistry<D, MAX_LIGHTS> {
        &self.registry
    }

    /// Returns a reference to the strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Returns a mutable reference to the strip.
    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    /// Consumes the arrangement, returning the strip and the registry.
    pub fn into_parts(self) -> (S, LightRegistry<D, MAX_LIGHTS>) {
        (self.strip, self.registry)
    }
}

fn check_radius(radius: f64) -> Result<()> {
    if radius.is_nan() {
        return Err(ArrangementError::NonFinite);
    }
    Ok(())
}
