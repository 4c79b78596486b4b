//! Per-light color storage.

use crate::colors::{Color, OFF};
use crate::error::{ArrangementError, Result};
use heapless::Vec;

/// One color per light, indexed like the registry.
#[derive(Debug, Clone)]
pub struct ColorBuffer<const MAX_LIGHTS: usize> {
    colors: Vec<Color, MAX_LIGHTS>,
}

impl<const MAX_LIGHTS: usize> ColorBuffer<MAX_LIGHTS> {
    /// Creates a buffer of `len` lights, all off.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `len` is above `MAX_LIGHTS`
    pub fn new(len: usize) -> Result<Self> {
        let mut colors = Vec::new();
        colors
            .resize(len, OFF)
            .map_err(|_| ArrangementError::CapacityExceeded)?;
        Ok(Self { colors })
    }

    /// Returns the color of light `index`.
    ///
    /// # Errors
    /// * `Index` - `index` is out of range
    pub fn get(&self, index: usize) -> Result<Color> {
        self.colors.get(index).copied().ok_or(ArrangementError::Index {
            index,
            len: self.colors.len(),
        })
    }

    /// Sets the color of light `index`.
    ///
    /// # Errors
    /// * `Index` - `index` is out of range
    pub fn set(&mut self, index: usize, color: Color) -> Result<()> {
        let len = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(ArrangementError::Index { index, len })?;
        *slot = color;
        Ok(())
    }

    /// Sets every light to `color`.
    pub fn fill(&mut self, color: Color) {
        self.colors.iter_mut().for_each(|c| *c = color);
    }

    /// Number of lights.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the buffer holds no lights.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All colors in index order.
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}
