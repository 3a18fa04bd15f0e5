//! Analog speedometer gauge: bounded value model plus dial renderer.
//!
//! - [`Gauge`]: the three attributes a dial is drawn from (value, full scale, label)
//! - [`geometry`]: fixed dial layout constants and the angle/color math
//! - [`render`]: stateless-per-frame drawing onto any `DrawTarget`
//!
//! The gauge never rejects a value. Anything outside `[0, max_value]` is
//! clamped on the way in, so the renderer can assume the invariant.

pub mod geometry;
pub mod render;

pub use render::draw_gauge;

use crate::config::GaugeSpec;
use crate::error::GaugeError;

/// One dial's state. Created once per dial, mutated on every pulse tick or
/// final result.
#[derive(Clone, Debug, PartialEq)]
pub struct Gauge {
    current_value: f32,
    max_value: f32,
    label: &'static str,
}

impl Gauge {
    /// Create a gauge reading 0.
    ///
    /// `max_value` must be finite and strictly positive; the needle angle
    /// divides by it.
    pub fn new(max_value: f32, label: &'static str) -> Result<Self, GaugeError> {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(GaugeError::InvalidMaxValue(max_value));
        }
        Ok(Self {
            current_value: 0.0,
            max_value,
            label,
        })
    }

    /// Create a gauge from a static dial specification.
    pub fn from_spec(spec: &GaugeSpec) -> Result<Self, GaugeError> {
        Self::new(spec.max_value, spec.label)
    }

    /// Set the reading, clamped to `[0, max_value]`.
    ///
    /// `NaN` reads as 0; infinities clamp to the nearest end.
    pub fn set_value(&mut self, value: f32) {
        self.current_value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, self.max_value)
        };
    }

    /// Current (clamped) reading.
    #[inline]
    pub const fn value(&self) -> f32 {
        self.current_value
    }

    #[inline]
    pub const fn max_value(&self) -> f32 {
        self.max_value
    }

    #[inline]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Advance the reading by `step`, wrapping modulo `max_value`.
    ///
    /// This is the "still working" pulse; it never reaches `max_value`.
    pub fn advance(&mut self, step: f32) {
        let next = (self.current_value + step) % self.max_value;
        self.set_value(next);
    }

    /// Needle angle in degrees for the current reading.
    #[inline]
    pub fn needle_angle(&self) -> f32 {
        geometry::value_angle(self.current_value, self.max_value)
    }
}
