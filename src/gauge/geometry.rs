//! Dial geometry and gradient math.
//!
//! # Coordinate System
//!
//! Angles are in degrees with 0° pointing east and angles increasing
//! clockwise (screen y grows downward). The dial sweeps 270° from −45°
//! (upper right) clockwise through the bottom to +225° (upper left).
//!
//! ```text
//!          gap
//!   225° \     / -45°
//!         \   /
//!   180° ---o--- 0°
//!           |
//!          90°
//! ```
//!
//! # Design Constants
//!
//! The 270°/11-tick layout and the three-band gradient are fixed. They do not
//! depend on `max_value`, so dials of any range look the same; only the tick
//! numbers change.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Dial Layout Constants
// =============================================================================

/// Start of the dial sweep (value 0).
pub const DIAL_START_DEG: f32 = -45.0;

/// Total dial sweep (value 0 to `max_value`).
pub const DIAL_SWEEP_DEG: f32 = 270.0;

/// Number of intervals between major ticks (11 ticks, 0 through 10).
pub const TICK_INTERVALS: u32 = 10;

/// Dial radius as a fraction of the shorter side of the drawing area.
pub const RADIUS_FACTOR: f32 = 0.4;

/// Inner end of a tick mark (fraction of radius).
pub const TICK_INNER_FACTOR: f32 = 0.85;

/// Outer end of a tick mark (fraction of radius).
pub const TICK_OUTER_FACTOR: f32 = 0.95;

/// Tick number anchor (fraction of radius).
pub const TICK_LABEL_FACTOR: f32 = 0.7;

/// Gradient arc centerline (fraction of radius).
pub const ARC_RADIUS_FACTOR: f32 = 0.9;

/// Needle length (fraction of radius).
pub const NEEDLE_LENGTH_FACTOR: f32 = 0.8;

/// Gauge label anchor above center (fraction of radius).
pub const LABEL_OFFSET_FACTOR: f32 = 0.7;

/// Value readout anchor below center (fraction of radius).
pub const VALUE_OFFSET_FACTOR: f32 = 0.35;

/// Number of equal gradient segments along the sweep.
pub const ARC_SEGMENTS: u32 = 100;

// =============================================================================
// Gradient Constants
// =============================================================================

/// End of the green → yellow band (ratio).
pub const GREEN_BAND_END: f32 = 0.33;

/// End of the yellow → orange band (ratio).
pub const YELLOW_BAND_END: f32 = 0.66;

/// Green channel of the orange stop.
pub const ORANGE_GREEN_CHANNEL: f32 = 143.0;

// =============================================================================
// Layout
// =============================================================================

/// Center and radius of a dial that fits a drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialLayout {
    pub center: Point,
    pub radius: f32,
}

impl DialLayout {
    /// Fit a dial into `area`: centered, radius `0.4 × min(width, height)`.
    ///
    /// Using the shorter side keeps the dial circular for any aspect ratio.
    pub fn fit(area: &Rectangle) -> Self {
        let Size { width, height } = area.size;
        let center = area.top_left + Point::new((width / 2) as i32, (height / 2) as i32);
        Self {
            center,
            radius: width.min(height) as f32 * RADIUS_FACTOR,
        }
    }

    /// Point at `factor × radius` from the center along `angle_deg`.
    #[inline]
    pub fn at(&self, factor: f32, angle_deg: f32) -> Point {
        polar_point(self.center, self.radius * factor, angle_deg)
    }
}

/// Point at distance `length` from `center` along `angle_deg`, rounded to the
/// nearest pixel.
pub fn polar_point(center: Point, length: f32, angle_deg: f32) -> Point {
    let rad = angle_deg.to_radians();
    let dx = (rad.cos() * length).round() as i32;
    let dy = (rad.sin() * length).round() as i32;
    Point::new(center.x + dx, center.y + dy)
}

// =============================================================================
// Angles
// =============================================================================

/// Needle angle for `value` on a dial of full scale `max_value`.
///
/// `angle = −45 + 270 × (value / max_value)`. Callers pass a clamped value.
#[inline]
pub fn value_angle(value: f32, max_value: f32) -> f32 {
    DIAL_START_DEG + DIAL_SWEEP_DEG * (value / max_value)
}

/// Angle of major tick `index` (0..=10).
#[inline]
pub fn tick_angle(index: u32) -> f32 {
    DIAL_START_DEG + DIAL_SWEEP_DEG * index as f32 / TICK_INTERVALS as f32
}

/// Number printed next to major tick `index`, truncated toward zero.
#[inline]
pub fn tick_label_value(max_value: f32, index: u32) -> u32 {
    (max_value * index as f32 / TICK_INTERVALS as f32) as u32
}

/// Start angle and sweep of gradient segment `index` (0..100).
#[inline]
pub fn segment_span(index: u32) -> (f32, f32) {
    let sweep = DIAL_SWEEP_DEG / ARC_SEGMENTS as f32;
    (DIAL_START_DEG + DIAL_SWEEP_DEG * index as f32 / ARC_SEGMENTS as f32, sweep)
}

// =============================================================================
// Gradient
// =============================================================================

/// Color of gradient segment `index` (0..100).
///
/// Three linear bands over the segment ratio `index / 100`:
/// - `[0, 0.33)`: green → yellow (red channel 0 → 255)
/// - `[0.33, 0.66)`: yellow → orange (green channel 255 → 143)
/// - `[0.66, 1]`: orange → red (green channel 143 → 0)
///
/// Channels are truncated to integers.
pub fn segment_color(index: u32) -> Rgb888 {
    let ratio = index as f32 / ARC_SEGMENTS as f32;
    if ratio < GREEN_BAND_END {
        let local = ratio / GREEN_BAND_END;
        Rgb888::new(channel(255.0 * local), 255, 0)
    } else if ratio < YELLOW_BAND_END {
        let local = (ratio - GREEN_BAND_END) / (YELLOW_BAND_END - GREEN_BAND_END);
        Rgb888::new(255, channel(255.0 - (255.0 - ORANGE_GREEN_CHANNEL) * local), 0)
    } else {
        let local = (ratio - YELLOW_BAND_END) / (1.0 - YELLOW_BAND_END);
        Rgb888::new(255, channel(ORANGE_GREEN_CHANNEL - ORANGE_GREEN_CHANNEL * local), 0)
    }
}

#[inline]
fn channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
