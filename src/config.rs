//! Application configuration constants.
//!
//! Layout positions are pre-computed at compile time as `const`, so the frame
//! loop never recalculates them. Runtime knobs (window scale, simulated probe
//! speeds, log level) live in [`crate::cli`] instead.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            HEADER (WIFI Speed Test)          │  26px
//! ├──────────────────────┬───────────────────────┤
//! │                      │                       │
//! │    DOWNLOAD gauge    │     UPLOAD gauge      │  280px
//! │                      │                       │
//! ├──────────────────────┴───────────────────────┤
//! │             [ Run Speed Test ]               │  40px
//! │ > speed test console                         │  96px
//! │ [ Get Weather ]  location                    │  32px
//! │ > weather console                            │  96px
//! └──────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Window width in pixels (before `--scale`).
pub const SCREEN_WIDTH: u32 = 640;

/// Window height in pixels (before `--scale`).
pub const SCREEN_HEIGHT: u32 = 600;

/// Window title.
pub const WINDOW_TITLE: &str = "Throughput Dashboard";

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Interval between cosmetic gauge pulses while a phase is pending.
pub const ANIMATION_INTERVAL: Duration = Duration::from_millis(100);

// =============================================================================
// Gauge Specifications
// =============================================================================

/// Static description of one dial: its label, full-scale value and the
/// per-tick pulse step used while its phase is running.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeSpec {
    pub label: &'static str,
    pub max_value: f32,
    pub pulse_step: f32,
}

/// Download dial: 0–1000 Mbps, pulses +50 per tick.
pub const DOWNLOAD_GAUGE: GaugeSpec = GaugeSpec {
    label: "DOWNLOAD",
    max_value: 1000.0,
    pulse_step: 50.0,
};

/// Upload dial: 0–500 Mbps, pulses +30 per tick.
pub const UPLOAD_GAUGE: GaugeSpec = GaugeSpec {
    label: "UPLOAD",
    max_value: 500.0,
    pulse_step: 30.0,
};

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Side length of each square gauge box.
pub const GAUGE_SIZE: u32 = 280;

/// Top edge of the gauge row.
pub const GAUGE_TOP: i32 = HEADER_HEIGHT as i32 + 6;

/// Horizontal gap between the two gauges.
pub const GAUGE_SPACING: u32 = 20;

/// Left edge of the download gauge (the pair is centered on screen).
pub const DOWNLOAD_GAUGE_X: i32 = ((SCREEN_WIDTH - 2 * GAUGE_SIZE - GAUGE_SPACING) / 2) as i32;

/// Left edge of the upload gauge.
pub const UPLOAD_GAUGE_X: i32 = DOWNLOAD_GAUGE_X + (GAUGE_SIZE + GAUGE_SPACING) as i32;

/// Download gauge drawing area.
pub const DOWNLOAD_GAUGE_AREA: Rectangle = Rectangle::new(
    Point::new(DOWNLOAD_GAUGE_X, GAUGE_TOP),
    Size::new(GAUGE_SIZE, GAUGE_SIZE),
);

/// Upload gauge drawing area.
pub const UPLOAD_GAUGE_AREA: Rectangle = Rectangle::new(
    Point::new(UPLOAD_GAUGE_X, GAUGE_TOP),
    Size::new(GAUGE_SIZE, GAUGE_SIZE),
);

/// Speed test trigger button (200x40, horizontally centered).
pub const SPEED_BUTTON_AREA: Rectangle = Rectangle::new(
    Point::new(((SCREEN_WIDTH - 200) / 2) as i32, GAUGE_TOP + GAUGE_SIZE as i32 + 4),
    Size::new(200, 40),
);

/// Speed test progress console.
pub const SPEED_CONSOLE_AREA: Rectangle = Rectangle::new(
    Point::new(10, SPEED_BUTTON_AREA.top_left.y + SPEED_BUTTON_AREA.size.height as i32 + 4),
    Size::new(SCREEN_WIDTH - 20, 96),
);

/// Weather trigger button.
pub const WEATHER_BUTTON_AREA: Rectangle = Rectangle::new(
    Point::new(10, SPEED_CONSOLE_AREA.top_left.y + SPEED_CONSOLE_AREA.size.height as i32 + 8),
    Size::new(200, 32),
);

/// Baseline origin of the weather location text, right of the button.
pub const WEATHER_LOCATION_POS: Point = Point::new(224, WEATHER_BUTTON_AREA.top_left.y + 16);

/// Weather result console. Tall enough for the lookup line plus a full report.
pub const WEATHER_CONSOLE_AREA: Rectangle = Rectangle::new(
    Point::new(10, WEATHER_BUTTON_AREA.top_left.y + WEATHER_BUTTON_AREA.size.height as i32 + 6),
    Size::new(SCREEN_WIDTH - 20, 96),
);

/// Vertical spacing between console lines.
pub const CONSOLE_LINE_HEIGHT: i32 = 12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauges_fit_on_screen() {
        let right = UPLOAD_GAUGE_AREA.top_left.x + UPLOAD_GAUGE_AREA.size.width as i32;
        assert!(DOWNLOAD_GAUGE_AREA.top_left.x >= 0, "Download gauge starts off-screen");
        assert!(right <= SCREEN_WIDTH as i32, "Upload gauge ends at {right}, past the screen edge");
    }

    #[test]
    fn test_panels_stack_without_overlap() {
        let bottom = |r: Rectangle| r.top_left.y + r.size.height as i32;
        assert!(bottom(DOWNLOAD_GAUGE_AREA) <= SPEED_BUTTON_AREA.top_left.y);
        assert!(bottom(SPEED_BUTTON_AREA) <= SPEED_CONSOLE_AREA.top_left.y);
        assert!(bottom(SPEED_CONSOLE_AREA) <= WEATHER_BUTTON_AREA.top_left.y);
        assert!(bottom(WEATHER_BUTTON_AREA) <= WEATHER_CONSOLE_AREA.top_left.y);
        assert!(bottom(WEATHER_CONSOLE_AREA) <= SCREEN_HEIGHT as i32);
    }

    #[test]
    fn test_weather_console_fits_full_report() {
        // "Fetching weather for ..." plus the five report lines
        let rows = crate::widgets::visible_lines(&WEATHER_CONSOLE_AREA);
        assert!(rows >= 6, "Weather console shows only {rows} rows, a report needs 6");
    }

    #[test]
    fn test_gauge_specs_have_positive_range() {
        for spec in [DOWNLOAD_GAUGE, UPLOAD_GAUGE] {
            assert!(spec.max_value > 0.0, "{} needs a positive max", spec.label);
            assert!(spec.pulse_step < spec.max_value, "{} pulse must wrap inside range", spec.label);
        }
    }
}
