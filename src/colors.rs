//! Color constants for the throughput dashboard.
//!
//! # Rgb888 Color Format
//!
//! The dashboard renders into a desktop simulator window, so it uses full
//! 8-bit channels (`Rgb888`) instead of the RGB565 format of small SPI panels.
//! The gauge gradient is specified in 8-bit channel steps (e.g. green 255 → 143
//! for the yellow → orange band), which RGB565 cannot represent exactly.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Window background.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white. Tick marks, labels and values.
pub const WHITE: Rgb888 = Rgb888::WHITE;

/// Pure red. Needle, pivot disc and the last gradient stop.
pub const RED: Rgb888 = Rgb888::RED;

/// Pure green. First gradient stop.
pub const GREEN: Rgb888 = Rgb888::GREEN;

/// Pure yellow. Second gradient stop.
pub const YELLOW: Rgb888 = Rgb888::YELLOW;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Third gradient stop (255, 143, 0).
pub const ORANGE: Rgb888 = Rgb888::new(255, 143, 0);

/// Gauge face fill (`#252525`).
pub const GAUGE_FACE: Rgb888 = Rgb888::new(0x25, 0x25, 0x25);

/// Gauge rim outline (`#3a3a3a`).
pub const GAUGE_RIM: Rgb888 = Rgb888::new(0x3a, 0x3a, 0x3a);

/// Panel background (`#1e1e1e`), used for header strip and consoles.
pub const PANEL_BG: Rgb888 = Rgb888::new(0x1e, 0x1e, 0x1e);

/// Enabled trigger button (`#0d7377`).
pub const BUTTON_ENABLED: Rgb888 = Rgb888::new(0x0d, 0x73, 0x77);

/// Disabled trigger button (`#555555`).
pub const BUTTON_DISABLED: Rgb888 = Rgb888::new(0x55, 0x55, 0x55);

/// Disabled trigger label (`#888888`).
pub const BUTTON_DISABLED_TEXT: Rgb888 = Rgb888::new(0x88, 0x88, 0x88);

/// Dim gray for the header divider.
pub const GRAY: Rgb888 = Rgb888::new(0x3a, 0x3a, 0x3a);

/// Prompt marker color in the console panels.
pub const PROMPT: Rgb888 = Rgb888::new(0x14, 0xa0, 0x85);
