//! Header bar: window title plus current run status.

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;

use crate::{
    colors::{GRAY, PANEL_BG},
    config::{HEADER_HEIGHT, SCREEN_WIDTH},
    styles::{CENTERED, LABEL_STYLE_WHITE, RIGHT_ALIGNED, TITLE_STYLE_WHITE},
};

// =============================================================================
// Header Layout Constants
// =============================================================================

/// Header title text.
pub const HEADER_TITLE: &str = "WIFI Speed Test";

/// Position of the title (centered horizontally).
const HEADER_TITLE_POS: Point = Point::new((SCREEN_WIDTH / 2) as i32, 19);

/// Position of the status text (right-aligned, 6px from edge).
const HEADER_STATUS_POS: Point = Point::new((SCREEN_WIDTH - 6) as i32, 17);

/// Header rectangle (full width).
const HEADER_RECT: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

/// Divider under the header.
const DIVIDER_START: Point = Point::new(0, HEADER_HEIGHT as i32);
const DIVIDER_END: Point = Point::new((SCREEN_WIDTH - 1) as i32, HEADER_HEIGHT as i32);

const HEADER_FILL_STYLE: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_fill(PANEL_BG);
const DIVIDER_STYLE: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_stroke(GRAY, 1);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the header bar with the title centered and `status` on the right.
pub fn draw_header(display: &mut SimulatorDisplay<Rgb888>, status: &str) {
    HEADER_RECT.into_styled(HEADER_FILL_STYLE).draw(display).ok();

    Text::with_text_style(HEADER_TITLE, HEADER_TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    Text::with_text_style(status, HEADER_STATUS_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();

    Line::new(DIVIDER_START, DIVIDER_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}
