//! Low-level drawing primitives shared across widgets.
//!
//! # Panel Inset
//!
//! `draw_panel_background` fills a rectangle 2px inside the given bounds.
//! The frame is cleared to black first, so the 2px margin shows as a thin
//! black border between neighbouring panels without drawing one.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::styles::{LEFT_MIDDLE, LABEL_STYLE_WHITE};

/// Inset between panel bounds and the filled area.
pub const PANEL_INSET: u32 = 2;

/// Fill `area` shrunk by [`PANEL_INSET`] on every side.
///
/// Returns early when the area is too small to leave anything to fill,
/// which also keeps the size arithmetic from underflowing.
pub fn draw_panel_background(display: &mut SimulatorDisplay<Rgb888>, area: &Rectangle, bg_color: Rgb888) {
    let Size { width, height } = area.size;
    if width <= 2 * PANEL_INSET || height <= 2 * PANEL_INSET {
        return;
    }
    Rectangle::new(
        area.top_left + Point::new(PANEL_INSET as i32, PANEL_INSET as i32),
        Size::new(width - 2 * PANEL_INSET, height - 2 * PANEL_INSET),
    )
    .into_styled(PrimitiveStyle::with_fill(bg_color))
    .draw(display)
    .ok();
}

/// Draw a one-line caption, left-aligned and vertically centered on `pos`.
pub fn draw_caption(display: &mut SimulatorDisplay<Rgb888>, pos: Point, text: &str) {
    Text::with_text_style(text, pos, LABEL_STYLE_WHITE, LEFT_MIDDLE)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, PANEL_BG};

    #[test]
    fn test_panel_background_leaves_border() {
        let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(40, 40));
        let area = Rectangle::new(Point::new(10, 10), Size::new(20, 20));
        draw_panel_background(&mut display, &area, PANEL_BG);

        assert_eq!(display.get_pixel(Point::new(11, 11)), BLACK, "Inset margin stays clear");
        assert_eq!(display.get_pixel(Point::new(12, 12)), PANEL_BG);
        assert_eq!(display.get_pixel(Point::new(27, 27)), PANEL_BG);
        assert_eq!(display.get_pixel(Point::new(28, 28)), BLACK);
    }

    #[test]
    fn test_panel_background_ignores_tiny_area() {
        let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(10, 10));
        draw_panel_background(&mut display, &Rectangle::new(Point::zero(), Size::new(4, 4)), PANEL_BG);
        assert_eq!(display.get_pixel(Point::new(2, 2)), BLACK);
    }
}
