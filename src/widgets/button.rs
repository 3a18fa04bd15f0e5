//! Trigger buttons.
//!
//! A button is drawn from a [`TriggerControl`]: teal with a white caption
//! while enabled, gray with a dimmed caption while its task is in flight.
//! Clicks are resolved by [`hit_test`]; a click on a disabled button is
//! ignored by the caller.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::{BUTTON_DISABLED, BUTTON_ENABLED};
use crate::styles::{BUTTON_STYLE_DISABLED, BUTTON_STYLE_ENABLED, CENTERED_MIDDLE};
use crate::trigger::TriggerControl;

/// Corner radius of trigger buttons.
const CORNER_RADIUS: Size = Size::new(6, 6);

const ENABLED_FILL: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_fill(BUTTON_ENABLED);
const DISABLED_FILL: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_fill(BUTTON_DISABLED);

/// Draw `trigger` as a rounded button filling `area`.
pub fn draw_trigger_button(display: &mut SimulatorDisplay<Rgb888>, area: &Rectangle, trigger: &TriggerControl) {
    let (fill, text_style) = if trigger.is_enabled() {
        (ENABLED_FILL, BUTTON_STYLE_ENABLED)
    } else {
        (DISABLED_FILL, BUTTON_STYLE_DISABLED)
    };

    RoundedRectangle::with_equal_corners(*area, CORNER_RADIUS)
        .into_styled(fill)
        .draw(display)
        .ok();

    Text::with_text_style(trigger.label(), area.center(), text_style, CENTERED_MIDDLE)
        .draw(display)
        .ok();
}

/// Whether a click at `point` (display coordinates) lands on `area`.
#[inline]
pub fn hit_test(area: &Rectangle, point: Point) -> bool {
    area.contains(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SPEED_BUTTON_AREA;

    #[test]
    fn test_button_color_follows_trigger() {
        let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(640, 600));
        let mut trigger = TriggerControl::SPEED_TEST;
        // Left edge inside the corner radius is clear of the caption
        let probe = SPEED_BUTTON_AREA.top_left + Point::new(8, 20);

        draw_trigger_button(&mut display, &SPEED_BUTTON_AREA, &trigger);
        assert_eq!(display.get_pixel(probe), BUTTON_ENABLED);

        trigger.disable();
        draw_trigger_button(&mut display, &SPEED_BUTTON_AREA, &trigger);
        assert_eq!(display.get_pixel(probe), BUTTON_DISABLED);
    }

    #[test]
    fn test_hit_test_bounds() {
        let top_left = SPEED_BUTTON_AREA.top_left;
        assert!(hit_test(&SPEED_BUTTON_AREA, top_left));
        assert!(hit_test(&SPEED_BUTTON_AREA, top_left + Point::new(199, 39)));
        assert!(!hit_test(&SPEED_BUTTON_AREA, top_left + Point::new(200, 0)));
        assert!(!hit_test(&SPEED_BUTTON_AREA, top_left - Point::new(1, 0)));
    }
}
