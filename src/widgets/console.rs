//! Console panel showing a [`ProgressLog`].
//!
//! # Visual Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │   Starting WIFI speed test...        │
//! │   Running download test...           │  older lines
//! │ > Running upload test...             │  newest line marked
//! └──────────────────────────────────────┘
//! ```
//!
//! Only the newest lines that fit the panel height are drawn; older ones
//! scroll off the top. Lines wider than the panel are clipped when drawn,
//! the log itself keeps them whole.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use super::primitives::{PANEL_INSET, draw_panel_background};
use crate::colors::PANEL_BG;
use crate::config::CONSOLE_LINE_HEIGHT;
use crate::progress::ProgressLog;
use crate::styles::{CONSOLE_STYLE, LEFT_TOP, PROMPT_STYLE};

/// Text margin inside the panel background.
const CONSOLE_PADDING: i32 = 4;

/// Horizontal offset of message text after the prompt column (`"> "`).
const PROMPT_WIDTH: i32 = 12;

/// Number of lines that fit in a console of `area`'s height.
pub fn visible_lines(area: &Rectangle) -> usize {
    let usable = area.size.height as i32 - 2 * (PANEL_INSET as i32 + CONSOLE_PADDING);
    (usable / CONSOLE_LINE_HEIGHT).max(0) as usize
}

/// Number of console characters that fit on one row of `area`.
pub fn visible_columns(area: &Rectangle) -> usize {
    let usable = area.size.width as i32 - 2 * (PANEL_INSET as i32 + CONSOLE_PADDING) - PROMPT_WIDTH;
    let char_width = (CONSOLE_STYLE.font.character_size.width + CONSOLE_STYLE.font.character_spacing) as i32;
    (usable / char_width).max(0) as usize
}

/// Leading part of `line` that fits in `columns` characters.
fn clip(line: &str, columns: usize) -> &str {
    line.char_indices().nth(columns).map_or(line, |(end, _)| &line[..end])
}

/// Draw `log` into `area`, newest line marked with a `>` prompt.
pub fn draw_console(display: &mut SimulatorDisplay<Rgb888>, area: &Rectangle, log: &ProgressLog) {
    draw_panel_background(display, area, PANEL_BG);

    let capacity = visible_lines(area);
    let columns = visible_columns(area);
    let skip = log.len().saturating_sub(capacity);
    let newest = log.len().saturating_sub(1);
    let origin = area.top_left + Point::new(PANEL_INSET as i32 + CONSOLE_PADDING, PANEL_INSET as i32 + CONSOLE_PADDING);

    for (row, (index, line)) in log.iter().enumerate().skip(skip).enumerate() {
        let y = origin.y + row as i32 * CONSOLE_LINE_HEIGHT;
        if index == newest {
            Text::with_text_style(">", Point::new(origin.x, y), PROMPT_STYLE, LEFT_TOP)
                .draw(display)
                .ok();
        }
        Text::with_text_style(clip(line, columns), Point::new(origin.x + PROMPT_WIDTH, y), CONSOLE_STYLE, LEFT_TOP)
            .draw(display)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{PROMPT, WHITE};
    use crate::config::SPEED_CONSOLE_AREA;

    fn any_pixel(display: &SimulatorDisplay<Rgb888>, region: Rectangle, color: Rgb888) -> bool {
        region.points().any(|p| display.get_pixel(p) == color)
    }

    fn row_region(area: &Rectangle, row: i32, x: i32, width: u32) -> Rectangle {
        let inset = PANEL_INSET as i32 + CONSOLE_PADDING;
        Rectangle::new(
            area.top_left + Point::new(inset + x, inset + row * CONSOLE_LINE_HEIGHT),
            Size::new(width, CONSOLE_LINE_HEIGHT as u32),
        )
    }

    #[test]
    fn test_visible_lines_for_speed_console() {
        // 96px tall: 96 - 12 = 84 usable, 7 lines of 12px
        assert_eq!(visible_lines(&SPEED_CONSOLE_AREA), 7);
        assert_eq!(visible_lines(&Rectangle::new(Point::zero(), Size::new(10, 4))), 0);
    }

    #[test]
    fn test_long_lines_clipped_to_panel_width() {
        // 620px wide: 620 - 12 - 12 = 596 usable, 99 columns of 6px
        assert_eq!(visible_columns(&SPEED_CONSOLE_AREA), 99);
        assert_eq!(clip("Download error: timeout", 8), "Download");
        assert_eq!(clip("short", 99), "short");
        assert_eq!(clip("°°°", 2), "°°", "Clipping counts characters, not bytes");
    }

    #[test]
    fn test_long_line_stays_inside_panel() {
        let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(640, 600));
        let mut log = ProgressLog::new();
        log.push(&"x".repeat(300));
        draw_console(&mut display, &SPEED_CONSOLE_AREA, &log);

        // Right padding of the panel stays clear of text
        let right = SPEED_CONSOLE_AREA.top_left.x + SPEED_CONSOLE_AREA.size.width as i32;
        let margin = Rectangle::new(
            Point::new(right - PANEL_INSET as i32 - CONSOLE_PADDING, SPEED_CONSOLE_AREA.top_left.y),
            Size::new((PANEL_INSET as i32 + CONSOLE_PADDING) as u32, SPEED_CONSOLE_AREA.size.height),
        );
        assert!(!any_pixel(&display, margin, WHITE));
        assert_eq!(log.last().map(str::len), Some(300), "Drawing leaves the stored line whole");
    }

    #[test]
    fn test_prompt_marks_newest_line() {
        let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(640, 600));
        let mut log = ProgressLog::new();
        log.push("Starting WIFI speed test...");
        log.push("Running download test...");
        draw_console(&mut display, &SPEED_CONSOLE_AREA, &log);

        assert!(!any_pixel(&display, row_region(&SPEED_CONSOLE_AREA, 0, 0, 6), PROMPT));
        assert!(any_pixel(&display, row_region(&SPEED_CONSOLE_AREA, 1, 0, 6), PROMPT));
        assert!(any_pixel(&display, row_region(&SPEED_CONSOLE_AREA, 1, PROMPT_WIDTH, 60), WHITE));
    }

    #[test]
    fn test_old_lines_scroll_off() {
        let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(640, 600));
        let mut log = ProgressLog::new();
        for i in 0..10 {
            log.push(&format!("line {i}"));
        }
        draw_console(&mut display, &SPEED_CONSOLE_AREA, &log);

        // Last visible row carries the prompt, nothing is drawn below it
        let last = visible_lines(&SPEED_CONSOLE_AREA) as i32 - 1;
        assert!(any_pixel(&display, row_region(&SPEED_CONSOLE_AREA, last, 0, 6), PROMPT));
        assert!(!any_pixel(&display, row_region(&SPEED_CONSOLE_AREA, last + 1, 0, 200), WHITE));
    }
}
