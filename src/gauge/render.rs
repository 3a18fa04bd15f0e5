//! Dial renderer.
//!
//! Draws one [`Gauge`] into a rectangular area of any `DrawTarget<Color = Rgb888>`.
//! Each call produces a complete picture from the gauge's current attributes;
//! nothing is cached between frames.
//!
//! # Draw Order
//!
//! 1. Face disc with rim outline
//! 2. Major ticks and their numbers
//! 3. Gradient arc (100 segments)
//! 4. Needle and pivot disc
//! 5. Label above center, value readout below center
//!
//! Later layers cover earlier ones, so the arc hides the middle of each tick
//! and the needle crosses the tick numbers.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use super::Gauge;
use super::geometry::{
    ARC_RADIUS_FACTOR,
    ARC_SEGMENTS,
    DialLayout,
    LABEL_OFFSET_FACTOR,
    NEEDLE_LENGTH_FACTOR,
    TICK_INNER_FACTOR,
    TICK_INTERVALS,
    TICK_LABEL_FACTOR,
    TICK_OUTER_FACTOR,
    VALUE_OFFSET_FACTOR,
    segment_color,
    segment_span,
    tick_angle,
    tick_label_value,
};
use crate::colors::{GAUGE_FACE, GAUGE_RIM, RED, WHITE};
use crate::styles::{CENTERED_MIDDLE, LABEL_STYLE_WHITE, TITLE_STYLE_WHITE, VALUE_STYLE_WHITE};

// =============================================================================
// Stroke Widths
// =============================================================================

/// Rim outline around the face disc.
pub const RIM_STROKE_WIDTH: u32 = 3;

/// Major tick marks.
pub const TICK_STROKE_WIDTH: u32 = 2;

/// Gradient arc band.
pub const ARC_STROKE_WIDTH: u32 = 8;

/// Needle line.
pub const NEEDLE_STROKE_WIDTH: u32 = 3;

/// Pivot disc diameter (radius 8).
pub const PIVOT_DIAMETER: u32 = 16;

/// Height of the label box; the label is centered in it.
const LABEL_BOX_HEIGHT: i32 = 30;

// =============================================================================
// Pre-computed Styles
// =============================================================================

const FACE_STYLE: PrimitiveStyle<Rgb888> = PrimitiveStyleBuilder::new()
    .fill_color(GAUGE_FACE)
    .stroke_color(GAUGE_RIM)
    .stroke_width(RIM_STROKE_WIDTH)
    .build();

const TICK_STYLE: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_stroke(WHITE, TICK_STROKE_WIDTH);

const NEEDLE_STYLE: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_stroke(RED, NEEDLE_STROKE_WIDTH);

const PIVOT_STYLE: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_fill(RED);

// =============================================================================
// Renderer
// =============================================================================

/// Draw `gauge` centered in `area`.
///
/// The dial radius is `0.4 × min(width, height)`, so the area may have any
/// aspect ratio. Drawing is clipped by the target, not by `area`.
pub fn draw_gauge<D>(target: &mut D, gauge: &Gauge, area: &Rectangle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let dial = DialLayout::fit(area);

    draw_face(target, &dial)?;
    draw_ticks(target, &dial, gauge.max_value())?;
    draw_arc(target, &dial)?;
    draw_needle(target, &dial, gauge.needle_angle())?;
    draw_captions(target, &dial, gauge)?;
    Ok(())
}

fn draw_face<D>(target: &mut D, dial: &DialLayout) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    Circle::with_center(dial.center, (dial.radius * 2.0) as u32)
        .into_styled(FACE_STYLE)
        .draw(target)
}

fn draw_ticks<D>(target: &mut D, dial: &DialLayout, max_value: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    for i in 0..=TICK_INTERVALS {
        let angle = tick_angle(i);
        Line::new(dial.at(TICK_INNER_FACTOR, angle), dial.at(TICK_OUTER_FACTOR, angle))
            .into_styled(TICK_STYLE)
            .draw(target)?;

        let mut number: String<12> = String::new();
        let _ = write!(number, "{}", tick_label_value(max_value, i));
        Text::with_text_style(&number, dial.at(TICK_LABEL_FACTOR, angle), LABEL_STYLE_WHITE, CENTERED_MIDDLE)
            .draw(target)?;
    }
    Ok(())
}

fn draw_arc<D>(target: &mut D, dial: &DialLayout) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    for i in 0..ARC_SEGMENTS {
        let (start, sweep) = segment_span(i);
        Line::new(dial.at(ARC_RADIUS_FACTOR, start), dial.at(ARC_RADIUS_FACTOR, start + sweep))
            .into_styled(PrimitiveStyle::with_stroke(segment_color(i), ARC_STROKE_WIDTH))
            .draw(target)?;
    }
    Ok(())
}

fn draw_needle<D>(target: &mut D, dial: &DialLayout, angle: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    Line::new(dial.center, dial.at(NEEDLE_LENGTH_FACTOR, angle))
        .into_styled(NEEDLE_STYLE)
        .draw(target)?;
    Circle::with_center(dial.center, PIVOT_DIAMETER)
        .into_styled(PIVOT_STYLE)
        .draw(target)
}

fn draw_captions<D>(target: &mut D, dial: &DialLayout, gauge: &Gauge) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let label_y = dial.center.y - (dial.radius * LABEL_OFFSET_FACTOR) as i32 + LABEL_BOX_HEIGHT / 2;
    Text::with_text_style(
        gauge.label(),
        Point::new(dial.center.x, label_y),
        TITLE_STYLE_WHITE,
        CENTERED_MIDDLE,
    )
    .draw(target)?;

    // One decimal digit, e.g. "87.3"
    let mut value: String<16> = String::new();
    let _ = write!(value, "{:.1}", gauge.value());
    let value_y = dial.center.y + (dial.radius * VALUE_OFFSET_FACTOR) as i32;
    Text::with_text_style(&value, Point::new(dial.center.x, value_y), VALUE_STYLE_WHITE, CENTERED_MIDDLE)
        .draw(target)?;
    Ok(())
}
