//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are built with const constructors, so every
//! style the gauges and widgets use is computed once at compile time and only
//! referenced from the draw functions.
//!
//! Console text uses the ISO 8859-1 variant of the 6x10 font so weather lines
//! can show the degree sign.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
        iso_8859_1::FONT_6X10 as LATIN1_FONT_6X10,
    },
    pixelcolor::Rgb888,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::colors::{BUTTON_DISABLED_TEXT, PROMPT, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered on both axes. Used for tick numbers, gauge label/value and buttons.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Centered horizontally, alphabetic baseline. Used for the header title.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned, top baseline. Used for console lines.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned, alphabetic baseline. Used for the header status.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

/// Left-aligned, middle baseline. Used for the weather location caption.
pub const LEFT_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text for tick numbers and the header status.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Medium white text for the gauge label and header title (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Large white text for the gauge value (`ProFont` 24pt).
pub const VALUE_STYLE_WHITE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Enabled button caption.
pub const BUTTON_STYLE_ENABLED: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Disabled button caption.
pub const BUTTON_STYLE_DISABLED: MonoTextStyle<'static, Rgb888> =
    MonoTextStyle::new(&FONT_10X20, BUTTON_DISABLED_TEXT);

/// Console body text.
pub const CONSOLE_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&LATIN1_FONT_6X10, WHITE);

/// Console prompt marker (`>` on the newest line).
pub const PROMPT_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&LATIN1_FONT_6X10, PROMPT);
