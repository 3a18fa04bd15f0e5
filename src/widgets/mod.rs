//! Widget components for the dashboard window.
//!
//! - [`header`]: title bar with run status
//! - [`button`]: trigger buttons and click hit-testing
//! - [`console`]: scrolling console panels for progress and weather text
//! - [`primitives`]: shared low-level drawing utilities
//!
//! Widgets draw onto the concrete simulator display and discard draw
//! results (`.ok()`), since the simulator target is infallible. The gauge
//! renderer in [`crate::gauge`] is the one generic drawing entry point.

mod button;
mod console;
mod header;
mod primitives;

pub use button::{draw_trigger_button, hit_test};
pub use console::{draw_console, visible_columns, visible_lines};
pub use header::{HEADER_TITLE, draw_header};
pub use primitives::{draw_caption, draw_panel_background};
