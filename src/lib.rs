// Crate-level lints: allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // f32->u32 where the value is known non-negative

//! Throughput dashboard: analog speedometer gauges driven by a background
//! measurement run.
//!
//! - [`gauge`]: clamped gauge model and dial renderer for any `DrawTarget`
//! - [`measurement`]: run phases, worker thread and the orchestrator state machine
//! - [`animations`]: owned fixed-interval pulse driver
//! - [`weather`]: weather lookup collaborator and console
//! - [`widgets`]: header, buttons and console panels for the simulator window
//!
//! # Threading
//!
//! The UI loop is single-threaded. Each measurement run and each weather
//! lookup runs on its own `std::thread` and reports back through a
//! `crossbeam_channel`; the UI drains with `try_recv` once per frame and
//! never blocks.

pub mod animations;
pub mod cli;
pub mod colors;
pub mod config;
pub mod error;
pub mod gauge;
pub mod measurement;
pub mod progress;
pub mod styles;
pub mod trigger;
pub mod weather;
pub mod widgets;

pub use error::{AppError, GaugeError, ParseError, StartError};
pub use gauge::{Gauge, draw_gauge};
pub use measurement::{MeasurementPhase, MeasurementResult, Orchestrator, RunEvent, ThroughputProbe};
pub use weather::{WeatherLookup, WeatherResponse};
