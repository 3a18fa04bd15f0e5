//! Weather lookup console.
//!
//! A [`WeatherLookup`] collaborator answers with either a report or an error
//! record. The JSON shape matches what weather services usually return:
//!
//! ```json
//! {"location": "Oslo", "temperature": 4.5, "description": "light rain",
//!  "humidity": 81, "wind_speed": 3.6}
//! {"error": "city not found"}
//! ```
//!
//! [`WeatherConsole`] runs one lookup at a time on a background thread and
//! formats the answer into console lines.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError, unbounded};
use log::{info, warn};
use serde::Deserialize;

use crate::error::StartError;
use crate::measurement::worker::panic_message;
use crate::progress::ProgressLog;
use crate::trigger::TriggerControl;

/// Console text before the first lookup.
pub const IDLE_PROMPT: &str = "Click 'Get Weather' to begin...";

/// Console text when the location is empty.
pub const EMPTY_LOCATION: &str = "Please enter a city name.";

/// Thread name of the lookup worker.
pub const LOOKUP_THREAD_NAME: &str = "weather";

// =============================================================================
// Records
// =============================================================================

/// Current conditions at a location.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    /// Degrees Celsius
    pub temperature: f32,
    pub description: String,
    /// Percent
    pub humidity: f32,
    /// Meters per second
    pub wind_speed: f32,
}

/// Answer of a weather lookup.
///
/// Deserialized untagged: any object with an `error` field is a failure.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WeatherResponse {
    Failure { error: String },
    Report(WeatherReport),
}

impl WeatherResponse {
    /// Parse a JSON answer.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Console lines for a lookup answer.
pub fn format_weather(response: &WeatherResponse) -> Vec<String> {
    match response {
        WeatherResponse::Failure { error } => vec![format!("Error: {error}")],
        WeatherResponse::Report(report) => vec![
            format!("Weather in {}:", report.location),
            format!("Temperature: {} °C", report.temperature),
            format!("Description: {}", report.description),
            format!("Humidity: {}%", report.humidity),
            format!("Wind Speed: {} m/s", report.wind_speed),
        ],
    }
}

// =============================================================================
// Lookup Collaborator
// =============================================================================

/// Something that can fetch current weather. Calls block.
pub trait WeatherLookup: Send + Sync {
    fn fetch_weather(&self, location: &str) -> WeatherResponse;
}

/// Lookup that sleeps for a fixed delay and answers from a canned report.
///
/// An empty location, or one not in `known`, answers `city not found`.
#[derive(Clone, Debug)]
pub struct SimulatedWeather {
    pub delay: Duration,
    pub known: Vec<WeatherReport>,
}

impl SimulatedWeather {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            known: vec![WeatherReport {
                location: "London".to_owned(),
                temperature: 14.2,
                description: "scattered clouds".to_owned(),
                humidity: 72.0,
                wind_speed: 4.1,
            }],
        }
    }
}

impl WeatherLookup for SimulatedWeather {
    fn fetch_weather(&self, location: &str) -> WeatherResponse {
        thread::sleep(self.delay);
        self.known
            .iter()
            .find(|report| report.location.eq_ignore_ascii_case(location))
            .cloned()
            .map_or_else(
                || WeatherResponse::Failure {
                    error: "city not found".to_owned(),
                },
                WeatherResponse::Report,
            )
    }
}

/// Run one lookup on a new thread. The receiver yields exactly one answer.
///
/// A panic inside the lookup becomes `Failure { error: <panic message> }`.
pub fn spawn_lookup(lookup: Arc<dyn WeatherLookup>, location: String) -> io::Result<Receiver<WeatherResponse>> {
    let (tx, rx) = unbounded();
    thread::Builder::new()
        .name(LOOKUP_THREAD_NAME.to_owned())
        .spawn(move || {
            let response = panic::catch_unwind(AssertUnwindSafe(|| lookup.fetch_weather(&location)))
                .unwrap_or_else(|payload| WeatherResponse::Failure {
                    error: panic_message(payload.as_ref()),
                });
            tx.send(response).ok();
        })?;
    Ok(rx)
}

// =============================================================================
// Console State
// =============================================================================

/// Weather panel state: trigger, console lines and the pending lookup.
#[derive(Debug)]
pub struct WeatherConsole {
    trigger: TriggerControl,
    log: ProgressLog,
    pending: Option<Receiver<WeatherResponse>>,
}

impl Default for WeatherConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherConsole {
    pub fn new() -> Self {
        let mut log = ProgressLog::new();
        log.push(IDLE_PROMPT);
        Self {
            trigger: TriggerControl::WEATHER,
            log,
            pending: None,
        }
    }

    #[inline]
    pub const fn trigger(&self) -> &TriggerControl {
        &self.trigger
    }

    #[inline]
    pub const fn log(&self) -> &ProgressLog {
        &self.log
    }

    #[inline]
    pub const fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a lookup for `location` on a background thread.
    ///
    /// An empty location only prints a hint. Refused while a lookup is
    /// pending.
    pub fn start(&mut self, lookup: Arc<dyn WeatherLookup>, location: &str) -> Result<(), StartError> {
        let location = location.trim();
        if location.is_empty() {
            self.log.push(EMPTY_LOCATION);
            return Ok(());
        }
        if !self.trigger.is_enabled() {
            return Err(StartError::AlreadyRunning);
        }

        let pending = spawn_lookup(lookup, location.to_owned())?;
        self.begin(pending, location);
        Ok(())
    }

    /// Track a lookup whose answer arrives on `pending`.
    pub fn begin(&mut self, pending: Receiver<WeatherResponse>, location: &str) {
        info!("Fetching weather for {location}");
        self.trigger.disable();
        self.log.push(&format!("Fetching weather for {location}..."));
        self.pending = Some(pending);
    }

    /// Show the answer if it arrived. Never blocks.
    pub fn poll(&mut self) {
        let received = match &self.pending {
            Some(pending) => pending.try_recv(),
            None => return,
        };
        let response = match received {
            Ok(response) => response,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                warn!("Weather lookup exited without an answer");
                WeatherResponse::Failure {
                    error: "lookup exited unexpectedly".to_owned(),
                }
            }
        };

        for line in format_weather(&response) {
            self.log.push(&line);
        }
        self.pending = None;
        self.trigger.enable();
    }
}
