//! Throughput measurement run: phases, results and the state machine that
//! drives the dashboard gauges while a run is pending.
//!
//! - [`probe`]: the throughput collaborator and its result-text parsing
//! - [`worker`]: the background thread that performs one run
//! - [`orchestrator`]: UI-side state machine consuming the worker's events
//!
//! # Run Lifecycle
//!
//! ```text
//!            start               UploadStarted          Completed(result)
//!   Idle ──────────▶ Downloading ─────────────▶ Uploading ─────────────▶ Completed
//!     ▲                   │                         │                        │
//!     │                   └──── Failed(msg) ────────┴──────▶ Failed ─────────┤
//!     └──────────────────────────── start again ─────────────────────────────┘
//! ```

pub mod orchestrator;
pub mod probe;
pub mod worker;

pub use orchestrator::Orchestrator;
pub use probe::{SimulatedProbe, ThroughputProbe, parse_mbps};
pub use worker::spawn_run;

/// Phase of the current (or last) run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeasurementPhase {
    #[default]
    Idle,
    Downloading,
    Uploading,
    Completed,
    Failed,
}

impl MeasurementPhase {
    /// A run is in flight and its trigger must stay disabled.
    #[inline]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Downloading | Self::Uploading)
    }

    /// The run ended, successfully or not.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Short status text for the header bar.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Downloading => "Downloading",
            Self::Uploading => "Uploading",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
        }
    }
}

/// Outcome of one completed run.
///
/// Labels are the probe's raw result lines (shown in the progress log);
/// values are the parsed throughputs in Mbps (0 when the probe failed).
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementResult {
    download_label: String,
    upload_label: String,
    download_value: f32,
    upload_value: f32,
}

impl MeasurementResult {
    pub fn new(download_label: String, upload_label: String, download_value: f32, upload_value: f32) -> Self {
        Self {
            download_label,
            upload_label,
            download_value,
            upload_value,
        }
    }

    pub fn download_label(&self) -> &str {
        &self.download_label
    }

    pub fn upload_label(&self) -> &str {
        &self.upload_label
    }

    pub const fn download_value(&self) -> f32 {
        self.download_value
    }

    pub const fn upload_value(&self) -> f32 {
        self.upload_value
    }
}

/// Messages from the worker thread to the UI thread.
#[derive(Clone, Debug, PartialEq)]
pub enum RunEvent {
    /// Human-readable progress line for the console
    Progress(String),
    /// The download measurement is about to begin
    DownloadStarted,
    /// The upload measurement is about to begin
    UploadStarted,
    /// Both measurements finished (terminal)
    Completed(MeasurementResult),
    /// The run aborted (terminal)
    Failed(String),
}

impl RunEvent {
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed(_) | Self::Failed(_))
    }
}
