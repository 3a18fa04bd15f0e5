//! Throughput probe collaborator and result-text parsing.
//!
//! A probe performs one blocking measurement per direction and reports it
//! as a single human-readable line:
//!
//! ```text
//! Download speed: 87.34 Mbps
//! Upload error: timeout
//! ```
//!
//! The dashboard never implements the measurement protocol itself. The
//! binary ships [`SimulatedProbe`] so the UI can run without a network.

use std::thread;
use std::time::Duration;

use log::warn;

use crate::error::ParseError;

/// Something that can measure link throughput in both directions.
///
/// Calls block for as long as the measurement takes. Results are either
/// `"<Direction> speed: <number> Mbps"` or `"<Direction> error: <message>"`.
pub trait ThroughputProbe: Send + Sync {
    fn measure_download(&self) -> String;
    fn measure_upload(&self) -> String;
}

// =============================================================================
// Parsing
// =============================================================================

/// Extract the Mbps number from a probe result line.
///
/// Lines containing `error` (any case) are probe failures. Otherwise the
/// number is the first whitespace-delimited token after the first `:`.
pub fn parse_mbps(text: &str) -> Result<f32, ParseError> {
    if text.to_lowercase().contains("error") {
        return Err(ParseError::ProbeReported(text.to_owned()));
    }

    let (_, reading) = text
        .split_once(':')
        .ok_or_else(|| ParseError::MissingSeparator(text.to_owned()))?;

    // Only the segment up to a second ':' counts
    let reading = reading.split(':').next().unwrap_or_default();
    let token = reading
        .split_whitespace()
        .next()
        .ok_or_else(|| ParseError::MissingValue(text.to_owned()))?;

    token
        .parse::<f32>()
        .map_err(|_| ParseError::InvalidNumber(token.to_owned()))
}

/// Gauge value for a probe result line: the parsed Mbps, or 0.
///
/// Probe-reported failures are already visible to the user through the
/// result line itself. Malformed success lines are not, so they are logged.
pub fn reading_value(text: &str) -> f32 {
    match parse_mbps(text) {
        Ok(mbps) => mbps,
        Err(ParseError::ProbeReported(_)) => 0.0,
        Err(e) => {
            warn!("Unreadable probe result, showing 0: {e}");
            0.0
        }
    }
}

// =============================================================================
// Simulated Probe
// =============================================================================

/// Probe that sleeps for a fixed delay and reports fixed speeds.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedProbe {
    pub download_mbps: f32,
    pub upload_mbps: f32,
    pub delay: Duration,
    pub fail_download: bool,
}

impl SimulatedProbe {
    pub const fn new(download_mbps: f32, upload_mbps: f32, delay: Duration) -> Self {
        Self {
            download_mbps,
            upload_mbps,
            delay,
            fail_download: false,
        }
    }

    /// Report a timeout for the download direction instead of a speed.
    #[must_use]
    pub const fn with_failed_download(mut self, fail: bool) -> Self {
        self.fail_download = fail;
        self
    }
}

impl ThroughputProbe for SimulatedProbe {
    fn measure_download(&self) -> String {
        thread::sleep(self.delay);
        if self.fail_download {
            "Download error: simulated timeout".to_owned()
        } else {
            format!("Download speed: {:.2} Mbps", self.download_mbps)
        }
    }

    fn measure_upload(&self) -> String {
        thread::sleep(self.delay);
        format!("Upload speed: {:.2} Mbps", self.upload_mbps)
    }
}
