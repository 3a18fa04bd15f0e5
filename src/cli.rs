//! Command-line options of the dashboard binary.

use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use crate::error::AppError;
use crate::measurement::SimulatedProbe;
use crate::weather::SimulatedWeather;

/// Capacity of the location caption in bytes.
pub const LOCATION_CAPTION_LENGTH: usize = 64;

const LOCATION_PREFIX: &str = "Location: ";

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "dashboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Throughput dashboard with analog speedometer gauges",
    long_about = None,
)]
pub struct Cli {
    /// Window pixel scale
    #[arg(short, long, default_value = "1")]
    pub scale: u32,
    /// Log level: error, warn, info, debug, trace (RUST_LOG overrides)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
    /// Simulated download speed, Mbps
    #[arg(long, default_value = "87.34")]
    pub download_mbps: f32,
    /// Simulated upload speed, Mbps
    #[arg(long, default_value = "12.5")]
    pub upload_mbps: f32,
    /// Simulated duration of each measurement direction, milliseconds
    #[arg(long, default_value = "2000")]
    pub probe_delay_ms: u64,
    /// Make the simulated download report a timeout
    #[arg(long)]
    pub fail_download: bool,
    /// City for the weather lookup
    #[arg(long, default_value = "London")]
    pub location: String,
    /// Simulated weather lookup duration, milliseconds
    #[arg(long, default_value = "800")]
    pub weather_delay_ms: u64,
}

impl Cli {
    /// Parsed `--log-level`.
    pub fn level_filter(&self) -> Result<LevelFilter, AppError> {
        Ok(self.log_level.parse::<LevelFilter>()?)
    }

    /// Validated `--scale`.
    pub fn window_scale(&self) -> Result<u32, AppError> {
        if self.scale == 0 {
            return Err(AppError::Scale(self.scale));
        }
        Ok(self.scale)
    }

    /// Throughput probe configured from the command line.
    pub fn probe(&self) -> SimulatedProbe {
        SimulatedProbe::new(
            self.download_mbps,
            self.upload_mbps,
            Duration::from_millis(self.probe_delay_ms),
        )
        .with_failed_download(self.fail_download)
    }

    /// Caption shown next to the weather button.
    ///
    /// Locations too long for the caption are cut at a character boundary.
    pub fn location_caption(&self) -> heapless::String<LOCATION_CAPTION_LENGTH> {
        let mut caption = heapless::String::new();
        caption.push_str(LOCATION_PREFIX).ok();
        for c in self.location.chars() {
            if caption.push(c).is_err() {
                break;
            }
        }
        caption
    }

    /// Weather lookup configured from the command line.
    pub fn weather(&self) -> SimulatedWeather {
        SimulatedWeather::new(Duration::from_millis(self.weather_delay_ms))
    }
}
