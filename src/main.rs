// Crate-level lints: allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional u32->i32 casts for pixel math
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges

//! Throughput dashboard simulator window.
//!
//! Hosts the measurement view in an `embedded-graphics-simulator` window:
//! two speedometer gauges, the speed test trigger and console, and the
//! weather trigger and console.
//!
//! # Controls
//!
//! | Input                          | Action              |
//! |--------------------------------|---------------------|
//! | `Space` / `Return`, click      | Run speed test      |
//! | `W`, click on "Get Weather"    | Fetch weather       |
//! | `Escape`, close window         | Quit                |
//!
//! # Frame Loop
//!
//! Every frame drains window events, polls the orchestrator and the weather
//! console (both non-blocking), redraws the whole view and sleeps for the
//! rest of [`FRAME_TIME`]. Background runs report through channels, so the
//! loop never waits on the network.

use std::process;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use clap::Parser;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{LevelFilter, debug, error, info};
use throughput_dashboard::cli::Cli;
use throughput_dashboard::colors::BLACK;
use throughput_dashboard::config::{
    DOWNLOAD_GAUGE,
    DOWNLOAD_GAUGE_AREA,
    FRAME_TIME,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    SPEED_BUTTON_AREA,
    SPEED_CONSOLE_AREA,
    UPLOAD_GAUGE,
    UPLOAD_GAUGE_AREA,
    WEATHER_BUTTON_AREA,
    WEATHER_CONSOLE_AREA,
    WEATHER_LOCATION_POS,
    WINDOW_TITLE,
};
use throughput_dashboard::weather::WeatherConsole;
use throughput_dashboard::widgets::{draw_caption, draw_console, draw_header, draw_trigger_button, hit_test};
use throughput_dashboard::{AppError, Orchestrator, StartError, ThroughputProbe, WeatherLookup, draw_gauge};

/// What a window event asks the dashboard to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    RunSpeedTest,
    FetchWeather,
    Quit,
}

fn main() {
    let cli = Cli::parse();
    let level = cli.level_filter();

    env_logger::Builder::new()
        .filter_level(*level.as_ref().unwrap_or(&LevelFilter::Info))
        .format_target(false)
        .format_timestamp_secs()
        .parse_default_env()
        .init();

    if let Err(e) = level.and_then(|_| run(&cli)) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let scale = cli.window_scale()?;
    let mut orchestrator = Orchestrator::new(DOWNLOAD_GAUGE, UPLOAD_GAUGE)?;
    let mut weather = WeatherConsole::new();
    let probe: Arc<dyn ThroughputProbe> = Arc::new(cli.probe());
    let lookup: Arc<dyn WeatherLookup> = Arc::new(cli.weather());

    let location_caption = cli.location_caption();

    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(scale).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    info!("Dashboard ready ({SCREEN_WIDTH}x{SCREEN_HEIGHT}, scale {scale})");

    // Simulator requires one update before events are available
    display.clear(BLACK).ok();
    window.update(&display);

    loop {
        let frame_start = Instant::now();

        let actions: Vec<Action> = window.events().filter_map(action_for).collect();
        for action in actions {
            match action {
                Action::Quit => {
                    info!("Quit requested");
                    return Ok(());
                }
                Action::RunSpeedTest => match orchestrator.start(Arc::clone(&probe), frame_start) {
                    Ok(()) => {}
                    Err(StartError::AlreadyRunning) => debug!("Speed test already running"),
                    Err(e) => error!("Could not start speed test: {e}"),
                },
                Action::FetchWeather => match weather.start(Arc::clone(&lookup), &cli.location) {
                    Ok(()) => {}
                    Err(StartError::AlreadyRunning) => debug!("Weather lookup already running"),
                    Err(e) => error!("Could not start weather lookup: {e}"),
                },
            }
        }

        orchestrator.poll(Instant::now());
        weather.poll();

        // ======================================================================
        // Draw
        // ======================================================================

        display.clear(BLACK).ok();
        draw_header(&mut display, orchestrator.phase().name());
        draw_gauge(&mut display, orchestrator.download_gauge(), &DOWNLOAD_GAUGE_AREA).ok();
        draw_gauge(&mut display, orchestrator.upload_gauge(), &UPLOAD_GAUGE_AREA).ok();
        draw_trigger_button(&mut display, &SPEED_BUTTON_AREA, orchestrator.trigger());
        draw_console(&mut display, &SPEED_CONSOLE_AREA, orchestrator.progress_log());
        draw_trigger_button(&mut display, &WEATHER_BUTTON_AREA, weather.trigger());
        draw_caption(&mut display, WEATHER_LOCATION_POS, &location_caption);
        draw_console(&mut display, &WEATHER_CONSOLE_AREA, weather.log());

        window.update(&display);

        // Frame rate limiting
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// Map a window event to a dashboard action.
///
/// Key repeat is ignored so holding a key does not queue runs.
fn action_for(event: SimulatorEvent) -> Option<Action> {
    match event {
        SimulatorEvent::Quit => Some(Action::Quit),
        SimulatorEvent::KeyDown { repeat: true, .. } => None,
        SimulatorEvent::KeyDown { keycode, .. } => match keycode {
            Keycode::Space | Keycode::Return => Some(Action::RunSpeedTest),
            Keycode::W => Some(Action::FetchWeather),
            Keycode::Escape => Some(Action::Quit),
            _ => None,
        },
        SimulatorEvent::MouseButtonUp { point, .. } => {
            if hit_test(&SPEED_BUTTON_AREA, point) {
                Some(Action::RunSpeedTest)
            } else if hit_test(&WEATHER_BUTTON_AREA, point) {
                Some(Action::FetchWeather)
            } else {
                None
            }
        }
        _ => None,
    }
}
