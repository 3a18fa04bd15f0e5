//! UI-side state machine for measurement runs.
//!
//! The orchestrator lives on the UI thread. It owns both gauges, the
//! trigger, the progress log, the receiving end of the current run's event
//! channel and the single animation slot. The frame loop calls
//! [`Orchestrator::poll`] once per frame; poll never blocks.
//!
//! # Single Run
//!
//! Only one run may be in flight. [`Orchestrator::start`] checks the trigger
//! before spawning anything and refuses with [`StartError::AlreadyRunning`]
//! while it is disabled.
//!
//! # Animation Slot
//!
//! `driver: Option<AnimationDriver>` holds at most one pulse timer. Every
//! phase transition replaces or clears it, so the download and upload pulses
//! can never overlap and a terminal state never keeps animating.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, info, warn};

use super::probe::ThroughputProbe;
use super::worker::spawn_run;
use super::{MeasurementPhase, MeasurementResult, RunEvent};
use crate::animations::{AnimationDriver, GaugeId};
use crate::config::{ANIMATION_INTERVAL, GaugeSpec};
use crate::error::{GaugeError, StartError};
use crate::gauge::Gauge;
use crate::progress::ProgressLog;
use crate::trigger::TriggerControl;

/// Console text before the first run.
pub const IDLE_PROMPT: &str = "Click 'Run Speed Test' to begin...";

/// Console text appended after the result labels of a completed run.
pub const COMPLETED_LINE: &str = "Speed tests completed.";

/// Failure text when the worker disappears without a terminal event.
pub const WORKER_LOST: &str = "Speed test worker exited unexpectedly";

/// Measurement run state machine driving two gauges.
#[derive(Debug)]
pub struct Orchestrator {
    phase: MeasurementPhase,
    download: Gauge,
    upload: Gauge,
    download_spec: GaugeSpec,
    upload_spec: GaugeSpec,
    driver: Option<AnimationDriver>,
    animation_interval: Duration,
    trigger: TriggerControl,
    log: ProgressLog,
    events: Option<Receiver<RunEvent>>,
}

impl Orchestrator {
    /// Create an idle orchestrator with both gauges at 0.
    pub fn new(download_spec: GaugeSpec, upload_spec: GaugeSpec) -> Result<Self, GaugeError> {
        let mut log = ProgressLog::new();
        log.push(IDLE_PROMPT);
        Ok(Self {
            phase: MeasurementPhase::Idle,
            download: Gauge::from_spec(&download_spec)?,
            upload: Gauge::from_spec(&upload_spec)?,
            download_spec,
            upload_spec,
            driver: None,
            animation_interval: ANIMATION_INTERVAL,
            trigger: TriggerControl::SPEED_TEST,
            log,
            events: None,
        })
    }

    /// Override the pulse interval (default [`ANIMATION_INTERVAL`]).
    #[must_use]
    pub fn with_animation_interval(mut self, interval: Duration) -> Self {
        self.animation_interval = interval;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn phase(&self) -> MeasurementPhase {
        self.phase
    }

    #[inline]
    pub const fn download_gauge(&self) -> &Gauge {
        &self.download
    }

    #[inline]
    pub const fn upload_gauge(&self) -> &Gauge {
        &self.upload
    }

    #[inline]
    pub const fn trigger(&self) -> &TriggerControl {
        &self.trigger
    }

    #[inline]
    pub const fn progress_log(&self) -> &ProgressLog {
        &self.log
    }

    /// Active pulse timer, if a phase is animating.
    #[inline]
    pub const fn animation(&self) -> Option<&AnimationDriver> {
        self.driver.as_ref()
    }

    #[inline]
    pub const fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Start a run against `probe` on a background thread.
    ///
    /// Refused while the trigger is disabled; nothing is spawned then.
    pub fn start(&mut self, probe: Arc<dyn ThroughputProbe>, now: Instant) -> Result<(), StartError> {
        if !self.trigger.is_enabled() {
            debug!("Start ignored: run already in progress");
            return Err(StartError::AlreadyRunning);
        }
        let events = spawn_run(probe)?;
        self.start_with_events(events, now)
    }

    /// Start a run whose events arrive on `events`.
    ///
    /// Resets both gauges, clears the log, disables the trigger and starts
    /// the download pulse.
    pub fn start_with_events(&mut self, events: Receiver<RunEvent>, now: Instant) -> Result<(), StartError> {
        if !self.trigger.is_enabled() {
            return Err(StartError::AlreadyRunning);
        }

        self.download.set_value(0.0);
        self.upload.set_value(0.0);
        self.log.clear();
        self.trigger.disable();
        self.events = Some(events);
        self.enter(MeasurementPhase::Downloading);
        self.animate(GaugeId::Download, now);
        Ok(())
    }

    /// Apply one worker event.
    pub fn handle_event(&mut self, event: RunEvent, now: Instant) {
        if !self.is_running() {
            debug!("Dropping {event:?} outside a run");
            return;
        }

        match event {
            RunEvent::Progress(line) => self.log.push(&line),
            RunEvent::DownloadStarted => {
                if self.driver.as_ref().map(AnimationDriver::target) != Some(GaugeId::Download) {
                    self.enter(MeasurementPhase::Downloading);
                    self.animate(GaugeId::Download, now);
                }
            }
            RunEvent::UploadStarted => {
                self.enter(MeasurementPhase::Uploading);
                self.animate(GaugeId::Upload, now);
            }
            RunEvent::Completed(result) => self.complete(&result),
            RunEvent::Failed(msg) => self.fail(&msg),
        }
    }

    /// Drain pending worker events, then apply due animation ticks.
    ///
    /// Returns the number of events applied.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut applied = 0;
        loop {
            let received = match &self.events {
                Some(events) => events.try_recv(),
                None => break,
            };
            match received {
                Ok(event) => {
                    self.handle_event(event, now);
                    applied += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("Worker channel closed before a terminal event");
                    self.fail(WORKER_LOST);
                    break;
                }
            }
        }
        self.tick_animation(now);
        applied
    }

    fn complete(&mut self, result: &MeasurementResult) {
        self.driver = None;
        self.download.set_value(result.download_value());
        self.upload.set_value(result.upload_value());
        self.log.push(result.download_label());
        self.log.push(result.upload_label());
        self.log.push(COMPLETED_LINE);
        info!(
            "Speed test completed: download {:.2} Mbps, upload {:.2} Mbps",
            self.download.value(),
            self.upload.value()
        );
        self.finish(MeasurementPhase::Completed);
    }

    fn fail(&mut self, msg: &str) {
        self.driver = None;
        self.log.push(msg);
        warn!("Speed test failed: {msg}");
        self.finish(MeasurementPhase::Failed);
    }

    fn finish(&mut self, phase: MeasurementPhase) {
        self.events = None;
        self.trigger.enable();
        self.enter(phase);
    }

    fn enter(&mut self, phase: MeasurementPhase) {
        if self.phase != phase {
            info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Replace the animation slot with a pulse on `target`.
    fn animate(&mut self, target: GaugeId, now: Instant) {
        let step = match target {
            GaugeId::Download => self.download_spec.pulse_step,
            GaugeId::Upload => self.upload_spec.pulse_step,
        };
        self.driver = Some(AnimationDriver::start(target, step, self.animation_interval, now));
    }

    fn tick_animation(&mut self, now: Instant) {
        let Some(driver) = self.driver.as_mut() else {
            return;
        };
        let ticks = driver.due_ticks(now);
        let (target, step) = (driver.target(), driver.step());

        let gauge = match target {
            GaugeId::Download => &mut self.download,
            GaugeId::Upload => &mut self.upload,
        };
        for _ in 0..ticks {
            gauge.advance(step);
        }
    }
}
