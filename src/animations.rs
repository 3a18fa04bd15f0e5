//! Fixed-interval pulse animation for pending measurement phases.
//!
//! While a phase is running, its gauge advances by a fixed step every
//! [`ANIMATION_INTERVAL`](crate::config::ANIMATION_INTERVAL), wrapping modulo
//! the gauge's full scale. The pulse is cosmetic: it signals "still working"
//! and is overwritten by the authoritative value when the phase completes.
//!
//! # Ownership
//!
//! An [`AnimationDriver`] is a plain value owned by the orchestrator
//! (`Option<AnimationDriver>`). Stopping a phase's animation means dropping
//! the driver; starting the next phase means replacing it. Two drivers can
//! never target the same gauge at once because there is only one slot.
//!
//! # Tick Catch-up
//!
//! The frame loop polls at ~50 FPS, but frames can be late (window drag,
//! slow host). [`AnimationDriver::due_ticks`] returns every whole interval
//! that elapsed since the last poll, so a late frame applies the missed
//! pulses at once instead of drifting.
//!
//! ```text
//! start        +100ms       +200ms       +300ms
//!   |------------|------------|------------|
//!                ^ 1 tick                  ^ poll at +350ms after +150ms → 2 ticks
//! ```

use std::time::{Duration, Instant};

use log::debug;

/// Shortest interval accepted by the driver. Zero would make every poll
/// produce unbounded ticks.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Which dial an animation drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GaugeId {
    Download,
    Upload,
}

/// Owned pulse timer for one gauge.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDriver {
    target: GaugeId,
    step: f32,
    interval: Duration,
    next_tick: Instant,
}

impl AnimationDriver {
    /// Start pulsing `target` by `step` every `interval`, first tick one
    /// interval after `now`.
    pub fn start(target: GaugeId, step: f32, interval: Duration, now: Instant) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        debug!("Animation started: {target:?} +{step} every {interval:?}");
        Self {
            target,
            step,
            interval,
            next_tick: now + interval,
        }
    }

    #[inline]
    pub const fn target(&self) -> GaugeId {
        self.target
    }

    #[inline]
    pub const fn step(&self) -> f32 {
        self.step
    }

    #[inline]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of whole intervals elapsed up to `now` that have not been
    /// reported yet. Advances the internal schedule past them.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        if now < self.next_tick {
            return 0;
        }

        let behind = now.duration_since(self.next_tick);
        let extra = behind.as_nanos() / self.interval.as_nanos();
        let ticks = u32::try_from(extra.saturating_add(1)).unwrap_or(u32::MAX);

        // Schedule the next tick on the original grid, not relative to `now`
        self.next_tick = self
            .interval
            .checked_mul(ticks)
            .and_then(|advance| self.next_tick.checked_add(advance))
            .unwrap_or(now + self.interval);
        ticks
    }
}
