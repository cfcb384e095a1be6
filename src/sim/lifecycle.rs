//! Round lifecycle: Playing → Ending → Resetting → Playing

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::timer::{Scheduler, TimerHandle, TimerTask};

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Active gameplay
    #[default]
    Playing,
    /// Player was hit; physics frozen until the reset timer fires
    Ending,
    /// Scene is being rebuilt
    Resetting,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Playing => "Playing",
            Phase::Ending => "Ending",
            Phase::Resetting => "Resetting",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    phase: Phase,
    reset_timer: Option<TimerHandle>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Handle of the outstanding reset timer, if any
    pub fn reset_timer(&self) -> Option<TimerHandle> {
        self.reset_timer
    }

    /// Playing → Ending, scheduling the reset. Returns false (and does
    /// nothing) unless the round is currently Playing.
    pub fn end_round(&mut self, scheduler: &mut dyn Scheduler, delay: Duration) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.phase = Phase::Ending;
        self.reset_timer = Some(scheduler.schedule(delay, TimerTask::ResetRound));
        log::info!("Round ending, reset in {} ms", delay.as_millis());
        true
    }

    /// Ending → Resetting once the timer has fired
    pub fn begin_reset(&mut self) -> bool {
        if self.phase != Phase::Ending {
            return false;
        }
        self.phase = Phase::Resetting;
        self.reset_timer = None;
        true
    }

    /// Drop a pending reset timer (scene teardown)
    pub fn cancel_pending(&mut self, scheduler: &mut dyn Scheduler) -> bool {
        match self.reset_timer.take() {
            Some(handle) => scheduler.cancel(handle),
            None => false,
        }
    }
}
