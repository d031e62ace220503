//! Countdown timer for a maze run.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Running,
    /// Reached zero. Reported once, then frozen.
    Expired,
    /// Stopped because the session ended first.
    Cancelled,
}

/// Result of a single one-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    /// Still counting; carries the seconds left.
    Counting(u32),
    /// This tick hit zero.
    Expired,
    /// Timer already stopped; nothing happened.
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTimer {
    pub duration_secs: u32,
    pub remaining_secs: u32,
    pub status: TimerStatus,
}

impl SessionTimer {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            status: TimerStatus::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// Advance one whole second.
    pub fn tick(&mut self) -> TimerTick {
        if !self.is_running() {
            return TimerTick::Idle;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.status = TimerStatus::Expired;
            TimerTick::Expired
        } else {
            TimerTick::Counting(self.remaining_secs)
        }
    }

    /// Stop without expiring. No-op once stopped.
    pub fn cancel(&mut self) {
        if self.is_running() {
            self.status = TimerStatus::Cancelled;
        }
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.duration_secs - self.remaining_secs
    }
}
