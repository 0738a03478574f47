use serde::{Deserialize, Serialize};

use super::phase::BreakKind;
use crate::error::ConfigError;

pub const WORK_MINUTES: u32 = 30;
pub const SHORT_BREAK_MINUTES: u32 = 5;
pub const LONG_BREAK_MINUTES: u32 = 30;
/// Every n-th work session is followed by a long break.
pub const LONG_BREAK_INTERVAL: u32 = 4;

/// The four timing values of the work/break cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: u32,
}

fn default_work_minutes() -> u32 {
    WORK_MINUTES
}
fn default_short_break_minutes() -> u32 {
    SHORT_BREAK_MINUTES
}
fn default_long_break_minutes() -> u32 {
    LONG_BREAK_MINUTES
}
fn default_long_break_interval() -> u32 {
    LONG_BREAK_INTERVAL
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_minutes: WORK_MINUTES,
            short_break_minutes: SHORT_BREAK_MINUTES,
            long_break_minutes: LONG_BREAK_MINUTES,
            long_break_interval: LONG_BREAK_INTERVAL,
        }
    }
}

impl TimerSettings {
    /// Work phase length in seconds.
    pub fn work_secs(&self) -> u64 {
        u64::from(self.work_minutes).saturating_mul(60)
    }

    /// Break length in seconds for the given kind.
    pub fn break_secs(&self, kind: BreakKind) -> u64 {
        let minutes = match kind {
            BreakKind::Short => self.short_break_minutes,
            BreakKind::Long => self.long_break_minutes,
        };
        u64::from(minutes).saturating_mul(60)
    }

    /// Reject zero-length phases and a zero interval.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("timer.work_minutes", self.work_minutes),
            ("timer.short_break_minutes", self.short_break_minutes),
            ("timer.long_break_minutes", self.long_break_minutes),
            ("timer.long_break_interval", self.long_break_interval),
        ];
        for (key, value) in checks {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }
}
