//! Timer engine implementation.
//!
//! The timer engine is a tick-driven state machine. It does not own a clock;
//! the caller invokes `tick()` once per elapsed second while a phase is active.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Working -> (ShortBreak | LongBreak) -> Working -> ...
//!   ^________________ reset() from anywhere ________________|
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(TimerSettings::default());
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event::PhaseChanged) when a phase ends
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::clock::format_mm_ss;
use super::phase::{BreakKind, Phase};
use super::settings::TimerSettings;
use crate::events::Event;

/// Glyph appended once per completed work phase.
pub const CHECKMARK: &str = "✅";

/// Core timer engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    settings: TimerSettings,
    phase: Phase,
    remaining_secs: u64,
    /// Work sessions begun since the last reset. Bumped when a Working phase
    /// starts, so at break selection it equals the number just finished.
    work_sessions: u32,
    /// Work phases that ran to zero.
    checkmarks: u32,
}

impl TimerEngine {
    /// Create an idle engine showing a full work phase.
    pub fn new(settings: TimerSettings) -> Self {
        Self {
            remaining_secs: settings.work_secs(),
            settings,
            phase: Phase::Idle,
            work_sessions: 0,
            checkmarks: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn work_sessions(&self) -> u32 {
        self.work_sessions
    }

    pub fn checkmarks(&self) -> u32 {
        self.checkmarks
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_active()
    }

    /// Countdown text, `MM:SS`.
    pub fn display_time(&self) -> String {
        format_mm_ss(self.remaining_secs)
    }

    pub fn checkmark_text(&self) -> String {
        CHECKMARK.repeat(self.checkmarks as usize)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            display: self.display_time(),
            work_sessions: self.work_sessions,
            checkmarks: self.checkmarks,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin the first work session. Ignored unless Idle.
    pub fn start(&mut self) -> Option<Event> {
        if self.phase != Phase::Idle {
            return None;
        }
        self.begin_work();
        info!(
            work_sessions = self.work_sessions,
            duration_secs = self.remaining_secs,
            "timer started"
        );
        Some(Event::PhaseStarted {
            phase: self.phase,
            duration_secs: self.remaining_secs,
            work_sessions: self.work_sessions,
            at: Utc::now(),
        })
    }

    /// Advance by one second. Returns `Some(Event::PhaseChanged)` when the
    /// countdown hits zero; the next phase is already loaded at that point.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.phase.is_active() {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        let from = self.phase;
        if from.is_break() {
            self.begin_work();
        } else {
            self.checkmarks += 1;
            let kind =
                BreakKind::for_session(self.work_sessions, self.settings.long_break_interval);
            self.phase = kind.phase();
            self.remaining_secs = self.settings.break_secs(kind);
        }

        debug!(
            ?from,
            to = ?self.phase,
            work_sessions = self.work_sessions,
            checkmarks = self.checkmarks,
            "phase changed"
        );
        Some(Event::PhaseChanged {
            from,
            to: self.phase,
            duration_secs: self.remaining_secs,
            work_sessions: self.work_sessions,
            checkmarks: self.checkmarks,
            at: Utc::now(),
        })
    }

    /// Back to Idle with every counter cleared. Valid from any phase.
    pub fn reset(&mut self) -> Event {
        self.phase = Phase::Idle;
        self.work_sessions = 0;
        self.checkmarks = 0;
        self.remaining_secs = self.settings.work_secs();
        info!("timer reset");
        Event::TimerReset { at: Utc::now() }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn begin_work(&mut self) {
        self.phase = Phase::Working;
        self.remaining_secs = self.settings.work_secs();
        self.work_sessions += 1;
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(TimerSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_n(engine: &mut TimerEngine, n: u64) -> Vec<Event> {
        (0..n).filter_map(|_| engine.tick()).collect()
    }

    #[test]
    fn starts_idle_showing_work_length() {
        let engine = TimerEngine::default();
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.display_time(), "30:00");
        assert_eq!(engine.work_sessions(), 0);
        assert_eq!(engine.checkmark_text(), "");
    }

    #[test]
    fn start_enters_working() {
        let mut engine = TimerEngine::default();
        let event = engine.start().unwrap();
        assert!(matches!(
            event,
            Event::PhaseStarted {
                phase: Phase::Working,
                duration_secs: 1800,
                work_sessions: 1,
                ..
            }
        ));
        assert_eq!(engine.remaining_secs(), 1800);
    }

    #[test]
    fn second_start_is_ignored() {
        let mut engine = TimerEngine::default();
        engine.start();
        engine.tick();
        assert!(engine.start().is_none());
        assert_eq!(engine.work_sessions(), 1);
        assert_eq!(engine.remaining_secs(), 1799);
    }

    #[test]
    fn idle_ticks_do_nothing() {
        let mut engine = TimerEngine::default();
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), 1800);
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn tick_decrements_once() {
        let mut engine = TimerEngine::default();
        engine.start();
        assert!(engine.tick().is_none());
        assert_eq!(engine.display_time(), "29:59");
    }

    #[test]
    fn work_to_short_break_then_back() {
        let mut engine = TimerEngine::default();
        engine.start();

        let events = tick_n(&mut engine, 1800);
        assert_eq!(events.len(), 1);
        assert_eq!(engine.phase(), Phase::ShortBreak);
        assert_eq!(engine.remaining_secs(), 300);
        assert_eq!(engine.checkmark_text(), "✅");
        assert_eq!(engine.work_sessions(), 1);

        let events = tick_n(&mut engine, 300);
        assert_eq!(events.len(), 1);
        assert_eq!(engine.phase(), Phase::Working);
        assert_eq!(engine.remaining_secs(), 1800);
        assert_eq!(engine.work_sessions(), 2);
        assert_eq!(engine.checkmarks(), 1);
    }

    #[test]
    fn long_break_returns_to_work_with_settings_kept() {
        let settings = TimerSettings {
            work_minutes: 1,
            short_break_minutes: 1,
            long_break_minutes: 2,
            long_break_interval: 1,
        };
        let mut engine = TimerEngine::new(settings);
        engine.start();

        tick_n(&mut engine, 60);
        assert_eq!(engine.phase(), Phase::LongBreak);
        assert_eq!(engine.remaining_secs(), 120);

        let events = tick_n(&mut engine, 120);
        assert!(matches!(
            events.as_slice(),
            [Event::PhaseChanged {
                from: Phase::LongBreak,
                to: Phase::Working,
                duration_secs: 60,
                work_sessions: 2,
                checkmarks: 1,
                ..
            }]
        ));
        assert_eq!(engine.settings(), &settings);
    }

    #[test]
    fn zero_is_never_displayed() {
        let mut engine = TimerEngine::default();
        engine.start();
        for _ in 0..1800 {
            engine.tick();
            assert_ne!(engine.display_time(), "00:00");
        }
    }

    #[test]
    fn reset_clears_everything() {
        let mut engine = TimerEngine::default();
        engine.start();
        tick_n(&mut engine, 1800 + 17);
        assert_eq!(engine.phase(), Phase::ShortBreak);

        let event = engine.reset();
        assert!(matches!(event, Event::TimerReset { .. }));
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.work_sessions(), 0);
        assert_eq!(engine.checkmarks(), 0);
        assert_eq!(engine.display_time(), "30:00");
        assert!(engine.start().is_some());
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let engine = TimerEngine::default();
        match engine.snapshot() {
            Event::StateSnapshot {
                phase,
                remaining_secs,
                display,
                ..
            } => {
                assert_eq!(phase, Phase::Idle);
                assert_eq!(remaining_secs, 1800);
                assert_eq!(display, "30:00");
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }

    #[test]
    fn engine_roundtrips_through_json() {
        let mut engine = TimerEngine::default();
        engine.start();
        engine.tick();
        let json = serde_json::to_string(&engine).unwrap();
        let restored: TimerEngine = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.phase(), Phase::Working);
        assert_eq!(restored.remaining_secs(), 1799);
    }
}
