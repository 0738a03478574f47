//! Tick sources.
//!
//! A [`Ticker`] is a clock that fires once per whole second while armed.
//! Arming an armed ticker restarts its period, which is how a phase change
//! hands over from the work countdown to the break countdown.

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub trait Ticker {
    /// Start firing, one full period from now.
    fn arm(&mut self);

    fn disarm(&mut self);

    fn is_armed(&self) -> bool;
}

/// Tokio-backed ticker for a `select!` loop.
#[derive(Debug)]
pub struct IntervalTicker {
    period: Duration,
    interval: Option<Interval>,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    pub fn every_second() -> Self {
        Self::new(TICK_PERIOD)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Wait for the next tick. Never resolves while disarmed.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::every_second()
    }
}

impl Ticker for IntervalTicker {
    /// Must be called from inside a tokio runtime.
    fn arm(&mut self) {
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    fn disarm(&mut self) {
        self.interval = None;
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }
}

/// Ticker with no clock behind it. Callers fire ticks themselves; it only
/// records arm/disarm so tests and `simulate` can check the wiring.
#[derive(Debug, Default, Clone)]
pub struct ManualTicker {
    armed: bool,
    arm_count: u32,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `arm` has been called.
    pub fn arm_count(&self) -> u32 {
        self.arm_count
    }
}

impl Ticker for ManualTicker {
    fn arm(&mut self) {
        self.armed = true;
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        self.armed = false;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}
