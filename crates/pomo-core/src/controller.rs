//! Wires the engine to a tick source and a display.
//!
//! The controller owns the [`TimerEngine`] exclusively. Front ends forward
//! button presses to [`Controller::start`] / [`Controller::reset`] and ticker
//! firings to [`Controller::on_tick`]; the sink only ever sees projections.

use crate::display::{DisplaySink, DisplayState};
use crate::events::Event;
use crate::ticker::Ticker;
use crate::timer::{TimerEngine, TimerSettings};

pub struct Controller<S, T> {
    engine: TimerEngine,
    sink: S,
    ticker: T,
    start_enabled: bool,
}

impl<S: DisplaySink, T: Ticker> Controller<S, T> {
    /// Build an idle controller and draw the initial display.
    pub fn new(settings: TimerSettings, sink: S, ticker: T) -> Self {
        let mut controller = Self {
            engine: TimerEngine::new(settings),
            sink,
            ticker,
            start_enabled: true,
        };
        controller.render();
        controller
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    pub fn start_enabled(&self) -> bool {
        self.start_enabled
    }

    pub fn state(&self) -> DisplayState {
        DisplayState::project(&self.engine, self.start_enabled)
    }

    /// Start button. Disabled until the next reset.
    pub fn start(&mut self) -> Option<Event> {
        if !self.start_enabled {
            return None;
        }
        let event = self.engine.start()?;
        self.ticker.arm();
        self.start_enabled = false;
        self.render();
        Some(event)
    }

    /// Reset button. Stops the clock and clears the tally.
    pub fn reset(&mut self) -> Event {
        self.ticker.disarm();
        let event = self.engine.reset();
        self.start_enabled = true;
        self.render();
        event
    }

    /// One second elapsed.
    pub fn on_tick(&mut self) -> Option<Event> {
        if !self.engine.is_running() {
            return None;
        }
        let event = self.engine.tick();
        if event.is_some() {
            // Next phase counts a full second from now.
            self.ticker.arm();
        }
        self.render();
        event
    }

    fn render(&mut self) {
        let state = self.state();
        self.sink.render(&state);
    }
}
