//! Display seam.
//!
//! The engine never touches a widget. After every change the controller
//! builds a [`DisplayState`] and hands it to a [`DisplaySink`].

use serde::Serialize;

use crate::timer::{PhaseStyle, TimerEngine};

/// What a front end shows: countdown, phase label and colour, checkmarks,
/// and whether the start control is live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub time: String,
    pub style: PhaseStyle,
    pub checkmarks: String,
    pub start_enabled: bool,
}

impl DisplayState {
    pub fn project(engine: &TimerEngine, start_enabled: bool) -> Self {
        Self {
            time: engine.display_time(),
            style: engine.phase().style(),
            checkmarks: engine.checkmark_text(),
            start_enabled,
        }
    }
}

/// Receives display updates.
pub trait DisplaySink {
    fn show_time(&mut self, text: &str);

    fn show_phase(&mut self, style: PhaseStyle);

    fn show_checkmarks(&mut self, text: &str);

    fn set_start_enabled(&mut self, enabled: bool);

    /// Push a whole projection. Sinks that redraw in one go override this.
    fn render(&mut self, state: &DisplayState) {
        self.show_phase(state.style);
        self.show_time(&state.time);
        self.show_checkmarks(&state.checkmarks);
        self.set_start_enabled(state.start_enabled);
    }
}
