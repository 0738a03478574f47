//! Single-line terminal rendering of the timer.

use std::io::Write;

use pomo_core::{ColorToken, DisplaySink, DisplayState, Phase, PhaseStyle};
use tracing::warn;

const CLEAR_LINE: &str = "\r\x1b[2K";
const RESET_STYLE: &str = "\x1b[0m";

/// Draws `Label  MM:SS  ✅✅  (s)tart (r)eset (q)uit` in place.
pub struct TerminalDisplay<W: Write> {
    out: W,
    color: bool,
    time: String,
    style: PhaseStyle,
    checkmarks: String,
    start_enabled: bool,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            time: String::new(),
            style: Phase::Idle.style(),
            checkmarks: String::new(),
            start_enabled: true,
        }
    }

    /// Colour is on unless disabled by flag or by NO_COLOR.
    pub fn color_wanted(no_color_flag: bool) -> bool {
        !no_color_flag && std::env::var_os("NO_COLOR").is_none()
    }

    pub fn line(&self) -> String {
        let label = if self.color {
            paint(self.style.label, self.style.color)
        } else {
            self.style.label.to_string()
        };
        let controls = if self.start_enabled {
            "(s)tart (r)eset (q)uit"
        } else {
            "(r)eset (q)uit"
        };
        let mut line = format!("{label}  {}", self.time);
        if !self.checkmarks.is_empty() {
            line.push_str("  ");
            line.push_str(&self.checkmarks);
        }
        line.push_str("  ");
        line.push_str(controls);
        line
    }

    /// Print a message on its own line, then redraw the timer below it.
    pub fn notice(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{CLEAR_LINE}{message}") {
            warn!(error = %e, "terminal write failed");
        }
        self.draw();
    }

    /// Leave the cursor on a fresh line.
    pub fn finish(&mut self) {
        if let Err(e) = writeln!(self.out).and_then(|_| self.out.flush()) {
            warn!(error = %e, "terminal write failed");
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self) {
        let line = self.line();
        let result = write!(self.out, "{CLEAR_LINE}{line}").and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, "terminal write failed");
        }
    }
}

fn paint(text: &str, color: ColorToken) -> String {
    let (r, g, b) = color.rgb();
    format!("\x1b[38;2;{r};{g};{b}m{text}{RESET_STYLE}")
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn show_time(&mut self, text: &str) {
        self.time = text.to_string();
        self.draw();
    }

    fn show_phase(&mut self, style: PhaseStyle) {
        self.style = style;
        self.draw();
    }

    fn show_checkmarks(&mut self, text: &str) {
        self.checkmarks = text.to_string();
        self.draw();
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        self.start_enabled = enabled;
        self.draw();
    }

    fn render(&mut self, state: &DisplayState) {
        self.time = state.time.clone();
        self.style = state.style;
        self.checkmarks = state.checkmarks.clone();
        self.start_enabled = state.start_enabled;
        self.draw();
    }
}
