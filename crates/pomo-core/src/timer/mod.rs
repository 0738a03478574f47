mod clock;
mod engine;
mod phase;
mod settings;

pub use clock::format_mm_ss;
pub use engine::{TimerEngine, CHECKMARK};
pub use phase::{BreakKind, ColorToken, Phase, PhaseStyle};
pub use settings::{
    TimerSettings, LONG_BREAK_INTERVAL, LONG_BREAK_MINUTES, SHORT_BREAK_MINUTES, WORK_MINUTES,
};
