use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Before the first start, or after a reset. Nothing counts down.
    Idle,
    Working,
    ShortBreak,
    LongBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakKind {
    Short,
    Long,
}

/// Colour tokens the display can be asked to paint a phase label with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    DefaultGray,
    Red,
    Green,
    Blue,
}

/// Label and colour shown for a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseStyle {
    pub label: &'static str,
    pub color: ColorToken,
}

impl Phase {
    pub fn is_active(self) -> bool {
        self != Phase::Idle
    }

    pub fn is_break(self) -> bool {
        matches!(self, Phase::ShortBreak | Phase::LongBreak)
    }

    pub fn style(self) -> PhaseStyle {
        match self {
            Phase::Idle => PhaseStyle {
                label: "Let's get working",
                color: ColorToken::DefaultGray,
            },
            Phase::Working => PhaseStyle {
                label: "Work",
                color: ColorToken::Red,
            },
            Phase::ShortBreak => PhaseStyle {
                label: "Short Break",
                color: ColorToken::Blue,
            },
            Phase::LongBreak => PhaseStyle {
                label: "Long Break",
                color: ColorToken::Green,
            },
        }
    }
}

impl BreakKind {
    /// Pick the break that follows work session number `work_sessions`.
    ///
    /// A session count divisible by `long_break_interval` earns a long break;
    /// every other remainder gets a short one. An interval of zero never
    /// yields a long break.
    pub fn for_session(work_sessions: u32, long_break_interval: u32) -> Self {
        match work_sessions.checked_rem(long_break_interval) {
            Some(0) => BreakKind::Long,
            _ => BreakKind::Short,
        }
    }

    pub fn phase(self) -> Phase {
        match self {
            BreakKind::Short => Phase::ShortBreak,
            BreakKind::Long => Phase::LongBreak,
        }
    }
}

impl ColorToken {
    /// CSS-style hex code for the token.
    pub fn hex(self) -> &'static str {
        match self {
            ColorToken::DefaultGray => "#f0f0f0",
            ColorToken::Red => "#ff0000",
            ColorToken::Green => "#80c342",
            ColorToken::Blue => "#53baff",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorToken::DefaultGray => (0xf0, 0xf0, 0xf0),
            ColorToken::Red => (0xff, 0x00, 0x00),
            ColorToken::Green => (0x80, 0xc3, 0x42),
            ColorToken::Blue => (0x53, 0xba, 0xff),
        }
    }
}
