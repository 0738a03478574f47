//! # Pomo! Core Library
//!
//! This library provides the core logic for the Pomo! work/break timer.
//! Front ends (the `pomo` terminal binary, or any other UI) are thin layers
//! that feed ticks and button presses in and render what comes out.
//!
//! ## Architecture
//!
//! - **Timer Engine**: A tick-driven state machine cycling
//!   Working -> (Short | Long) Break -> Working. The caller invokes `tick()`
//!   once per elapsed second.
//! - **Ticker**: The one-second clock abstraction (arm/disarm) that drives it.
//! - **Display**: The sink trait UIs implement, plus a plain projection of the
//!   engine state.
//! - **Controller**: Owns engine, sink and ticker and wires them together.
//! - **Storage**: TOML-based configuration of the four timing values.
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`Controller`]: Start/reset/tick dispatch
//! - [`Ticker`]: Tick source seam
//! - [`DisplaySink`]: Display seam
//! - [`Config`]: Application configuration management

pub mod controller;
pub mod display;
pub mod error;
pub mod events;
pub mod storage;
pub mod ticker;
pub mod timer;

pub use controller::Controller;
pub use display::{DisplaySink, DisplayState};
pub use error::{ConfigError, CoreError};
pub use events::Event;
pub use storage::Config;
pub use ticker::{IntervalTicker, ManualTicker, Ticker};
pub use timer::{
    format_mm_ss, BreakKind, ColorToken, Phase, PhaseStyle, TimerEngine, TimerSettings,
    CHECKMARK,
};

/// Application display name.
pub const APP_NAME: &str = "Pomo!";
