pub mod config;
pub mod run;
pub mod simulate;

use clap::Args;
use pomo_core::{Config, TimerSettings};

/// One-off overrides of the configured timing values.
#[derive(Args, Debug, Default)]
pub struct TimingArgs {
    /// Work phase length in minutes
    #[arg(long)]
    pub work: Option<u32>,
    /// Short break length in minutes
    #[arg(long)]
    pub short_break: Option<u32>,
    /// Long break length in minutes
    #[arg(long)]
    pub long_break: Option<u32>,
    /// Work sessions per long break
    #[arg(long)]
    pub interval: Option<u32>,
}

impl TimingArgs {
    /// Configured settings with any flags applied on top.
    pub fn resolve(&self) -> Result<TimerSettings, Box<dyn std::error::Error>> {
        let mut settings = Config::load()?.timer;
        if let Some(v) = self.work {
            settings.work_minutes = v;
        }
        if let Some(v) = self.short_break {
            settings.short_break_minutes = v;
        }
        if let Some(v) = self.long_break {
            settings.long_break_minutes = v;
        }
        if let Some(v) = self.interval {
            settings.long_break_interval = v;
        }
        settings.validate()?;
        Ok(settings)
    }
}
