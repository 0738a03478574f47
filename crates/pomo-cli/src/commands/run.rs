use std::io::Stdout;

use clap::Args;
use pomo_core::{Controller, Event, IntervalTicker, TimerSettings, APP_NAME};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use super::TimingArgs;
use crate::terminal::TerminalDisplay;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Start the first work session immediately
    #[arg(long)]
    pub start: bool,

    /// Disable coloured phase labels
    #[arg(long)]
    pub no_color: bool,

    #[command(flatten)]
    pub timing: TimingArgs,
}

/// Keyboard controls, one per line on stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Start,
    Reset,
    Quit,
}

impl ControlCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "s" | "start" => Some(ControlCommand::Start),
            "r" | "reset" => Some(ControlCommand::Reset),
            "q" | "quit" | "exit" => Some(ControlCommand::Quit),
            _ => None,
        }
    }
}

type TerminalController = Controller<TerminalDisplay<Stdout>, IntervalTicker>;

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = args.timing.resolve()?;
    let color = TerminalDisplay::<Stdout>::color_wanted(args.no_color);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(event_loop(settings, color, args.start))
}

async fn event_loop(
    settings: TimerSettings,
    color: bool,
    auto_start: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let display = TerminalDisplay::new(std::io::stdout(), color);
    let mut controller: TerminalController =
        Controller::new(settings, display, IntervalTicker::every_second());
    info!(
        settings = ?controller.engine().settings(),
        period = ?controller.ticker().period(),
        "{APP_NAME} running"
    );

    if auto_start {
        log_event(controller.start());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = controller.ticker_mut().tick() => {
                log_event(controller.on_tick());
            }
            line = lines.next_line() => {
                let Some(input) = line? else {
                    debug!("stdin closed");
                    break;
                };
                if input.trim().is_empty() {
                    continue;
                }
                match ControlCommand::parse(&input) {
                    Some(ControlCommand::Start) => {
                        if controller.start_enabled() {
                            log_event(controller.start());
                        } else {
                            controller.sink_mut().notice("already running; reset first");
                        }
                    }
                    Some(ControlCommand::Reset) => log_event(Some(controller.reset())),
                    Some(ControlCommand::Quit) => break,
                    None => controller
                        .sink_mut()
                        .notice(&format!("unknown command: {}", input.trim())),
                }
            }
            _ = &mut ctrl_c => {
                debug!("interrupted");
                break;
            }
        }
    }

    controller.sink_mut().finish();
    Ok(())
}

fn log_event(event: Option<Event>) {
    if let Some(event) = event {
        debug!(?event, "timer event");
    }
}
