use clap::Args;
use pomo_core::{
    format_mm_ss, Controller, DisplaySink, DisplayState, Event, ManualTicker, PhaseStyle,
    TimerSettings,
};

use super::TimingArgs;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Number of phase changes to run through
    #[arg(long, default_value = "8")]
    pub phases: u32,

    /// Print events as JSON, one per line
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub timing: TimingArgs,
}

/// Keeps the latest frame instead of drawing it.
#[derive(Default)]
struct LastFrame(Option<DisplayState>);

impl DisplaySink for LastFrame {
    fn show_time(&mut self, _text: &str) {}
    fn show_phase(&mut self, _style: PhaseStyle) {}
    fn show_checkmarks(&mut self, _text: &str) {}
    fn set_start_enabled(&mut self, _enabled: bool) {}

    fn render(&mut self, state: &DisplayState) {
        self.0 = Some(state.clone());
    }
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = args.timing.resolve()?;
    for line in simulate(settings, args.phases, args.json)? {
        println!("{line}");
    }
    Ok(())
}

/// Drive the controller tick by tick through `phases` transitions.
fn simulate(
    settings: TimerSettings,
    phases: u32,
    json: bool,
) -> Result<Vec<String>, serde_json::Error> {
    let mut controller = Controller::new(settings, LastFrame::default(), ManualTicker::new());
    let mut lines = Vec::new();
    let mut elapsed_secs: u64 = 0;

    if let Some(event) = controller.start() {
        lines.push(describe(&event, &controller, elapsed_secs, json)?);
    }

    for _ in 0..phases {
        let event = loop {
            elapsed_secs += 1;
            if let Some(event) = controller.on_tick() {
                break event;
            }
        };
        lines.push(describe(&event, &controller, elapsed_secs, json)?);
    }

    if json {
        lines.push(serde_json::to_string(&controller.engine().snapshot())?);
    }
    Ok(lines)
}

fn describe(
    event: &Event,
    controller: &Controller<LastFrame, ManualTicker>,
    elapsed_secs: u64,
    json: bool,
) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string(event);
    }
    let frame = controller
        .sink()
        .0
        .clone()
        .unwrap_or_else(|| controller.state());
    let session = controller.engine().work_sessions();
    let mut line = format!(
        "[+{}] #{session} {} {}",
        format_mm_ss(elapsed_secs),
        frame.style.label,
        frame.time
    );
    if !frame.checkmarks.is_empty() {
        line.push(' ');
        line.push_str(&frame.checkmarks);
    }
    Ok(line)
}
