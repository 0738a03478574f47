use clap::{CommandFactory, Parser, Subcommand};
use pomo_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "pomo", version, about = "Pomo! work/break timer")]
struct Cli {
    /// Log at debug level (POMO_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive timer in this terminal
    Run(commands::run::RunArgs),
    /// Fast-forward through the cycle and print every phase change
    Simulate(commands::simulate::SimulateArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "debug".to_string()
    } else {
        Config::load()
            .map(|c| c.log_level)
            .unwrap_or_else(|_| "warn".to_string())
    };
    let filter = EnvFilter::try_from_env("POMO_LOG")
        .or_else(|_| EnvFilter::try_new(format!("pomo_core={default_level},pomo={default_level}")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "pomo", &mut std::io::stdout());
            Ok(())
        }
        Commands::Run(args) => {
            init_tracing(cli.verbose);
            commands::run::run(args)
        }
        Commands::Simulate(args) => {
            init_tracing(cli.verbose);
            commands::simulate::run(args)
        }
        Commands::Config { action } => {
            init_tracing(cli.verbose);
            commands::config::run(action)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
