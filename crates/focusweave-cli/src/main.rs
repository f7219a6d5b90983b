use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "focusweave", version, about = "Focusweave focus-time scheduler CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preferences management
    Prefs {
        #[command(subcommand)]
        action: commands::prefs::PrefsAction,
    },
    /// Compute free slots from busy intervals
    Slots(commands::slots::SlotsArgs),
    /// Plan focus-time placements for a set of tasks
    Plan(commands::plan::PlanArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Prefs { action } => commands::prefs::run(action),
        Commands::Slots(args) => commands::slots::run(args),
        Commands::Plan(args) => commands::plan::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
