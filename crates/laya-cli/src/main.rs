use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod clipboard;
mod commands;
mod state;

#[derive(Parser)]
#[command(name = "laya-cli", version, about = "Laya demo CLI")]
struct Cli {
    /// Session state file (defaults to laya-session.json in the temp dir)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Demo profile TOML, read when a new session starts
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Onboarding funnel control
    Flow {
        #[command(subcommand)]
        action: commands::flow::FlowAction,
    },
    /// Demo navigator (debug screen jumps)
    Nav {
        #[command(subcommand)]
        action: commands::nav::NavAction,
    },
    /// Home dashboard interactions
    Home {
        #[command(subcommand)]
        action: commands::home::HomeAction,
    },
    /// Plan tab: calendar, to-dos, notes
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Memories timeline
    Memory {
        #[command(subcommand)]
        action: commands::memory::MemoryAction,
    },
    /// Partner Perks coupon hub
    Gift {
        #[command(subcommand)]
        action: commands::gift::GiftAction,
    },
    /// Profile overlay
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = state::Ctx::new(cli.state, cli.config);
    let result = match cli.command {
        Commands::Flow { action } => commands::flow::run(action, &ctx),
        Commands::Nav { action } => commands::nav::run(action, &ctx),
        Commands::Home { action } => commands::home::run(action, &ctx),
        Commands::Plan { action } => commands::plan::run(action, &ctx),
        Commands::Memory { action } => commands::memory::run(action, &ctx),
        Commands::Gift { action } => commands::gift::run(action, &ctx),
        Commands::Profile { action } => commands::profile::run(action, &ctx),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
