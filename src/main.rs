use clap::Parser;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod types;
mod registry;
mod output;
mod input;
mod shell;
mod browser;

use registry::Registry;
use shell::Shell;

/// Menagerie - keep a small list of animals and watch them speak, move and fly
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the starting animals as JSON and exit
    #[arg(short = 'j', long, conflicts_with = "interactive")]
    json: bool,

    /// Browse the starting animals in a full-screen view
    #[arg(short = 'i', long, conflicts_with = "json")]
    interactive: bool,

    /// Start with an empty list instead of the sample animals
    #[arg(long)]
    no_seed: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the menu
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let registry = if cli.no_seed {
        Registry::new()
    } else {
        Registry::seeded()
    };

    if cli.json {
        output::output_json(&mut std::io::stdout(), &registry)?;
    } else if cli.interactive {
        browser::run_browser(registry)?;
    } else {
        let stdin = std::io::stdin();
        let mut shell = Shell::new(registry, stdin.lock(), std::io::stdout());
        shell.run()?;
    }

    Ok(())
}
