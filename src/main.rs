use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use branchpick::commands::{self, Options};
use branchpick::output;
use branchpick::BranchError;
use branchpick::workflow::Mode;

const LOG_ENV: &str = "BRANCHPICK_LOG";

#[derive(Parser)]
#[command(name = "branchpick")]
#[command(about = "Interactively checkout or delete local git branches", long_about = None)]
#[command(version)]
struct Cli {
    /// Select branches which you want to delete
    #[arg(short, long)]
    delete: bool,

    /// Delete branches even if they are not fully merged
    #[arg(short, long, requires = "delete")]
    force: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Path to a config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log git invocations and workflow steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let options = Options {
        mode: if cli.delete { Mode::Delete } else { Mode::Checkout },
        force: cli.force,
        no_color: cli.no_color,
        config: cli.config,
    };

    match commands::execute(options) {
        Ok(()) => ExitCode::SUCCESS,
        // already reported as info
        Err(e @ BranchError::EmptySelection) => ExitCode::from(&e),
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::from(&e)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("branchpick=debug")
        } else {
            EnvFilter::new("branchpick=error")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}
