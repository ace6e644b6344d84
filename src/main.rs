use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cmdpat::adapter;
use cmdpat::cli::{Cli, Commands, DispatchArgs, request_lines};
use cmdpat::config::{ConfigLoader, DefaultConfigLoader, load_file};

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    let result = match cli.command {
        Commands::Inspect(args) => adapter::run_inspect(&args.usage, &mut stdout),
        Commands::Match(args) => adapter::run_match(&args.usage, &args.line, &mut stdout),
        Commands::Dispatch(args) => run_dispatch(&args, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("cmdpat: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run_dispatch(args: &DispatchArgs, out: &mut impl std::io::Write) -> Result<u8, anyhow::Error> {
    let config = match &args.config {
        Some(path) => load_file(path)?,
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            DefaultConfigLoader::new().load(&cwd)?
        }
    };
    let commands = config.command_set()?;
    let lines = request_lines(args, std::io::stdin())?;
    adapter::run_dispatch(&commands, &lines, out)
}

/// Log to stderr, filtered by `CMDPAT_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("CMDPAT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
