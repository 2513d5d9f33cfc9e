//! tiered-fm - Entry Point
//!
//! Interactive file manager whose menu depends on the permission mode.

use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

use tiered_fm::cli::Args;
use tiered_fm::error::AppError;
use tiered_fm::error::handlers::STARTUP_FAILURE_EXIT_CODE;
use tiered_fm::session::run_stdio;
use tiered_fm::storage::validate_start_directory;
use tiered_fm::{ManagerConfig, Session};

fn main() -> ExitCode {
    // Diagnostics go to stderr; RUST_LOG overrides the default filter.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            match &e {
                AppError::InvalidStartDirectory(_) => println!("{e}"),
                _ => eprintln!("{e}"),
            }
            ExitCode::from(STARTUP_FAILURE_EXIT_CODE)
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = ManagerConfig::load(args.config.as_deref(), &args.overrides())?;
    info!("Resolved configuration: {:?}", config);

    if !validate_start_directory(&config.start_directory, &config.root_directory) {
        return Err(AppError::InvalidStartDirectory(config.start_directory));
    }

    let mut session = Session::new(&config)?;
    run_stdio(&mut session)?;
    Ok(())
}
