//! Appseed — scaffold entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Init logger at default level
//!   3. Load settings from the environment
//!   4. Re-init logger at configured level
//!   5. Print the demo output and exit

mod config;
mod demo;
mod error;
mod logger;

use tracing::{debug, info};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), error::AppError> {
    // Load .env if present; ignore errors (the file is optional). Variables
    // already set in the environment win over file entries.
    let _ = dotenvy::dotenv();

    // Bootstrap logger at "info" before settings are available.
    logger::init("info")?;

    let config = config::load()?;
    logger::init(config.log_level.as_directive())?;

    info!(
        api_host = %config.api_host,
        api_port = config.api_port,
        cwd = %config.cwd.display(),
        log_level = %config.log_level,
        "settings loaded"
    );
    debug!(
        data_dir = %config.data_dir.display(),
        logs_dir = %config.logs_dir.display(),
        "directories provisioned"
    );

    println!("Hello World!");
    println!("{}", demo::greet(&config, "Developer"));
    println!("5 + 3 = {}", demo::add_numbers(5, 3));
    println!("5! = {}", demo::factorial(5));

    if config.debug {
        println!("data_dir = {}", config.data_dir.display());
        println!("logs_dir = {}", config.logs_dir.display());
    }

    Ok(())
}
