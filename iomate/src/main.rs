//! # iomate Binary
//!
//! Prints the user I/O board signal map and resolves names and register
//! addresses.
//!
//! # Usage
//!
//! ```bash
//! # Whole board
//! iomate list
//!
//! # One class as JSON
//! iomate --format json list di
//!
//! # Lookups
//! iomate address di U_DI_00
//! iomate name do 0x24
//! iomate resolve VO3
//! ```

#![deny(warnings)]

use clap::Parser;
use iomate::cli::{Args, select};
use iomate::render::render;
use iomate_common::config::{CliConfig, LogLevel};
use std::path::PathBuf;
use tracing::{Level, debug, error, info_span};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = run() {
        error!("iomate failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match CliConfig::discover(args.config.as_deref(), &cwd) {
        Ok(config) => config,
        Err(e) => {
            setup_tracing(&args, LogLevel::default());
            return Err(e.into());
        }
    };
    setup_tracing(&args, config.shared.log_level);

    let span = info_span!("iomate", service = %config.shared.service_name);
    let _guard = span.enter();

    let format = args.format.unwrap_or(config.output.format);
    debug!(command = ?args.command, %format, "executing");

    let signals = select(&args.command)?;
    print!("{}", render(&signals, format)?);
    Ok(())
}

/// Setup tracing subscriber on stderr; stdout carries the listing.
fn setup_tracing(args: &Args, configured: LogLevel) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::from(configured)
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
