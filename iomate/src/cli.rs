//! Command-line arguments and signal selection.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use iomate_common::config::OutputFormat;
use iomate_common::io::{
    RegisterAddress, SignalClass, SignalDefinition, UnknownSignalError, all_signals, list_signals,
    lookup_signal, lookup_signal_by_address, resolve,
};

/// IOMATE - user I/O board signal map
#[derive(Parser, Debug)]
#[command(name = "iomate")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Look up user I/O board signal names and register addresses")]
#[command(long_about = None)]
pub struct Args {
    /// Path to configuration file. Defaults to ./iomate.toml when present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (text, json, toml). Overrides the config file.
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all signals, or those of one class
    List {
        /// Signal class (di, do, ai, ao)
        class: Option<SignalClass>,
    },
    /// Print the register address of a named signal
    Address {
        class: SignalClass,
        name: String,
    },
    /// Print the signal at a register address (decimal or 0x-prefixed hex)
    Name {
        class: SignalClass,
        #[arg(value_parser = parse_address)]
        address: RegisterAddress,
    },
    /// Find a signal by name in any class
    Resolve {
        name: String,
    },
}

/// Parse `36`, `0x24` or `0X24`.
pub fn parse_address(s: &str) -> Result<RegisterAddress, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => RegisterAddress::from_str_radix(hex, 16),
        None => s.parse::<RegisterAddress>(),
    };
    parsed.map_err(|e| format!("invalid register address {s:?}: {e}"))
}

/// Signals addressed by `command`, in table order.
pub fn select(command: &Command) -> Result<Vec<&'static SignalDefinition>, UnknownSignalError> {
    match command {
        Command::List { class: Some(class) } => Ok(list_signals(*class).iter().collect()),
        Command::List { class: None } => Ok(all_signals().collect()),
        Command::Address { class, name } => lookup_signal(*class, name).map(|d| vec![d]),
        Command::Name { class, address } => {
            lookup_signal_by_address(*class, *address).map(|d| vec![d])
        }
        Command::Resolve { name } => resolve(name).map(|d| vec![d]),
    }
}
