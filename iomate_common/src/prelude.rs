//! Prelude module for common re-exports.
//!
//! ```rust
//! use iomate_common::prelude::*;
//!
//! let vi0 = lookup_signal(SignalClass::Ai, "VI0").unwrap();
//! assert_eq!(vi0, &user_ai::VI0);
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{CliConfig, ConfigError, ConfigLoader, LogLevel, OutputFormat, SharedConfig};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::{AI_COUNT, AO_COUNT, DI_COUNT, DO_COUNT};

// ─── Signal map ─────────────────────────────────────────────────────
pub use crate::io::board::{user_ai, user_ao, user_di, user_do};
pub use crate::io::{
    RegisterAddress, SignalClass, SignalDefinition, UnknownSignalError, list_signals,
    lookup_address, lookup_name, lookup_signal, resolve,
};
