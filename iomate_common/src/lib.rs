//! IOMATE Common Library
//!
//! Symbolic names and register addresses of the robot controller's user
//! I/O interface board, plus the configuration types shared by tools built
//! on top of the map.
//!
//! # Module Structure
//!
//! - [`io`] - DI/DO/AI/AO signal map and lookups
//! - [`consts`] - Channel counts and bank base addresses
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use iomate_common::io::{SignalClass, lookup_address, lookup_name};
//!
//! assert_eq!(lookup_address(SignalClass::Di, "U_DI_00").unwrap(), 0x24);
//! assert_eq!(lookup_name(SignalClass::Do, 0x24).unwrap(), "U_DO_04");
//! ```

pub mod config;
pub mod consts;
pub mod io;
pub mod prelude;
