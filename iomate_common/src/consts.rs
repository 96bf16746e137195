//! Board-wide constants.
//!
//! Single source of truth for channel counts and bank base addresses.

/// Number of user digital inputs.
pub const DI_COUNT: usize = 16;

/// Number of user digital outputs.
pub const DO_COUNT: usize = 16;

/// Number of user analog inputs.
pub const AI_COUNT: usize = 4;

/// Number of user analog outputs.
pub const AO_COUNT: usize = 4;

/// Register address of `U_DI_00`.
pub const DI_BASE_ADDR: u16 = 0x24;

/// Register address of `U_DO_00`.
pub const DO_BASE_ADDR: u16 = 0x20;

/// Register address of `VI0`.
pub const AI_BASE_ADDR: u16 = 0x00;

/// Register address of `VO0`.
pub const AO_BASE_ADDR: u16 = 0x00;

/// Default CLI configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "iomate.toml";

/// Default service name used in log output.
pub const DEFAULT_SERVICE_NAME: &str = "iomate";
