//! User I/O signal map — DI/DO/AI/AO channel names and register addresses.
//!
//! The map is compile-time `static` data. Lookups are class-qualified
//! because register banks of different classes reuse the same offsets.

pub mod board;
pub mod class;
pub mod error;
pub mod signal;
pub mod table;

pub use class::{SignalClass, SignalDirection, SignalKind};
pub use error::UnknownSignalError;
pub use signal::{RegisterAddress, SignalDefinition};
pub use table::{
    address_range, all_signals, list_signals, lookup_address, lookup_name, lookup_signal,
    lookup_signal_by_address, resolve,
};
