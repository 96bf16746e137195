//! Lookup error type.

use thiserror::Error;

use super::class::SignalClass;
use super::signal::RegisterAddress;

/// Lookup miss against the board map.
///
/// Always a caller error: the requested signal does not exist on the
/// board. There is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownSignalError {
    /// No signal with this name in the class.
    #[error("unknown {class} signal name {name:?}")]
    Name { class: SignalClass, name: String },

    /// No signal at this register address in the class.
    #[error("unknown {class} signal address {address:#04x}")]
    Address {
        class: SignalClass,
        address: RegisterAddress,
    },

    /// No signal with this name in any class.
    #[error("unknown signal name {name:?}")]
    Unqualified { name: String },
}

impl UnknownSignalError {
    /// Class the lookup was scoped to, if any.
    pub fn class(&self) -> Option<SignalClass> {
        match self {
            Self::Name { class, .. } | Self::Address { class, .. } => Some(*class),
            Self::Unqualified { .. } => None,
        }
    }
}
