//! Signal definition record.

use core::fmt;
use serde::Serialize;

use super::class::SignalClass;

/// Register offset on the interface board, scoped by [`SignalClass`].
pub type RegisterAddress = u16;

/// One physical I/O channel: symbolic name plus register address.
///
/// Definitions are `'static` table entries and are never built at runtime
/// outside of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SignalDefinition {
    /// Class the channel belongs to.
    pub class: SignalClass,
    /// Human-readable identifier, unique within its class.
    pub name: &'static str,
    /// Register offset, unique within its class.
    pub address: RegisterAddress,
}

impl SignalDefinition {
    pub(crate) const fn new(
        class: SignalClass,
        name: &'static str,
        address: RegisterAddress,
    ) -> Self {
        Self {
            class,
            name,
            address,
        }
    }
}

impl fmt::Display for SignalDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @ {:#04x}", self.class, self.name, self.address)
    }
}
