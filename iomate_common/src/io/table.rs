//! Signal table lookups.
//!
//! Linear scans over the fixed class tables. The largest class has 16
//! entries, so every lookup is bounded and allocation-free on the hit path.

use core::ops::RangeInclusive;

use tracing::debug;

use super::board::{USER_AI, USER_AO, USER_DI, USER_DO};
use super::class::SignalClass;
use super::error::UnknownSignalError;
use super::signal::{RegisterAddress, SignalDefinition};

/// All definitions of `class`, in physical channel order.
pub fn list_signals(class: SignalClass) -> &'static [SignalDefinition] {
    match class {
        SignalClass::Di => &USER_DI,
        SignalClass::Do => &USER_DO,
        SignalClass::Ai => &USER_AI,
        SignalClass::Ao => &USER_AO,
    }
}

/// Every definition on the board, class by class in [`SignalClass::ALL`] order.
pub fn all_signals() -> impl Iterator<Item = &'static SignalDefinition> {
    SignalClass::ALL
        .into_iter()
        .flat_map(|class| list_signals(class).iter())
}

/// Look up the full definition of `name` within `class`.
pub fn lookup_signal(
    class: SignalClass,
    name: &str,
) -> Result<&'static SignalDefinition, UnknownSignalError> {
    list_signals(class)
        .iter()
        .find(|def| def.name == name)
        .ok_or_else(|| {
            debug!(%class, name, "signal name not found");
            UnknownSignalError::Name {
                class,
                name: name.to_string(),
            }
        })
}

/// Look up the definition at `address` within `class`.
pub fn lookup_signal_by_address(
    class: SignalClass,
    address: RegisterAddress,
) -> Result<&'static SignalDefinition, UnknownSignalError> {
    list_signals(class)
        .iter()
        .find(|def| def.address == address)
        .ok_or_else(|| {
            debug!(%class, address, "signal address not found");
            UnknownSignalError::Address { class, address }
        })
}

/// Register address of `name` within `class`.
pub fn lookup_address(
    class: SignalClass,
    name: &str,
) -> Result<RegisterAddress, UnknownSignalError> {
    lookup_signal(class, name).map(|def| def.address)
}

/// Name of the signal at `address` within `class`.
pub fn lookup_name(
    class: SignalClass,
    address: RegisterAddress,
) -> Result<&'static str, UnknownSignalError> {
    lookup_signal_by_address(class, address).map(|def| def.name)
}

/// Find a signal by name without knowing its class.
///
/// Names are unique across the whole board (checked at build time in
/// [`super::board`]), so the result is unambiguous.
pub fn resolve(name: &str) -> Result<&'static SignalDefinition, UnknownSignalError> {
    all_signals().find(|def| def.name == name).ok_or_else(|| {
        debug!(name, "signal name not found in any class");
        UnknownSignalError::Unqualified {
            name: name.to_string(),
        }
    })
}

/// Lowest to highest register address used by `class`.
pub fn address_range(class: SignalClass) -> RangeInclusive<RegisterAddress> {
    let table = list_signals(class);
    let (lo, hi) = table.iter().fold(
        (RegisterAddress::MAX, RegisterAddress::MIN),
        |(lo, hi), def| (lo.min(def.address), hi.max(def.address)),
    );
    lo..=hi
}
