//! Well-known reference addresses and the drift advisory channel.
//!
//! Some on-chain records are expected to stay stable but are owned by third
//! parties and can legitimately change. Comparisons against these constants
//! should warn, not fail, when the record moved.

use crate::ens::to_checksum;
use crate::types::Address;

/// The Zerion DeFi SDK adapter registry, the address `api.zerion.eth` points at.
pub const ZERION_ADAPTER_ADDRESS: &str = "06FE76B2f432fdfEcAEf1a7d4f6C3d41B5861672";

/// Returns [`ZERION_ADAPTER_ADDRESS`] as a typed address.
pub fn zerion_adapter_address() -> Address {
    ZERION_ADAPTER_ADDRESS.parse().expect("Parsing Address")
}

/// Compares a freshly resolved address against a known reference value.
///
/// Emits a `log::warn!` advisory and returns `true` when they differ. Drift
/// means the upstream record got an update, not that resolution failed.
pub fn reference_drifted(label: &str, expected: Address, actual: Address) -> bool {
    if expected == actual {
        return false;
    }

    log::warn!(
        "{} got an update: expected {}, resolved {}",
        label,
        to_checksum(&expected),
        to_checksum(&actual),
    );
    true
}
