//! Proxy Constants
//!
//! Defines the conservative construction defaults and the fixed
//! acceptance token of the asset-receipt hook.

use lazy_static::lazy_static;

use crate::selector::Selector;
use crate::time::TimestampSeconds;

// ===== Lock Defaults =====

/// Default lock duration applied at construction (two years)
pub const DEFAULT_LOCK_DURATION: TimestampSeconds = 2 * 365 * 24 * 60 * 60;

/// Signatures locked at construction.
///
/// A freshly deployed proxy must start conservative: every operation
/// that can move an asset out of the proxy, delegate that ability, or
/// change who controls the target registry is pre-locked for
/// [`DEFAULT_LOCK_DURATION`]. The membership of this set is a deployment
/// decision; this list covers the approval, transfer and
/// ownership surface of a standard asset registry.
pub const DISABLED_BY_DEFAULT: [&str; 9] = [
    "approve(address,uint256)",
    "setApprovalForAll(address,bool)",
    "transferFrom(address,address,uint256)",
    "safeTransferFrom(address,address,uint256)",
    "safeTransferFrom(address,address,uint256,bytes)",
    "transfer(address,uint256)",
    "transferOwnership(address)",
    "renounceOwnership()",
    "setUpdateOperator(uint256,address)",
];

// ===== Administrative Surface =====

/// Notional signatures of the proxy's own administrative operations.
///
/// Calls carrying one of these selectors are handled by the proxy
/// itself and never reach the forwarding path.
pub const ADMINISTRATIVE_SIGNATURES: [&str; 5] = [
    "lockOperation(string,uint256)",
    "unlockOperation(string)",
    "setTarget(address)",
    "transferOwnership(address)",
    ASSET_RECEIVED_SIGNATURE,
];

lazy_static! {
    /// Selectors of [`ADMINISTRATIVE_SIGNATURES`]
    pub static ref ADMINISTRATIVE_SELECTORS: Vec<Selector> = ADMINISTRATIVE_SIGNATURES
        .iter()
        .map(|signature| Selector::from_signature(signature))
        .collect();
}

// ===== Asset Receipt =====

/// Signature of the asset-receipt hook
pub const ASSET_RECEIVED_SIGNATURE: &str = "onAssetReceived(address,address,uint256,bytes)";

lazy_static! {
    /// Fixed acceptance token returned by the asset-receipt hook
    pub static ref ASSET_RECEIVED_TOKEN: Selector =
        Selector::from_signature(ASSET_RECEIVED_SIGNATURE);
}
