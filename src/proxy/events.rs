// Proxy Events
// Observable notifications emitted by administrative state changes.
// Queued on the proxy and drained by the host after each call.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::selector::Selector;
use crate::time::TimestampSeconds;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProxyEvent {
    /// An operation was locked
    MethodDisabled {
        caller: Address,
        selector: Selector,
        signature: String,
        expires_at: TimestampSeconds,
    },
    /// An operation was explicitly unlocked
    MethodAllowed {
        caller: Address,
        selector: Selector,
        signature: String,
    },
    /// The forwarding target was replaced
    TargetChanged {
        caller: Address,
        old_target: Address,
        new_target: Address,
    },
    /// Ownership was reassigned
    OwnershipTransferred {
        previous_owner: Address,
        new_owner: Address,
    },
}
