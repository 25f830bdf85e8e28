use crate::address::Address;
use crate::time::{get_current_time_in_seconds, TimestampSeconds};

/// Runtime context passed to every proxy operation.
///
/// Operations never read the clock themselves; the host hands them the
/// current time along with the caller identity. This keeps lock-expiry
/// checks deterministic and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeContext {
    /// Current caller (the identity invoking the proxy)
    pub caller: Address,
    /// Current time in seconds
    pub timestamp: TimestampSeconds,
}

impl RuntimeContext {
    /// Create a new runtime context
    pub fn new(caller: Address, timestamp: TimestampSeconds) -> Self {
        Self { caller, timestamp }
    }

    /// Create a context stamped with the system clock
    pub fn now(caller: Address) -> Self {
        Self::new(caller, get_current_time_in_seconds())
    }
}
