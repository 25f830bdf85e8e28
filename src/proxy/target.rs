/// Target execution trait for dependency injection
///
/// The proxy relays calls to its target without depending on a concrete
/// registry implementation. The host environment implements this trait
/// and injects the executor into forwarding operations; tests provide
/// in-memory mocks.
///
/// Failures are opaque: the proxy relays the executor's error string
/// verbatim and never reinterprets it.
use anyhow::Result;

use crate::address::Address;
use crate::selector::Selector;

/// A call relayed to the target, exactly as the caller issued it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardedCall<'a> {
    /// Original caller of the proxy
    pub caller: Address,
    /// Operation selector extracted from the payload
    pub selector: Selector,
    /// Raw payload, selector included
    pub payload: &'a [u8],
    /// Value attached to the call
    pub value: u64,
}

/// Target executor trait
///
/// `execute` must deliver the attached value atomically with the call:
/// when it returns an error, the call had no effect and no value was
/// retained anywhere but with the original caller.
pub trait TargetExecutor {
    /// Check whether an address denotes an independently-executable entity
    fn is_executable(&self, address: &Address) -> bool;

    /// Execute a forwarded call against the target, returning its raw
    /// return data on success
    fn execute(&mut self, target: &Address, call: ForwardedCall<'_>) -> Result<Vec<u8>>;

    /// Relay a bare value transfer to the target
    fn transfer_value(&mut self, target: &Address, from: &Address, amount: u64) -> Result<()>;
}
