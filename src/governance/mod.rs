// Governance Module
// An outer wrapper that holds ownership of one or more proxies and caps
// how far into the future any lock may expire.
//
// A proxy operator can set arbitrarily long locks directly. Once a
// proxy's ownership is transferred to a wrapper, every lock-setting
// call routed through it must also satisfy the wrapper's absolute
// ceiling, shrinking the blast radius of a compromised operator.

use log::debug;

use crate::address::Address;
use crate::context::RuntimeContext;
use crate::error::{ProxyError, ProxyResult};
use crate::proxy::ProxyCore;
use crate::time::TimestampSeconds;

#[derive(Debug)]
pub struct GovernanceWrapper {
    /// The wrapper's own address, used as caller towards governed proxies
    address: Address,
    /// The single deploying identity allowed to operate the wrapper
    owner: Address,
    /// Absolute ceiling: no lock may be scheduled to expire after this
    max_lock_time: TimestampSeconds,
}

impl GovernanceWrapper {
    pub fn new(
        address: Address,
        owner: Address,
        max_lock_time: TimestampSeconds,
    ) -> ProxyResult<Self> {
        if owner.is_zero() {
            return Err(ProxyError::ZeroAddress);
        }
        Ok(Self {
            address,
            owner,
            max_lock_time,
        })
    }

    fn require_owner(&self, caller: &Address) -> ProxyResult<()> {
        if *caller != self.owner {
            return Err(ProxyError::OwnerRequired);
        }
        Ok(())
    }

    /// Lock an operation on a governed proxy, bounded by the ceiling.
    ///
    /// The ceiling is absolute: `now + duration` may never pass
    /// `max_lock_time`, independent of how far that is from `now`.
    /// Exceeding it fails with [`ProxyError::HorizonExceeded`], distinct
    /// from a plain permission error.
    pub fn lock_operation(
        &self,
        proxy: &mut ProxyCore,
        ctx: &RuntimeContext,
        signature: &str,
        duration: TimestampSeconds,
    ) -> ProxyResult<TimestampSeconds> {
        self.require_owner(&ctx.caller)?;

        let expires_at = ctx
            .timestamp
            .checked_add(duration)
            .ok_or(ProxyError::ExpiryOverflow)?;
        if expires_at > self.max_lock_time {
            return Err(ProxyError::HorizonExceeded {
                expires_at,
                max_lock_time: self.max_lock_time,
            });
        }

        debug!(
            "Governance {} locking {} on proxy {} until {}",
            self.address,
            signature,
            proxy.address(),
            expires_at
        );
        let inner = RuntimeContext::new(self.address, ctx.timestamp);
        proxy.lock_operation(&inner, signature, duration)
    }

    /// Unlock an operation on a governed proxy
    pub fn unlock_operation(
        &self,
        proxy: &mut ProxyCore,
        ctx: &RuntimeContext,
        signature: &str,
    ) -> ProxyResult<()> {
        self.require_owner(&ctx.caller)?;
        let inner = RuntimeContext::new(self.address, ctx.timestamp);
        proxy.unlock_operation(&inner, signature)
    }

    /// True iff this wrapper is the owner of the given proxy
    pub fn is_owner_of(&self, proxy: &ProxyCore) -> bool {
        *proxy.owner() == self.address
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    pub fn max_lock_time(&self) -> TimestampSeconds {
        self.max_lock_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::testing::{addr, MockExecutor};

    const NOW: TimestampSeconds = 1_000_000;
    const CEILING: TimestampSeconds = NOW + 10_000;
    const TRANSFER: &str = "transfer(address,uint256)";

    // Proxy owned by the wrapper at addr(40); deployer is addr(1)
    fn setup() -> (MockExecutor, ProxyCore, GovernanceWrapper) {
        let executor = MockExecutor::with_targets(&[addr(20)]);
        let proxy =
            ProxyCore::new(&executor, addr(10), addr(20), addr(40), addr(2), NOW).unwrap();
        let wrapper = GovernanceWrapper::new(addr(40), addr(1), CEILING).unwrap();
        (executor, proxy, wrapper)
    }

    #[test]
    fn test_is_owner_of() {
        let (executor, proxy, wrapper) = setup();
        assert!(wrapper.is_owner_of(&proxy));

        let other =
            ProxyCore::new(&executor, addr(11), addr(20), addr(1), addr(2), NOW).unwrap();
        assert!(!wrapper.is_owner_of(&other));
    }

    #[test]
    fn test_lock_within_horizon() {
        let (_executor, mut proxy, wrapper) = setup();
        let ctx = RuntimeContext::new(addr(1), NOW);

        let expires = wrapper
            .lock_operation(&mut proxy, &ctx, TRANSFER, 5_000)
            .unwrap();
        assert_eq!(expires, NOW + 5_000);
        assert!(proxy.is_locked(TRANSFER, NOW));

        // Exactly reaching the ceiling is permitted
        wrapper
            .lock_operation(&mut proxy, &ctx, TRANSFER, CEILING - NOW)
            .unwrap();
        assert_eq!(proxy.lock_expiry(TRANSFER), CEILING);
    }

    #[test]
    fn test_lock_beyond_horizon_fails() {
        let (_executor, mut proxy, wrapper) = setup();
        let ctx = RuntimeContext::new(addr(1), NOW);
        proxy.drain_events();

        assert_eq!(
            wrapper
                .lock_operation(&mut proxy, &ctx, "foo()", CEILING - NOW + 1)
                .unwrap_err(),
            ProxyError::HorizonExceeded {
                expires_at: CEILING + 1,
                max_lock_time: CEILING,
            }
        );
        // No state change, no event
        assert_eq!(proxy.lock_expiry("foo()"), 0);
        assert!(proxy.drain_events().is_empty());

        // At the ceiling instant, any positive duration fails
        let at_ceiling = RuntimeContext::new(addr(1), CEILING);
        assert!(matches!(
            wrapper
                .lock_operation(&mut proxy, &at_ceiling, "foo()", 1)
                .unwrap_err(),
            ProxyError::HorizonExceeded { .. }
        ));
    }

    #[test]
    fn test_wrapper_owner_gating() {
        let (_executor, mut proxy, wrapper) = setup();
        // Neither the proxy operator nor a stranger may drive the wrapper
        for caller in [addr(2), addr(9)] {
            let ctx = RuntimeContext::new(caller, NOW);
            assert_eq!(
                wrapper
                    .lock_operation(&mut proxy, &ctx, TRANSFER, 10)
                    .unwrap_err(),
                ProxyError::OwnerRequired
            );
            assert_eq!(
                wrapper
                    .unlock_operation(&mut proxy, &ctx, TRANSFER)
                    .unwrap_err(),
                ProxyError::OwnerRequired
            );
        }
    }

    #[test]
    fn test_unlock_forwards_to_proxy() {
        let (_executor, mut proxy, wrapper) = setup();
        let ctx = RuntimeContext::new(addr(1), NOW);

        wrapper
            .lock_operation(&mut proxy, &ctx, "foo()", 5_000)
            .unwrap();
        wrapper.unlock_operation(&mut proxy, &ctx, "foo()").unwrap();
        assert!(!proxy.is_locked("foo()", NOW));

        // The proxy's not-locked check still applies through the wrapper
        assert_eq!(
            wrapper
                .unlock_operation(&mut proxy, &ctx, "foo()")
                .unwrap_err(),
            ProxyError::MethodNotDisabled(crate::selector::Selector::from_signature("foo()"))
        );
    }

    #[test]
    fn test_direct_admin_calls_still_unbounded() {
        // An operator talking to the proxy directly is not capped; the
        // ceiling only binds calls routed through the wrapper.
        let (_executor, mut proxy, _wrapper) = setup();
        let operator_ctx = RuntimeContext::new(addr(2), NOW);
        let expires = proxy
            .lock_operation(&operator_ctx, "foo()", 1_000_000_000)
            .unwrap();
        assert!(expires > CEILING);
    }

    #[test]
    fn test_zero_owner_rejected() {
        assert_eq!(
            GovernanceWrapper::new(addr(40), Address::zero(), CEILING).unwrap_err(),
            ProxyError::ZeroAddress
        );
    }
}
