// Proxy Core
// The addressable entity owning the permission table, the target
// reference and the two privileged identities. Exposes the
// administrative and read surfaces; forwarding lives in `router.rs`.

use log::debug;

use crate::address::Address;
use crate::context::RuntimeContext;
use crate::error::{ProxyError, ProxyResult};
use crate::permission::{require_admin, require_owner, PermissionTable, Role, RoleSet};
use crate::proxy::constants::{
    ADMINISTRATIVE_SELECTORS, DEFAULT_LOCK_DURATION, DISABLED_BY_DEFAULT,
};
use crate::proxy::events::ProxyEvent;
use crate::proxy::target::TargetExecutor;
use crate::selector::Selector;
use crate::time::TimestampSeconds;

#[derive(Debug)]
pub struct ProxyCore {
    /// The proxy's own address
    address: Address,
    /// Owner and operator identities
    roles: RoleSet,
    /// Current forwarding target
    target: Address,
    /// Per-operation lock table
    table: PermissionTable,
    /// Notifications queued since the last drain
    events: Vec<ProxyEvent>,
}

impl ProxyCore {
    /// Create a proxy in its conservative default state.
    ///
    /// Validates the role assignment and the initial target, then
    /// pre-locks every signature in [`DISABLED_BY_DEFAULT`] for
    /// [`DEFAULT_LOCK_DURATION`] so a fresh proxy denies the dangerous
    /// surface until an owner or operator explicitly opens it.
    pub fn new<E: TargetExecutor>(
        executor: &E,
        address: Address,
        target: Address,
        owner: Address,
        operator: Address,
        now: TimestampSeconds,
    ) -> ProxyResult<Self> {
        let roles = RoleSet::new(owner, operator)?;
        Self::validate_target(executor, &address, &target)?;

        let mut proxy = Self {
            address,
            roles,
            target,
            table: PermissionTable::new(),
            events: Vec::new(),
        };

        let expires_at = now
            .checked_add(DEFAULT_LOCK_DURATION)
            .ok_or(ProxyError::ExpiryOverflow)?;
        for signature in DISABLED_BY_DEFAULT {
            let selector = Selector::from_signature(signature);
            proxy.table.set(selector, expires_at);
            proxy.events.push(ProxyEvent::MethodDisabled {
                caller: owner,
                selector,
                signature: signature.to_string(),
                expires_at,
            });
        }
        debug!(
            "Proxy {} created with target {}, {} methods disabled until {}",
            proxy.address,
            proxy.target,
            DISABLED_BY_DEFAULT.len(),
            expires_at
        );
        Ok(proxy)
    }

    fn validate_target<E: TargetExecutor>(
        executor: &E,
        own_address: &Address,
        target: &Address,
    ) -> ProxyResult<()> {
        if target == own_address {
            return Err(ProxyError::TargetIsSelf);
        }
        if !executor.is_executable(target) {
            return Err(ProxyError::TargetNotExecutable(*target));
        }
        Ok(())
    }

    // ========================================
    // Administrative surface
    // ========================================

    /// Lock an operation for `duration` seconds from the context clock.
    ///
    /// Owner/operator only. Overwrites any existing lock. No upper
    /// bound on the duration at this layer; bounding is the governance
    /// wrapper's job. Returns the computed expiry.
    pub fn lock_operation(
        &mut self,
        ctx: &RuntimeContext,
        signature: &str,
        duration: TimestampSeconds,
    ) -> ProxyResult<TimestampSeconds> {
        require_admin(&self.roles, &ctx.caller)?;
        let selector = Selector::from_signature(signature);
        let expires_at = ctx
            .timestamp
            .checked_add(duration)
            .ok_or(ProxyError::ExpiryOverflow)?;

        self.table.set(selector, expires_at);
        debug!(
            "Method {} ({}) disabled by {} until {}",
            signature, selector, ctx.caller, expires_at
        );
        self.events.push(ProxyEvent::MethodDisabled {
            caller: ctx.caller,
            selector,
            signature: signature.to_string(),
            expires_at,
        });
        Ok(expires_at)
    }

    /// Unlock a currently locked operation.
    ///
    /// Owner/operator only. Fails when the operation is not locked at
    /// the context clock; an expired entry counts as not locked.
    pub fn unlock_operation(&mut self, ctx: &RuntimeContext, signature: &str) -> ProxyResult<()> {
        require_admin(&self.roles, &ctx.caller)?;
        let selector = Selector::from_signature(signature);
        if !self.table.is_locked(&selector, ctx.timestamp) {
            return Err(ProxyError::MethodNotDisabled(selector));
        }

        self.table.clear(&selector);
        debug!("Method {} ({}) allowed by {}", signature, selector, ctx.caller);
        self.events.push(ProxyEvent::MethodAllowed {
            caller: ctx.caller,
            selector,
            signature: signature.to_string(),
        });
        Ok(())
    }

    /// Replace the forwarding target.
    ///
    /// Owner/operator only. The new target must be an executable entity
    /// distinct from the proxy itself.
    pub fn set_target<E: TargetExecutor>(
        &mut self,
        executor: &E,
        ctx: &RuntimeContext,
        new_target: Address,
    ) -> ProxyResult<()> {
        require_admin(&self.roles, &ctx.caller)?;
        Self::validate_target(executor, &self.address, &new_target)?;

        let old_target = self.target;
        self.target = new_target;
        debug!("Target changed by {}: {} -> {}", ctx.caller, old_target, new_target);
        self.events.push(ProxyEvent::TargetChanged {
            caller: ctx.caller,
            old_target,
            new_target,
        });
        Ok(())
    }

    /// Reassign ownership. Owner only; the operator cannot use this to
    /// promote itself.
    pub fn transfer_ownership(
        &mut self,
        ctx: &RuntimeContext,
        new_owner: Address,
    ) -> ProxyResult<()> {
        require_owner(&self.roles, &ctx.caller)?;
        let previous_owner = *self.roles.owner();
        self.roles.set_owner(new_owner)?;

        debug!("Ownership transferred: {} -> {}", previous_owner, new_owner);
        self.events.push(ProxyEvent::OwnershipTransferred {
            previous_owner,
            new_owner,
        });
        Ok(())
    }

    // ========================================
    // Read surface
    // ========================================

    /// Stored expiry for a signature, 0 when absent
    pub fn lock_expiry(&self, signature: &str) -> TimestampSeconds {
        self.table
            .expiry_of(&Selector::from_signature(signature))
            .unwrap_or(0)
    }

    /// True iff the signature is locked at `now`
    pub fn is_locked(&self, signature: &str, now: TimestampSeconds) -> bool {
        self.table
            .is_locked(&Selector::from_signature(signature), now)
    }

    /// True for selectors of the proxy's own administrative surface
    pub fn is_administrative(&self, selector: &Selector) -> bool {
        ADMINISTRATIVE_SELECTORS.contains(selector)
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn target(&self) -> &Address {
        &self.target
    }

    pub fn owner(&self) -> &Address {
        self.roles.owner()
    }

    pub fn operator(&self) -> &Address {
        self.roles.operator()
    }

    /// Resolve a caller to its role
    pub fn role_of(&self, caller: &Address) -> Role {
        self.roles.role_of(caller)
    }

    /// Drain the queued notifications
    pub fn drain_events(&mut self) -> Vec<ProxyEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn roles(&self) -> &RoleSet {
        &self.roles
    }

    pub(crate) fn table(&self) -> &PermissionTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::testing::{addr, MockExecutor};

    const NOW: TimestampSeconds = 1_000_000;
    const TRANSFER: &str = "transfer(address,uint256)";

    fn proxy(executor: &MockExecutor) -> ProxyCore {
        ProxyCore::new(executor, addr(10), addr(20), addr(1), addr(2), NOW).unwrap()
    }

    fn owner_ctx() -> RuntimeContext {
        RuntimeContext::new(addr(1), NOW)
    }

    #[test]
    fn test_construction_defaults() {
        let executor = MockExecutor::with_targets(&[addr(20)]);
        let mut proxy = proxy(&executor);

        // The dangerous surface starts locked for two years
        assert_eq!(
            proxy.lock_expiry("approve(address,uint256)"),
            NOW + DEFAULT_LOCK_DURATION
        );
        assert!(proxy.is_locked("approve(address,uint256)", NOW));
        // Anything else starts unlocked with no stored entry
        assert_eq!(proxy.lock_expiry("foo()"), 0);
        assert!(!proxy.is_locked("foo()", NOW));

        let events = proxy.drain_events();
        assert_eq!(events.len(), DISABLED_BY_DEFAULT.len());
    }

    #[test]
    fn test_construction_rejects_bad_roles_and_target() {
        let executor = MockExecutor::with_targets(&[addr(20)]);
        assert_eq!(
            ProxyCore::new(&executor, addr(10), addr(20), addr(1), addr(1), NOW).unwrap_err(),
            ProxyError::InvalidRoleAssignment
        );
        assert_eq!(
            ProxyCore::new(&executor, addr(10), addr(10), addr(1), addr(2), NOW).unwrap_err(),
            ProxyError::TargetIsSelf
        );
        // addr(30) is not registered as executable
        assert_eq!(
            ProxyCore::new(&executor, addr(10), addr(30), addr(1), addr(2), NOW).unwrap_err(),
            ProxyError::TargetNotExecutable(addr(30))
        );
    }

    #[test]
    fn test_lock_operation_roles() {
        let executor = MockExecutor::with_targets(&[addr(20)]);
        let mut proxy = proxy(&executor);
        proxy.drain_events();

        let expires = proxy
            .lock_operation(&owner_ctx(), TRANSFER, 100)
            .unwrap();
        assert_eq!(expires, NOW + 100);

        // Operator may lock too
        let operator_ctx = RuntimeContext::new(addr(2), NOW);
        proxy.lock_operation(&operator_ctx, "foo()", 100).unwrap();

        // The public may not
        let public_ctx = RuntimeContext::new(addr(9), NOW);
        assert_eq!(
            proxy.lock_operation(&public_ctx, "foo()", 100).unwrap_err(),
            ProxyError::NotAuthorized
        );

        let events = proxy.drain_events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            ProxyEvent::MethodDisabled {
                caller: addr(1),
                selector: Selector::from_signature(TRANSFER),
                signature: TRANSFER.to_string(),
                expires_at: NOW + 100,
            }
        );
    }

    #[test]
    fn test_lock_overwrites_previous_expiry() {
        let executor = MockExecutor::with_targets(&[addr(20)]);
        let mut proxy = proxy(&executor);

        proxy.lock_operation(&owner_ctx(), TRANSFER, 100).unwrap();
        proxy.lock_operation(&owner_ctx(), TRANSFER, 500).unwrap();
        assert_eq!(proxy.lock_expiry(TRANSFER), NOW + 500);
    }

    #[test]
    fn test_lock_expiry_overflow() {
        let executor = MockExecutor::with_targets(&[addr(20)]);
        let mut proxy = proxy(&executor);
        assert_eq!(
            proxy
                .lock_operation(&owner_ctx(), TRANSFER, u64::MAX)
                .unwrap_err(),
            ProxyError::ExpiryOverflow
        );
        // Nothing was stored
        assert_eq!(proxy.lock_expiry(TRANSFER), 0);
    }

    #[test]
    fn test_unlock_operation() {
        let executor = MockExecutor::with_targets(&[addr(20)]);
        let mut proxy = proxy(&executor);
        proxy.lock_operation(&owner_ctx(), TRANSFER, 100).unwrap();

        proxy.unlock_operation(&owner_ctx(), TRANSFER).unwrap();
        assert!(!proxy.is_locked(TRANSFER, NOW));
        // The entry is removed, not merely expired
        assert_eq!(proxy.lock_expiry(TRANSFER), 0);
    }

    #[test]
    fn test_unlock_rejects_not_locked() {
        let executor = MockExecutor::with_targets(&[addr(20)]);
        let mut proxy = proxy(&executor);
        let selector = Selector::from_signature("foo()");

        assert_eq!(
            proxy.unlock_operation(&owner_ctx(), "foo()").unwrap_err(),
            ProxyError::MethodNotDisabled(selector)
        );

        // An expired entry counts as not locked
        proxy.lock_operation(&owner_ctx(), "foo()", 10).unwrap();
        let later = RuntimeContext::new(addr(1), NOW + 10);
        assert_eq!(
            proxy.unlock_operation(&later, "foo()").unwrap_err(),
            ProxyError::MethodNotDisabled(selector)
        );
    }

    #[test]
    fn test_set_target() {
        let executor = MockExecutor::with_targets(&[addr(20), addr(21)]);
        let mut proxy = proxy(&executor);
        proxy.drain_events();

        proxy.set_target(&executor, &owner_ctx(), addr(21)).unwrap();
        assert_eq!(proxy.target(), &addr(21));
        assert_eq!(
            proxy.drain_events(),
            vec![ProxyEvent::TargetChanged {
                caller: addr(1),
                old_target: addr(20),
                new_target: addr(21),
            }]
        );

        assert_eq!(
            proxy.set_target(&executor, &owner_ctx(), addr(10)).unwrap_err(),
            ProxyError::TargetIsSelf
        );
        assert_eq!(
            proxy.set_target(&executor, &owner_ctx(), addr(30)).unwrap_err(),
            ProxyError::TargetNotExecutable(addr(30))
        );
        let public_ctx = RuntimeContext::new(addr(9), NOW);
        assert_eq!(
            proxy.set_target(&executor, &public_ctx, addr(20)).unwrap_err(),
            ProxyError::NotAuthorized
        );
        // Failed attempts leave the target untouched
        assert_eq!(proxy.target(), &addr(21));
    }

    #[test]
    fn test_transfer_ownership_owner_only() {
        let executor = MockExecutor::with_targets(&[addr(20)]);
        let mut proxy = proxy(&executor);
        proxy.drain_events();

        let operator_ctx = RuntimeContext::new(addr(2), NOW);
        assert_eq!(
            proxy.transfer_ownership(&operator_ctx, addr(2)).unwrap_err(),
            ProxyError::OwnerRequired
        );

        proxy.transfer_ownership(&owner_ctx(), addr(5)).unwrap();
        assert_eq!(proxy.owner(), &addr(5));
        assert_eq!(proxy.operator(), &addr(2));
        assert_eq!(
            proxy.drain_events(),
            vec![ProxyEvent::OwnershipTransferred {
                previous_owner: addr(1),
                new_owner: addr(5),
            }]
        );

        // The previous owner lost its role
        assert_eq!(
            proxy.transfer_ownership(&owner_ctx(), addr(1)).unwrap_err(),
            ProxyError::OwnerRequired
        );
    }

    #[test]
    fn test_administrative_selectors() {
        let executor = MockExecutor::with_targets(&[addr(20)]);
        let proxy = proxy(&executor);
        assert!(proxy.is_administrative(&Selector::from_signature("setTarget(address)")));
        assert!(!proxy.is_administrative(&Selector::from_signature(TRANSFER)));
    }
}
