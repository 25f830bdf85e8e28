// Forwarding Router
// Relays non-administrative calls to the current target and relays the
// target's outcome back unchanged. The router only understands the
// selector and the raw success/failure contract; it never interprets
// the target's operation semantics.

use log::{debug, trace};

use crate::address::Address;
use crate::context::RuntimeContext;
use crate::error::{ProxyError, ProxyResult};
use crate::permission::can_invoke;
use crate::proxy::constants::ASSET_RECEIVED_TOKEN;
use crate::proxy::core::ProxyCore;
use crate::proxy::target::{ForwardedCall, TargetExecutor};
use crate::selector::Selector;

impl ProxyCore {
    /// Forward a raw call to the current target.
    ///
    /// A payload too short to carry a selector is treated as a bare
    /// value transfer when value is attached, and rejected otherwise.
    /// Administrative selectors never reach the target; they belong to
    /// the typed administrative surface. A denied caller fails before
    /// the target is touched; an allowed call is relayed verbatim and
    /// the target's return data or failure reason comes back unmodified.
    pub fn forward<E: TargetExecutor>(
        &mut self,
        executor: &mut E,
        ctx: &RuntimeContext,
        payload: &[u8],
        value: u64,
    ) -> ProxyResult<Vec<u8>> {
        let selector = match Selector::from_payload(payload) {
            Some(selector) => selector,
            None => {
                if value > 0 {
                    self.receive_value(executor, ctx, value)?;
                    return Ok(Vec::new());
                }
                return Err(ProxyError::EmptyCall);
            }
        };

        if self.is_administrative(&selector) {
            return Err(ProxyError::AdministrativeSelector(selector));
        }

        if !can_invoke(self.roles(), self.table(), &selector, &ctx.caller, ctx.timestamp) {
            trace!("Forward of {} denied for {}", selector, ctx.caller);
            return Err(ProxyError::MethodDisabled(selector));
        }

        trace!(
            "Forwarding {} from {} to {} (value {})",
            selector,
            ctx.caller,
            self.target(),
            value
        );
        let call = ForwardedCall {
            caller: ctx.caller,
            selector,
            payload,
            value,
        };
        let target = *self.target();
        executor
            .execute(&target, call)
            .map_err(|e| ProxyError::TargetFailure {
                reason: e.to_string(),
            })
    }

    /// Re-forward a bare value transfer to the current target.
    ///
    /// The proxy never retains a balance: either the full amount
    /// reaches the target or the whole call fails.
    pub fn receive_value<E: TargetExecutor>(
        &mut self,
        executor: &mut E,
        ctx: &RuntimeContext,
        amount: u64,
    ) -> ProxyResult<()> {
        debug!(
            "Relaying value {} from {} to {}",
            amount,
            ctx.caller,
            self.target()
        );
        let target = *self.target();
        let own_address = *self.address();
        executor
            .transfer_value(&target, &own_address, amount)
            .map_err(|e| ProxyError::TargetFailure {
                reason: e.to_string(),
            })
    }

    /// Asset-receipt hook, invoked by the target registry when it
    /// transfers an asset to the proxy.
    ///
    /// Only the current target registry is a recognised depositor; any
    /// other caller fails so an unrelated registry cannot be mistaken
    /// for a deposit of the proxy's intended asset. Returns the fixed
    /// acceptance token on success.
    pub fn on_asset_received(
        &self,
        ctx: &RuntimeContext,
        operator: &Address,
        from: &Address,
        token_id: u64,
        _data: &[u8],
    ) -> ProxyResult<Selector> {
        if ctx.caller != *self.target() {
            return Err(ProxyError::UnexpectedRegistry(ctx.caller));
        }
        trace!(
            "Asset {} received from {} (operator {}) via registry {}",
            token_id,
            from,
            operator,
            ctx.caller
        );
        Ok(*ASSET_RECEIVED_TOKEN)
    }
}
