// Proxy Module
// The pass-through proxy: administrative surface, forwarding router and
// the target-executor seam.

pub mod constants;
mod core;
mod events;
mod router;
mod target;

pub use self::core::ProxyCore;
pub use events::ProxyEvent;
pub use target::{ForwardedCall, TargetExecutor};
