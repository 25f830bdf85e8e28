//! Time-locked pass-through proxy for asset registries.
//!
//! The proxy sits in front of a replaceable target registry and
//! mediates every call: administrative operations are gated by an
//! owner/operator role check, everything else is forwarded verbatim
//! unless its selector is locked in the time-bounded permission table.
//! A governance wrapper can take ownership of a proxy and cap how far
//! into the future any lock may expire.

pub mod address;
pub mod context;
pub mod error;
pub mod governance;
pub mod permission;
pub mod proxy;
pub mod selector;
pub mod time;

pub use address::Address;
pub use context::RuntimeContext;
pub use error::{ProxyError, ProxyResult};
pub use governance::GovernanceWrapper;
pub use permission::{PermissionTable, Role, RoleSet};
pub use proxy::{ForwardedCall, ProxyCore, ProxyEvent, TargetExecutor};
pub use selector::Selector;
pub use time::TimestampSeconds;
