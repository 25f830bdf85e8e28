//! Proxy Error Codes
//!
//! Error Code Ranges:
//! - 0x0100 - 0x01FF: Permission errors
//! - 0x0200 - 0x02FF: State / validation errors
//! - 0x0300 - 0x03FF: Governance errors
//! - 0x0400 - 0x04FF: Target errors

use thiserror::Error;

use crate::address::Address;
use crate::selector::Selector;
use crate::time::TimestampSeconds;

// ===== Permission Errors (0x0100 - 0x01FF) =====

pub const PROXY_ERROR_NOT_AUTHORIZED: u64 = 0x0100;
pub const PROXY_ERROR_OWNER_REQUIRED: u64 = 0x0101;
pub const PROXY_ERROR_METHOD_DISABLED: u64 = 0x0102;

// ===== State / Validation Errors (0x0200 - 0x02FF) =====

pub const PROXY_ERROR_METHOD_NOT_DISABLED: u64 = 0x0200;
pub const PROXY_ERROR_TARGET_IS_SELF: u64 = 0x0201;
pub const PROXY_ERROR_TARGET_NOT_EXECUTABLE: u64 = 0x0202;
pub const PROXY_ERROR_INVALID_ROLE_ASSIGNMENT: u64 = 0x0203;
pub const PROXY_ERROR_ZERO_ADDRESS: u64 = 0x0204;
pub const PROXY_ERROR_EXPIRY_OVERFLOW: u64 = 0x0205;
pub const PROXY_ERROR_ADMINISTRATIVE_SELECTOR: u64 = 0x0206;
pub const PROXY_ERROR_EMPTY_CALL: u64 = 0x0207;
pub const PROXY_ERROR_UNEXPECTED_REGISTRY: u64 = 0x0208;

// ===== Governance Errors (0x0300 - 0x03FF) =====

pub const PROXY_ERROR_HORIZON_EXCEEDED: u64 = 0x0300;

// ===== Target Errors (0x0400 - 0x04FF) =====

pub const PROXY_ERROR_TARGET_FAILURE: u64 = 0x0400;

/// Proxy operation result type
pub type ProxyResult<T> = Result<T, ProxyError>;

/// Errors raised by the proxy and governance layers.
///
/// Every failure aborts the current call and leaves all state unchanged;
/// validation happens before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProxyError {
    // Permission errors
    #[error("Caller is not the owner or the operator")]
    NotAuthorized,

    #[error("Caller is not the owner")]
    OwnerRequired,

    #[error("Method {0} is disabled")]
    MethodDisabled(Selector),

    // State / validation errors
    #[error("Method {0} is not disabled")]
    MethodNotDisabled(Selector),

    #[error("Target cannot be the proxy itself")]
    TargetIsSelf,

    #[error("Target {0} is not an executable entity")]
    TargetNotExecutable(Address),

    #[error("Owner and operator must be distinct non-zero identities")]
    InvalidRoleAssignment,

    #[error("Zero address is not a valid identity")]
    ZeroAddress,

    #[error("Lock expiry overflows the timestamp range")]
    ExpiryOverflow,

    #[error("Selector {0} belongs to the administrative surface and cannot be forwarded")]
    AdministrativeSelector(Selector),

    #[error("Call carries no selector and no value")]
    EmptyCall,

    #[error("Asset received from unexpected registry {0}")]
    UnexpectedRegistry(Address),

    // Governance errors
    #[error("Lock expiry {expires_at} exceeds the permitted horizon {max_lock_time}")]
    HorizonExceeded {
        expires_at: TimestampSeconds,
        max_lock_time: TimestampSeconds,
    },

    // Target errors
    #[error("Target call failed: {reason}")]
    TargetFailure { reason: String },
}

impl ProxyError {
    /// Stable numeric code for observability and host bridging
    pub fn code(&self) -> u64 {
        match self {
            Self::NotAuthorized => PROXY_ERROR_NOT_AUTHORIZED,
            Self::OwnerRequired => PROXY_ERROR_OWNER_REQUIRED,
            Self::MethodDisabled(_) => PROXY_ERROR_METHOD_DISABLED,
            Self::MethodNotDisabled(_) => PROXY_ERROR_METHOD_NOT_DISABLED,
            Self::TargetIsSelf => PROXY_ERROR_TARGET_IS_SELF,
            Self::TargetNotExecutable(_) => PROXY_ERROR_TARGET_NOT_EXECUTABLE,
            Self::InvalidRoleAssignment => PROXY_ERROR_INVALID_ROLE_ASSIGNMENT,
            Self::ZeroAddress => PROXY_ERROR_ZERO_ADDRESS,
            Self::ExpiryOverflow => PROXY_ERROR_EXPIRY_OVERFLOW,
            Self::AdministrativeSelector(_) => PROXY_ERROR_ADMINISTRATIVE_SELECTOR,
            Self::EmptyCall => PROXY_ERROR_EMPTY_CALL,
            Self::UnexpectedRegistry(_) => PROXY_ERROR_UNEXPECTED_REGISTRY,
            Self::HorizonExceeded { .. } => PROXY_ERROR_HORIZON_EXCEEDED,
            Self::TargetFailure { .. } => PROXY_ERROR_TARGET_FAILURE,
        }
    }

    /// True when the error originates inside the target, not the proxy
    pub fn is_target_failure(&self) -> bool {
        matches!(self, Self::TargetFailure { .. })
    }
}
