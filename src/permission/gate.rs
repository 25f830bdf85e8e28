// Access Gate
// Role resolution and the single permission decision consulted by every
// gated operation.
//
// Three roles exist: the owner (ultimate authority, reassignable), the
// operator (same administrative rights except ownership reassignment,
// fixed at construction) and the public. Owner and operator bypass the
// lock table entirely; the public is gated purely by lock state.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::{ProxyError, ProxyResult};
use crate::permission::PermissionTable;
use crate::selector::Selector;
use crate::time::TimestampSeconds;

/// Closed role enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Owner,
    Operator,
    Public,
}

impl Role {
    /// True for the two privileged roles
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Owner | Role::Operator)
    }
}

/// The two privileged identities of a proxy.
///
/// Invariant: owner and operator are distinct and non-zero at all times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet {
    owner: Address,
    operator: Address,
}

impl RoleSet {
    pub fn new(owner: Address, operator: Address) -> ProxyResult<Self> {
        if owner.is_zero() || operator.is_zero() || owner == operator {
            return Err(ProxyError::InvalidRoleAssignment);
        }
        Ok(Self { owner, operator })
    }

    /// Single resolver from caller identity to role
    pub fn role_of(&self, caller: &Address) -> Role {
        if *caller == self.owner {
            Role::Owner
        } else if *caller == self.operator {
            Role::Operator
        } else {
            Role::Public
        }
    }

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    pub fn operator(&self) -> &Address {
        &self.operator
    }

    /// Reassign the owner. The operator cannot become owner and the
    /// zero address is rejected, preserving the distinctness invariant.
    pub fn set_owner(&mut self, new_owner: Address) -> ProxyResult<()> {
        if new_owner.is_zero() {
            return Err(ProxyError::ZeroAddress);
        }
        if new_owner == self.operator {
            return Err(ProxyError::InvalidRoleAssignment);
        }
        self.owner = new_owner;
        Ok(())
    }
}

/// Require an administrative caller (owner or operator)
pub fn require_admin(roles: &RoleSet, caller: &Address) -> ProxyResult<Role> {
    let role = roles.role_of(caller);
    if !role.is_admin() {
        return Err(ProxyError::NotAuthorized);
    }
    Ok(role)
}

/// Require the owner itself (ownership reassignment only)
pub fn require_owner(roles: &RoleSet, caller: &Address) -> ProxyResult<()> {
    if roles.role_of(caller) != Role::Owner {
        return Err(ProxyError::OwnerRequired);
    }
    Ok(())
}

/// Permission decision for a forwarded (non-administrative) operation:
/// owner and operator always pass, the public passes iff the selector
/// is not currently locked.
pub fn can_invoke(
    roles: &RoleSet,
    table: &PermissionTable,
    selector: &Selector,
    caller: &Address,
    now: TimestampSeconds,
) -> bool {
    roles.role_of(caller).is_admin() || !table.is_locked(selector, now)
}
