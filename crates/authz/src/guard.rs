//! Authorization guard: the request-boundary checkpoint.
//!
//! Every check takes `Option<&Principal>`; a missing identity is
//! `NotAuthenticated`, a failed check is `Forbidden`, and only `Ok(())` lets
//! the protected body run — the caller's `?` enforces that no part of the
//! operation executes after a denial.
//!
//! The tier escape hatches (`require_tenant_admin`, `require_superuser`) and
//! the account-management rules live here, as named predicates, so the whole
//! authorization surface is auditable in one module.

use steward_core::UserId;

use crate::catalog::Permission;
use crate::error::{AccessError, Requirement};
use crate::principal::Principal;
use crate::resolver;
use crate::roles::Role;

fn authenticated(principal: Option<&Principal>) -> Result<&Principal, AccessError> {
    principal.ok_or(AccessError::NotAuthenticated)
}

/// Require a single permission.
pub fn require(principal: Option<&Principal>, permission: Permission) -> Result<(), AccessError> {
    let principal = authenticated(principal)?;
    if resolver::has(principal, permission) {
        Ok(())
    } else {
        Err(AccessError::forbidden(Requirement::Permission(permission)))
    }
}

/// Require at least one of the given permissions.
pub fn require_any(
    principal: Option<&Principal>,
    permissions: &[Permission],
) -> Result<(), AccessError> {
    let principal = authenticated(principal)?;
    if resolver::has_any(principal, permissions) {
        Ok(())
    } else {
        Err(AccessError::forbidden(Requirement::AnyOf(permissions.to_vec())))
    }
}

/// Require all of the given permissions.
pub fn require_all(
    principal: Option<&Principal>,
    permissions: &[Permission],
) -> Result<(), AccessError> {
    let principal = authenticated(principal)?;
    if resolver::has_all(principal, permissions) {
        Ok(())
    } else {
        Err(AccessError::forbidden(Requirement::AllOf(permissions.to_vec())))
    }
}

/// Require a tenant-admin tier (SUPER_ADMIN, ORG_OWNER or ADMIN).
///
/// Tier-gated rather than permission-gated: some operations (password resets
/// for other accounts, permission grants) hang off *who the actor is*, not
/// off an enumerable capability.
pub fn require_tenant_admin(principal: Option<&Principal>) -> Result<(), AccessError> {
    let principal = authenticated(principal)?;
    if principal.role.is_tenant_admin() {
        Ok(())
    } else {
        Err(AccessError::forbidden(Requirement::TenantAdmin))
    }
}

/// Require the superuser flag.
pub fn require_superuser(principal: Option<&Principal>) -> Result<(), AccessError> {
    let principal = authenticated(principal)?;
    if principal.superuser {
        Ok(())
    } else {
        Err(AccessError::forbidden(Requirement::Superuser))
    }
}

/// Account-tier rule: only a SUPER_ADMIN actor may modify, delete,
/// deactivate, reset the password of, or change the role of a SUPER_ADMIN
/// target.
///
/// Re-validate this inside every guarded operation that manages accounts.
/// Neither a custom override nor the superuser flag bypasses it — the check
/// is on the actor's tier alone.
pub fn ensure_target_account_manageable(
    actor: &Principal,
    target_role: Role,
) -> Result<(), AccessError> {
    if target_role == Role::SuperAdmin && actor.role != Role::SuperAdmin {
        return Err(AccessError::forbidden(Requirement::ProtectedAccount));
    }
    Ok(())
}

/// Self-service rule: no actor changes their own role, SUPER_ADMIN included.
///
/// Re-validate this inside every guarded operation that updates a role.
pub fn ensure_not_self_role_change(
    actor: &Principal,
    target_user_id: UserId,
) -> Result<(), AccessError> {
    if actor.user_id == target_user_id {
        return Err(AccessError::forbidden(Requirement::OwnRoleChange));
    }
    Ok(())
}
