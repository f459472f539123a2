//! Per-request contexts inserted by the identity middleware.

use steward_authz::{
    effective_permissions, AccessError, Permission, PermissionSet, Principal, Requirement,
};
use steward_core::TenantId;

/// Tenant context for a request.
///
/// Immutable; present on every authenticated route.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TenantContext {
    tenant_id: TenantId,
}

impl TenantContext {
    pub fn new(tenant_id: TenantId) -> Self {
        Self { tenant_id }
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }
}

/// Principal context for a request.
///
/// The effective permission set is resolved once here, at the boundary, and
/// reused for every check within the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal: Principal,
    permissions: PermissionSet,
}

impl PrincipalContext {
    pub fn new(principal: Principal) -> Self {
        let permissions = effective_permissions(&principal);
        Self {
            principal,
            permissions,
        }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn permissions(&self) -> PermissionSet {
        self.permissions
    }

    /// Permission check against the cached effective set.
    pub fn require(&self, permission: Permission) -> Result<(), AccessError> {
        if self.permissions.contains(permission) {
            Ok(())
        } else {
            Err(AccessError::forbidden(Requirement::Permission(permission)))
        }
    }
}
