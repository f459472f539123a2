//! Authenticated caller identity.

use serde::{Deserialize, Serialize};

use steward_core::{TenantId, UserId};

use crate::catalog::Permission;
use crate::roles::Role;

/// A fully resolved, authenticated caller.
///
/// Constructed per request by the authentication layer from a verified
/// credential; never persisted by this crate. Authorization decisions derive
/// everything they need from this value — see [`crate::resolver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub tenant_id: TenantId,
    pub user_id: UserId,
    pub role: Role,

    /// Explicit per-account permission grants. Only consulted when
    /// `use_custom_permissions` is set and the list is non-empty.
    #[serde(default)]
    pub custom_permissions: Vec<Permission>,

    /// Gates `custom_permissions`: when false, a non-empty list is ignored
    /// and the role default applies.
    #[serde(default)]
    pub use_custom_permissions: bool,

    /// Escape hatch: grants every catalog permission regardless of role or
    /// override list.
    #[serde(default)]
    pub superuser: bool,
}

impl Principal {
    pub fn new(tenant_id: TenantId, user_id: UserId, role: Role) -> Self {
        Self {
            tenant_id,
            user_id,
            role,
            custom_permissions: Vec::new(),
            use_custom_permissions: false,
            superuser: false,
        }
    }

    pub fn with_custom_permissions(mut self, permissions: Vec<Permission>) -> Self {
        self.custom_permissions = permissions;
        self.use_custom_permissions = true;
        self
    }

    pub fn with_superuser(mut self) -> Self {
        self.superuser = true;
        self
    }
}
