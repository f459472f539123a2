//! Role tiers.
//!
//! Roles are a fixed set of named privilege tiers; exactly one is assigned to
//! a principal at a time. Each tier's default permission set lives in
//! [`crate::policy`] and is authored independently — adjacent tiers are not
//! required to be subsets of each other.

use serde::{Deserialize, Serialize};

/// Named privilege tier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    OrgOwner,
    Admin,
    TeamLeader,
    Editor,
    Viewer,
}

impl Role {
    /// All tiers, broadest first.
    pub const ALL: &'static [Role] = &[
        Role::SuperAdmin,
        Role::OrgOwner,
        Role::Admin,
        Role::TeamLeader,
        Role::Editor,
        Role::Viewer,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::OrgOwner => "ORG_OWNER",
            Role::Admin => "ADMIN",
            Role::TeamLeader => "TEAM_LEADER",
            Role::Editor => "EDITOR",
            Role::Viewer => "VIEWER",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super administrator",
            Role::OrgOwner => "Organization owner",
            Role::Admin => "Administrator",
            Role::TeamLeader => "Team leader",
            Role::Editor => "Editor",
            Role::Viewer => "Viewer",
        }
    }

    /// Whether this tier administers the tenant (gates tier-based operations
    /// such as password resets for other accounts).
    pub const fn is_tenant_admin(self) -> bool {
        matches!(self, Role::SuperAdmin | Role::OrgOwner | Role::Admin)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Role {
    type Err = steward_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| steward_core::DomainError::validation(format!("unknown role '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_admin_tiers() {
        assert!(Role::SuperAdmin.is_tenant_admin());
        assert!(Role::OrgOwner.is_tenant_admin());
        assert!(Role::Admin.is_tenant_admin());
        assert!(!Role::TeamLeader.is_tenant_admin());
        assert!(!Role::Editor.is_tenant_admin());
        assert!(!Role::Viewer.is_tenant_admin());
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"SUPER_ADMIN\"");
        let parsed: Role = serde_json::from_str("\"TEAM_LEADER\"").unwrap();
        assert_eq!(parsed, Role::TeamLeader);
    }
}
