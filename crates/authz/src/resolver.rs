//! Permission resolution.
//!
//! Pure functions — no I/O, no locks, no panics. Callers on a hot path
//! should compute [`effective_permissions`] once per request and reuse the
//! returned set for every check within that request.

use crate::catalog::Permission;
use crate::policy::default_permissions;
use crate::principal::Principal;
use crate::set::PermissionSet;

/// Derive the permission set actually granted to `principal`.
///
/// Precedence: superuser → custom override (flag-gated, non-empty) → role
/// default. Deterministic for identical inputs.
pub fn effective_permissions(principal: &Principal) -> PermissionSet {
    if principal.superuser {
        return PermissionSet::ALL;
    }
    if principal.use_custom_permissions && !principal.custom_permissions.is_empty() {
        return PermissionSet::from_slice(&principal.custom_permissions);
    }
    PermissionSet::from_slice(default_permissions(principal.role))
}

/// Point query: may `principal` perform `permission`?
pub fn has(principal: &Principal, permission: Permission) -> bool {
    effective_permissions(principal).contains(permission)
}

/// True iff the effective set intersects `permissions`.
pub fn has_any(principal: &Principal, permissions: &[Permission]) -> bool {
    effective_permissions(principal).contains_any(permissions)
}

/// True iff `permissions` is a subset of the effective set.
pub fn has_all(principal: &Principal, permissions: &[Permission]) -> bool {
    effective_permissions(principal).contains_all(permissions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::Role;
    use steward_core::{TenantId, UserId};

    fn principal(role: Role) -> Principal {
        Principal::new(TenantId::new(), UserId::new(), role)
    }

    #[test]
    fn superuser_gets_the_full_catalog_regardless_of_role() {
        for &role in Role::ALL {
            let p = principal(role).with_superuser();
            assert_eq!(effective_permissions(&p), PermissionSet::ALL);
        }
    }

    #[test]
    fn superuser_wins_over_a_custom_override() {
        let p = principal(Role::Viewer)
            .with_custom_permissions(vec![Permission::PersonsView])
            .with_superuser();
        assert_eq!(effective_permissions(&p), PermissionSet::ALL);
    }

    #[test]
    fn custom_override_replaces_the_role_default() {
        let p = principal(Role::Admin).with_custom_permissions(vec![Permission::LettersSend]);
        let effective = effective_permissions(&p);
        assert!(effective.contains(Permission::LettersSend));
        assert_eq!(effective.len(), 1);
    }

    #[test]
    fn unset_override_flag_ignores_a_non_empty_custom_list() {
        let mut p = principal(Role::Viewer).with_custom_permissions(vec![Permission::UsersDelete]);
        p.use_custom_permissions = false;
        assert_eq!(
            effective_permissions(&p),
            PermissionSet::from_slice(default_permissions(Role::Viewer))
        );
    }

    #[test]
    fn empty_custom_list_falls_back_to_the_role_default() {
        let p = principal(Role::Editor).with_custom_permissions(Vec::new());
        assert_eq!(
            effective_permissions(&p),
            PermissionSet::from_slice(default_permissions(Role::Editor))
        );
    }

    #[test]
    fn editor_scenario() {
        let p = principal(Role::Editor);
        assert!(!has(&p, Permission::UsersDelete));
        assert!(has(&p, Permission::ProgramsView));
    }

    #[test]
    fn any_and_all_edge_cases() {
        let p = principal(Role::Viewer);
        assert!(!has_any(&p, &[]));
        assert!(has_all(&p, &[]));
        assert!(has_any(&p, &[Permission::PersonsView, Permission::UsersDelete]));
        assert!(!has_all(&p, &[Permission::PersonsView, Permission::UsersDelete]));
    }
}
