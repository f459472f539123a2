//! Role policy table: default permission set per tier.
//!
//! Each tier's set is authored independently — there is no implicit
//! inheritance chain between adjacent tiers. The tables are `const` data
//! fixed at build time, so concurrent reads need no synchronization and no
//! mutation path exists at runtime.

use crate::catalog::Permission;
use crate::catalog::Permission::*;
use crate::roles::Role;

/// Defined as the whole catalog, so a newly added permission is absorbed
/// without editing this table.
const SUPER_ADMIN: &[Permission] = Permission::ALL;

/// Equal to the full catalog today, but listed explicitly: future catalog
/// additions are granted deliberately, not automatically.
const ORG_OWNER: &[Permission] = &[
    PersonsView, PersonsCreate, PersonsEdit, PersonsDelete,
    UsersView, UsersCreate, UsersEdit, UsersDelete,
    SchedulesView, SchedulesCreate, SchedulesEdit, SchedulesDelete,
    ProgramsView, ProgramsCreate, ProgramsEdit, ProgramsDelete,
    RolesView, RolesCreate, RolesEdit, RolesDelete,
    LettersView, LettersCreate, LettersSend,
    CleaningView, CleaningCreate, CleaningEdit, CleaningDelete,
    SettingsView, SettingsEdit,
    DataImport, DataExport,
    AuditView,
];

/// Everything except bulk import.
const ADMIN: &[Permission] = &[
    PersonsView, PersonsCreate, PersonsEdit, PersonsDelete,
    UsersView, UsersCreate, UsersEdit, UsersDelete,
    SchedulesView, SchedulesCreate, SchedulesEdit, SchedulesDelete,
    ProgramsView, ProgramsCreate, ProgramsEdit, ProgramsDelete,
    RolesView, RolesCreate, RolesEdit, RolesDelete,
    LettersView, LettersCreate, LettersSend,
    CleaningView, CleaningCreate, CleaningEdit, CleaningDelete,
    SettingsView, SettingsEdit,
    DataExport,
    AuditView,
];

const TEAM_LEADER: &[Permission] = &[
    PersonsView, PersonsEdit,
    SchedulesView, SchedulesCreate, SchedulesEdit, SchedulesDelete,
    ProgramsView,
    RolesView,
    LettersView,
    CleaningView, CleaningEdit,
];

/// Create/edit without delete across the content areas.
const EDITOR: &[Permission] = &[
    PersonsView, PersonsCreate, PersonsEdit,
    SchedulesView, SchedulesCreate, SchedulesEdit,
    ProgramsView,
    RolesView,
    LettersView, LettersCreate,
    CleaningView, CleaningCreate, CleaningEdit,
];

const VIEWER: &[Permission] = &[
    PersonsView,
    SchedulesView,
    ProgramsView,
    RolesView,
    LettersView,
    CleaningView,
];

/// The default permission set for a tier.
pub const fn default_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::SuperAdmin => SUPER_ADMIN,
        Role::OrgOwner => ORG_OWNER,
        Role::Admin => ADMIN,
        Role::TeamLeader => TEAM_LEADER,
        Role::Editor => EDITOR,
        Role::Viewer => VIEWER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::PermissionSet;

    #[test]
    fn super_admin_tracks_the_full_catalog() {
        assert_eq!(
            PermissionSet::from_slice(default_permissions(Role::SuperAdmin)),
            PermissionSet::ALL
        );
    }

    #[test]
    fn org_owner_currently_equals_the_full_catalog() {
        assert_eq!(
            PermissionSet::from_slice(default_permissions(Role::OrgOwner)),
            PermissionSet::ALL
        );
    }

    #[test]
    fn admin_lacks_bulk_import_only() {
        let admin = PermissionSet::from_slice(default_permissions(Role::Admin));
        assert!(!admin.contains(Permission::DataImport));
        assert_eq!(admin.len() as usize, Permission::ALL.len() - 1);
    }

    #[test]
    fn editor_matches_the_documented_scenario() {
        let editor = PermissionSet::from_slice(default_permissions(Role::Editor));
        assert!(editor.contains(Permission::ProgramsView));
        assert!(!editor.contains(Permission::UsersDelete));
    }

    #[test]
    fn viewer_is_view_only() {
        for &p in default_permissions(Role::Viewer) {
            assert!(p.as_str().ends_with(":view"), "{p} is not a view permission");
        }
    }

    #[test]
    fn no_table_references_a_permission_twice() {
        for &role in Role::ALL {
            let table = default_permissions(role);
            let set = PermissionSet::from_slice(table);
            assert_eq!(set.len() as usize, table.len(), "duplicate entry in {role} table");
        }
    }
}
