//! Permission catalog: the closed set of capability identifiers.
//!
//! Permissions are enumerated ahead of time and never computed at runtime.
//! The wire form is `"<resource>:<action>"` (e.g. `persons:edit`); parsing an
//! identifier that is not in the catalog fails, so nothing outside the
//! catalog can ever be granted.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AccessError;

/// Permission category, used to group the catalog for display.
///
/// `ALL` is the display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionCategory {
    Members,
    UserManagement,
    Scheduling,
    ActivityTypes,
    RoleDefinitions,
    Correspondence,
    CleaningRotations,
    Settings,
    DataExchange,
    AuditLog,
}

impl PermissionCategory {
    pub const ALL: &'static [PermissionCategory] = &[
        PermissionCategory::Members,
        PermissionCategory::UserManagement,
        PermissionCategory::Scheduling,
        PermissionCategory::ActivityTypes,
        PermissionCategory::RoleDefinitions,
        PermissionCategory::Correspondence,
        PermissionCategory::CleaningRotations,
        PermissionCategory::Settings,
        PermissionCategory::DataExchange,
        PermissionCategory::AuditLog,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PermissionCategory::Members => "Members",
            PermissionCategory::UserManagement => "User management",
            PermissionCategory::Scheduling => "Scheduling",
            PermissionCategory::ActivityTypes => "Activity types",
            PermissionCategory::RoleDefinitions => "Role definitions",
            PermissionCategory::Correspondence => "Correspondence",
            PermissionCategory::CleaningRotations => "Cleaning rotations",
            PermissionCategory::Settings => "Settings",
            PermissionCategory::DataExchange => "Data exchange",
            PermissionCategory::AuditLog => "Audit log",
        }
    }
}

impl core::fmt::Display for PermissionCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Declares the catalog in one place: variant, wire id, label, description,
/// and category per permission. Adding a permission is a change here, never a
/// runtime operation.
macro_rules! catalog {
    (
        $(
            $category:ident => {
                $( $variant:ident => ($id:literal, $label:literal, $description:literal) ),+ $(,)?
            }
        )+
    ) => {
        /// An atomic, enumerable capability gating one kind of operation on
        /// one kind of resource.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum Permission {
            $( $( $variant, )+ )+
        }

        impl Permission {
            /// Every permission in the catalog, in declaration order.
            pub const ALL: &'static [Permission] = &[
                $( $( Permission::$variant, )+ )+
            ];

            /// Wire identifier (`"<resource>:<action>"`).
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $( Permission::$variant => $id, )+ )+
                }
            }

            /// Short human label for display.
            pub const fn label(self) -> &'static str {
                match self {
                    $( $( Permission::$variant => $label, )+ )+
                }
            }

            pub const fn description(self) -> &'static str {
                match self {
                    $( $( Permission::$variant => $description, )+ )+
                }
            }

            pub const fn category(self) -> PermissionCategory {
                match self {
                    $( $( Permission::$variant => PermissionCategory::$category, )+ )+
                }
            }

            /// Parse a wire identifier, rejecting anything outside the
            /// catalog (fail closed).
            pub fn parse(id: &str) -> Result<Self, AccessError> {
                match id {
                    $( $( $id => Ok(Permission::$variant), )+ )+
                    _ => Err(AccessError::UnknownPermission(id.to_string())),
                }
            }
        }
    };
}

catalog! {
    Members => {
        PersonsView => ("persons:view", "View members", "View member records"),
        PersonsCreate => ("persons:create", "Create members", "Create new member records"),
        PersonsEdit => ("persons:edit", "Edit members", "Edit existing member records"),
        PersonsDelete => ("persons:delete", "Delete members", "Delete member records"),
    }
    UserManagement => {
        UsersView => ("users:view", "View users", "View user accounts"),
        UsersCreate => ("users:create", "Create users", "Create new user accounts"),
        UsersEdit => ("users:edit", "Edit users", "Edit user accounts and their permissions"),
        UsersDelete => ("users:delete", "Delete users", "Delete user accounts"),
    }
    Scheduling => {
        SchedulesView => ("schedules:view", "View schedules", "View schedules and assignments"),
        SchedulesCreate => ("schedules:create", "Create schedules", "Create new schedules"),
        SchedulesEdit => ("schedules:edit", "Edit schedules", "Edit schedules and assignments"),
        SchedulesDelete => ("schedules:delete", "Delete schedules", "Delete schedules"),
    }
    ActivityTypes => {
        ProgramsView => ("programs:view", "View programs", "View activity programs"),
        ProgramsCreate => ("programs:create", "Create programs", "Create new activity programs"),
        ProgramsEdit => ("programs:edit", "Edit programs", "Edit activity programs"),
        ProgramsDelete => ("programs:delete", "Delete programs", "Delete activity programs"),
    }
    RoleDefinitions => {
        RolesView => ("roles:view", "View roles", "View role definitions"),
        RolesCreate => ("roles:create", "Create roles", "Create new role definitions"),
        RolesEdit => ("roles:edit", "Edit roles", "Edit role definitions"),
        RolesDelete => ("roles:delete", "Delete roles", "Delete role definitions"),
    }
    Correspondence => {
        LettersView => ("letters:view", "View letters", "View correspondence"),
        LettersCreate => ("letters:create", "Create letters", "Draft new correspondence"),
        LettersSend => ("letters:send", "Send letters", "Send correspondence to recipients"),
    }
    CleaningRotations => {
        CleaningView => ("cleaning:view", "View rotations", "View cleaning rotations"),
        CleaningCreate => ("cleaning:create", "Create rotations", "Create new cleaning rotations"),
        CleaningEdit => ("cleaning:edit", "Edit rotations", "Edit cleaning rotations"),
        CleaningDelete => ("cleaning:delete", "Delete rotations", "Delete cleaning rotations"),
    }
    Settings => {
        SettingsView => ("settings:view", "View settings", "View organization settings"),
        SettingsEdit => ("settings:edit", "Edit settings", "Change organization settings"),
    }
    DataExchange => {
        DataImport => ("data:import", "Import data", "Import records in bulk"),
        DataExport => ("data:export", "Export data", "Export records in bulk"),
    }
    AuditLog => {
        AuditView => ("audit:view", "View audit log", "View the audit trail"),
    }
}

// The effective-set bitmask is a u64; the catalog must fit it.
const _: () = assert!(Permission::ALL.len() <= 64);

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Permission {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::parse(s)
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Permission::parse(&id).map_err(serde::de::Error::custom)
    }
}
