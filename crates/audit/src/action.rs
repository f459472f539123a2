//! Closed action taxonomy and its classification tables.
//!
//! Every audited occurrence names one `AuditAction`. Category is a total
//! function of the action (the `match` is the completeness assertion);
//! default severity is a partial table — the enumerated high-impact actions
//! are `warning`, everything else is `info`. Severity is never inferred from
//! the payload.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use steward_core::DomainError;

/// Classification axis for filtering and display.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditCategory {
    Authentication,
    UserManagement,
    MembershipRecords,
    Scheduling,
    ActivityTypes,
    RoleDefinitions,
    Correspondence,
    Settings,
    CleaningRotations,
    DataExchange,
}

impl AuditCategory {
    pub const ALL: &'static [AuditCategory] = &[
        AuditCategory::Authentication,
        AuditCategory::UserManagement,
        AuditCategory::MembershipRecords,
        AuditCategory::Scheduling,
        AuditCategory::ActivityTypes,
        AuditCategory::RoleDefinitions,
        AuditCategory::Correspondence,
        AuditCategory::Settings,
        AuditCategory::CleaningRotations,
        AuditCategory::DataExchange,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            AuditCategory::Authentication => "authentication",
            AuditCategory::UserManagement => "user_management",
            AuditCategory::MembershipRecords => "membership_records",
            AuditCategory::Scheduling => "scheduling",
            AuditCategory::ActivityTypes => "activity_types",
            AuditCategory::RoleDefinitions => "role_definitions",
            AuditCategory::Correspondence => "correspondence",
            AuditCategory::Settings => "settings",
            AuditCategory::CleaningRotations => "cleaning_rotations",
            AuditCategory::DataExchange => "data_exchange",
        }
    }
}

impl core::fmt::Display for AuditCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for AuditCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuditCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown audit category '{s}'")))
    }
}

/// Alerting axis. `Critical` exists for explicit override only — no action
/// defaults to it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "critical" => Ok(Severity::Critical),
            _ => Err(DomainError::validation(format!("unknown severity '{s}'"))),
        }
    }
}

/// Declares the taxonomy in one place: variant, wire id (`"area.verb"`), and
/// category per action.
macro_rules! taxonomy {
    (
        $( $variant:ident => ($id:literal, $category:ident) ),+ $(,)?
    ) => {
        /// One kind of audited occurrence.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum AuditAction {
            $( $variant, )+
        }

        impl AuditAction {
            /// Every action in the taxonomy, in declaration order.
            pub const ALL: &'static [AuditAction] = &[
                $( AuditAction::$variant, )+
            ];

            /// Wire identifier (`"area.verb"`).
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( AuditAction::$variant => $id, )+
                }
            }

            /// The category this action belongs to. Total by construction.
            pub const fn category(self) -> AuditCategory {
                match self {
                    $( AuditAction::$variant => AuditCategory::$category, )+
                }
            }

            pub fn parse(id: &str) -> Result<Self, DomainError> {
                match id {
                    $( $id => Ok(AuditAction::$variant), )+
                    _ => Err(DomainError::validation(format!("unknown audit action '{id}'"))),
                }
            }
        }
    };
}

taxonomy! {
    Login => ("auth.login", Authentication),
    Logout => ("auth.logout", Authentication),
    LoginFailed => ("auth.login_failed", Authentication),
    PasswordChanged => ("auth.password_changed", Authentication),

    UserCreated => ("users.created", UserManagement),
    UserUpdated => ("users.updated", UserManagement),
    UserDeleted => ("users.deleted", UserManagement),
    UserDeactivated => ("users.deactivated", UserManagement),
    UserReactivated => ("users.reactivated", UserManagement),
    UserPasswordReset => ("users.password_reset", UserManagement),
    UserPermissionsChanged => ("users.permissions_changed", UserManagement),
    UserRoleChanged => ("users.role_changed", UserManagement),

    PersonCreated => ("persons.created", MembershipRecords),
    PersonUpdated => ("persons.updated", MembershipRecords),
    PersonDeleted => ("persons.deleted", MembershipRecords),

    ScheduleCreated => ("schedules.created", Scheduling),
    ScheduleUpdated => ("schedules.updated", Scheduling),
    ScheduleDeleted => ("schedules.deleted", Scheduling),

    ProgramCreated => ("programs.created", ActivityTypes),
    ProgramUpdated => ("programs.updated", ActivityTypes),
    ProgramDeleted => ("programs.deleted", ActivityTypes),

    RoleCreated => ("roles.created", RoleDefinitions),
    RoleUpdated => ("roles.updated", RoleDefinitions),
    RoleDeleted => ("roles.deleted", RoleDefinitions),

    LetterCreated => ("letters.created", Correspondence),
    LetterSent => ("letters.sent", Correspondence),

    SettingsUpdated => ("settings.updated", Settings),

    CleaningCreated => ("cleaning.created", CleaningRotations),
    CleaningUpdated => ("cleaning.updated", CleaningRotations),
    CleaningDeleted => ("cleaning.deleted", CleaningRotations),

    DataImported => ("data.imported", DataExchange),
    DataExported => ("data.exported", DataExchange),
}

impl AuditAction {
    /// Default severity: the enumerated high-impact actions are `warning`,
    /// everything else `info`.
    pub const fn default_severity(self) -> Severity {
        match self {
            AuditAction::LoginFailed
            | AuditAction::UserDeleted
            | AuditAction::UserDeactivated
            | AuditAction::UserPermissionsChanged
            | AuditAction::UserRoleChanged
            | AuditAction::PersonDeleted
            | AuditAction::ScheduleDeleted
            | AuditAction::ProgramDeleted
            | AuditAction::RoleDeleted
            | AuditAction::CleaningDeleted
            | AuditAction::DataExported => Severity::Warning,
            _ => Severity::Info,
        }
    }
}

impl core::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for AuditAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuditAction::parse(s)
    }
}

impl Serialize for AuditAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AuditAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        AuditAction::parse(&id).map_err(serde::de::Error::custom)
    }
}
