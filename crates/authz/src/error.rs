//! Access error kinds.

use thiserror::Error;

use crate::catalog::Permission;

/// What a failed guard check required.
///
/// Carried for server-side diagnostics only; the user-visible rendering of a
/// denial is always the generic "access denied".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Permission(Permission),
    AnyOf(Vec<Permission>),
    AllOf(Vec<Permission>),
    TenantAdmin,
    Superuser,
    /// Managing a super-administrator account requires a super-administrator
    /// actor.
    ProtectedAccount,
    /// No actor may change their own role through the self-service path.
    OwnRoleChange,
}

impl core::fmt::Display for Requirement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Requirement::Permission(p) => write!(f, "permission '{p}'"),
            Requirement::AnyOf(ps) => {
                write!(f, "any of [")?;
                for (i, p) in ps.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{p}'")?;
                }
                write!(f, "]")
            }
            Requirement::AllOf(ps) => {
                write!(f, "all of [")?;
                for (i, p) in ps.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{p}'")?;
                }
                write!(f, "]")
            }
            Requirement::TenantAdmin => write!(f, "tenant-admin tier"),
            Requirement::Superuser => write!(f, "superuser flag"),
            Requirement::ProtectedAccount => write!(f, "rule 'protected_account'"),
            Requirement::OwnRoleChange => write!(f, "rule 'own_role_change'"),
        }
    }
}

/// Authorization failure.
///
/// `Forbidden` deliberately renders as a generic "access denied" — the failed
/// requirement is for logs, not for the denied caller, to avoid permission
/// enumeration by probing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// No identity present on the request. Distinct from `Forbidden`.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Identity present but the check did not pass.
    #[error("access denied")]
    Forbidden { requirement: Requirement },

    /// A permission identifier outside the catalog was referenced.
    ///
    /// This is a configuration error, surfaced where the identifier is parsed
    /// (override lists, query filters) rather than per guarded request.
    #[error("unknown permission identifier '{0}'")]
    UnknownPermission(String),
}

impl AccessError {
    pub fn forbidden(requirement: Requirement) -> Self {
        Self::Forbidden { requirement }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_display_does_not_name_the_permission() {
        let err = AccessError::forbidden(Requirement::Permission(Permission::UsersDelete));
        assert_eq!(err.to_string(), "access denied");
    }

    #[test]
    fn requirement_display_names_the_permission_for_logs() {
        let req = Requirement::Permission(Permission::UsersDelete);
        assert_eq!(req.to_string(), "permission 'users:delete'");
    }
}
