//! `steward-authz` — pure authorization boundary.
//!
//! This crate answers one question: *may this identity perform this
//! operation?* It is intentionally decoupled from HTTP and storage — the
//! catalog and policy tables are fixed at build time, resolution is a pure
//! function, and the guard performs no I/O.

pub mod catalog;
pub mod error;
pub mod guard;
pub mod policy;
pub mod principal;
pub mod resolver;
pub mod roles;
pub mod set;

pub use catalog::{Permission, PermissionCategory};
pub use error::{AccessError, Requirement};
pub use guard::{
    ensure_not_self_role_change, ensure_target_account_manageable, require, require_all,
    require_any, require_superuser, require_tenant_admin,
};
pub use policy::default_permissions;
pub use principal::Principal;
pub use resolver::{effective_permissions, has, has_all, has_any};
pub use roles::Role;
pub use set::PermissionSet;
