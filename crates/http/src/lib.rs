//! `steward-http` — request-boundary adapter.
//!
//! Hosts the core behind axum: identity middleware populates the request
//! contexts, guard failures map to non-leaking 401/403 envelopes, and the
//! read-only operator routes serve the audit trail and the permission/role
//! catalog.

pub mod app;
pub mod context;
pub mod errors;
pub mod middleware;
pub mod routes;

pub use app::{build_app, AppServices};
pub use context::{PrincipalContext, TenantContext};
pub use middleware::{DevIdentityProvider, IdentityProvider, IdentityState};
