//! Application assembly.

use std::sync::Arc;

use axum::{middleware as axum_middleware, Extension, Router};

use steward_audit::AuditStore;

use crate::middleware::{identity_middleware, origin_middleware, IdentityProvider, IdentityState};
use crate::routes;

/// Services shared by the route handlers.
pub struct AppServices {
    pub audit: Arc<dyn AuditStore>,
}

/// Build the router: operator routes behind the identity and origin
/// middleware.
pub fn build_app(identity: Arc<dyn IdentityProvider>, audit: Arc<dyn AuditStore>) -> Router {
    let services = Arc::new(AppServices { audit });

    Router::new()
        .nest("/audit", routes::audit::router())
        .nest("/access", routes::access::router())
        .layer(axum_middleware::from_fn(origin_middleware))
        .layer(axum_middleware::from_fn_with_state(
            IdentityState { identity },
            identity_middleware,
        ))
        .layer(Extension(services))
}
