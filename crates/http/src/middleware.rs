//! Identity and request-origin middleware.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use steward_audit::RequestOrigin;
use steward_authz::{AccessError, Principal, Role};

use crate::context::{PrincipalContext, TenantContext};
use crate::errors;

/// Seam to the authentication layer: turns a verified bearer token into a
/// [`Principal`]. Token verification itself (signatures, expiry) lives
/// behind this trait, outside the core.
pub trait IdentityProvider: Send + Sync {
    fn resolve(&self, token: &str) -> Option<Principal>;
}

#[derive(Clone)]
pub struct IdentityState {
    pub identity: Arc<dyn IdentityProvider>,
}

/// Authenticates the request and inserts [`TenantContext`] and
/// [`PrincipalContext`] extensions. A missing or unresolvable token is 401,
/// distinct from the 403 a later failed permission check produces.
pub async fn identity_middleware(
    State(state): State<IdentityState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = extract_bearer(req.headers()) else {
        return errors::access_error_response(&AccessError::NotAuthenticated);
    };

    let Some(principal) = state.identity.resolve(token) else {
        return errors::access_error_response(&AccessError::NotAuthenticated);
    };

    req.extensions_mut()
        .insert(TenantContext::new(principal.tenant_id));
    req.extensions_mut().insert(PrincipalContext::new(principal));

    next.run(req).await
}

/// Captures the technical context (caller IP, user agent, endpoint, method)
/// as a [`RequestOrigin`] extension for audit drafts built downstream.
pub async fn origin_middleware(mut req: Request<Body>, next: Next) -> Response {
    let origin = RequestOrigin {
        ip: client_ip(req.headers()),
        user_agent: header_string(req.headers(), axum::http::header::USER_AGENT.as_str()),
        endpoint: Some(req.uri().path().to_string()),
        method: Some(req.method().to_string()),
    };
    req.extensions_mut().insert(origin);
    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let token = headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

fn client_ip(headers: &HeaderMap) -> Option<String> {
    // First hop of X-Forwarded-For, when a proxy supplies it.
    header_string(headers, "x-forwarded-for")
        .map(|v| v.split(',').next().unwrap_or(&v).trim().to_string())
}

/// Identity provider for dev and tests: accepts tokens of the form
/// `<tenant-uuid>:<user-uuid>:<ROLE>`, optionally suffixed with `:superuser`.
/// Performs no verification whatsoever.
pub struct DevIdentityProvider;

impl IdentityProvider for DevIdentityProvider {
    fn resolve(&self, token: &str) -> Option<Principal> {
        let mut parts = token.split(':');
        let tenant_id = parts.next()?.parse().ok()?;
        let user_id = parts.next()?.parse().ok()?;
        let role: Role = parts.next()?.parse().ok()?;

        let mut principal = Principal::new(tenant_id, user_id, role);
        match parts.next() {
            None => Some(principal),
            Some("superuser") => {
                principal.superuser = true;
                Some(principal)
            }
            Some(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steward_core::{TenantId, UserId};

    #[test]
    fn bearer_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_bearer(&headers), None);

        headers.insert(axum::http::header::AUTHORIZATION, "Bearer abc".parse().unwrap());
        assert_eq!(extract_bearer(&headers), Some("abc"));

        headers.insert(axum::http::header::AUTHORIZATION, "Basic abc".parse().unwrap());
        assert_eq!(extract_bearer(&headers), None);

        headers.insert(axum::http::header::AUTHORIZATION, "Bearer   ".parse().unwrap());
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn client_ip_takes_the_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.9, 10.0.0.1".parse().unwrap());
        assert_eq!(client_ip(&headers), Some("203.0.113.9".to_string()));
    }

    #[test]
    fn dev_tokens_resolve_to_principals() {
        let tenant_id = TenantId::new();
        let user_id = UserId::new();

        let token = format!("{tenant_id}:{user_id}:EDITOR");
        let principal = DevIdentityProvider.resolve(&token).unwrap();
        assert_eq!(principal.role, Role::Editor);
        assert!(!principal.superuser);

        let token = format!("{tenant_id}:{user_id}:VIEWER:superuser");
        let principal = DevIdentityProvider.resolve(&token).unwrap();
        assert!(principal.superuser);

        assert!(DevIdentityProvider.resolve("garbage").is_none());
        assert!(DevIdentityProvider
            .resolve(&format!("{tenant_id}:{user_id}:WIZARD"))
            .is_none());
    }
}
