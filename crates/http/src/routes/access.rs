//! Permission and role catalog endpoints.
//!
//! Serves the closed catalog grouped by category, and the role tiers with
//! their default permission sets, for UI grouping and operator inspection.
//! Gated on `users:view`.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use steward_authz::{default_permissions, Permission, PermissionCategory, Role};

use crate::context::PrincipalContext;
use crate::errors;

pub fn router() -> Router {
    Router::new()
        .route("/permissions", get(list_permissions))
        .route("/roles", get(list_roles))
}

/// GET /access/permissions — the catalog, grouped in category display order.
pub async fn list_permissions(
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(e) = principal.require(Permission::UsersView) {
        return errors::access_error_response(&e);
    }

    let categories: Vec<_> = PermissionCategory::ALL
        .iter()
        .map(|&category| {
            let permissions: Vec<_> = Permission::ALL
                .iter()
                .filter(|p| p.category() == category)
                .map(|p| {
                    serde_json::json!({
                        "id": p.as_str(),
                        "label": p.label(),
                        "description": p.description(),
                    })
                })
                .collect();
            serde_json::json!({
                "category": category,
                "label": category.label(),
                "permissions": permissions,
            })
        })
        .collect();

    (StatusCode::OK, Json(serde_json::json!({ "categories": categories }))).into_response()
}

/// GET /access/roles — the tiers and their default permission sets.
pub async fn list_roles(
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(e) = principal.require(Permission::UsersView) {
        return errors::access_error_response(&e);
    }

    let roles: Vec<_> = Role::ALL
        .iter()
        .map(|&role| {
            serde_json::json!({
                "role": role,
                "label": role.label(),
                "tenant_admin": role.is_tenant_admin(),
                "permissions": default_permissions(role),
            })
        })
        .collect();

    (StatusCode::OK, Json(serde_json::json!({ "roles": roles }))).into_response()
}
