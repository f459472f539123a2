//! HTTP error envelopes.
//!
//! A denied request gets a generic body: which permission was missing is
//! logged server-side, never sent to the caller.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use steward_audit::AuditStoreError;
use steward_authz::AccessError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn access_error_response(err: &AccessError) -> axum::response::Response {
    match err {
        AccessError::NotAuthenticated => {
            json_error(StatusCode::UNAUTHORIZED, "not_authenticated", "authentication required")
        }
        AccessError::Forbidden { requirement } => {
            tracing::warn!(requirement = %requirement, "access denied");
            json_error(StatusCode::FORBIDDEN, "forbidden", "access denied")
        }
        AccessError::UnknownPermission(id) => {
            tracing::error!(permission = %id, "route references a permission outside the catalog");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "invalid_permission_reference",
                "configuration error",
            )
        }
    }
}

pub fn store_error_response(err: &AuditStoreError) -> axum::response::Response {
    tracing::error!(error = %err, "audit query failed");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "query_failed", "audit query failed")
}
