//! Audit trail endpoints for operator visibility.
//!
//! Read-only: listing with filters and pagination, single-event lookup, and
//! summary statistics. All gated on `audit:view` and scoped to the caller's
//! tenant.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use uuid::Uuid;

use steward_audit::{
    AuditAction, AuditCategory, AuditFilter, Pagination, Severity, DEFAULT_STATS_WINDOW_DAYS,
};
use steward_authz::Permission;
use steward_core::{AuditEventId, UserId};

use crate::app::AppServices;
use crate::context::{PrincipalContext, TenantContext};
use crate::errors;

#[derive(Debug, Deserialize)]
pub struct AuditListQuery {
    pub actor_id: Option<UserId>,
    pub action: Option<String>,
    pub category: Option<String>,
    pub severity: Option<String>,
    pub resource_type: Option<String>,
    pub recorded_after: Option<DateTime<Utc>>,
    pub recorded_before: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct AuditStatsQuery {
    /// Trailing window in days; defaults to 30.
    pub days: Option<i64>,
}

pub fn router() -> Router {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/:event_id", get(get_event))
        .route("/stats", get(stats))
}

/// GET /audit/events — filtered, paginated listing, newest first.
pub async fn list_events(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<AuditListQuery>,
) -> axum::response::Response {
    if let Err(e) = principal.require(Permission::AuditView) {
        return errors::access_error_response(&e);
    }

    let (filter, pagination) = match build_filter(query) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match services.audit.query(tenant.tenant_id(), filter, pagination).await {
        Ok(page) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "events": page.events,
                "total": page.total,
                "pagination": page.pagination,
                "has_more": page.has_more,
            })),
        )
            .into_response(),
        Err(e) => errors::store_error_response(&e),
    }
}

fn build_filter(
    query: AuditListQuery,
) -> Result<(AuditFilter, Pagination), axum::response::Response> {
    let action = match query.action.as_deref().map(str::parse::<AuditAction>).transpose() {
        Ok(action) => action,
        Err(e) => return Err(errors::json_error(StatusCode::BAD_REQUEST, "invalid_filter", e.to_string())),
    };
    let category = match query.category.as_deref().map(str::parse::<AuditCategory>).transpose() {
        Ok(category) => category,
        Err(e) => return Err(errors::json_error(StatusCode::BAD_REQUEST, "invalid_filter", e.to_string())),
    };
    let severity = match query.severity.as_deref().map(str::parse::<Severity>).transpose() {
        Ok(severity) => severity,
        Err(e) => return Err(errors::json_error(StatusCode::BAD_REQUEST, "invalid_filter", e.to_string())),
    };

    Ok((
        AuditFilter {
            actor_id: query.actor_id,
            action,
            category,
            resource_type: query.resource_type,
            severity,
            recorded_after: query.recorded_after,
            recorded_before: query.recorded_before,
        },
        Pagination::new(query.limit, query.offset),
    ))
}

/// GET /audit/events/:event_id — single event lookup.
pub async fn get_event(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
    Path(event_id): Path<Uuid>,
) -> axum::response::Response {
    if let Err(e) = principal.require(Permission::AuditView) {
        return errors::access_error_response(&e);
    }

    match services
        .audit
        .get(tenant.tenant_id(), AuditEventId::from_uuid(event_id))
        .await
    {
        Ok(Some(event)) => (StatusCode::OK, Json(serde_json::json!({ "event": event }))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "event not found"),
        Err(e) => errors::store_error_response(&e),
    }
}

/// GET /audit/stats?days=30 — summary statistics over a trailing window.
pub async fn stats(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<TenantContext>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<AuditStatsQuery>,
) -> axum::response::Response {
    if let Err(e) = principal.require(Permission::AuditView) {
        return errors::access_error_response(&e);
    }

    let days = query.days.unwrap_or(DEFAULT_STATS_WINDOW_DAYS).clamp(1, 365);
    let since = Utc::now() - Duration::days(days);

    match services.audit.stats(tenant.tenant_id(), since).await {
        Ok(stats) => (StatusCode::OK, Json(serde_json::json!({ "stats": stats }))).into_response(),
        Err(e) => errors::store_error_response(&e),
    }
}
