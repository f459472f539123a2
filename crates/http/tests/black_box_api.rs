//! Black-box tests over the assembled router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use steward_audit::{
    ActorContext, AuditAction, AuditDraft, AuditRecorder, AuditStore, InMemoryAuditStore,
};
use steward_authz::Role;
use steward_core::{TenantId, UserId};
use steward_http::{build_app, DevIdentityProvider};

fn token(tenant_id: TenantId, user_id: UserId, role: &str) -> String {
    format!("Bearer {tenant_id}:{user_id}:{role}")
}

fn app_with_store() -> (axum::Router, Arc<InMemoryAuditStore>) {
    let store = Arc::new(InMemoryAuditStore::new());
    let audit: Arc<dyn AuditStore> = store.clone();
    let app = build_app(Arc::new(DevIdentityProvider), audit);
    (app, store)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn seed_event(store: &Arc<InMemoryAuditStore>, tenant_id: TenantId, action: AuditAction) {
    let recorder = AuditRecorder::new(store.clone());
    let draft = AuditDraft::new(
        tenant_id,
        ActorContext {
            user_id: UserId::new(),
            email: "alice@example.org".to_string(),
            name: "Alice".to_string(),
            role: Role::Admin,
        },
        action,
        "user",
    );
    recorder.record(draft).await.expect("seed event");
}

#[tokio::test]
async fn missing_token_is_401_not_authenticated() {
    let (app, _) = app_with_store();

    let response = app
        .oneshot(Request::get("/audit/events").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "not_authenticated");
}

#[tokio::test]
async fn viewer_gets_a_generic_403_for_the_audit_log() {
    let (app, _) = app_with_store();
    let auth = token(TenantId::new(), UserId::new(), "VIEWER");

    let response = app
        .oneshot(
            Request::get("/audit/events")
                .header("authorization", &auth)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], "forbidden");
    // The denial must not leak which permission was missing.
    assert_eq!(body["message"], "access denied");
}

#[tokio::test]
async fn admin_lists_events_scoped_to_their_tenant() {
    let (app, store) = app_with_store();
    let tenant_id = TenantId::new();
    let other_tenant = TenantId::new();

    seed_event(&store, tenant_id, AuditAction::UserCreated).await;
    seed_event(&store, tenant_id, AuditAction::PersonDeleted).await;
    seed_event(&store, other_tenant, AuditAction::UserCreated).await;

    let auth = token(tenant_id, UserId::new(), "ADMIN");
    let response = app
        .oneshot(
            Request::get("/audit/events")
                .header("authorization", &auth)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["has_more"], false);
    assert_eq!(body["events"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn event_filters_and_bad_filter_values() {
    let (app, store) = app_with_store();
    let tenant_id = TenantId::new();
    seed_event(&store, tenant_id, AuditAction::UserCreated).await;
    seed_event(&store, tenant_id, AuditAction::PersonDeleted).await;

    let auth = token(tenant_id, UserId::new(), "ADMIN");
    let response = app
        .clone()
        .oneshot(
            Request::get("/audit/events?action=persons.deleted")
                .header("authorization", &auth)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);

    let response = app
        .oneshot(
            Request::get("/audit/events?action=persons.obliterated")
                .header("authorization", &auth)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn single_event_lookup_and_miss() {
    let (app, store) = app_with_store();
    let tenant_id = TenantId::new();
    seed_event(&store, tenant_id, AuditAction::SettingsUpdated).await;

    let auth = token(tenant_id, UserId::new(), "ADMIN");
    let listed = app
        .clone()
        .oneshot(
            Request::get("/audit/events")
                .header("authorization", &auth)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(listed).await;
    let event_id = body["events"][0]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/audit/events/{event_id}"))
                .header("authorization", &auth)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["event"]["action"], "settings.updated");

    let missing = uuid::Uuid::now_v7();
    let response = app
        .oneshot(
            Request::get(format!("/audit/events/{missing}"))
                .header("authorization", &auth)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_reports_totals() {
    let (app, store) = app_with_store();
    let tenant_id = TenantId::new();
    seed_event(&store, tenant_id, AuditAction::UserCreated).await;
    seed_event(&store, tenant_id, AuditAction::UserDeleted).await;

    let auth = token(tenant_id, UserId::new(), "ADMIN");
    let response = app
        .oneshot(
            Request::get("/audit/stats")
                .header("authorization", &auth)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["stats"]["total"], 2);
    assert_eq!(body["stats"]["by_category"]["user_management"], 2);
}

#[tokio::test]
async fn catalog_routes_require_users_view() {
    let (app, _) = app_with_store();
    let tenant_id = TenantId::new();

    let viewer = token(tenant_id, UserId::new(), "VIEWER");
    let response = app
        .clone()
        .oneshot(
            Request::get("/access/permissions")
                .header("authorization", &viewer)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let admin = token(tenant_id, UserId::new(), "ADMIN");
    let response = app
        .clone()
        .oneshot(
            Request::get("/access/permissions")
                .header("authorization", &admin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["categories"].as_array().unwrap().len(), 10);

    let response = app
        .oneshot(
            Request::get("/access/roles")
                .header("authorization", &admin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let roles = body["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 6);
    assert_eq!(roles[0]["role"], "SUPER_ADMIN");
}
