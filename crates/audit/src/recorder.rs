//! Audit recorder: validates, classifies, and appends.
//!
//! Recording is best-effort. A draft that fails validation or a store that
//! fails the append is logged through `tracing` and reported as `None` —
//! the business operation that triggered the event has already completed,
//! and an audit failure must never unwind it.

use chrono::Utc;

use steward_core::{AuditEventId, DomainError};

use crate::event::{AuditDraft, AuditRecord};
use crate::store::AuditStore;

/// Appends audit events to a backing store.
pub struct AuditRecorder<S> {
    store: S,
}

impl<S: AuditStore> AuditRecorder<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate and persist one event.
    ///
    /// Fills category and severity from the action taxonomy when absent and
    /// defaults `success` to true. Returns the persisted record, or `None`
    /// when validation or the append failed (logged locally, not propagated).
    pub async fn record(&self, draft: AuditDraft) -> Option<AuditRecord> {
        let record = match finalize(draft) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "audit event rejected");
                return None;
            }
        };

        match self.store.append(record.clone()).await {
            Ok(_) => Some(record),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    action = %record.action,
                    tenant_id = %record.tenant_id,
                    "audit write failed; event dropped"
                );
                None
            }
        }
    }
}

/// Validate required fields and fill taxonomy defaults.
fn finalize(draft: AuditDraft) -> Result<AuditRecord, DomainError> {
    if draft.actor.email.trim().is_empty() {
        return Err(DomainError::validation("actor email is required"));
    }
    if draft.actor.name.trim().is_empty() {
        return Err(DomainError::validation("actor name is required"));
    }
    if draft.resource_type.trim().is_empty() {
        return Err(DomainError::validation("resource type is required"));
    }

    Ok(AuditRecord {
        id: AuditEventId::new(),
        tenant_id: draft.tenant_id,
        actor: draft.actor,
        action: draft.action,
        category: draft.category.unwrap_or_else(|| draft.action.category()),
        severity: draft.severity.unwrap_or_else(|| draft.action.default_severity()),
        resource_type: draft.resource_type,
        resource_id: draft.resource_id,
        resource_name: draft.resource_name,
        previous_values: draft.previous_values,
        new_values: draft.new_values,
        changes: draft.changes,
        success: draft.success.unwrap_or(true),
        error_message: draft.error_message,
        metadata: draft.metadata,
        origin: draft.origin,
        recorded_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{AuditAction, AuditCategory, Severity};
    use crate::event::ActorContext;
    use crate::query::{AuditFilter, AuditPage, AuditStats, Pagination};
    use crate::store::{AuditStoreError, InMemoryAuditStore};
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use steward_authz::Role;
    use steward_core::{TenantId, UserId};

    fn draft(action: AuditAction) -> AuditDraft {
        AuditDraft::new(
            TenantId::new(),
            ActorContext {
                user_id: UserId::new(),
                email: "alice@example.org".to_string(),
                name: "Alice".to_string(),
                role: Role::Admin,
            },
            action,
            "user",
        )
    }

    #[tokio::test]
    async fn fills_category_severity_and_success_from_defaults() {
        let recorder = AuditRecorder::new(InMemoryAuditStore::new());
        let record = recorder.record(draft(AuditAction::UserDeleted)).await.unwrap();

        assert_eq!(record.category, AuditCategory::UserManagement);
        assert_eq!(record.severity, Severity::Warning);
        assert!(record.success);
    }

    #[tokio::test]
    async fn explicit_classification_is_preserved() {
        let recorder = AuditRecorder::new(InMemoryAuditStore::new());
        let record = recorder
            .record(
                draft(AuditAction::UserUpdated)
                    .with_category(AuditCategory::Settings)
                    .with_severity(Severity::Critical),
            )
            .await
            .unwrap();

        assert_eq!(record.category, AuditCategory::Settings);
        assert_eq!(record.severity, Severity::Critical);
    }

    #[tokio::test]
    async fn failed_outcome_is_recorded_verbatim() {
        let recorder = AuditRecorder::new(InMemoryAuditStore::new());
        let record = recorder
            .record(draft(AuditAction::LoginFailed).failed("bad credentials"))
            .await
            .unwrap();

        assert!(!record.success);
        assert_eq!(record.error_message.as_deref(), Some("bad credentials"));
    }

    #[tokio::test]
    async fn blank_required_fields_are_rejected() {
        let recorder = AuditRecorder::new(InMemoryAuditStore::new());

        let mut d = draft(AuditAction::UserCreated);
        d.actor.email = "  ".to_string();
        assert!(recorder.record(d).await.is_none());

        let mut d = draft(AuditAction::UserCreated);
        d.resource_type = String::new();
        assert!(recorder.record(d).await.is_none());
    }

    #[tokio::test]
    async fn persisted_record_is_queryable() {
        let store = std::sync::Arc::new(InMemoryAuditStore::new());
        let recorder = AuditRecorder::new(store.clone());

        let record = recorder.record(draft(AuditAction::UserCreated)).await.unwrap();
        let fetched = store.get(record.tenant_id, record.id).await.unwrap();
        assert_eq!(fetched, Some(record));
    }

    struct FailingStore;

    #[async_trait]
    impl AuditStore for FailingStore {
        async fn append(&self, _record: AuditRecord) -> Result<AuditEventId, AuditStoreError> {
            Err(AuditStoreError::Unavailable("disk full".to_string()))
        }

        async fn get(
            &self,
            _tenant_id: TenantId,
            _id: AuditEventId,
        ) -> Result<Option<AuditRecord>, AuditStoreError> {
            Err(AuditStoreError::Unavailable("disk full".to_string()))
        }

        async fn query(
            &self,
            _tenant_id: TenantId,
            _filter: AuditFilter,
            _pagination: Pagination,
        ) -> Result<AuditPage, AuditStoreError> {
            Err(AuditStoreError::Unavailable("disk full".to_string()))
        }

        async fn stats(
            &self,
            _tenant_id: TenantId,
            _since: DateTime<Utc>,
        ) -> Result<AuditStats, AuditStoreError> {
            Err(AuditStoreError::Unavailable("disk full".to_string()))
        }
    }

    #[tokio::test]
    async fn storage_failure_returns_none_instead_of_propagating() {
        let recorder = AuditRecorder::new(FailingStore);
        assert!(recorder.record(draft(AuditAction::UserCreated)).await.is_none());
    }
}
