//! Append-only audit storage boundary.
//!
//! The trait makes no storage assumptions: the in-memory implementation here
//! serves tests and dev, a database-backed implementation slots in behind the
//! same seam. Implementations must never expose an update or delete path and
//! must scope every read to the requesting tenant.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use steward_core::{AuditEventId, TenantId};

use crate::event::AuditRecord;
use crate::query::{AuditFilter, AuditPage, AuditStats, Pagination};

/// Audit storage error. Infrastructure-side; the recorder converts these to
/// a logged `None`, never into a caller-visible failure.
#[derive(Debug, Error)]
pub enum AuditStoreError {
    #[error("audit storage unavailable: {0}")]
    Unavailable(String),

    #[error("invalid append: {0}")]
    InvalidAppend(String),
}

/// Append-only, tenant-scoped audit event store.
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// Append one record. The write may suspend (I/O-bound) but must not
    /// hold any lock shared with the authorization path.
    async fn append(&self, record: AuditRecord) -> Result<AuditEventId, AuditStoreError>;

    /// Fetch a single record, tenant-scoped.
    async fn get(
        &self,
        tenant_id: TenantId,
        id: AuditEventId,
    ) -> Result<Option<AuditRecord>, AuditStoreError>;

    /// Filtered, paginated listing, newest first.
    async fn query(
        &self,
        tenant_id: TenantId,
        filter: AuditFilter,
        pagination: Pagination,
    ) -> Result<AuditPage, AuditStoreError>;

    /// Summary statistics over events recorded at or after `since`.
    async fn stats(
        &self,
        tenant_id: TenantId,
        since: DateTime<Utc>,
    ) -> Result<AuditStats, AuditStoreError>;
}

#[async_trait]
impl<S> AuditStore for Arc<S>
where
    S: AuditStore + ?Sized,
{
    async fn append(&self, record: AuditRecord) -> Result<AuditEventId, AuditStoreError> {
        (**self).append(record).await
    }

    async fn get(
        &self,
        tenant_id: TenantId,
        id: AuditEventId,
    ) -> Result<Option<AuditRecord>, AuditStoreError> {
        (**self).get(tenant_id, id).await
    }

    async fn query(
        &self,
        tenant_id: TenantId,
        filter: AuditFilter,
        pagination: Pagination,
    ) -> Result<AuditPage, AuditStoreError> {
        (**self).query(tenant_id, filter, pagination).await
    }

    async fn stats(
        &self,
        tenant_id: TenantId,
        since: DateTime<Utc>,
    ) -> Result<AuditStats, AuditStoreError> {
        (**self).stats(tenant_id, since).await
    }
}

/// In-memory audit store.
///
/// Intended for tests/dev. Linear scans, not optimized for volume.
#[derive(Debug, Default)]
pub struct InMemoryAuditStore {
    records: RwLock<Vec<AuditRecord>>,
}

impl InMemoryAuditStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditStore for InMemoryAuditStore {
    async fn append(&self, record: AuditRecord) -> Result<AuditEventId, AuditStoreError> {
        let id = record.id;
        let mut records = self
            .records
            .write()
            .map_err(|_| AuditStoreError::Unavailable("lock poisoned".to_string()))?;
        records.push(record);
        Ok(id)
    }

    async fn get(
        &self,
        tenant_id: TenantId,
        id: AuditEventId,
    ) -> Result<Option<AuditRecord>, AuditStoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| AuditStoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(records
            .iter()
            .find(|r| r.tenant_id == tenant_id && r.id == id)
            .cloned())
    }

    async fn query(
        &self,
        tenant_id: TenantId,
        filter: AuditFilter,
        pagination: Pagination,
    ) -> Result<AuditPage, AuditStoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| AuditStoreError::Unavailable("lock poisoned".to_string()))?;

        let mut matching: Vec<AuditRecord> = records
            .iter()
            .filter(|r| r.tenant_id == tenant_id && filter.matches(r))
            .cloned()
            .collect();

        // Newest first; event ids (uuid v7) break timestamp ties.
        matching.sort_by(|a, b| {
            b.recorded_at
                .cmp(&a.recorded_at)
                .then_with(|| b.id.as_uuid().cmp(a.id.as_uuid()))
        });

        let total = matching.len() as u64;
        let events: Vec<AuditRecord> = matching
            .into_iter()
            .skip(pagination.offset as usize)
            .take(pagination.capped_limit() as usize)
            .collect();
        let has_more = u64::from(pagination.offset) + (events.len() as u64) < total;

        Ok(AuditPage {
            events,
            total,
            pagination,
            has_more,
        })
    }

    async fn stats(
        &self,
        tenant_id: TenantId,
        since: DateTime<Utc>,
    ) -> Result<AuditStats, AuditStoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| AuditStoreError::Unavailable("lock poisoned".to_string()))?;

        let in_window: Vec<AuditRecord> = records
            .iter()
            .filter(|r| r.tenant_id == tenant_id && r.recorded_at >= since)
            .cloned()
            .collect();

        Ok(AuditStats::compute(&in_window))
    }
}
