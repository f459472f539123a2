//! `steward-audit` — append-only audit trail.
//!
//! Records every state-changing operation with enough detail to reconstruct
//! what changed, who changed it, and why it was allowed. Recording is
//! best-effort advisory: a failed audit write is logged and swallowed, never
//! propagated into the business operation that triggered it.

pub mod action;
pub mod diff;
pub mod event;
pub mod query;
pub mod recorder;
pub mod store;

pub use action::{AuditAction, AuditCategory, Severity};
pub use diff::diff;
pub use event::{ActorContext, AuditDraft, AuditRecord, ChangeMap, FieldChange, RequestOrigin};
pub use query::{
    ActorActivity, AuditFilter, AuditPage, AuditStats, DailyCount, Pagination,
    DEFAULT_STATS_WINDOW_DAYS,
};
pub use recorder::AuditRecorder;
pub use store::{AuditStore, AuditStoreError, InMemoryAuditStore};
