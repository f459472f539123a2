//! Audit event model.
//!
//! Two-stage lifecycle: the business layer hands the recorder an
//! [`AuditDraft`] (classification and outcome fields optional); the recorder
//! validates it, fills defaults from the taxonomy, and produces an immutable
//! [`AuditRecord`] with a server-assigned id and timestamp. Records are
//! append-only — no update or delete path exists.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use steward_authz::Role;
use steward_core::{AuditEventId, TenantId, UserId};

use crate::action::{AuditAction, AuditCategory, Severity};

/// Who performed the operation, denormalized at write time so history stays
/// readable even if the account is later renamed or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorContext {
    pub user_id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Technical context of the request that triggered the operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOrigin {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub endpoint: Option<String>,
    pub method: Option<String>,
}

/// One field's old and new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub old: JsonValue,
    pub new: JsonValue,
}

/// Field-level change map, keyed by field name (stable order).
pub type ChangeMap = BTreeMap<String, FieldChange>;

/// A caller-supplied audit event, not yet validated or classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditDraft {
    pub tenant_id: TenantId,
    pub actor: ActorContext,
    pub action: AuditAction,

    /// Derived from the action when absent.
    pub category: Option<AuditCategory>,
    /// Defaulted from the action's severity table when absent.
    pub severity: Option<Severity>,

    pub resource_type: String,
    pub resource_id: Option<String>,
    pub resource_name: Option<String>,

    pub previous_values: Option<JsonValue>,
    pub new_values: Option<JsonValue>,
    pub changes: Option<ChangeMap>,

    /// Defaults to true when absent: events describe completed attempts.
    pub success: Option<bool>,
    pub error_message: Option<String>,
    pub metadata: Option<JsonValue>,

    pub origin: RequestOrigin,
}

impl AuditDraft {
    pub fn new(
        tenant_id: TenantId,
        actor: ActorContext,
        action: AuditAction,
        resource_type: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id,
            actor,
            action,
            category: None,
            severity: None,
            resource_type: resource_type.into(),
            resource_id: None,
            resource_name: None,
            previous_values: None,
            new_values: None,
            changes: None,
            success: None,
            error_message: None,
            metadata: None,
            origin: RequestOrigin::default(),
        }
    }

    pub fn with_resource(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.resource_id = Some(id.into());
        self.resource_name = Some(name.into());
        self
    }

    pub fn with_snapshots(mut self, previous: JsonValue, new: JsonValue) -> Self {
        self.previous_values = Some(previous);
        self.new_values = Some(new);
        self
    }

    pub fn with_changes(mut self, changes: ChangeMap) -> Self {
        self.changes = Some(changes);
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_category(mut self, category: AuditCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_origin(mut self, origin: RequestOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Mark the attempt as failed with an error message.
    pub fn failed(mut self, error_message: impl Into<String>) -> Self {
        self.success = Some(false);
        self.error_message = Some(error_message.into());
        self
    }
}

/// A persisted audit event. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: AuditEventId,
    pub tenant_id: TenantId,
    pub actor: ActorContext,
    pub action: AuditAction,
    pub category: AuditCategory,
    pub severity: Severity,

    pub resource_type: String,
    pub resource_id: Option<String>,
    pub resource_name: Option<String>,

    pub previous_values: Option<JsonValue>,
    pub new_values: Option<JsonValue>,
    pub changes: Option<ChangeMap>,

    pub success: bool,
    pub error_message: Option<String>,
    pub metadata: Option<JsonValue>,

    pub origin: RequestOrigin,
    pub recorded_at: DateTime<Utc>,
}
