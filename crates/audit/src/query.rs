//! Read-side query types for the audit trail.
//!
//! All queries are tenant-scoped, read-only and paginated by default.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use steward_core::UserId;

use crate::action::{AuditAction, AuditCategory, Severity};
use crate::event::AuditRecord;

/// Default trailing window for [`AuditStats`], in days.
pub const DEFAULT_STATS_WINDOW_DAYS: i64 = 30;

/// Pagination parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { limit: 50, offset: 0 }
    }
}

impl Pagination {
    /// Hard ceiling on page size.
    pub const MAX_LIMIT: u32 = 1000;

    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self {
            limit: limit.unwrap_or(50).min(Self::MAX_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }

    /// The limit a store must actually apply. The field is public, so the
    /// ceiling is re-applied here rather than trusted to the constructor.
    pub fn capped_limit(self) -> u32 {
        self.limit.min(Self::MAX_LIMIT)
    }
}

/// Filter criteria for audit queries. All fields are conjunctive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditFilter {
    pub actor_id: Option<UserId>,
    pub action: Option<AuditAction>,
    pub category: Option<AuditCategory>,
    pub resource_type: Option<String>,
    pub severity: Option<Severity>,
    pub recorded_after: Option<DateTime<Utc>>,
    pub recorded_before: Option<DateTime<Utc>>,
}

impl AuditFilter {
    pub fn matches(&self, record: &AuditRecord) -> bool {
        if let Some(actor_id) = self.actor_id {
            if record.actor.user_id != actor_id {
                return false;
            }
        }
        if let Some(action) = self.action {
            if record.action != action {
                return false;
            }
        }
        if let Some(category) = self.category {
            if record.category != category {
                return false;
            }
        }
        if let Some(resource_type) = &self.resource_type {
            if &record.resource_type != resource_type {
                return false;
            }
        }
        if let Some(severity) = self.severity {
            if record.severity != severity {
                return false;
            }
        }
        if let Some(after) = self.recorded_after {
            if record.recorded_at < after {
                return false;
            }
        }
        if let Some(before) = self.recorded_before {
            if record.recorded_at >= before {
                return false;
            }
        }
        true
    }
}

/// One page of audit events, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditPage {
    pub events: Vec<AuditRecord>,
    /// Matching events across all pages.
    pub total: u64,
    pub pagination: Pagination,
    pub has_more: bool,
}

/// Event volume for one actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorActivity {
    pub user_id: UserId,
    pub email: String,
    pub count: u64,
}

/// Event volume for one calendar day (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub day: NaiveDate,
    pub count: u64,
}

/// Summary statistics over a trailing window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditStats {
    pub total: u64,
    pub by_category: BTreeMap<AuditCategory, u64>,
    /// Top actors by event count, descending. At most ten entries.
    pub by_actor: Vec<ActorActivity>,
    /// Per-day counts, ascending by day.
    pub by_day: Vec<DailyCount>,
}

impl AuditStats {
    /// Compute statistics over records already scoped to one tenant and the
    /// stats window.
    pub fn compute(records: &[AuditRecord]) -> Self {
        let mut by_category: BTreeMap<AuditCategory, u64> = BTreeMap::new();
        let mut by_actor: BTreeMap<UserId, (String, u64)> = BTreeMap::new();
        let mut by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();

        for record in records {
            *by_category.entry(record.category).or_default() += 1;
            let actor = by_actor
                .entry(record.actor.user_id)
                .or_insert_with(|| (record.actor.email.clone(), 0));
            actor.1 += 1;
            *by_day.entry(record.recorded_at.date_naive()).or_default() += 1;
        }

        let mut by_actor: Vec<ActorActivity> = by_actor
            .into_iter()
            .map(|(user_id, (email, count))| ActorActivity { user_id, email, count })
            .collect();
        by_actor.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.email.cmp(&b.email)));
        by_actor.truncate(10);

        Self {
            total: records.len() as u64,
            by_category,
            by_actor,
            by_day: by_day
                .into_iter()
                .map(|(day, count)| DailyCount { day, count })
                .collect(),
        }
    }
}
