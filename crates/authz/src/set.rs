//! Effective permission set as a bitmask.
//!
//! Resolution runs on every protected request, so the derived set is a `Copy`
//! `u64` — computing it allocates nothing and every membership check is a
//! mask test. The catalog is asserted to fit 64 bits at compile time.

use serde::{Deserialize, Serialize};

use crate::catalog::Permission;

/// A set of catalog permissions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(u64);

const fn bit(permission: Permission) -> u64 {
    1u64 << (permission as u8)
}

const fn full_catalog() -> u64 {
    let mut bits = 0u64;
    let mut i = 0;
    while i < Permission::ALL.len() {
        bits |= bit(Permission::ALL[i]);
        i += 1;
    }
    bits
}

impl PermissionSet {
    pub const EMPTY: PermissionSet = PermissionSet(0);

    /// Every permission in the catalog.
    pub const ALL: PermissionSet = PermissionSet(full_catalog());

    pub const fn from_slice(permissions: &[Permission]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < permissions.len() {
            bits |= bit(permissions[i]);
            i += 1;
        }
        Self(bits)
    }

    pub const fn contains(self, permission: Permission) -> bool {
        self.0 & bit(permission) != 0
    }

    /// True iff this set intersects `permissions`. Empty input is false.
    pub const fn contains_any(self, permissions: &[Permission]) -> bool {
        self.0 & Self::from_slice(permissions).0 != 0
    }

    /// True iff `permissions` is a subset of this set. Empty input is
    /// vacuously true.
    pub const fn contains_all(self, permissions: &[Permission]) -> bool {
        let required = Self::from_slice(permissions).0;
        self.0 & required == required
    }

    pub fn insert(&mut self, permission: Permission) {
        self.0 |= bit(permission);
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate members in catalog order.
    pub fn iter(self) -> impl Iterator<Item = Permission> {
        Permission::ALL.iter().copied().filter(move |&p| self.contains(p))
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        let mut set = PermissionSet::EMPTY;
        for p in iter {
            set.insert(p);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_set_contains_every_catalog_permission() {
        for &p in Permission::ALL {
            assert!(PermissionSet::ALL.contains(p));
        }
        assert_eq!(PermissionSet::ALL.len() as usize, Permission::ALL.len());
    }

    #[test]
    fn from_slice_matches_membership() {
        let set = PermissionSet::from_slice(&[Permission::PersonsView, Permission::PersonsEdit]);
        assert!(set.contains(Permission::PersonsView));
        assert!(set.contains(Permission::PersonsEdit));
        assert!(!set.contains(Permission::PersonsDelete));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn any_and_all_edge_cases() {
        let set = PermissionSet::from_slice(&[Permission::SchedulesView]);
        assert!(!set.contains_any(&[]));
        assert!(set.contains_all(&[]));
        assert!(set.contains_any(&[Permission::SchedulesView, Permission::UsersDelete]));
        assert!(!set.contains_all(&[Permission::SchedulesView, Permission::UsersDelete]));
    }

    #[test]
    fn iter_returns_members_in_catalog_order() {
        let set = PermissionSet::from_slice(&[Permission::AuditView, Permission::PersonsView]);
        let members: Vec<_> = set.iter().collect();
        assert_eq!(members, vec![Permission::PersonsView, Permission::AuditView]);
    }
}
