use crate::stmt::Condition;
use std::collections::HashMap;
use std::fmt;
use std::ops::BitOr;

/// CRUD permission bits granted on a model or record rule.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Permission(u8);

impl Permission {
    pub const NONE: Self = Self(0);
    pub const READ: Self = Self(1 << 0);
    pub const WRITE: Self = Self(1 << 1);
    pub const CREATE: Self = Self(1 << 2);
    pub const UNLINK: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Permission {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for Permission {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "Permission({:04b})", self.0)
    }
}

/// Per-group permissions attached to a model.
///
/// Populated and evaluated by the access-control subsystem; this core only
/// carries the handle.
#[derive(Debug, Default, Clone)]
pub struct AccessControlList {
    perms: HashMap<String, Permission>,
}

impl AccessControlList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&mut self, group: impl Into<String>, perm: Permission) {
        let entry = self.perms.entry(group.into()).or_default();
        *entry = *entry | perm;
    }

    pub fn granted(&self, group: &str) -> Permission {
        self.perms.get(group).copied().unwrap_or_default()
    }
}

/// A named row-level filter applied when a group exercises a permission.
#[derive(Debug, Clone)]
pub struct RecordRule {
    name: String,
    group: String,
    perms: Permission,
    condition: Condition,
}

impl RecordRule {
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        perms: Permission,
        condition: Condition,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            perms,
            condition,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn perms(&self) -> Permission {
        self.perms
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }
}

/// The record rules attached to a model, in registration order.
///
/// Evaluated by the record-rule subsystem; this core only carries the
/// handle.
#[derive(Debug, Default, Clone)]
pub struct RecordRuleRegistry {
    rules: Vec<RecordRule>,
}

impl RecordRuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, rule: RecordRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[RecordRule] {
        &self.rules
    }
}
