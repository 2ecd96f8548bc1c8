//! Reference-data lookup and dropdown cascade primitives.
//!
//! Every dropdown on the forms is backed by a server list of `{ id, name }`
//! pairs. [`RefList`] is the one bidirectional id<->label lookup used
//! everywhere instead of re-deriving `find`-by-name per screen, and
//! [`DependentSelect`] captures the cascade contract: a dependent value is
//! cleared when its parent changes, and a dependent list may only be fetched
//! once the parent id is a non-empty, non-zero value.

use serde::{Deserialize, Serialize};

use crate::types::RefId;

// ---------------------------------------------------------------------------
// Reference lists
// ---------------------------------------------------------------------------

/// One entry of a server-provided reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefItem {
    pub id: RefId,
    pub name: String,
}

impl RefItem {
    pub fn new(id: RefId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// An in-memory reference list with bidirectional id<->label lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefList(Vec<RefItem>);

impl RefList {
    pub fn new(items: Vec<RefItem>) -> Self {
        Self(items)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RefItem> {
        self.0.iter()
    }

    /// Resolve a display label to its id. Case-insensitive, trimmed.
    pub fn id_for_name(&self, name: &str) -> Option<RefId> {
        let needle = name.trim().to_lowercase();
        self.0
            .iter()
            .find(|item| item.name.trim().to_lowercase() == needle)
            .map(|item| item.id)
    }

    /// Resolve an id to its display label.
    pub fn name_for_id(&self, id: RefId) -> Option<&str> {
        self.0
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.name.as_str())
    }

    /// Find the first entry whose label contains `needle` (case-insensitive).
    ///
    /// Used for vocabulary-driven lookups such as finding the "Teaching" and
    /// "Non-Teaching" employee types without hardcoding their ids.
    pub fn find_containing(&self, needle: &str) -> Option<&RefItem> {
        let needle = needle.to_lowercase();
        self.0
            .iter()
            .find(|item| item.name.to_lowercase().contains(&needle))
    }
}

impl From<Vec<RefItem>> for RefList {
    fn from(items: Vec<RefItem>) -> Self {
        Self(items)
    }
}

// ---------------------------------------------------------------------------
// Dropdown cascades
// ---------------------------------------------------------------------------

/// Selection state for a dropdown whose option list depends on a parent
/// dropdown's value (district -> city, qualification -> degree,
/// employee type -> department, department -> designation, bank -> branch).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependentSelect {
    parent: Option<RefId>,
    selected: Option<RefId>,
}

impl DependentSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parent(&self) -> Option<RefId> {
        self.parent
    }

    pub fn selected(&self) -> Option<RefId> {
        self.selected
    }

    /// Change the parent value. If it differs from the current parent, the
    /// dependent selection is cleared so a now-invalid foreign key is never
    /// retained.
    pub fn set_parent(&mut self, parent: Option<RefId>) {
        if self.parent != parent {
            self.selected = None;
        }
        self.parent = parent;
    }

    /// Select a dependent value.
    pub fn select(&mut self, id: RefId) {
        self.selected = Some(id);
    }

    /// Whether the dependent option list may be requested: only once the
    /// parent id is present and non-zero.
    pub fn fetch_enabled(&self) -> bool {
        matches!(self.parent, Some(id) if id > 0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn banks() -> RefList {
        RefList::new(vec![
            RefItem::new(1, "State Bank"),
            RefItem::new(2, "Union Bank"),
            RefItem::new(3, "Axis Bank"),
        ])
    }

    #[test]
    fn id_for_name_is_case_insensitive() {
        let list = banks();
        assert_eq!(list.id_for_name("state bank"), Some(1));
        assert_eq!(list.id_for_name("  UNION BANK "), Some(2));
        assert_eq!(list.id_for_name("unknown"), None);
    }

    #[test]
    fn name_for_id_resolves() {
        let list = banks();
        assert_eq!(list.name_for_id(3), Some("Axis Bank"));
        assert_eq!(list.name_for_id(99), None);
    }

    #[test]
    fn find_containing_matches_substring() {
        let list = RefList::new(vec![
            RefItem::new(10, "Teaching"),
            RefItem::new(11, "Non-Teaching"),
        ]);
        assert_eq!(list.find_containing("non").unwrap().id, 11);
        // First match wins for the bare substring.
        assert_eq!(list.find_containing("teach").unwrap().id, 10);
    }

    #[test]
    fn changing_parent_clears_dependent_selection() {
        let mut select = DependentSelect::new();
        select.set_parent(Some(5));
        select.select(42);
        assert_eq!(select.selected(), Some(42));

        select.set_parent(Some(6));
        assert_eq!(select.selected(), None, "stale child id must be dropped");
    }

    #[test]
    fn resetting_same_parent_keeps_selection() {
        let mut select = DependentSelect::new();
        select.set_parent(Some(5));
        select.select(42);
        select.set_parent(Some(5));
        assert_eq!(select.selected(), Some(42));
    }

    #[test]
    fn clearing_parent_clears_selection_and_disables_fetch() {
        let mut select = DependentSelect::new();
        select.set_parent(Some(5));
        select.select(42);
        select.set_parent(None);
        assert_eq!(select.selected(), None);
        assert!(!select.fetch_enabled());
    }

    #[test]
    fn fetch_gated_on_nonzero_parent() {
        let mut select = DependentSelect::new();
        assert!(!select.fetch_enabled());
        select.set_parent(Some(0));
        assert!(!select.fetch_enabled());
        select.set_parent(Some(7));
        assert!(select.fetch_enabled());
    }
}
