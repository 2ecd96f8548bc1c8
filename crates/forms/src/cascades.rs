//! Dropdown cascade state with its loaded option list.
//!
//! Combines the cascade selection contract from the core crate with the
//! option list a screen holds for the dependent dropdown. Changing the
//! parent clears both the selection and the stale options, and a fetch is
//! only wanted while the parent is usable and the options are empty.

use onboard_core::lookup::{DependentSelect, RefItem, RefList};
use onboard_core::types::RefId;

/// A dependent dropdown and its currently loaded options.
#[derive(Debug, Clone, Default)]
pub struct DependentList {
    select: DependentSelect,
    options: RefList,
}

impl DependentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parent(&self) -> Option<RefId> {
        self.select.parent()
    }

    pub fn selected(&self) -> Option<RefId> {
        self.select.selected()
    }

    pub fn options(&self) -> &RefList {
        &self.options
    }

    /// Change the parent. A different parent invalidates the loaded options
    /// along with the selection.
    pub fn set_parent(&mut self, parent: Option<RefId>) {
        if self.select.parent() != parent {
            self.options = RefList::default();
        }
        self.select.set_parent(parent);
    }

    /// Install a freshly fetched option list.
    pub fn set_options(&mut self, items: Vec<RefItem>) {
        self.options = RefList::new(items);
    }

    /// Select an option. Ids outside the loaded list are ignored so a stale
    /// click cannot install an invalid foreign key.
    pub fn select(&mut self, id: RefId) {
        if self.options.name_for_id(id).is_some() {
            self.select.select(id);
        }
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected().and_then(|id| self.options.name_for_id(id))
    }

    /// Whether the caller should fetch options now: the parent is usable
    /// and nothing is loaded yet.
    pub fn needs_fetch(&self) -> bool {
        self.select.fetch_enabled() && self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branches() -> Vec<RefItem> {
        vec![RefItem::new(21, "Guntur Main"), RefItem::new(22, "Tenali")]
    }

    #[test]
    fn fetch_wanted_only_with_parent_and_no_options() {
        let mut list = DependentList::new();
        assert!(!list.needs_fetch());

        list.set_parent(Some(2));
        assert!(list.needs_fetch());

        list.set_options(branches());
        assert!(!list.needs_fetch());
    }

    #[test]
    fn changing_parent_drops_options_and_selection() {
        let mut list = DependentList::new();
        list.set_parent(Some(2));
        list.set_options(branches());
        list.select(21);
        assert_eq!(list.selected_name(), Some("Guntur Main"));

        list.set_parent(Some(3));
        assert_eq!(list.selected(), None);
        assert!(list.options().is_empty());
        assert!(list.needs_fetch());
    }

    #[test]
    fn selecting_an_unknown_id_is_ignored() {
        let mut list = DependentList::new();
        list.set_parent(Some(2));
        list.set_options(branches());
        list.select(99);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn same_parent_keeps_loaded_options() {
        let mut list = DependentList::new();
        list.set_parent(Some(2));
        list.set_options(branches());
        list.set_parent(Some(2));
        assert_eq!(list.options().len(), 2);
    }
}
