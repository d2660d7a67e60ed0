//! Comparison list service
//!
//! Holds the user's selection of vehicles to compare. Every change is
//! written through to the key-value store and announced to the notifier.
//! Storage trouble is logged and otherwise ignored: the in-memory list
//! stays authoritative for the session.

use serde::Serialize;
use showcase_store::{decode_selection, encode_selection, KeyValueStore, COMPARISON_KEY, MAX_COMPARISON};

use crate::app::notifications::{Notice, NoticeKind, Notifier};

/// What happened to an add request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
    ListFull,
}

pub struct ComparisonList<S, N> {
    ids: Vec<String>,
    store: S,
    notifier: N,
}

impl<S: KeyValueStore, N: Notifier> ComparisonList<S, N> {
    /// Restore the persisted list. Missing, unreadable or invalid data
    /// starts an empty list.
    pub fn load(store: S, notifier: N) -> Self {
        let ids = match store.get(COMPARISON_KEY) {
            Ok(Some(raw)) => decode_selection(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read comparison list, starting empty");
                Vec::new()
            }
        };
        tracing::debug!(count = ids.len(), "comparison list loaded");
        Self { ids, store, notifier }
    }

    /// Selected ids, in insertion order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARISON
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn add(&mut self, id: &str) -> AddOutcome {
        if self.contains(id) {
            self.notifier.notify(Notice::new(NoticeKind::AlreadyPresent));
            return AddOutcome::AlreadyPresent;
        }
        if self.is_full() {
            self.notifier.notify(Notice::new(NoticeKind::ListFull));
            return AddOutcome::ListFull;
        }

        self.ids.push(id.to_string());
        self.persist();
        self.notifier.notify(Notice::new(NoticeKind::Added));
        AddOutcome::Added
    }

    /// Remove `id` if present. Returns whether it was in the list.
    ///
    /// Always persists and notifies, even for an absent id.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|i| i != id);
        self.persist();
        self.notifier.notify(Notice::new(NoticeKind::Removed));
        self.ids.len() != before
    }

    /// Empty the list. Notifies only when something was cleared.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.ids.is_empty();
        self.ids.clear();
        self.persist();
        if had_any {
            self.notifier.notify(Notice::new(NoticeKind::Cleared));
        }
        had_any
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, N) {
        (self.store, self.notifier)
    }

    fn persist(&mut self) {
        let encoded = encode_selection(&self.ids);
        if let Err(e) = self.store.set(COMPARISON_KEY, &encoded) {
            tracing::warn!(error = %e, "could not save comparison list");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_store::MemoryStore;
    use showcase_types::StorageError;

    fn kinds(notices: &[Notice]) -> Vec<NoticeKind> {
        notices.iter().map(|n| n.kind).collect()
    }

    fn list() -> ComparisonList<MemoryStore, Vec<Notice>> {
        ComparisonList::load(MemoryStore::new(), Vec::new())
    }

    #[test]
    fn test_add_persists_and_notifies() {
        let mut list = list();
        assert_eq!(list.add("3"), AddOutcome::Added);

        assert_eq!(list.ids(), ["3".to_string()]);
        assert_eq!(list.store().get(COMPARISON_KEY).unwrap().as_deref(), Some(r#"["3"]"#));
        assert_eq!(kinds(list.notifier()), vec![NoticeKind::Added]);
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut list = list();
        list.add("3");
        assert_eq!(list.add("3"), AddOutcome::AlreadyPresent);

        assert_eq!(list.len(), 1);
        assert_eq!(
            kinds(list.notifier()),
            vec![NoticeKind::Added, NoticeKind::AlreadyPresent]
        );
    }

    #[test]
    fn test_fifth_add_is_rejected() {
        let mut list = list();
        for id in ["1", "2", "3", "4"] {
            assert_eq!(list.add(id), AddOutcome::Added);
        }
        assert!(list.is_full());
        assert_eq!(list.add("5"), AddOutcome::ListFull);

        assert_eq!(list.ids(), ["1", "2", "3", "4"].map(String::from));
        assert_eq!(list.notifier().last().map(|n| n.kind), Some(NoticeKind::ListFull));
        assert_eq!(
            list.store().get(COMPARISON_KEY).unwrap().as_deref(),
            Some(r#"["1","2","3","4"]"#)
        );
    }

    #[test]
    fn test_duplicate_checked_before_capacity() {
        let mut list = list();
        for id in ["1", "2", "3", "4"] {
            list.add(id);
        }
        assert_eq!(list.add("2"), AddOutcome::AlreadyPresent);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut list = list();
        for id in ["1", "2", "3"] {
            list.add(id);
        }
        assert!(list.remove("2"));
        assert_eq!(list.ids(), ["1", "3"].map(String::from));
        assert_eq!(list.store().get(COMPARISON_KEY).unwrap().as_deref(), Some(r#"["1","3"]"#));
    }

    #[test]
    fn test_remove_absent_still_notifies() {
        let mut list = list();
        list.add("1");
        assert!(!list.remove("9"));
        assert_eq!(list.ids(), ["1".to_string()]);
        assert_eq!(list.notifier().last().map(|n| n.kind), Some(NoticeKind::Removed));
    }

    #[test]
    fn test_clear_empty_is_silent() {
        let mut list = list();
        assert!(!list.clear());
        assert!(list.notifier().is_empty());
        assert_eq!(list.store().get(COMPARISON_KEY).unwrap().as_deref(), Some("[]"));

        list.add("1");
        assert!(list.clear());
        assert!(list.is_empty());
        assert_eq!(list.notifier().last().map(|n| n.kind), Some(NoticeKind::Cleared));
    }

    #[test]
    fn test_load_restores_persisted_list() {
        let store = MemoryStore::new().with_entry(COMPARISON_KEY, r#"["7","2"]"#);
        let list = ComparisonList::load(store, Vec::new());
        assert_eq!(list.ids(), ["7", "2"].map(String::from));
    }

    #[test]
    fn test_load_garbage_starts_empty() {
        let store = MemoryStore::new().with_entry(COMPARISON_KEY, "not json at all");
        let list = ComparisonList::load(store, Vec::new());
        assert!(list.is_empty());
    }

    /// Store that refuses every operation
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("private browsing".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::QuotaExceeded)
        }

        fn clear(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::QuotaExceeded)
        }
    }

    #[test]
    fn test_storage_failure_keeps_memory_state() {
        let mut list = ComparisonList::load(BrokenStore, Vec::new());
        assert!(list.is_empty());

        assert_eq!(list.add("1"), AddOutcome::Added);
        assert_eq!(list.add("2"), AddOutcome::Added);
        assert!(list.remove("1"));

        assert_eq!(list.ids(), ["2".to_string()]);
        assert_eq!(
            kinds(list.notifier()),
            vec![NoticeKind::Added, NoticeKind::Added, NoticeKind::Removed]
        );
    }
}
