//! The current-transaction draft store

use tokio::sync::watch;

use crate::models::Transaction;

/// Holds the single in-progress transaction being composed across wizard
/// steps.
///
/// There is no partial-field mutation: callers read the current draft,
/// produce a modified copy, and replace the whole thing. Readers receive
/// immutable snapshots through a watch channel. The store is owned by the
/// coordinator and wizard steps run one at a time, so there is a single
/// logical writer.
pub struct DraftStore {
    current: watch::Sender<Option<Transaction>>,
}

impl DraftStore {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self { current }
    }

    /// Snapshot of the current draft, if any
    pub fn get(&self) -> Option<Transaction> {
        self.current.borrow().clone()
    }

    /// Replace the whole draft, or clear it with `None`
    pub fn replace(&self, draft: Option<Transaction>) {
        self.current.send_replace(draft);
    }

    /// Subscribe to draft replacements
    pub fn subscribe(&self) -> watch::Receiver<Option<Transaction>> {
        self.current.subscribe()
    }
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let store = DraftStore::new();

        assert!(store.get().is_none());
    }

    #[test]
    fn test_replace_and_clear() {
        let store = DraftStore::new();

        store.replace(Some(Transaction::new("Send to Africa")));
        assert_eq!(
            store.get().and_then(|t| t.option),
            Some("Send to Africa".to_string())
        );

        store.replace(None);
        assert!(store.get().is_none());
    }

    #[test]
    fn test_snapshots_are_independent() {
        let store = DraftStore::new();
        store.replace(Some(Transaction::new("Send to Africa")));

        let mut snapshot = store.get().expect("Draft missing");
        snapshot.selected_wallet = Some("Wave".to_string());

        // Mutating the snapshot never touches the stored draft
        assert_eq!(store.get().expect("Draft missing").selected_wallet, None);
    }

    #[tokio::test]
    async fn test_subscribers_see_replacements() {
        let store = DraftStore::new();
        let mut receiver = store.subscribe();

        store.replace(Some(Transaction::new("Bank transfer")));

        receiver.changed().await.expect("Sender dropped");
        assert!(receiver.borrow().is_some());
    }
}
