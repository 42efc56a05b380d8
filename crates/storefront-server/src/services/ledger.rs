//! Transaction ledger

use crate::storage::{EntityStore, SnapshotCache};
use std::sync::Arc;
use storefront_types::Transaction;
use tracing::info;

/// Appends transactions.
///
/// Creating a transaction marks the product listing stale. Nothing about a
/// transaction changes the product collection; the coupling is kept so the
/// listing behaves as clients already observe it.
pub struct TransactionLedger {
    store: Arc<EntityStore>,
    cache: Arc<SnapshotCache>,
}

impl TransactionLedger {
    pub fn new(store: Arc<EntityStore>, cache: Arc<SnapshotCache>) -> Self {
        Self { store, cache }
    }

    pub async fn record(&self, transaction: Transaction) -> Transaction {
        info!(
            "Recording transaction: product={}, user={}, amount={}",
            transaction.product_id, transaction.username, transaction.amount
        );
        let transaction = self.store.append_transaction(transaction).await;
        self.cache.invalidate().await;
        transaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_appends_and_invalidates() {
        let store = Arc::new(EntityStore::new());
        let cache = Arc::new(SnapshotCache::new());
        let ledger = TransactionLedger::new(store.clone(), cache.clone());

        cache
            .get_or_rebuild(|| async { Ok::<_, ()>(bytes::Bytes::from_static(b"[]")) })
            .await
            .unwrap();
        assert!(cache.is_fresh().await);

        let tx = Transaction::new("p1", "alice", 9.99);
        assert_eq!(ledger.record(tx.clone()).await, tx);
        assert_eq!(store.list_transactions().await, vec![tx]);
        assert!(!cache.is_fresh().await);
    }
}
