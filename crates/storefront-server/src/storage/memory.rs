//! In-memory entity store for products, users and transactions

use storefront_types::{Product, Seed, Transaction, User};
use tokio::sync::RwLock;

/// Authoritative holder of all three collections.
///
/// Each collection has its own lock so that appending a transaction never
/// waits on a product listing. Collections keep insertion order and lookups
/// are linear scans where the first match wins.
#[derive(Default)]
pub struct EntityStore {
    products: RwLock<Vec<Product>>,
    users: RwLock<Vec<User>>,
    transactions: RwLock<Vec<Transaction>>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self {
            products: RwLock::new(seed.products),
            users: RwLock::new(seed.users),
            transactions: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the products in insertion order
    pub async fn list_products(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    pub async fn find_product(&self, id: &str) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Append a product. Duplicate ids are accepted.
    pub async fn add_product(&self, product: Product) -> Product {
        self.products.write().await.push(product.clone());
        product
    }

    /// Replace the first product with a matching id; `None` if there is none
    pub async fn update_product(&self, id: &str, product: Product) -> Option<Product> {
        let mut products = self.products.write().await;
        let slot = products.iter_mut().find(|p| p.id == id)?;
        *slot = product.clone();
        Some(product)
    }

    /// Remove the first product with a matching id and return it
    pub async fn delete_product(&self, id: &str) -> Option<Product> {
        let mut products = self.products.write().await;
        let index = products.iter().position(|p| p.id == id)?;
        Some(products.remove(index))
    }

    pub async fn find_user(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Append a transaction unconditionally and hand it back
    pub async fn append_transaction(&self, transaction: Transaction) -> Transaction {
        self.transactions.write().await.push(transaction.clone());
        transaction
    }

    #[cfg(test)]
    pub async fn list_transactions(&self) -> Vec<Transaction> {
        self.transactions.read().await.clone()
    }

    pub async fn transaction_count(&self) -> usize {
        self.transactions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn seeded() -> EntityStore {
        EntityStore::from_seed(Seed {
            products: vec![Product::new("p1", "Widget", 2.5), Product::new("p2", "Gadget", 10.0)],
            users: vec![User::new("alice", "secret")],
        })
    }

    #[tokio::test]
    async fn test_find_user() {
        let store = seeded();

        assert_eq!(
            store.find_user("alice").await,
            Some(User::new("alice", "secret"))
        );
        assert_eq!(store.find_user("missing").await, None);
    }

    #[tokio::test]
    async fn test_first_user_match_wins() {
        let store = EntityStore::from_seed(Seed {
            products: vec![],
            users: vec![User::new("alice", "secret"), User::new("alice", "second")],
        });

        assert_eq!(store.find_user("alice").await.unwrap().password, "secret");
    }

    #[tokio::test]
    async fn test_product_crud() {
        let store = seeded();

        store.add_product(Product::new("p3", "Doohickey", 1.0)).await;
        let ids: Vec<_> = store.list_products().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["p1", "p2", "p3"]);

        let updated = store
            .update_product("p2", Product::new("p2", "Gadget Pro", 12.0))
            .await;
        assert_eq!(updated, Some(Product::new("p2", "Gadget Pro", 12.0)));
        assert_eq!(store.find_product("p2").await.unwrap().name, "Gadget Pro");

        assert!(store.delete_product("p1").await.is_some());
        assert_eq!(store.find_product("p1").await, None);
        assert_eq!(store.list_products().await.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_product_id() {
        let store = seeded();

        assert_eq!(
            store.update_product("nope", Product::new("nope", "x", 1.0)).await,
            None
        );
        assert_eq!(store.delete_product("nope").await, None);
        assert_eq!(store.list_products().await.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_product_ids_allowed() {
        let store = seeded();
        store.add_product(Product::new("p1", "Clone", 0.5)).await;

        assert_eq!(store.list_products().await.len(), 3);
        assert_eq!(store.find_product("p1").await.unwrap().name, "Widget");

        store.delete_product("p1").await;
        assert_eq!(store.find_product("p1").await.unwrap().name, "Clone");
    }

    #[tokio::test]
    async fn test_transactions_not_validated() {
        let store = seeded();
        let tx = Transaction::new("ghost-product", "nobody", 3.0);

        assert_eq!(store.append_transaction(tx.clone()).await, tx);
        assert_eq!(store.list_transactions().await, vec![tx]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends() {
        let store = Arc::new(EntityStore::new());

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..200 {
            let store = store.clone();
            tasks.spawn(async move {
                store
                    .append_transaction(Transaction::new(format!("p{i}"), "alice", 1.0))
                    .await;
            });
        }
        while let Some(res) = tasks.join_next().await {
            res.unwrap();
        }

        assert_eq!(store.transaction_count().await, 200);
    }
}
