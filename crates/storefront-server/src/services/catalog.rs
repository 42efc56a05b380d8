//! Product catalog service

use crate::error::ApiError;
use crate::storage::{EntityStore, SnapshotCache};
use bytes::Bytes;
use std::sync::Arc;
use storefront_types::Product;
use tracing::{error, info};

/// Product reads and writes, with the listing served from the snapshot cache.
///
/// Store writes return (and drop the store lock) before the cache is
/// invalidated. A rebuild holds the cache lock while it waits on the store, so
/// the reverse order could deadlock.
pub struct CatalogService {
    store: Arc<EntityStore>,
    cache: Arc<SnapshotCache>,
}

impl CatalogService {
    pub fn new(store: Arc<EntityStore>, cache: Arc<SnapshotCache>) -> Self {
        Self { store, cache }
    }

    /// Serialized JSON array of all products
    pub async fn listing(&self) -> Result<Bytes, ApiError> {
        let store = &self.store;
        self.cache
            .get_or_rebuild(|| async move {
                // Serialize outside the store lock; the cache lock is still held
                let products = store.list_products().await;
                serde_json::to_vec(&products)
                    .map(Bytes::from)
                    .map_err(|e| {
                        error!("Failed to encode products: {}", e);
                        ApiError::EncodingFailure(e.to_string())
                    })
            })
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Product, ApiError> {
        self.store.find_product(id).await.ok_or(ApiError::NotFound)
    }

    pub async fn add(&self, product: Product) -> Product {
        info!("Adding product: id={}", product.id);
        let product = self.store.add_product(product).await;
        self.cache.invalidate().await;
        product
    }

    pub async fn update(&self, id: &str, product: Product) -> Result<Product, ApiError> {
        info!("Updating product: id={}", id);
        let product = self
            .store
            .update_product(id, product)
            .await
            .ok_or(ApiError::NotFound)?;
        self.cache.invalidate().await;
        Ok(product)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        info!("Deleting product: id={}", id);
        self.store
            .delete_product(id)
            .await
            .ok_or(ApiError::NotFound)?;
        self.cache.invalidate().await;
        Ok(())
    }
}
