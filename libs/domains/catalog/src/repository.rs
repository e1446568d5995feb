use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::Product;
use crate::pagination::PageWindow;
use crate::predicate::Predicate;

/// Repository trait for Product persistence
///
/// This is the full capability set the catalog needs from a storage engine.
/// Implementations own ordering and any write isolation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get a product by ID
    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>>;

    /// List the products matching `predicate` inside `window`
    async fn find_matching(
        &self,
        predicate: &Predicate,
        window: PageWindow,
    ) -> CatalogResult<Vec<Product>>;

    /// Count all products matching `predicate`
    async fn count_matching(&self, predicate: &Predicate) -> CatalogResult<u64>;

    /// Insert or replace a product, keyed by its ID
    async fn save(&self, product: Product) -> CatalogResult<Product>;

    /// Delete a product by ID, returning whether it existed
    async fn delete_by_id(&self, id: Uuid) -> CatalogResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored products
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    #[instrument(skip(self, predicate), fields(conditions = predicate.conditions().len()))]
    async fn find_matching(
        &self,
        predicate: &Predicate,
        window: PageWindow,
    ) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products
            .values()
            .filter(|p| predicate.matches(p))
            .cloned()
            .collect();

        // Oldest first, ID as tie-breaker so pages are stable
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let offset = usize::try_from(window.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(window.limit).unwrap_or(usize::MAX);

        Ok(result.into_iter().skip(offset).take(limit).collect())
    }

    #[instrument(skip(self, predicate), fields(conditions = predicate.conditions().len()))]
    async fn count_matching(&self, predicate: &Predicate) -> CatalogResult<u64> {
        let products = self.products.read().await;
        let count = products.values().filter(|p| predicate.matches(p)).count();
        Ok(count as u64)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn save(&self, product: Product) -> CatalogResult<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());

        tracing::debug!(product_id = %product.id, "Saved product");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: Uuid) -> CatalogResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewProduct, ProductCategory};
    use crate::predicate::Condition;
    use rust_decimal::Decimal;

    fn new_product(name: &str, price: i64) -> Product {
        Product::new(NewProduct {
            name: name.to_string(),
            description: None,
            brand: None,
            category: ProductCategory::Other,
            quantity: 1,
            price: Decimal::from(price),
        })
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = InMemoryProductRepository::new();
        let product = repo.save(new_product("Lamp", 20)).await.unwrap();

        let fetched = repo.find_by_id(product.id).await.unwrap();
        assert_eq!(fetched, Some(product));
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_existing_record() {
        let repo = InMemoryProductRepository::new();
        let mut product = repo.save(new_product("Lamp", 20)).await.unwrap();

        product.name = "Desk lamp".to_string();
        repo.save(product.clone()).await.unwrap();

        assert_eq!(repo.len().await, 1);
        let fetched = repo.find_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Desk lamp");
    }

    #[tokio::test]
    async fn test_find_matching_applies_window_after_filter() {
        let repo = InMemoryProductRepository::new();
        for i in 0..5 {
            repo.save(new_product(&format!("Item {}", i), 10 * (i + 1))).await.unwrap();
        }

        let predicate = Predicate::match_all().and(Condition::PriceAtLeast(Decimal::from(20)));
        let all = repo
            .find_matching(&predicate, PageWindow { offset: 0, limit: 10 })
            .await
            .unwrap();
        assert_eq!(all.len(), 4);

        let second = repo
            .find_matching(&predicate, PageWindow { offset: 2, limit: 2 })
            .await
            .unwrap();
        assert_eq!(second, all[2..4].to_vec());

        let beyond = repo
            .find_matching(&predicate, PageWindow { offset: 10, limit: 2 })
            .await
            .unwrap();
        assert!(beyond.is_empty());
    }

    #[tokio::test]
    async fn test_count_matching_ignores_window() {
        let repo = InMemoryProductRepository::new();
        for i in 0..3 {
            repo.save(new_product(&format!("Item {}", i), 5)).await.unwrap();
        }

        assert_eq!(repo.count_matching(&Predicate::match_all()).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let repo = InMemoryProductRepository::new();
        let product = repo.save(new_product("Lamp", 20)).await.unwrap();

        assert!(repo.delete_by_id(product.id).await.unwrap());
        assert!(!repo.delete_by_id(product.id).await.unwrap());
        assert!(repo.is_empty().await);
    }
}
