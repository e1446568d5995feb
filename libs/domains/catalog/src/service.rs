//! Catalog Service - query orchestration and product lifecycle

use serde::Deserialize;
use std::sync::Arc;
use strum::{Display, EnumString};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::filter::FilterSpec;
use crate::models::{NewProduct, Product, ProductQuery, ProductView};
use crate::pagination::Paginator;
use crate::predicate::PredicateBuilder;
use crate::repository::ProductRepository;

/// What a list query returns when the page is empty.
///
/// `Permissive` is the default: an empty page is a valid answer and
/// `NotFound` is reserved for lookups by identity. `Strict` turns every empty
/// page into [`CatalogError::NoResults`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EmptyResultPolicy {
    #[default]
    Permissive,
    Strict,
}

/// Catalog service providing query and lifecycle operations
///
/// Translates raw filter input into a predicate and page window, issues one
/// storage call per operation, and shapes results into [`ProductView`]s.
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
    empty_result_policy: EmptyResultPolicy,
}

impl<R: ProductRepository> CatalogService<R> {
    /// Create a new CatalogService with the default (permissive) policy
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            empty_result_policy: EmptyResultPolicy::default(),
        }
    }

    pub fn with_empty_result_policy(mut self, policy: EmptyResultPolicy) -> Self {
        self.empty_result_policy = policy;
        self
    }

    pub fn empty_result_policy(&self) -> EmptyResultPolicy {
        self.empty_result_policy
    }

    /// List one page of products matching the raw filter fields
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> CatalogResult<Vec<ProductView>> {
        let spec = FilterSpec::parse(query)?;
        self.list_matching(&spec).await
    }

    /// List one page of products for an already normalized filter
    #[instrument(skip(self), fields(page = spec.page, page_size = spec.page_size))]
    pub async fn list_matching(&self, spec: &FilterSpec) -> CatalogResult<Vec<ProductView>> {
        let predicate = PredicateBuilder::build(spec);
        let window = Paginator::window(spec.page, spec.page_size);

        let products = self.repository.find_matching(&predicate, window).await?;

        if products.is_empty() && self.empty_result_policy == EmptyResultPolicy::Strict {
            return Err(CatalogError::NoResults);
        }

        Ok(products.into_iter().map(ProductView::from).collect())
    }

    /// Count all products matching the raw filter fields (pagination ignored)
    #[instrument(skip(self))]
    pub async fn count_products(&self, query: ProductQuery) -> CatalogResult<u64> {
        let spec = FilterSpec::parse(query)?;
        let predicate = PredicateBuilder::build(&spec);
        self.repository.count_matching(&predicate).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Option<Uuid>) -> CatalogResult<ProductView> {
        let id = require_id(id)?;

        self.repository
            .find_by_id(id)
            .await?
            .map(ProductView::from)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Create a new product; a fresh identity is always assigned
    #[instrument(skip(self, input), fields(product_name = ?input.name))]
    pub async fn create_product(&self, input: ProductView) -> CatalogResult<ProductView> {
        let new_product = NewProduct::try_from(input.clone())?;
        input.validate()?;

        let product = self.repository.save(Product::new(new_product)).await?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product.into())
    }

    /// Update the product identified by `input.id`
    #[instrument(skip(self, input), fields(product_id = ?input.id))]
    pub async fn update_product(&self, input: ProductView) -> CatalogResult<ProductView> {
        let id = require_id(input.id)?;
        input.validate()?;

        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id))?;

        product.apply_update(input);
        let product = self.repository.save(product).await?;

        tracing::info!(product_id = %id, "Product updated");
        Ok(product.into())
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Option<Uuid>) -> CatalogResult<()> {
        let id = require_id(id)?;

        if !self.repository.delete_by_id(id).await? {
            return Err(CatalogError::NotFound(id));
        }

        Ok(())
    }
}

fn require_id(id: Option<Uuid>) -> CatalogResult<Uuid> {
    id.ok_or_else(|| CatalogError::MissingArgument("product id".to_string()))
}

impl<R: ProductRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            empty_result_policy: self.empty_result_policy,
        }
    }
}
