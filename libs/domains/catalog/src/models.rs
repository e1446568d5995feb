use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::CatalogError;

/// Product category.
///
/// Serialized as snake_case; parsed case-insensitively from both query
/// strings and JSON bodies (`"GAMES"`, `"games"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ProductCategory {
    Electronics,
    Games,
    Books,
    Clothing,
    Food,
    Home,
    Sports,
    Toys,
    Health,
    Automotive,
    Other,
}

impl<'de> Deserialize<'de> for ProductCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ProductCategory::from_str(raw.trim())
            .map_err(|_| serde::de::Error::custom(format!("unknown category '{}'", raw)))
    }
}

/// Product entity as held by the storage collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned at creation
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: ProductCategory,
    /// Units in stock
    pub quantity: i32,
    pub price: Decimal,
    /// Creation timestamp (never changes after insert)
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, unset until the first update
    pub updated_at: Option<DateTime<Utc>>,
}

/// External-facing projection of a product.
///
/// Used both as the response shape and as the write payload for create and
/// update, so every field is optional. Absent fields are omitted from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct ProductView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProductCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "499.90")]
    #[validate(custom(function = "validate_price"))]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::new("range").with_message("price must not be negative".into()));
    }
    Ok(())
}

/// A product payload that carries every field required for creation
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: ProductCategory,
    pub quantity: i32,
    pub price: Decimal,
}

impl TryFrom<ProductView> for NewProduct {
    type Error = CatalogError;

    fn try_from(view: ProductView) -> Result<Self, Self::Error> {
        let name = view.name.filter(|n| !n.trim().is_empty());

        let mut missing = Vec::new();
        if name.is_none() {
            missing.push("name");
        }
        if view.category.is_none() {
            missing.push("category");
        }
        if view.price.is_none() {
            missing.push("price");
        }

        match (name, view.category, view.price) {
            (Some(name), Some(category), Some(price)) => Ok(Self {
                name,
                description: view.description,
                brand: view.brand,
                category,
                quantity: view.quantity.unwrap_or(0),
                price,
            }),
            _ => Err(CatalogError::MissingArgument(missing.join(", "))),
        }
    }
}

/// Raw list/count query parameters as they arrive at the boundary.
///
/// Everything is textual and optional; [`crate::filter::FilterSpec::parse`]
/// turns this into a normalized filter.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Case-insensitive substring of the product name
    pub name: Option<String>,
    /// Category name (case-insensitive)
    pub category: Option<String>,
    /// Case-insensitive substring of the brand
    pub brand: Option<String>,
    /// Inclusive lower price bound, `.` or `,` as decimal separator
    #[serde(alias = "minPrice")]
    pub min_price: Option<String>,
    /// Inclusive upper price bound, `.` or `,` as decimal separator
    #[serde(alias = "maxPrice")]
    pub max_price: Option<String>,
    /// 1-indexed page number (values below 1 become 1)
    pub page: Option<String>,
    /// Items per page (values below 1 become 10)
    #[serde(alias = "pageSize")]
    pub page_size: Option<String>,
}

impl Product {
    /// Create a new product with a fresh identity and creation timestamp
    pub fn new(input: NewProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            brand: input.brand,
            category: input.category,
            quantity: input.quantity,
            price: input.price,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Apply the fields present in `update`; identity and creation time are kept
    pub fn apply_update(&mut self, update: ProductView) {
        if let Some(name) = update.name.filter(|n| !n.trim().is_empty()) {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(brand) = update.brand {
            self.brand = Some(brand);
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        self.updated_at = Some(Utc::now());
    }
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: Some(product.name),
            description: product.description,
            brand: product.brand,
            category: Some(product.category),
            quantity: Some(product.quantity),
            price: Some(product.price),
            created_at: Some(product.created_at),
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_view() -> ProductView {
        ProductView {
            name: Some("Console".to_string()),
            category: Some(ProductCategory::Games),
            price: Some(Decimal::new(49990, 2)),
            ..Default::default()
        }
    }

    #[test]
    fn test_category_parses_case_insensitively() {
        assert_eq!(ProductCategory::from_str("GAMES").unwrap(), ProductCategory::Games);
        assert_eq!(ProductCategory::from_str("games").unwrap(), ProductCategory::Games);
        assert!(ProductCategory::from_str("spaceships").is_err());
    }

    #[test]
    fn test_category_deserializes_case_insensitively() {
        let upper: ProductCategory = serde_json::from_str("\"HOME\"").unwrap();
        let lower: ProductCategory = serde_json::from_str("\"home\"").unwrap();
        assert_eq!(upper, ProductCategory::Home);
        assert_eq!(lower, ProductCategory::Home);
        assert_eq!(serde_json::to_string(&upper).unwrap(), "\"home\"");

        let err = serde_json::from_str::<ProductCategory>("\"spaceships\"").unwrap_err();
        assert!(err.to_string().contains("unknown category 'spaceships'"));
    }

    #[test]
    fn test_write_constraints() {
        let long_description = ProductView {
            description: Some("d".repeat(256)),
            ..full_view()
        };
        let long_brand = ProductView {
            brand: Some("b".repeat(101)),
            ..full_view()
        };
        let negative_quantity = ProductView {
            quantity: Some(-1),
            ..full_view()
        };

        let errors = long_description.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
        let errors = long_brand.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("brand"));
        let errors = negative_quantity.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));

        let at_limits = ProductView {
            description: Some("d".repeat(255)),
            brand: Some("b".repeat(100)),
            quantity: Some(0),
            ..full_view()
        };
        assert!(at_limits.validate().is_ok());
    }

    #[test]
    fn test_new_product_requires_name_category_price() {
        let err = NewProduct::try_from(ProductView::default()).unwrap_err();
        match err {
            CatalogError::MissingArgument(fields) => assert_eq!(fields, "name, category, price"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_blank_name_counts_as_missing() {
        let view = ProductView {
            name: Some("   ".to_string()),
            ..full_view()
        };
        assert!(matches!(
            NewProduct::try_from(view),
            Err(CatalogError::MissingArgument(fields)) if fields == "name"
        ));
    }

    #[test]
    fn test_new_product_defaults_quantity_to_zero() {
        let product = Product::new(NewProduct::try_from(full_view()).unwrap());
        assert_eq!(product.quantity, 0);
        assert!(product.updated_at.is_none());
    }

    #[test]
    fn test_apply_update_keeps_identity_and_creation_time() {
        let mut product = Product::new(NewProduct::try_from(full_view()).unwrap());
        let (id, created_at) = (product.id, product.created_at);

        product.apply_update(ProductView {
            id: Some(Uuid::new_v4()),
            brand: Some("Acme".to_string()),
            created_at: Some(Utc::now() + chrono::Duration::days(1)),
            ..Default::default()
        });

        assert_eq!(product.id, id);
        assert_eq!(product.created_at, created_at);
        assert_eq!(product.brand.as_deref(), Some("Acme"));
        assert_eq!(product.name, "Console");
        assert!(product.updated_at.is_some());
    }

    #[test]
    fn test_negative_price_fails_validation() {
        let view = ProductView {
            price: Some(Decimal::new(-1, 0)),
            ..full_view()
        };
        assert!(view.validate().is_err());
        assert!(full_view().validate().is_ok());
    }

    #[test]
    fn test_view_omits_absent_fields() {
        let json = serde_json::to_value(ProductView {
            name: Some("Console".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Console" }));
    }
}
