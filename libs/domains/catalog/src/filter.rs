//! Normalized filter criteria and page parameters for list queries

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{ProductCategory, ProductQuery};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Validated filter criteria plus clamped pagination.
///
/// Optional criteria are either present and meaningful or `None`; blank text
/// never survives normalization. `page` and `page_size` are always >= 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub name: Option<String>,
    pub category: Option<ProductCategory>,
    pub brand: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            name: None,
            category: None,
            brand: None,
            min_price: None,
            max_price: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterSpec {
    /// Normalize raw boundary input.
    ///
    /// Fails with [`CatalogError::Validation`] when a price, a page number or
    /// the category cannot be parsed.
    pub fn parse(query: ProductQuery) -> CatalogResult<Self> {
        let category = match non_blank(query.category) {
            Some(raw) => Some(ProductCategory::from_str(&raw).map_err(|_| {
                CatalogError::Validation(format!("category: unknown category '{}'", raw))
            })?),
            None => None,
        };

        Ok(Self {
            name: non_blank(query.name),
            category,
            brand: non_blank(query.brand),
            min_price: parse_price("min_price", query.min_price)?,
            max_price: parse_price("max_price", query.max_price)?,
            page: parse_page_number("page", query.page)?.unwrap_or(DEFAULT_PAGE),
            page_size: parse_page_number("page_size", query.page_size)?
                .unwrap_or(DEFAULT_PAGE_SIZE),
        })
    }

    /// True when no optional criterion is present
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.brand.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a possibly locale-formatted decimal ("1000,50" or "1000.50").
fn parse_price(field: &str, raw: Option<String>) -> CatalogResult<Option<Decimal>> {
    let Some(raw) = non_blank(raw) else {
        return Ok(None);
    };

    Decimal::from_str(&raw.replace(',', "."))
        .map(Some)
        .map_err(|_| CatalogError::Validation(format!("{}: '{}' is not a valid price", field, raw)))
}

/// Parse a page number; values below 1 count as absent and large values
/// saturate at `u32::MAX`.
fn parse_page_number(field: &str, raw: Option<String>) -> CatalogResult<Option<u32>> {
    let Some(raw) = non_blank(raw) else {
        return Ok(None);
    };

    let value: i64 = raw.parse().map_err(|_| {
        CatalogError::Validation(format!("{}: '{}' is not a valid integer", field, raw))
    })?;

    if value < 1 {
        return Ok(None);
    }
    Ok(Some(u32::try_from(value).unwrap_or(u32::MAX)))
}
