//! Storage-independent query predicates.
//!
//! A [`Predicate`] is a conjunction of [`Condition`]s. Storage backends can
//! either evaluate it directly with [`Predicate::matches`] or translate each
//! condition into their own query language via [`Predicate::conditions`].

use rust_decimal::Decimal;

use crate::filter::FilterSpec;
use crate::models::{Product, ProductCategory};

/// A single named filter condition over a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Case-insensitive substring match on the name (needle stored lowercased)
    NameContains(String),
    /// Exact category equality
    CategoryIs(ProductCategory),
    /// Case-insensitive substring match on the brand (needle stored lowercased)
    BrandContains(String),
    /// `price >= bound`
    PriceAtLeast(Decimal),
    /// `price <= bound`
    PriceAtMost(Decimal),
}

impl Condition {
    pub fn name(&self) -> &'static str {
        match self {
            Condition::NameContains(_) => "name_contains",
            Condition::CategoryIs(_) => "category_is",
            Condition::BrandContains(_) => "brand_contains",
            Condition::PriceAtLeast(_) => "price_at_least",
            Condition::PriceAtMost(_) => "price_at_most",
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Condition::NameContains(needle) => product.name.to_lowercase().contains(needle),
            Condition::CategoryIs(category) => product.category == *category,
            Condition::BrandContains(needle) => product
                .brand
                .as_deref()
                .is_some_and(|brand| brand.to_lowercase().contains(needle)),
            Condition::PriceAtLeast(min) => product.price >= *min,
            Condition::PriceAtMost(max) => product.price <= *max,
        }
    }
}

/// Logical AND of zero or more conditions.
///
/// The predicate with no conditions is "match everything"; it is what an
/// empty [`FilterSpec`] builds to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    pub fn match_all() -> Self {
        Self::default()
    }

    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn is_match_all(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.conditions.iter().all(|c| c.matches(product))
    }
}

/// Builds a [`Predicate`] from a normalized [`FilterSpec`]
pub struct PredicateBuilder;

impl PredicateBuilder {
    pub fn build(spec: &FilterSpec) -> Predicate {
        if spec.is_empty() {
            return Predicate::match_all();
        }

        let mut predicate = Predicate::match_all();

        if let Some(ref name) = spec.name {
            predicate = predicate.and(Condition::NameContains(name.to_lowercase()));
        }
        if let Some(category) = spec.category {
            predicate = predicate.and(Condition::CategoryIs(category));
        }
        if let Some(ref brand) = spec.brand {
            predicate = predicate.and(Condition::BrandContains(brand.to_lowercase()));
        }
        if let Some(min) = spec.min_price {
            predicate = predicate.and(Condition::PriceAtLeast(min));
        }
        if let Some(max) = spec.max_price {
            predicate = predicate.and(Condition::PriceAtMost(max));
        }

        predicate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewProduct, ProductView};

    fn product(name: &str, brand: Option<&str>, category: ProductCategory, price: i64) -> Product {
        let view = ProductView {
            name: Some(name.to_string()),
            brand: brand.map(str::to_string),
            category: Some(category),
            price: Some(Decimal::from(price)),
            ..Default::default()
        };
        Product::new(NewProduct::try_from(view).unwrap())
    }

    #[test]
    fn test_empty_spec_builds_match_all() {
        let predicate = PredicateBuilder::build(&FilterSpec::default());
        assert!(predicate.is_match_all());
        assert!(predicate.matches(&product("Anything", None, ProductCategory::Other, 1)));
    }

    #[test]
    fn test_only_present_criteria_become_conditions() {
        let spec = FilterSpec {
            category: Some(ProductCategory::Books),
            max_price: Some(Decimal::from(20)),
            ..Default::default()
        };

        let predicate = PredicateBuilder::build(&spec);
        let names: Vec<_> = predicate.conditions().iter().map(Condition::name).collect();
        assert_eq!(names, vec!["category_is", "price_at_most"]);
    }

    #[test]
    fn test_name_match_is_case_insensitive_substring() {
        let spec = FilterSpec {
            name: Some("PHONE".into()),
            ..Default::default()
        };
        let predicate = PredicateBuilder::build(&spec);

        assert!(predicate.matches(&product("Smartphone X", None, ProductCategory::Electronics, 300)));
        assert!(!predicate.matches(&product("Tablet", None, ProductCategory::Electronics, 300)));
    }

    #[test]
    fn test_brand_match_is_case_insensitive_substring() {
        let spec = FilterSpec {
            brand: Some("sony".into()),
            ..Default::default()
        };
        let predicate = PredicateBuilder::build(&spec);

        assert!(predicate.matches(&product("TV", Some("Sony Interactive"), ProductCategory::Electronics, 900)));
        assert!(!predicate.matches(&product("TV", Some("LG"), ProductCategory::Electronics, 900)));
        assert!(!predicate.matches(&product("TV", None, ProductCategory::Electronics, 900)));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let spec = FilterSpec {
            min_price: Some(Decimal::from(100)),
            max_price: Some(Decimal::from(100)),
            ..Default::default()
        };
        let predicate = PredicateBuilder::build(&spec);

        assert!(predicate.matches(&product("A", None, ProductCategory::Toys, 100)));
        assert!(!predicate.matches(&product("B", None, ProductCategory::Toys, 99)));
        assert!(!predicate.matches(&product("C", None, ProductCategory::Toys, 101)));
    }

    #[test]
    fn test_conditions_combine_with_and() {
        let spec = FilterSpec {
            name: Some("ball".into()),
            category: Some(ProductCategory::Sports),
            ..Default::default()
        };
        let predicate = PredicateBuilder::build(&spec);

        assert!(predicate.matches(&product("Football", None, ProductCategory::Sports, 30)));
        assert!(!predicate.matches(&product("Football", None, ProductCategory::Toys, 30)));
        assert!(!predicate.matches(&product("Racket", None, ProductCategory::Sports, 30)));
    }

    #[test]
    fn test_condition_order_does_not_change_result() {
        let item = product("Chess set", Some("Classic Games"), ProductCategory::Games, 45);
        let forward = Predicate::match_all()
            .and(Condition::NameContains("chess".into()))
            .and(Condition::PriceAtMost(Decimal::from(50)));
        let reversed = Predicate::match_all()
            .and(Condition::PriceAtMost(Decimal::from(50)))
            .and(Condition::NameContains("chess".into()));

        assert_eq!(forward.matches(&item), reversed.matches(&item));
    }
}
