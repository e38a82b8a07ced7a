// bakery/src/catalog/query.rs

use serde::Deserialize;
use std::str::FromStr;

use super::product::{Category, Product};
use crate::error::FormError;

/// Category selection of the product listing; `All` disables the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
  #[default]
  All,
  Only(Category),
}

impl CategoryFilter {
  pub fn admits(self, category: Category) -> bool {
    match self {
      CategoryFilter::All => true,
      CategoryFilter::Only(wanted) => wanted == category,
    }
  }
}

impl FromStr for CategoryFilter {
  type Err = FormError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("all") {
      return Ok(CategoryFilter::All);
    }
    s.parse().map(CategoryFilter::Only)
  }
}

/// Search box text plus category buttons of the product listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
  #[serde(default)]
  pub search: String,
  #[serde(default)]
  pub category: Option<String>,
}

impl CatalogQuery {
  pub fn category_filter(&self) -> Result<CategoryFilter, FormError> {
    match self.category.as_deref() {
      Some(raw) => raw.parse(),
      None => Ok(CategoryFilter::All),
    }
  }

  /// Case-insensitive substring match on the product name.
  pub(crate) fn matches_name(&self, product: &Product) -> bool {
    let needle = self.search.trim().to_lowercase();
    needle.is_empty() || product.name.to_lowercase().contains(&needle)
  }
}
