// bakery/src/catalog/mod.rs

//! The read-only product catalog shown to browsing shoppers.

pub mod product;
pub mod query;
mod seed;

pub use product::{Category, Product, ProductId};
pub use query::{CatalogQuery, CategoryFilter};

use crate::error::FormError;
use tracing::debug;

const RELATED_LIMIT: usize = 3;
const FEATURED_LIMIT: usize = 3;

#[derive(Debug, Clone)]
pub struct Catalog {
  products: Vec<Product>,
}

impl Catalog {
  pub fn new(products: Vec<Product>) -> Self {
    Self { products }
  }

  /// The bakery's standing product list.
  pub fn seeded() -> Self {
    Self::new(seed::products())
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn find(&self, id: ProductId) -> Option<&Product> {
    self.products.iter().find(|p| p.id == id)
  }

  /// Products whose name contains the search text and whose category passes
  /// the filter, in catalog order.
  pub fn search(&self, query: &CatalogQuery) -> Result<Vec<&Product>, FormError> {
    let filter = query.category_filter()?;
    let found: Vec<&Product> = self
      .products
      .iter()
      .filter(|p| query.matches_name(p) && filter.admits(p.category))
      .collect();
    debug!(search = %query.search, ?filter, matches = found.len(), "Catalog searched.");
    Ok(found)
  }

  /// Up to three other products from the same category as `id`.
  pub fn related(&self, id: ProductId) -> Vec<&Product> {
    let Some(product) = self.find(id) else {
      return Vec::new();
    };
    self
      .products
      .iter()
      .filter(|p| p.category == product.category && p.id != product.id)
      .take(RELATED_LIMIT)
      .collect()
  }

  /// Products highlighted on the home page.
  pub fn featured(&self) -> &[Product] {
    &self.products[..self.products.len().min(FEATURED_LIMIT)]
  }
}
