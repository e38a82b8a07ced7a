// bakery/src/admin/inventory.rs

use serde::Serialize;
use tracing::{info, warn};

use super::form::ProductDraft;
use crate::catalog::{Catalog, Category, Product, ProductId};
use crate::error::{StoreError, StoreResult};
use crate::money::Money;

/// Headline figures of the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryStats {
  pub total_products: usize,
  pub categories: usize,
  pub average_price: Money,
}

/// The admin panel's own product list. It starts from a copy of the
/// catalog's first products and is edited independently of the catalog.
#[derive(Debug, Clone, Default)]
pub struct ProductInventory {
  products: Vec<Product>,
}

const SEEDED_PRODUCTS: usize = 3;

impl ProductInventory {
  pub fn new(products: Vec<Product>) -> Self {
    Self { products }
  }

  pub fn seeded() -> Self {
    Self::new(Catalog::seeded().products().iter().take(SEEDED_PRODUCTS).cloned().collect())
  }

  pub fn list(&self) -> &[Product] {
    &self.products
  }

  pub fn get(&self, id: ProductId) -> Option<&Product> {
    self.products.iter().find(|p| p.id == id)
  }

  /// Stores `draft` under a fresh id (one past the largest id in use).
  pub fn create(&mut self, draft: ProductDraft) -> &Product {
    let id = self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    self.products.push(draft.into_product(id));
    info!(product_id = id, "Product added.");
    &self.products[self.products.len() - 1]
  }

  /// Replaces product `id` in place, keeping its id and position.
  pub fn update(&mut self, id: ProductId, draft: ProductDraft) -> StoreResult<&Product> {
    let Some(slot) = self.products.iter_mut().find(|p| p.id == id) else {
      warn!(product_id = id, "Update of unknown product rejected.");
      return Err(StoreError::ProductNotFound { product_id: id });
    };
    *slot = draft.into_product(id);
    info!(product_id = id, "Product updated.");
    Ok(&*slot)
  }

  pub fn delete(&mut self, id: ProductId) -> StoreResult<Product> {
    let Some(idx) = self.products.iter().position(|p| p.id == id) else {
      warn!(product_id = id, "Delete of unknown product rejected.");
      return Err(StoreError::ProductNotFound { product_id: id });
    };
    info!(product_id = id, "Product deleted.");
    Ok(self.products.remove(idx))
  }

  pub fn stats(&self) -> InventoryStats {
    InventoryStats {
      total_products: self.products.len(),
      categories: Category::ALL.len(),
      average_price: Money::mean(self.products.iter().map(|p| p.price)),
    }
  }
}
