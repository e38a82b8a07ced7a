// bakery/src/cart/item.rs

use serde::Serialize;

use crate::catalog::{Category, Product, ProductId};
use crate::money::Money;

/// One product line in a cart. `quantity` is at least 1 for as long as the
/// line exists; the store removes the line instead of letting it reach 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
  pub id: ProductId,
  pub name: String,
  pub category: Category,
  pub price: Money,
  pub images: Vec<String>,
  pub quantity: u32,
}

impl CartItem {
  pub(crate) fn first_of(product: &Product) -> Self {
    Self {
      id: product.id,
      name: product.name.clone(),
      category: product.category,
      price: product.price,
      images: product.images.clone(),
      quantity: 1,
    }
  }

  pub fn image(&self) -> Option<&str> {
    self.images.first().map(String::as_str)
  }

  /// `price × quantity`.
  pub fn line_total(&self) -> Money {
    self.price * self.quantity
  }
}
