// bakery/src/cart/store.rs

use tracing::{debug, trace};

use super::item::CartItem;
use crate::catalog::{Product, ProductId};
use crate::money::Money;

/// The shopping cart of one browsing session: product lines in the order
/// they were first added, at most one line per product id.
///
/// Every operation is total. Ids that are not in the cart make the mutating
/// calls silent no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
  items: Vec<CartItem>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds one unit of `product`: bumps the existing line or appends a new one.
  /// A line already at `u32::MAX` stays there.
  pub fn add_to_cart(&mut self, product: &Product) {
    match self.items.iter_mut().find(|item| item.id == product.id) {
      Some(item) => {
        item.quantity = item.quantity.saturating_add(1);
        debug!(product_id = product.id, quantity = item.quantity, "Cart line incremented.");
      }
      None => {
        self.items.push(CartItem::first_of(product));
        debug!(product_id = product.id, lines = self.items.len(), "Cart line added.");
      }
    }
  }

  /// Sets the quantity of line `id`; zero or less removes the line.
  /// Quantities above `u32::MAX` are clamped to `u32::MAX`.
  pub fn update_quantity(&mut self, id: ProductId, new_quantity: i64) {
    if new_quantity <= 0 {
      self.remove_from_cart(id);
      return;
    }
    let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
      trace!(product_id = id, "Quantity update for a product not in the cart ignored.");
      return;
    };
    item.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
    debug!(product_id = id, quantity = item.quantity, "Cart line quantity set.");
  }

  pub fn remove_from_cart(&mut self, id: ProductId) {
    let before = self.items.len();
    self.items.retain(|item| item.id != id);
    if self.items.len() != before {
      debug!(product_id = id, "Cart line removed.");
    }
  }

  /// Takes the `charged` lines out of the cart after a successful payment.
  /// Each line loses the charged quantity and goes away once nothing is left;
  /// units added after the charge stay in the cart.
  pub fn remove_charged(&mut self, charged: &[CartItem]) {
    for paid in charged {
      if let Some(item) = self.items.iter_mut().find(|item| item.id == paid.id) {
        item.quantity = item.quantity.saturating_sub(paid.quantity);
      }
    }
    self.items.retain(|item| item.quantity > 0);
    debug!(charged_lines = charged.len(), lines_left = self.items.len(), "Charged lines removed from cart.");
  }

  pub fn clear_cart(&mut self) {
    debug!(lines = self.items.len(), "Cart cleared.");
    self.items.clear();
  }

  /// Sum of quantities, not the number of lines.
  pub fn total_items(&self) -> u64 {
    self.items.iter().map(|item| u64::from(item.quantity)).sum()
  }

  /// Exact sum of every line total. Rounding for display is up to the caller.
  pub fn total_price(&self) -> Money {
    self.items.iter().map(CartItem::line_total).sum()
  }

  pub fn items(&self) -> &[CartItem] {
    &self.items
  }

  pub fn get(&self, id: ProductId) -> Option<&CartItem> {
    self.items.iter().find(|item| item.id == id)
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}
