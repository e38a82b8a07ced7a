// bakery/src/checkout/summary.rs

use serde::Serialize;

use crate::cart::Cart;
use crate::money::Money;

/// Flat delivery charge added to every order.
pub const DEFAULT_DELIVERY_FEE: Money = Money::from_minor(50_000);

/// The "Order Summary" box of the cart and checkout pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
  pub item_count: u64,
  pub subtotal: Money,
  pub delivery_fee: Money,
  pub total: Money,
}

impl OrderSummary {
  pub fn for_cart(cart: &Cart, delivery_fee: Money) -> Self {
    let subtotal = cart.total_price();
    Self {
      item_count: cart.total_items(),
      subtotal,
      delivery_fee,
      total: subtotal + delivery_fee,
    }
  }
}
