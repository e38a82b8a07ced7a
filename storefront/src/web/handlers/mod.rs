// storefront/src/web/handlers/mod.rs

pub mod admin_handlers;
pub mod auth_handlers;
pub mod cart_handlers;
pub mod checkout_handlers;
pub mod product_handlers;
pub mod profile_handlers;

use bakery::Money;

/// Prices are shown in naira: `₦45.99`.
pub(crate) fn naira(amount: Money) -> String {
  format!("₦{}", amount)
}
