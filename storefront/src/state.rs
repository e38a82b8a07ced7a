// storefront/src/state.rs
use crate::config::AppConfig;
use crate::services::payment_mock::SimulatedPayment;
use bakery::admin::{AdminKey, ProductInventory};
use bakery::profile::Profile;
use bakery::{CartSessions, Catalog, CheckoutFlow, Shared};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub catalog: Arc<Catalog>,
  pub carts: Arc<CartSessions>,
  // The admin panel edits its own list, not the catalog
  pub inventory: Shared<ProductInventory>,
  pub profile: Shared<Profile>,
  pub checkout: Arc<CheckoutFlow>,
  pub admin_key: AdminKey,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(config: Arc<AppConfig>) -> Self {
    let gateway = Arc::new(SimulatedPayment::new(config.payment_delay));
    Self {
      catalog: Arc::new(Catalog::seeded()),
      carts: Arc::new(CartSessions::new()),
      inventory: Shared::new(ProductInventory::seeded()),
      profile: Shared::new(Profile::seeded()),
      checkout: Arc::new(CheckoutFlow::new(gateway)),
      admin_key: AdminKey::new(config.admin_key.clone()),
      config,
    }
  }
}
