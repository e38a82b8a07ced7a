// bakery/src/admin/mod.rs

//! The admin product panel: typed product form, the panel's product list
//! and the query-string key that gates it.

pub mod form;
pub mod inventory;

pub use form::{ProductDraft, ProductForm};
pub use inventory::{InventoryStats, ProductInventory};

/// The `?key=` value the admin pages expect. This is a convenience gate that
/// anyone reading the URL can pass, not an access control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminKey(String);

impl AdminKey {
  pub fn new(key: impl Into<String>) -> Self {
    Self(key.into())
  }

  pub fn admits(&self, provided: Option<&str>) -> bool {
    provided == Some(self.0.as_str())
  }
}
