// bakery/src/cart/mod.rs

//! The Cart Store: the only shared, mutable state that crosses views.

pub mod item;
pub mod sessions;
pub mod store;

pub use item::CartItem;
pub use sessions::{CartHandle, CartSessions, SessionId};
pub use store::Cart;
