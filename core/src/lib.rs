// bakery/src/lib.rs

//! Bakery: the domain core of a small bakery storefront.
//!
//!  - A read-only product catalog with search, category filter and related
//!    products.
//!  - The Cart Store: per-session shopping carts with exact totals.
//!  - The admin panel's product list, fed by a validated product form.
//!  - Typed contact, sign-in and profile forms.
//!  - A checkout built on a small step flow with a pluggable payment gateway.
//!
//! State that views share is handed around explicitly as [`Shared`] handles;
//! nothing in this crate is a global.

pub mod account;
pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod contact;
pub mod error;
pub mod flow;
pub mod money;
pub mod profile;
pub mod shared;

// --- Re-exports for the Public API ---

pub use crate::cart::{Cart, CartHandle, CartItem, CartSessions, SessionId};
pub use crate::catalog::{Catalog, CatalogQuery, Category, CategoryFilter, Product, ProductId};
pub use crate::checkout::{CheckoutFlow, CheckoutRequest, OrderConfirmation, OrderSummary, PaymentGateway};
pub use crate::error::{FormError, StoreError, StoreResult};
pub use crate::flow::{Flow, FlowOutcome, StepControl};
pub use crate::money::Money;
pub use crate::shared::Shared;
