// bakery/src/checkout/mod.rs

//! Checkout: order summary, the payment seam and the step flow that ties
//! the cart, the payment and the profile's order history together.

pub mod flow;
pub mod payment;
pub mod summary;

pub use flow::{CheckoutFlow, CheckoutRequest, CheckoutState, OrderConfirmation};
pub use payment::{PaymentGateway, PaymentReceipt, PaymentRequest};
pub use summary::{OrderSummary, DEFAULT_DELIVERY_FEE};

/// The checkout page's contact and delivery form, validated.
pub type CheckoutDetails = crate::contact::ContactDetails;
