// bakery/src/checkout/payment.rs

use async_trait::async_trait;
use serde::Serialize;

use crate::error::StoreResult;
use crate::money::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
  pub amount: Money,
  pub payer_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentReceipt {
  pub reference: String,
  pub amount: Money,
}

/// Takes the money for an order. The storefront only ships a simulated
/// gateway; a declined charge is `StoreError::PaymentDeclined`.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
  async fn charge(&self, request: &PaymentRequest) -> StoreResult<PaymentReceipt>;
}
