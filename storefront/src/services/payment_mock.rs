// storefront/src/services/payment_mock.rs
use async_trait::async_trait;
use bakery::checkout::{PaymentGateway, PaymentReceipt, PaymentRequest};
use bakery::{Money, StoreError, StoreResult};
use std::time::Duration;
use tracing::{info, instrument};
use uuid::Uuid;

/// Stand-in for a card processor: waits, then approves any positive amount.
#[derive(Debug, Clone)]
pub struct SimulatedPayment {
  delay: Duration,
}

impl SimulatedPayment {
  pub fn new(delay: Duration) -> Self {
    Self { delay }
  }
}

#[async_trait]
impl PaymentGateway for SimulatedPayment {
  #[instrument(name = "SimulatedPayment::charge", skip(self, request), fields(amount = %request.amount))]
  async fn charge(&self, request: &PaymentRequest) -> StoreResult<PaymentReceipt> {
    if request.amount <= Money::ZERO {
      return Err(StoreError::PaymentDeclined {
        reason: "Amount must be greater than zero".to_string(),
      });
    }
    info!(delay_ms = self.delay.as_millis() as u64, "Simulating payment processing.");
    tokio::time::sleep(self.delay).await; // Simulate processing

    let reference = format!("mock_pay_{}", Uuid::new_v4());
    info!(%reference, "Mock payment SUCCEEDED.");
    Ok(PaymentReceipt {
      reference,
      amount: request.amount,
    })
  }
}
