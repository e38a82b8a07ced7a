// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use bakery::checkout::{PaymentGateway, PaymentReceipt, PaymentRequest};
use bakery::contact::ContactForm;
use bakery::{Category, Money, Product, ProductId, StoreError, StoreResult};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Fixtures ---
pub fn product(id: ProductId, price: &str) -> Product {
  Product {
    id,
    name: format!("Product {}", id),
    category: Category::Cakes,
    price: Money::parse(price).expect("fixture price"),
    images: vec![format!("https://img.example/{}.jpg", id)],
    description: "A fixture product".to_string(),
  }
}

pub fn contact_form() -> ContactForm {
  ContactForm {
    email: "ada@example.com".to_string(),
    first_name: "Ada".to_string(),
    last_name: "Okafor".to_string(),
    phone: "+234 800 000 0000".to_string(),
    address: "1 Bakery Lane".to_string(),
    city: "Lagos".to_string(),
    state: "Lagos State".to_string(),
  }
}

// --- Payment gateways ---
/// Approves every charge and counts them.
#[derive(Default)]
pub struct CountingGateway {
  pub charges: AtomicUsize,
}

impl CountingGateway {
  pub fn count(&self) -> usize {
    self.charges.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl PaymentGateway for CountingGateway {
  async fn charge(&self, request: &PaymentRequest) -> StoreResult<PaymentReceipt> {
    let n = self.charges.fetch_add(1, Ordering::SeqCst) + 1;
    Ok(PaymentReceipt {
      reference: format!("TEST-PAY-{}", n),
      amount: request.amount,
    })
  }
}

pub struct DecliningGateway;

#[async_trait]
impl PaymentGateway for DecliningGateway {
  async fn charge(&self, _request: &PaymentRequest) -> StoreResult<PaymentReceipt> {
    Err(StoreError::PaymentDeclined {
      reason: "card declined".to_string(),
    })
  }
}

/// Approves every charge after `delay`.
pub struct SlowGateway {
  pub delay: std::time::Duration,
}

#[async_trait]
impl PaymentGateway for SlowGateway {
  async fn charge(&self, request: &PaymentRequest) -> StoreResult<PaymentReceipt> {
    tokio::time::sleep(self.delay).await;
    Ok(PaymentReceipt {
      reference: "SLOW-PAY-1".to_string(),
      amount: request.amount,
    })
  }
}

pub fn counting_gateway() -> Arc<CountingGateway> {
  Arc::new(CountingGateway::default())
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counter for checking handler execution counts ---
pub static HANDLER_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));
