// bakery/src/checkout/flow.rs

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::payment::{PaymentGateway, PaymentReceipt, PaymentRequest};
use super::summary::OrderSummary;
use super::CheckoutDetails;
use crate::cart::{CartHandle, CartItem};
use crate::contact::ContactForm;
use crate::error::{StoreError, StoreResult};
use crate::flow::{Flow, FlowOutcome, SkipCondition, StepControl};
use crate::money::Money;
use crate::profile::Profile;
use crate::shared::Shared;

pub const CONFIRMATION_TITLE: &str = "Payment Successful!";
pub const CONFIRMATION_MESSAGE: &str =
  "Your order has been placed successfully. You will receive a confirmation email shortly.";

/// Everything one checkout needs from the caller.
pub struct CheckoutRequest {
  pub form: ContactForm,
  pub cart: CartHandle,
  /// Where the placed order is recorded, if anywhere.
  pub profile: Option<Shared<Profile>>,
  pub delivery_fee: Money,
  pub placed_on: NaiveDate,
}

/// Working state threaded through the checkout steps.
pub struct CheckoutState {
  pub form: ContactForm,
  pub cart: CartHandle,
  pub profile: Option<Shared<Profile>>,
  pub delivery_fee: Money,
  pub placed_on: NaiveDate,
  pub details: Option<CheckoutDetails>,
  pub lines: Vec<CartItem>,
  pub summary: Option<OrderSummary>,
  /// True while the payment is in flight.
  pub processing: bool,
  pub receipt: Option<PaymentReceipt>,
  pub order_id: Option<String>,
}

impl From<CheckoutRequest> for CheckoutState {
  fn from(req: CheckoutRequest) -> Self {
    Self {
      form: req.form,
      cart: req.cart,
      profile: req.profile,
      delivery_fee: req.delivery_fee,
      placed_on: req.placed_on,
      details: None,
      lines: Vec::new(),
      summary: None,
      processing: false,
      receipt: None,
      order_id: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
  pub order_id: String,
  pub payment_reference: String,
  pub summary: OrderSummary,
  pub lines: Vec<CartItem>,
  pub title: String,
  pub message: String,
}

pub struct CheckoutFlow {
  flow: Flow<CheckoutState, StoreError>,
}

impl CheckoutFlow {
  pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
    let no_profile: SkipCondition<CheckoutState> = Arc::new(|state: &CheckoutState| state.profile.is_none());
    let mut flow = Flow::<CheckoutState, StoreError>::new(&[
      ("validate_details", false, None),
      ("ensure_cart_has_items", false, None),
      ("process_payment", false, None),
      ("clear_cart", false, None),
      ("record_order", true, Some(no_profile)),
    ]);

    flow.on("validate_details", |state: Shared<CheckoutState>| async move {
      let form = state.read().form.clone();
      let details = CheckoutDetails::try_from(form)?;
      info!(email = %details.email, "Checkout details accepted.");
      state.write().details = Some(details);
      Ok::<_, StoreError>(StepControl::Continue)
    });

    flow.on("ensure_cart_has_items", |state: Shared<CheckoutState>| async move {
      let mut guard = state.write();
      let (lines, summary) = {
        let cart = guard.cart.read();
        (cart.items().to_vec(), OrderSummary::for_cart(&cart, guard.delivery_fee))
      };
      if lines.is_empty() {
        warn!("Checkout attempted with an empty cart.");
        return Err(StoreError::EmptyCart);
      }
      info!(lines = lines.len(), total = %summary.total, "Cart snapshot taken for checkout.");
      guard.lines = lines;
      guard.summary = Some(summary);
      Ok(StepControl::Continue)
    });

    flow.before("process_payment", |state: Shared<CheckoutState>| async move {
      state.write().processing = true;
      Ok::<_, StoreError>(StepControl::Continue)
    });

    let charging_gateway = gateway.clone();
    flow.on("process_payment", move |state: Shared<CheckoutState>| {
      let gateway = charging_gateway.clone();
      async move {
        let request = {
          let guard = state.read();
          PaymentRequest {
            amount: guard.summary.map_or(Money::ZERO, |s| s.total),
            payer_email: guard.details.as_ref().map(|d| d.email.clone()).unwrap_or_default(),
          }
        };
        match gateway.charge(&request).await {
          Ok(receipt) => {
            info!(reference = %receipt.reference, amount = %receipt.amount, "Payment accepted.");
            state.write().receipt = Some(receipt);
            Ok(StepControl::Continue)
          }
          Err(e) => {
            state.write().processing = false;
            Err(e)
          }
        }
      }
    });

    flow.after("process_payment", |state: Shared<CheckoutState>| async move {
      state.write().processing = false;
      Ok::<_, StoreError>(StepControl::Continue)
    });

    flow.on("clear_cart", |state: Shared<CheckoutState>| async move {
      let (cart, charged) = {
        let guard = state.read();
        (guard.cart.clone(), guard.lines.clone())
      };
      // Only what was paid for leaves the cart.
      cart.update(|c| c.remove_charged(&charged));
      Ok::<_, StoreError>(StepControl::Continue)
    });

    flow.on("record_order", |state: Shared<CheckoutState>| async move {
      let mut guard = state.write();
      let total = guard.summary.map_or(Money::ZERO, |s| s.total);
      let items: Vec<String> = guard.lines.iter().map(|line| line.name.clone()).collect();
      let placed_on = guard.placed_on;
      if let Some(profile) = guard.profile.clone() {
        let order_id = profile.update(|p| p.record_order(placed_on, total, items).id.clone());
        guard.order_id = Some(order_id);
      }
      Ok::<_, StoreError>(StepControl::Continue)
    });

    Self { flow }
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.flow.step_names()
  }

  /// Validates the form, charges the order total, then empties the cart.
  /// The cart is left untouched when any step before the charge fails.
  #[instrument(name = "CheckoutFlow::checkout", skip_all)]
  pub async fn checkout(&self, request: CheckoutRequest) -> StoreResult<OrderConfirmation> {
    let state = Shared::new(CheckoutState::from(request));
    match self.flow.run(state.clone()).await? {
      FlowOutcome::Completed => {}
      FlowOutcome::Stopped => {
        return Err(StoreError::from(anyhow::anyhow!("checkout halted before completion")));
      }
    }

    let guard = state.read();
    let (Some(summary), Some(receipt)) = (guard.summary, guard.receipt.as_ref()) else {
      return Err(StoreError::from(anyhow::anyhow!(
        "checkout completed without a summary or payment receipt"
      )));
    };
    Ok(OrderConfirmation {
      order_id: guard.order_id.clone().unwrap_or_else(|| receipt.reference.clone()),
      payment_reference: receipt.reference.clone(),
      summary,
      lines: guard.lines.clone(),
      title: CONFIRMATION_TITLE.to_string(),
      message: CONFIRMATION_MESSAGE.to_string(),
    })
  }
}
