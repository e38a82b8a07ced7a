// storefront/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use bakery::contact::ContactForm;
use bakery::{CheckoutRequest, OrderSummary};
use chrono::Utc;
use serde_json::json;
use tracing::{info, instrument, warn};

use super::cart_handlers::summary_view;
use super::naira;
use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::SessionCart;

/// What the checkout page shows before the form is submitted.
#[instrument(name = "handler::checkout_page", skip(app_state, session), fields(session_id = %session.session_id))]
pub async fn checkout_page_handler(
  app_state: web::Data<AppState>,
  session: SessionCart,
) -> Result<HttpResponse, AppError> {
  let cart = session.cart.read();
  if cart.is_empty() {
    return Ok(HttpResponse::Ok().json(json!({
        "isEmpty": true,
        "title": "No Items to Checkout",
        "message": "Add some items to your cart first!",
    })));
  }

  let summary = OrderSummary::for_cart(&cart, app_state.config.delivery_fee);
  let lines: Vec<_> = cart
    .items()
    .iter()
    .map(|item| json!({ "item": item, "displayLineTotal": naira(item.line_total()) }))
    .collect();
  Ok(HttpResponse::Ok().json(json!({
      "isEmpty": false,
      "lines": lines,
      "summary": summary_view(&summary),
      // Pre-fill the form from the profile
      "contact": app_state.profile.read().details,
  })))
}

#[instrument(
    name = "handler::place_order",
    skip(app_state, req_payload, session),
    fields(session_id = %session.session_id, email = %req_payload.email)
)]
pub async fn place_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ContactForm>,
  session: SessionCart,
) -> Result<HttpResponse, AppError> {
  info!("Checkout attempt for session: {}", session.session_id);

  let request = CheckoutRequest {
    form: req_payload.into_inner(),
    cart: session.cart.clone(),
    profile: Some(app_state.profile.clone()),
    delivery_fee: app_state.config.delivery_fee,
    placed_on: Utc::now().date_naive(),
  };

  match app_state.checkout.checkout(request).await {
    Ok(confirmation) => {
      info!(
        "Checkout completed for session: {}. Order ID: {}. Payment reference: {}",
        session.session_id, confirmation.order_id, confirmation.payment_reference
      );
      Ok(HttpResponse::Ok().json(json!({
          "title": confirmation.title,
          "message": confirmation.message,
          "orderId": confirmation.order_id,
          "paymentReference": confirmation.payment_reference,
          "summary": summary_view(&confirmation.summary),
          "lines": confirmation.lines,
      })))
    }
    Err(store_err) => {
      warn!("Checkout failed for session {}: {}", session.session_id, store_err);
      Err(store_err.into())
    }
  }
}
