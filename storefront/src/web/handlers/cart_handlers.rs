// storefront/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use bakery::{Cart, OrderSummary, ProductId};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use super::naira;
use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::SessionCart;

#[derive(Deserialize, Debug)]
pub struct AddToCartRequestPayload {
  pub product_id: ProductId,
}

#[derive(Deserialize, Debug)]
pub struct UpdateQuantityPayload {
  pub quantity: i64,
}

/// Cart page body: lines, badge count and the order summary box.
pub(crate) fn cart_view(cart: &Cart, app_state: &AppState) -> Value {
  let summary = OrderSummary::for_cart(cart, app_state.config.delivery_fee);
  let items: Vec<Value> = cart
    .items()
    .iter()
    .map(|item| {
      json!({
          "item": item,
          "image": item.image(),
          "lineTotal": item.line_total(),
          "displayLineTotal": naira(item.line_total()),
      })
    })
    .collect();

  json!({
      "items": items,
      "totalItems": cart.total_items(),
      "isEmpty": cart.is_empty(),
      "message": if cart.is_empty() { Some("Your Cart is Empty") } else { None },
      "summary": summary_view(&summary),
  })
}

pub(crate) fn summary_view(summary: &OrderSummary) -> Value {
  json!({
      "itemCount": summary.item_count,
      "subtotal": summary.subtotal,
      "deliveryFee": summary.delivery_fee,
      "total": summary.total,
      "display": {
          "subtotal": naira(summary.subtotal),
          "deliveryFee": naira(summary.delivery_fee),
          "total": naira(summary.total),
      },
  })
}

#[instrument(name = "handler::view_cart", skip(app_state, session), fields(session_id = %session.session_id))]
pub async fn view_cart_handler(
  app_state: web::Data<AppState>,
  session: SessionCart,
) -> Result<HttpResponse, AppError> {
  let body = cart_view(&session.cart.read(), &app_state);
  Ok(HttpResponse::Ok().json(body))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload, session),
    fields(session_id = %session.session_id, product_id = %req_payload.product_id)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
  session: SessionCart,
) -> Result<HttpResponse, AppError> {
  let Some(product) = app_state.catalog.find(req_payload.product_id) else {
    warn!("Add to cart rejected: product {} is not in the catalog.", req_payload.product_id);
    return Err(AppError::NotFound("Product not found".to_string()));
  };

  let total_items = session.cart.update(|cart| {
    cart.add_to_cart(product);
    cart.total_items()
  });
  info!(total_items, "Added '{}' to cart.", product.name);

  Ok(HttpResponse::Ok().json(json!({
      "title": "Added to Cart",
      "message": format!("{} has been added to your cart!", product.name),
      "totalItems": total_items,
  })))
}

#[instrument(
    name = "handler::update_cart_quantity",
    skip(app_state, path, req_payload, session),
    fields(session_id = %session.session_id, product_id = %path.as_ref(), quantity = req_payload.quantity)
)]
pub async fn update_quantity_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
  req_payload: web::Json<UpdateQuantityPayload>,
  session: SessionCart,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  session.cart.update(|cart| cart.update_quantity(product_id, req_payload.quantity));
  let body = cart_view(&session.cart.read(), &app_state);
  Ok(HttpResponse::Ok().json(body))
}

#[instrument(
    name = "handler::remove_from_cart",
    skip(app_state, path, session),
    fields(session_id = %session.session_id, product_id = %path.as_ref())
)]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
  session: SessionCart,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  session.cart.update(|cart| cart.remove_from_cart(product_id));
  let body = cart_view(&session.cart.read(), &app_state);
  Ok(HttpResponse::Ok().json(body))
}

#[instrument(name = "handler::cart_summary", skip(app_state, session), fields(session_id = %session.session_id))]
pub async fn cart_summary_handler(
  app_state: web::Data<AppState>,
  session: SessionCart,
) -> Result<HttpResponse, AppError> {
  let summary = OrderSummary::for_cart(&session.cart.read(), app_state.config.delivery_fee);
  Ok(HttpResponse::Ok().json(json!({
      "totalItems": summary.item_count,
      "subtotal": summary.subtotal,
      "displaySubtotal": naira(summary.subtotal),
  })))
}
