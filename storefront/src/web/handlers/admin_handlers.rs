// storefront/src/web/handlers/admin_handlers.rs

use actix_web::{web, HttpResponse};
use bakery::admin::{ProductDraft, ProductForm};
use bakery::{Category, ProductId};
use serde_json::json;
use tracing::{info, instrument};

use super::naira;
use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AdminAccess;

#[instrument(name = "handler::admin_list_products", skip(app_state, _access))]
pub async fn list_inventory_handler(
  app_state: web::Data<AppState>,
  _access: AdminAccess,
) -> Result<HttpResponse, AppError> {
  let inventory = app_state.inventory.read();
  let stats = inventory.stats();
  let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();

  Ok(HttpResponse::Ok().json(json!({
      "products": inventory.list(),
      "stats": {
          "totalProducts": stats.total_products,
          "categories": stats.categories,
          "averagePrice": stats.average_price,
          "displayAveragePrice": naira(stats.average_price),
      },
      "categoryOptions": categories,
  })))
}

#[instrument(name = "handler::admin_create_product", skip(app_state, _access, req_payload), fields(name = %req_payload.name))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  _access: AdminAccess,
  req_payload: web::Json<ProductForm>,
) -> Result<HttpResponse, AppError> {
  let draft = ProductDraft::try_from(req_payload.into_inner())?;
  let product = app_state.inventory.update(|inventory| inventory.create(draft).clone());
  info!(product_id = product.id, "Admin created product.");

  Ok(HttpResponse::Created().json(json!({
      "message": "Product added successfully!",
      "product": product,
  })))
}

#[instrument(
    name = "handler::admin_update_product",
    skip(app_state, _access, path, req_payload),
    fields(product_id = %path.as_ref())
)]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  _access: AdminAccess,
  path: web::Path<ProductId>,
  req_payload: web::Json<ProductForm>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let draft = ProductDraft::try_from(req_payload.into_inner())?;
  let product = app_state
    .inventory
    .update(|inventory| inventory.update(product_id, draft).cloned())?;
  info!("Admin updated product {}.", product_id);

  Ok(HttpResponse::Ok().json(json!({
      "message": "Product updated successfully!",
      "product": product,
  })))
}

#[instrument(name = "handler::admin_delete_product", skip(app_state, _access, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  _access: AdminAccess,
  path: web::Path<ProductId>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let removed = app_state.inventory.update(|inventory| inventory.delete(product_id))?;
  info!("Admin deleted product {} ('{}').", product_id, removed.name);

  Ok(HttpResponse::Ok().json(json!({
      "message": "Product deleted successfully!",
      "productId": product_id,
  })))
}
