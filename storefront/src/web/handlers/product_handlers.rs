// storefront/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use bakery::{CatalogQuery, Category, Product, ProductId};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use super::naira;
use crate::errors::AppError;
use crate::state::AppState;

fn product_card(product: &Product) -> Value {
  json!({
      "product": product,
      "image": product.image(),
      "displayPrice": naira(product.price),
  })
}

#[instrument(name = "handler::home", skip(app_state))]
pub async fn home_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let featured: Vec<Value> = app_state.catalog.featured().iter().map(product_card).collect();
  let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();

  Ok(HttpResponse::Ok().json(json!({
      "storeName": app_state.config.store_name,
      "featured": featured,
      "categories": categories,
  })))
}

#[instrument(
    name = "handler::list_products",
    skip(app_state, query_params),
    fields(search = %query_params.search, category = ?query_params.category)
)]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<CatalogQuery>,
) -> Result<HttpResponse, AppError> {
  let products: Vec<Value> = app_state
    .catalog
    .search(&query_params)?
    .into_iter()
    .map(product_card)
    .collect();

  info!("Listing {} products.", products.len());

  Ok(HttpResponse::Ok().json(json!({
      "count": products.len(),
      "products": products,
      // The listing page shows this when nothing matched
      "message": if products.is_empty() { Some("No products found") } else { None },
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let Some(product) = app_state.catalog.find(product_id) else {
    warn!("Product with ID {} not found.", product_id);
    return Err(AppError::NotFound("Product not found".to_string()));
  };
  let related: Vec<Value> = app_state.catalog.related(product_id).into_iter().map(product_card).collect();

  Ok(HttpResponse::Ok().json(json!({
      "product": product,
      "displayPrice": naira(product.price),
      "related": related,
  })))
}
