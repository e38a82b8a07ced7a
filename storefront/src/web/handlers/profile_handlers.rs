// storefront/src/web/handlers/profile_handlers.rs

use actix_web::{web, HttpResponse};
use bakery::contact::{ContactDetails, ContactForm};
use bakery::profile::Profile;
use serde_json::{json, Value};
use tracing::{info, instrument};

use super::naira;
use crate::errors::AppError;
use crate::state::AppState;

fn profile_view(profile: &Profile) -> Value {
  let orders: Vec<Value> = profile
    .orders
    .iter()
    .map(|order| json!({ "order": order, "displayTotal": naira(order.total) }))
    .collect();
  json!({
      "details": profile.details,
      "fullName": profile.details.full_name(),
      "orders": orders,
  })
}

#[instrument(name = "handler::get_profile", skip(app_state))]
pub async fn get_profile_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let body = profile_view(&app_state.profile.read());
  Ok(HttpResponse::Ok().json(body))
}

#[instrument(name = "handler::update_profile", skip(app_state, req_payload), fields(email = %req_payload.email))]
pub async fn update_profile_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ContactForm>,
) -> Result<HttpResponse, AppError> {
  let details = ContactDetails::try_from(req_payload.into_inner())?;
  let body = app_state.profile.update(|profile| {
    profile.update(details);
    profile_view(profile)
  });
  info!("Profile saved.");

  Ok(HttpResponse::Ok().json(json!({
      "title": "Profile Updated",
      "message": "Your profile has been updated successfully!",
      "profile": body,
  })))
}
