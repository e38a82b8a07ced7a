// storefront/src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use bakery::account::{sign_in, SignInForm, SignInRequest};
use serde_json::json;
use tracing::{instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::signin", skip(app_state, req_payload), fields(req_email = %req_payload.email))]
pub async fn signin_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<SignInRequest>,
) -> Result<HttpResponse, AppError> {
  let form = SignInForm::try_from(req_payload.into_inner()).map_err(|e| {
    warn!("Signin form rejected: {}", e);
    AppError::from(e)
  })?;

  let greeting = sign_in(&form, &app_state.config.store_name);
  Ok(HttpResponse::Ok().json(json!({
      "title": greeting.title,
      "message": greeting.message,
      "email": form.email,
  })))
}
