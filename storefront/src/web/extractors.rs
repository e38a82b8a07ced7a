// storefront/src/web/extractors.rs

use actix_web::{web, FromRequest, HttpRequest};
use bakery::{CartHandle, SessionId};
use futures_util::future::{ready, Ready};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

pub const SESSION_HEADER: &str = "X-Session-ID";

fn app_state(req: &HttpRequest) -> Result<&web::Data<AppState>, AppError> {
  req
    .app_data::<web::Data<AppState>>()
    .ok_or_else(|| AppError::Internal("Application state is not configured.".to_string()))
}

/// The browsing session named by the `X-Session-ID` header, with its cart.
/// A session seen for the first time starts with an empty cart.
#[derive(Debug)]
pub struct SessionCart {
  pub session_id: SessionId,
  pub cart: CartHandle,
}

impl FromRequest for SessionCart {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let session_id = req
      .headers()
      .get(SESSION_HEADER)
      .and_then(|value| value.to_str().ok())
      .and_then(SessionId::parse);

    let Some(session_id) = session_id else {
      warn!("SessionCart extractor: Missing or blank {} header.", SESSION_HEADER);
      return ready(Err(AppError::MissingSession));
    };

    ready(app_state(req).map(|state| {
      let cart = state.carts.cart_for(&session_id);
      SessionCart { session_id, cart }
    }))
  }
}

#[derive(Deserialize)]
struct AdminKeyQuery {
  key: Option<String>,
}

/// Proof that the request carried the right `?key=` for the admin pages.
#[derive(Debug)]
pub struct AdminAccess;

impl FromRequest for AdminAccess {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let provided = web::Query::<AdminKeyQuery>::from_query(req.query_string())
      .ok()
      .and_then(|q| q.into_inner().key);

    let admitted = match app_state(req) {
      Ok(state) => state.admin_key.admits(provided.as_deref()),
      Err(e) => return ready(Err(e)),
    };
    if admitted {
      ready(Ok(AdminAccess))
    } else {
      warn!(path = %req.path(), "AdminAccess extractor: admin key rejected, redirecting home.");
      ready(Err(AppError::AdminKeyRejected))
    }
  }
}
