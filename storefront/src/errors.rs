// storefront/src/errors.rs

use actix_web::http::header;
use actix_web::{HttpResponse, ResponseError};
use bakery::{FormError, StoreError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Missing or blank X-Session-ID header")]
  MissingSession,

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Payment Processing Error: {0}")]
  Payment(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  // The admin pages bounce to the home page on a wrong or missing key.
  #[error("Admin key rejected")]
  AdminKeyRejected,

  #[error("Store Error: {source}")]
  Store {
    #[source]
    source: StoreError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl From<FormError> for AppError {
  fn from(err: FormError) -> Self {
    AppError::Validation(err.to_string())
  }
}

impl From<StoreError> for AppError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::ProductNotFound { .. } => AppError::NotFound("Product not found".to_string()),
      StoreError::Form(form_err) => form_err.into(),
      StoreError::EmptyCart => AppError::Validation("Add some items to your cart first!".to_string()),
      StoreError::PaymentDeclined { reason } => AppError::Payment(reason),
      other => AppError::Store { source: other },
    }
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::MissingSession => HttpResponse::BadRequest().json(json!({"error": self.to_string()})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Payment(m) => HttpResponse::PaymentRequired().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::AdminKeyRejected => HttpResponse::SeeOther().insert_header((header::LOCATION, "/")).finish(),
      AppError::Store { source } => {
        tracing::error!(store_error_source = ?source, "Store error details");
        HttpResponse::InternalServerError()
          .json(json!({"error": "Store processing error", "detail": source.to_string()}))
      }
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
