// bakery/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Rejection raised while turning raw form input into a typed form value.
///
/// The `Display` text is the message shown to the shopper, so it is worded
/// for people rather than for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
  #[error("Please fill in all required fields.")]
  MissingFields { fields: Vec<&'static str> },

  #[error("Please upload at least one image.")]
  MissingImage,

  #[error("Please enter a valid price.")]
  InvalidPrice { input: String },

  #[error("Please enter a valid email address.")]
  InvalidEmail { input: String },

  #[error("Unknown category: {input}")]
  UnknownCategory { input: String },
}

impl FormError {
  /// Collects the names of blank fields; `Ok(())` when every field has content.
  pub(crate) fn require(fields: &[(&'static str, &str)]) -> Result<(), FormError> {
    let missing: Vec<&'static str> = fields
      .iter()
      .filter(|(_, value)| value.trim().is_empty())
      .map(|(name, _)| *name)
      .collect();
    if missing.is_empty() {
      Ok(())
    } else {
      Err(FormError::MissingFields { fields: missing })
    }
  }
}

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Product not found: {product_id}")]
  ProductNotFound { product_id: u64 },

  #[error(transparent)]
  Form(#[from] FormError),

  #[error("There are no items in the cart to check out")]
  EmptyCart,

  #[error("Payment declined: {reason}")]
  PaymentDeclined { reason: String },

  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("Internal store error. Source: {source}")]
  Internal {
    #[source]
    source: AnyhowError,
  },
}

impl From<AnyhowError> for StoreError {
  fn from(err: AnyhowError) -> Self {
    // Unwrap a StoreError that was boxed into anyhow on its way up.
    match err.downcast::<StoreError>() {
      Ok(store_err) => store_err,
      Err(source) => StoreError::Internal { source },
    }
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
