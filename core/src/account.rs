// bakery/src/account.rs

//! The sign-in page. There are no accounts behind it: any well-formed
//! submission is greeted.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::contact::checked_email;
use crate::error::FormError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInRequest {
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub password: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct SignInForm {
  pub email: String,
  password: String,
}

impl std::fmt::Debug for SignInForm {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SignInForm")
      .field("email", &self.email)
      .field("password", &"[REDACTED]")
      .finish()
  }
}

impl SignInForm {
  pub fn password(&self) -> &str {
    &self.password
  }
}

impl TryFrom<SignInRequest> for SignInForm {
  type Error = FormError;

  fn try_from(req: SignInRequest) -> Result<Self, Self::Error> {
    FormError::require(&[("email", &req.email), ("password", &req.password)])?;
    Ok(Self {
      email: checked_email(&req.email)?,
      password: req.password,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInGreeting {
  pub title: String,
  pub message: String,
}

pub fn sign_in(form: &SignInForm, store_name: &str) -> SignInGreeting {
  info!(email = %form.email, "Sign-in accepted.");
  SignInGreeting {
    title: "Sign In Successful!".to_string(),
    message: format!("Welcome back to {}!", store_name),
  }
}
