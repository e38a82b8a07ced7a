// bakery/src/contact.rs

//! Name, email and delivery address, as collected by both the checkout page
//! and the profile page.

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Raw form submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub first_name: String,
  #[serde(default)]
  pub last_name: String,
  #[serde(default)]
  pub phone: String,
  #[serde(default)]
  pub address: String,
  #[serde(default)]
  pub city: String,
  #[serde(default)]
  pub state: String,
}

/// Contact details with every field present and a plausible email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
  pub email: String,
  pub first_name: String,
  pub last_name: String,
  pub phone: String,
  pub address: String,
  pub city: String,
  pub state: String,
}

impl ContactDetails {
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }
}

impl TryFrom<ContactForm> for ContactDetails {
  type Error = FormError;

  fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
    FormError::require(&[
      ("email", &form.email),
      ("firstName", &form.first_name),
      ("lastName", &form.last_name),
      ("phone", &form.phone),
      ("address", &form.address),
      ("city", &form.city),
      ("state", &form.state),
    ])?;
    let email = checked_email(&form.email)?;
    Ok(Self {
      email,
      first_name: form.first_name.trim().to_string(),
      last_name: form.last_name.trim().to_string(),
      phone: form.phone.trim().to_string(),
      address: form.address.trim().to_string(),
      city: form.city.trim().to_string(),
      state: form.state.trim().to_string(),
    })
  }
}

/// `local@domain` with no whitespace and both halves present.
pub(crate) fn checked_email(raw: &str) -> Result<String, FormError> {
  let email = raw.trim();
  let well_formed = match email.split_once('@') {
    Some((local, domain)) => {
      !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(char::is_whitespace)
    }
    None => false,
  };
  if well_formed {
    Ok(email.to_string())
  } else {
    Err(FormError::InvalidEmail { input: raw.to_string() })
  }
}
