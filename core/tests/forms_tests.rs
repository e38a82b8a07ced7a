// tests/forms_tests.rs
mod common;

use bakery::account::{sign_in, SignInForm, SignInRequest};
use bakery::contact::ContactDetails;
use bakery::profile::{OrderStatus, Profile};
use bakery::{FormError, Money};
use chrono::NaiveDate;
use common::*;

#[test]
fn test_contact_form_is_trimmed_and_accepted() {
  let mut raw = contact_form();
  raw.city = "  Abuja ".to_string();
  let details = ContactDetails::try_from(raw).unwrap();
  assert_eq!(details.city, "Abuja");
  assert_eq!(details.full_name(), "Ada Okafor");
}

#[test]
fn test_contact_form_reports_missing_fields() {
  let mut raw = contact_form();
  raw.phone.clear();
  raw.state.clear();
  let err = ContactDetails::try_from(raw).unwrap_err();
  assert_eq!(
    err,
    FormError::MissingFields {
      fields: vec!["phone", "state"]
    }
  );
}

#[test]
fn test_contact_form_rejects_malformed_email() {
  for bad in ["ada", "ada@", "@example.com", "ada @example.com", "a@b@c"] {
    let mut raw = contact_form();
    raw.email = bad.to_string();
    assert!(
      matches!(ContactDetails::try_from(raw), Err(FormError::InvalidEmail { .. })),
      "expected {:?} to be rejected",
      bad
    );
  }
}

#[test]
fn test_sign_in_greets_with_store_name() {
  let form = SignInForm::try_from(SignInRequest {
    email: "john.doe@example.com".to_string(),
    password: "hunter2".to_string(),
  })
  .unwrap();
  assert!(!format!("{:?}", form).contains("hunter2"));

  let greeting = sign_in(&form, "Kiddie's Cake");
  assert_eq!(greeting.title, "Sign In Successful!");
  assert_eq!(greeting.message, "Welcome back to Kiddie's Cake!");
}

#[test]
fn test_sign_in_requires_password() {
  let err = SignInForm::try_from(SignInRequest {
    email: "john.doe@example.com".to_string(),
    password: String::new(),
  })
  .unwrap_err();
  assert_eq!(err.to_string(), "Please fill in all required fields.");
}

#[test]
fn test_profile_seed_and_update() {
  let mut profile = Profile::seeded();
  assert_eq!(profile.details.full_name(), "John Doe");
  assert_eq!(profile.orders.len(), 3);
  assert_eq!(profile.orders[2].status, OrderStatus::Processing);

  let details = ContactDetails::try_from(contact_form()).unwrap();
  profile.update(details.clone());
  assert_eq!(profile.details, details);
}

#[test]
fn test_record_order_uses_next_id_newest_first() {
  let mut profile = Profile::seeded();
  let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

  let record = profile
    .record_order(date, Money::from_minor(9_698), vec!["Rainbow Birthday Cake".to_string()])
    .clone();

  assert_eq!(record.id, "ORD-004");
  assert_eq!(record.status, OrderStatus::Processing);
  assert_eq!(profile.orders[0], record);
  assert_eq!(profile.orders.len(), 4);
}
