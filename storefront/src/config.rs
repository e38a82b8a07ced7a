// storefront/src/config.rs

use crate::errors::{AppError, Result};
use bakery::checkout::DEFAULT_DELIVERY_FEE;
use bakery::Money;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  // Value expected in `?key=` on the admin routes
  pub admin_key: String,

  // How long the simulated payment takes
  pub payment_delay: Duration,

  pub delivery_fee: Money,
  pub store_name: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; missing variables fall back
  /// to their defaults, malformed ones are `AppError::Config`.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_env = |var_name: &str, default: &str| lookup(var_name).unwrap_or_else(|| default.to_string());

    let server_host = get_env("SERVER_HOST", "127.0.0.1");
    let server_port = get_env("SERVER_PORT", "8080")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let admin_key = get_env("ADMIN_KEY", "admin123");
    let payment_delay_ms = get_env("PAYMENT_DELAY_MS", "2000")
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid PAYMENT_DELAY_MS: {}", e)))?;
    let delivery_fee = match lookup("DELIVERY_FEE") {
      Some(raw) => Money::parse(&raw).map_err(|e| AppError::Config(format!("Invalid DELIVERY_FEE: {}", e)))?,
      None => DEFAULT_DELIVERY_FEE,
    };
    let store_name = get_env("STORE_NAME", "Kiddie's Cake");

    tracing::info!("Application configuration loaded successfully.");
    // The admin key is visible in URLs anyway, but keep it out of the logs.
    tracing::debug!(%server_host, server_port, payment_delay_ms, %delivery_fee, %store_name, "Loaded config details");

    Ok(Self {
      server_host,
      server_port,
      admin_key,
      payment_delay: Duration::from_millis(payment_delay_ms),
      delivery_fee,
      store_name,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| vars.get(name).cloned()
  }

  #[test]
  fn defaults_apply_when_nothing_is_set() {
    let config = AppConfig::from_lookup(lookup_from(&[])).expect("defaults load");
    assert_eq!(config.server_host, "127.0.0.1");
    assert_eq!(config.server_port, 8080);
    assert_eq!(config.admin_key, "admin123");
    assert_eq!(config.payment_delay, Duration::from_millis(2000));
    assert_eq!(config.delivery_fee, Money::from_minor(50_000));
    assert_eq!(config.store_name, "Kiddie's Cake");
  }

  #[test]
  fn overrides_are_parsed() {
    let config = AppConfig::from_lookup(lookup_from(&[
      ("SERVER_PORT", "9000"),
      ("PAYMENT_DELAY_MS", "0"),
      ("DELIVERY_FEE", "750.5"),
    ]))
    .expect("overrides load");
    assert_eq!(config.server_port, 9000);
    assert_eq!(config.payment_delay, Duration::ZERO);
    assert_eq!(config.delivery_fee, Money::from_minor(75_050));
  }

  #[test]
  fn malformed_numbers_are_config_errors() {
    for (name, value) in [("SERVER_PORT", "eighty"), ("PAYMENT_DELAY_MS", "-1"), ("DELIVERY_FEE", "5.001")] {
      let err = AppConfig::from_lookup(lookup_from(&[(name, value)])).unwrap_err();
      assert!(matches!(err, AppError::Config(ref m) if m.contains(name)), "{name}: {err}");
    }
  }
}
