// bakery/src/profile.rs

//! The shopper's profile page: contact details and past orders.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::contact::ContactDetails;
use crate::money::Money;

pub type ProfileDetails = ContactDetails;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderStatus {
  Processing,
  Delivered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRecord {
  pub id: String,
  pub date: NaiveDate,
  pub total: Money,
  pub status: OrderStatus,
  pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
  pub details: ProfileDetails,
  /// Newest first.
  pub orders: Vec<OrderRecord>,
}

impl Profile {
  pub fn new(details: ProfileDetails) -> Self {
    Self {
      details,
      orders: Vec::new(),
    }
  }

  /// The demo shopper with three past orders.
  pub fn seeded() -> Self {
    let details = ProfileDetails {
      email: "john.doe@example.com".to_string(),
      first_name: "John".to_string(),
      last_name: "Doe".to_string(),
      phone: "+234 123 456 7890".to_string(),
      address: "123 Main Street".to_string(),
      city: "Lagos".to_string(),
      state: "Lagos State".to_string(),
    };
    let order = |id: &str, (y, m, d): (i32, u32, u32), total: i64, status, items: &[&str]| OrderRecord {
      id: id.to_string(),
      date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
      total: Money::from_minor(total),
      status,
      items: items.iter().map(|s| s.to_string()).collect(),
    };
    Self {
      details,
      orders: vec![
        order(
          "ORD-001",
          (2024, 1, 15),
          250_000,
          OrderStatus::Delivered,
          &["Rainbow Birthday Cake", "Chocolate Chip Cookies"],
        ),
        order("ORD-002", (2024, 1, 10), 189_900, OrderStatus::Delivered, &["Fudge Brownies"]),
        order(
          "ORD-003",
          (2024, 1, 5),
          320_000,
          OrderStatus::Processing,
          &["Vanilla Cupcakes", "Sugar Cookies"],
        ),
      ],
    }
  }

  pub fn update(&mut self, details: ProfileDetails) {
    info!(email = %details.email, "Profile updated.");
    self.details = details;
  }

  /// Records a just-placed order as `Processing` under the next `ORD-nnn` id.
  pub fn record_order(&mut self, date: NaiveDate, total: Money, items: Vec<String>) -> &OrderRecord {
    let next = self
      .orders
      .iter()
      .filter_map(|o| o.id.strip_prefix("ORD-").and_then(|n| n.parse::<u32>().ok()))
      .max()
      .unwrap_or(0)
      + 1;
    let record = OrderRecord {
      id: format!("ORD-{:03}", next),
      date,
      total,
      status: OrderStatus::Processing,
      items,
    };
    info!(order_id = %record.id, %total, "Order recorded in profile history.");
    self.orders.insert(0, record);
    &self.orders[0]
  }
}
