// bakery/src/catalog/product.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;
use crate::money::Money;

pub type ProductId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
  Cakes,
  Cookies,
  Brownies,
}

impl Category {
  pub const ALL: [Category; 3] = [Category::Cakes, Category::Cookies, Category::Brownies];

  pub fn as_str(self) -> &'static str {
    match self {
      Category::Cakes => "Cakes",
      Category::Cookies => "Cookies",
      Category::Brownies => "Brownies",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Category {
  type Err = FormError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Category::ALL
      .into_iter()
      .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| FormError::UnknownCategory { input: s.to_string() })
  }
}

/// A product as the catalog and the admin panel know it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub category: Category,
  pub price: Money,
  /// Display URLs, never empty; the first one is the card image.
  pub images: Vec<String>,
  pub description: String,
}

impl Product {
  pub fn image(&self) -> Option<&str> {
    self.images.first().map(String::as_str)
  }
}
