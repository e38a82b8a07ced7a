// bakery/src/admin/form.rs

use serde::Deserialize;

use crate::catalog::{Category, Product, ProductId};
use crate::error::FormError;
use crate::money::Money;

/// The admin product dialog exactly as submitted: every field raw text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub category: String,
  #[serde(default)]
  pub price: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub images: Vec<String>,
}

impl ProductForm {
  /// Pre-fills the dialog for editing `product`.
  pub fn from_product(product: &Product) -> Self {
    Self {
      name: product.name.clone(),
      category: product.category.to_string(),
      price: product.price.to_string(),
      description: product.description.clone(),
      images: product.images.clone(),
    }
  }
}

/// A validated product form, ready to be stored under some id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
  pub name: String,
  pub category: Category,
  pub price: Money,
  pub description: String,
  pub images: Vec<String>,
}

impl ProductDraft {
  pub(crate) fn into_product(self, id: ProductId) -> Product {
    Product {
      id,
      name: self.name,
      category: self.category,
      price: self.price,
      images: self.images,
      description: self.description,
    }
  }
}

impl TryFrom<ProductForm> for ProductDraft {
  type Error = FormError;

  fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
    FormError::require(&[
      ("name", &form.name),
      ("category", &form.category),
      ("price", &form.price),
      ("description", &form.description),
    ])?;

    let images: Vec<String> = form
      .images
      .into_iter()
      .map(|url| url.trim().to_string())
      .filter(|url| !url.is_empty())
      .collect();
    if images.is_empty() {
      return Err(FormError::MissingImage);
    }

    Ok(Self {
      name: form.name.trim().to_string(),
      category: form.category.parse()?,
      price: Money::parse(&form.price)?,
      description: form.description.trim().to_string(),
      images,
    })
  }
}
