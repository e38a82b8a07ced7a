// bakery/src/catalog/seed.rs

use super::product::{Category, Product, ProductId};
use crate::money::Money;

fn product(
  id: ProductId,
  name: &str,
  category: Category,
  price_minor: i64,
  images: &[&str],
  description: &str,
) -> Product {
  Product {
    id,
    name: name.to_string(),
    category,
    price: Money::from_minor(price_minor),
    images: images.iter().map(|s| s.to_string()).collect(),
    description: description.to_string(),
  }
}

pub(super) fn products() -> Vec<Product> {
  vec![
    product(
      1,
      "Rainbow Birthday Cake",
      Category::Cakes,
      4599,
      &[
        "https://images.unsplash.com/photo-1578985545062-69928b1d9587?w=800&h=600&fit=crop",
        "https://images.unsplash.com/photo-1587668178277-295251f900ce?w=800&h=600&fit=crop",
        "https://images.unsplash.com/photo-1606890737304-57a1ca8a5b62?w=800&h=600&fit=crop",
      ],
      "Colorful layered cake perfect for birthday celebrations",
    ),
    product(
      2,
      "Chocolate Chip Cookies",
      Category::Cookies,
      1299,
      &[
        "https://images.unsplash.com/photo-1499636136210-6f4ee915583e?w=800&h=600&fit=crop",
        "https://images.unsplash.com/photo-1606890737304-57a1ca8a5b62?w=800&h=600&fit=crop",
      ],
      "Freshly baked cookies with premium chocolate chips",
    ),
    product(
      3,
      "Fudge Brownies",
      Category::Brownies,
      1899,
      &[
        "https://images.unsplash.com/photo-1606313564200-e75d5e30476c?w=800&h=600&fit=crop",
        "https://images.unsplash.com/photo-1551024506-0bccd828d307?w=800&h=600&fit=crop",
      ],
      "Rich, decadent brownies with a perfect fudgy texture",
    ),
    product(
      4,
      "Vanilla Cupcakes",
      Category::Cakes,
      2499,
      &["https://images.unsplash.com/photo-1587668178277-295251f900ce?w=400&h=300&fit=crop"],
      "Fluffy vanilla cupcakes with buttercream frosting",
    ),
    product(
      5,
      "Sugar Cookies",
      Category::Cookies,
      1599,
      &["https://images.unsplash.com/photo-1606890737304-57a1ca8a5b62?w=400&h=300&fit=crop"],
      "Classic sugar cookies with colorful icing decorations",
    ),
    product(
      6,
      "Walnut Brownies",
      Category::Brownies,
      2299,
      &["https://images.unsplash.com/photo-1551024506-0bccd828d307?w=400&h=300&fit=crop"],
      "Rich brownies loaded with fresh walnuts",
    ),
  ]
}
