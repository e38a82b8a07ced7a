// tests/cart_store_tests.rs
mod common;

use bakery::{Cart, CartHandle, CartSessions, Money, SessionId};
use common::*;

#[test]
fn test_repeated_add_keeps_one_line_per_product() {
  setup_tracing();
  let mut cart = Cart::new();
  let cake = product(1, "45.99");

  for _ in 0..5 {
    cart.add_to_cart(&cake);
  }

  assert_eq!(cart.items().len(), 1);
  assert_eq!(cart.get(1).map(|i| i.quantity), Some(5));
}

#[test]
fn test_add_twice_totals_exactly() {
  setup_tracing();
  let mut cart = Cart::new();
  let cake = product(1, "45.99");

  cart.add_to_cart(&cake);
  cart.add_to_cart(&cake);

  assert_eq!(cart.items().len(), 1);
  assert_eq!(cart.items()[0].quantity, 2);
  assert_eq!(cart.total_price(), Money::parse("91.98").unwrap());
  assert_eq!(cart.total_price().to_string(), "91.98");
}

#[test]
fn test_add_then_remove_empties_cart() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add_to_cart(&product(2, "12.99"));

  cart.remove_from_cart(2);

  assert!(cart.is_empty());
  assert_eq!(cart.total_items(), 0);
}

#[test]
fn test_update_quantity_to_zero_removes_line() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add_to_cart(&product(3, "18.99"));
  assert_eq!(cart.get(3).map(|i| i.quantity), Some(1));

  cart.update_quantity(3, 0);

  assert!(cart.get(3).is_none());
  assert_eq!(cart.total_price(), Money::ZERO);
}

#[test]
fn test_update_quantity_negative_removes_line() {
  let mut cart = Cart::new();
  cart.add_to_cart(&product(3, "18.99"));

  cart.update_quantity(3, -1);

  assert!(cart.is_empty());
}

#[test]
fn test_update_quantity_sets_value() {
  let mut cart = Cart::new();
  cart.add_to_cart(&product(4, "24.99"));

  cart.update_quantity(4, 3);

  assert_eq!(cart.get(4).map(|i| i.quantity), Some(3));
  assert_eq!(cart.total_items(), 3);
  assert_eq!(cart.total_price().to_string(), "74.97");
}

#[test]
fn test_mutations_on_absent_id_are_noops() {
  let mut cart = Cart::new();
  cart.add_to_cart(&product(1, "45.99"));
  let before = cart.clone();

  cart.update_quantity(99, 4);
  cart.update_quantity(99, 0);
  cart.remove_from_cart(99);

  assert_eq!(cart, before);
}

#[test]
fn test_clear_after_two_products() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add_to_cart(&product(1, "45.99"));
  cart.add_to_cart(&product(2, "12.99"));

  cart.clear_cart();

  assert!(cart.items().is_empty());
  assert_eq!(cart.total_items(), 0);
  assert_eq!(cart.total_price(), Money::ZERO);
}

#[test]
fn test_totals_follow_quantities_not_lines() {
  let mut cart = Cart::new();
  let cake = product(1, "45.99");
  let cookies = product(2, "12.99");
  cart.add_to_cart(&cake);
  cart.add_to_cart(&cookies);
  cart.add_to_cart(&cookies);
  cart.add_to_cart(&cookies);

  assert_eq!(cart.items().len(), 2);
  assert_eq!(cart.total_items(), 4);
  let expected: Money = cart.items().iter().map(|i| i.price * i.quantity).sum();
  assert_eq!(cart.total_price(), expected);
  assert_eq!(cart.total_price().to_string(), "84.96");
}

#[test]
fn test_insertion_order_survives_increments_and_removals() {
  let mut cart = Cart::new();
  for id in [5, 1, 3] {
    cart.add_to_cart(&product(id, "1.00"));
  }
  cart.add_to_cart(&product(1, "1.00"));
  cart.remove_from_cart(5);
  cart.add_to_cart(&product(5, "1.00"));

  let order: Vec<u64> = cart.items().iter().map(|i| i.id).collect();
  assert_eq!(order, vec![1, 3, 5]);
}

#[test]
fn test_quantity_never_drops_below_one() {
  let mut cart = Cart::new();
  let cake = product(1, "45.99");
  cart.add_to_cart(&cake);
  cart.add_to_cart(&cake);

  // The cart view decrements by computing quantity - 1.
  for _ in 0..3 {
    if let Some(current) = cart.get(1).map(|i| i.quantity) {
      cart.update_quantity(1, i64::from(current) - 1);
    }
    assert!(cart.items().iter().all(|i| i.quantity >= 1));
  }
  assert!(cart.is_empty());
}

#[test]
fn test_cart_handle_shares_one_cart() {
  let handle = CartHandle::default();
  let view = handle.clone();

  handle.update(|cart| cart.add_to_cart(&product(1, "45.99")));

  assert_eq!(view.read().total_items(), 1);
  assert!(view.same_as(&handle));
}

#[test]
fn test_sessions_keep_carts_apart() {
  setup_tracing();
  let sessions = CartSessions::new();
  let alice = SessionId::parse("alice").unwrap();
  let bob = SessionId::parse("bob").unwrap();

  sessions.cart_for(&alice).update(|c| c.add_to_cart(&product(1, "45.99")));
  sessions.cart_for(&alice).update(|c| c.add_to_cart(&product(1, "45.99")));
  sessions.cart_for(&bob).update(|c| c.add_to_cart(&product(2, "12.99")));

  assert_eq!(sessions.len(), 2);
  assert_eq!(sessions.cart_for(&alice).read().total_items(), 2);
  assert_eq!(sessions.cart_for(&bob).read().total_items(), 1);
  assert!(sessions.cart_for(&alice).same_as(&sessions.cart_for(&alice)));

  assert!(sessions.discard(&alice));
  assert!(!sessions.discard(&alice));
  assert!(sessions.cart_for(&alice).read().is_empty());
}

#[test]
fn test_blank_session_id_is_rejected() {
  assert!(SessionId::parse("   ").is_none());
  assert_eq!(SessionId::parse(" s-1 ").map(|s| s.as_str().to_string()), Some("s-1".to_string()));
}

#[test]
fn test_quantity_saturates_at_upper_bound() {
  setup_tracing();
  let mut cart = Cart::new();
  let cake = product(1, "45.99");
  cart.add_to_cart(&cake);

  cart.update_quantity(1, 10_000_000_000);
  assert_eq!(cart.get(1).map(|item| item.quantity), Some(u32::MAX));

  cart.add_to_cart(&cake);
  assert_eq!(cart.get(1).map(|item| item.quantity), Some(u32::MAX));
  assert_eq!(cart.total_items(), u64::from(u32::MAX));
  assert!(cart.total_price() > Money::ZERO);
}

#[test]
fn test_remove_charged_keeps_later_additions() {
  setup_tracing();
  let mut cart = Cart::new();
  cart.add_to_cart(&product(1, "45.99"));
  cart.add_to_cart(&product(2, "12.99"));
  let charged = cart.items().to_vec();

  cart.add_to_cart(&product(1, "45.99"));
  cart.add_to_cart(&product(3, "18.99"));
  cart.remove_charged(&charged);

  assert_eq!(cart.items().len(), 2);
  assert_eq!(cart.get(1).map(|item| item.quantity), Some(1));
  assert!(cart.get(2).is_none());
  assert_eq!(cart.get(3).map(|item| item.quantity), Some(1));
  assert_eq!(cart.total_price(), Money::parse("64.98").unwrap());
}
