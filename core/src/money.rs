// bakery/src/money.rs

//! Exact currency amounts.
//!
//! Prices are held as a whole number of minor units (kobo, cents) so that cart
//! totals are exact sums. Formatting with a currency symbol is left to callers;
//! `Display` only renders the two-decimal amount (`"45.99"`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

use crate::error::FormError;

const MINOR_PER_MAJOR: i64 = 100;

/// Sums and products saturate at `i64::MAX` minor units instead of
/// overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
  pub const ZERO: Money = Money(0);

  pub const fn from_minor(minor: i64) -> Self {
    Money(minor)
  }

  pub const fn minor(self) -> i64 {
    self.0
  }

  /// Parses a non-negative decimal amount with at most two fractional digits.
  pub fn parse(input: &str) -> Result<Self, FormError> {
    let invalid = || FormError::InvalidPrice {
      input: input.to_string(),
    };
    let trimmed = input.trim();
    let (whole, fraction) = match trimmed.split_once('.') {
      Some((whole, fraction)) => (whole, fraction),
      None => (trimmed, ""),
    };
    if (whole.is_empty() && fraction.is_empty())
      || fraction.len() > 2
      || !whole.bytes().all(|b| b.is_ascii_digit())
      || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
      return Err(invalid());
    }

    let whole_minor = if whole.is_empty() {
      0
    } else {
      whole
        .parse::<i64>()
        .ok()
        .and_then(|w| w.checked_mul(MINOR_PER_MAJOR))
        .ok_or_else(invalid)?
    };
    let fraction_minor = match fraction.len() {
      0 => 0,
      1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
      _ => fraction.parse::<i64>().map_err(|_| invalid())?,
    };
    whole_minor.checked_add(fraction_minor).map(Money).ok_or_else(invalid)
  }

  /// Mean of `amounts`, rounded half up to the minor unit, summed without
  /// saturating so large prices still average exactly. Zero when empty.
  pub fn mean(amounts: impl IntoIterator<Item = Money>) -> Money {
    let (sum, count) = amounts
      .into_iter()
      .fold((0i128, 0i128), |(sum, count), m| (sum + i128::from(m.0), count + 1));
    if count == 0 {
      return Money::ZERO;
    }
    Money(i64::try_from((sum + count / 2) / count).unwrap_or(i64::MAX))
  }

  /// Mean of `total` over `count` entries, rounded half up to the minor unit.
  /// Zero when `count` is zero.
  pub fn average(total: Money, count: usize) -> Money {
    if count == 0 {
      return Money::ZERO;
    }
    let count = count as i128;
    let mean = (i128::from(total.0) + count / 2) / count;
    Money(i64::try_from(mean).unwrap_or(i64::MAX))
  }
}

impl fmt::Display for Money {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sign = if self.0 < 0 { "-" } else { "" };
    let abs = self.0.unsigned_abs();
    write!(
      f,
      "{}{}.{:02}",
      sign,
      abs / MINOR_PER_MAJOR as u64,
      abs % MINOR_PER_MAJOR as u64
    )
  }
}

impl FromStr for Money {
  type Err = FormError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Money::parse(s)
  }
}

impl Add for Money {
  type Output = Money;

  fn add(self, rhs: Money) -> Money {
    Money(self.0.saturating_add(rhs.0))
  }
}

impl AddAssign for Money {
  fn add_assign(&mut self, rhs: Money) {
    self.0 = self.0.saturating_add(rhs.0);
  }
}

impl Mul<u32> for Money {
  type Output = Money;

  fn mul(self, quantity: u32) -> Money {
    Money(self.0.saturating_mul(i64::from(quantity)))
  }
}

impl Sum for Money {
  fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
    iter.fold(Money::ZERO, Add::add)
  }
}

impl Serialize for Money {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for Money {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Money::parse(&raw).map_err(serde::de::Error::custom)
  }
}
