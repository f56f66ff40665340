use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Unknown currency code: {0}")]
  UnknownCurrency(String),
  #[error("Unknown color theme: {0}")]
  UnknownTheme(String),
  #[error("Unknown view: {0}")]
  UnknownView(String),
}

// Currency descriptor - code/symbol/rate triple, one active per session.
//
// `rate` is the multiplier from base (entered) amounts to display amounts.
// The shipped catalog carries placeholder rates of 1, but every computation
// applies the rate so a non-1 descriptor works unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
  pub code: &'static str,
  pub symbol: &'static str,
  pub rate: Decimal,
}

impl Currency {
  pub const USD: Currency = Currency {
    code: "USD",
    symbol: "$",
    rate: Decimal::ONE,
  };
  pub const EUR: Currency = Currency {
    code: "EUR",
    symbol: "€",
    rate: Decimal::ONE,
  };
  pub const GBP: Currency = Currency {
    code: "GBP",
    symbol: "£",
    rate: Decimal::ONE,
  };
  pub const JPY: Currency = Currency {
    code: "JPY",
    symbol: "¥",
    rate: Decimal::ONE,
  };
  pub const CAD: Currency = Currency {
    code: "CAD",
    symbol: "C$",
    rate: Decimal::ONE,
  };
  pub const LKR: Currency = Currency {
    code: "LKR",
    symbol: "Rs.",
    rate: Decimal::ONE,
  };

  /// The fixed selection catalog, in display order.
  pub const ALL: [Currency; 6] = [
    Currency::USD,
    Currency::EUR,
    Currency::GBP,
    Currency::JPY,
    Currency::CAD,
    Currency::LKR,
  ];

  /// Symbol immediately followed by the amount at exactly two decimals,
  /// half-up.
  pub fn format(&self, amount: Decimal) -> String {
    format!(
      "{}{:.2}",
      self.symbol,
      amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
  }
}

impl FromStr for Currency {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Currency::ALL
      .into_iter()
      .find(|c| c.code.eq_ignore_ascii_case(s))
      .ok_or_else(|| ValueObjectError::UnknownCurrency(s.to_string()))
  }
}

impl fmt::Display for Currency {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.code)
  }
}

// Color theme - cosmetic only, never affects numeric output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
  Blue,
  Green,
  Purple,
  Red,
  Orange,
}

impl ColorTheme {
  pub const ALL: [ColorTheme; 5] = [
    ColorTheme::Blue,
    ColorTheme::Green,
    ColorTheme::Purple,
    ColorTheme::Red,
    ColorTheme::Orange,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      ColorTheme::Blue => "blue",
      ColorTheme::Green => "green",
      ColorTheme::Purple => "purple",
      ColorTheme::Red => "red",
      ColorTheme::Orange => "orange",
    }
  }

  pub fn hex(&self) -> &'static str {
    match self {
      ColorTheme::Blue => "#3b82f6",
      ColorTheme::Green => "#22c55e",
      ColorTheme::Purple => "#a855f7",
      ColorTheme::Red => "#ef4444",
      ColorTheme::Orange => "#f97316",
    }
  }
}

impl FromStr for ColorTheme {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ColorTheme::ALL
      .into_iter()
      .find(|t| t.as_str().eq_ignore_ascii_case(s))
      .ok_or_else(|| ValueObjectError::UnknownTheme(s.to_string()))
  }
}

/// Silent-zero numeric parsing for quantity/price/tax/discount fields.
///
/// Field values arrive as free-form text; anything that does not parse as a
/// decimal becomes zero. Editing is never blocked on bad numeric input.
pub fn parse_or_zero(input: &str) -> Decimal {
  Decimal::from_str(input.trim()).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_currency_catalog() {
    assert_eq!(Currency::USD.code, "USD");
    assert_eq!(Currency::EUR.symbol, "€");
    assert_eq!(Currency::CAD.symbol, "C$");
    assert_eq!(Currency::USD.rate, Decimal::ONE);
    assert_eq!(Currency::from_str("usd").unwrap(), Currency::USD);
    assert_eq!(Currency::from_str("LKR").unwrap(), Currency::LKR);
    assert!(Currency::from_str("CHF").is_err());
  }

  #[test]
  fn test_format_two_decimals() {
    assert_eq!(Currency::USD.format(Decimal::ZERO), "$0.00");
    assert_eq!(Currency::USD.format(dec!(105)), "$105.00");
    assert_eq!(Currency::USD.format(dec!(19.005)), "$19.01");
    assert_eq!(Currency::EUR.format(dec!(1234.5)), "€1234.50");
  }

  #[test]
  fn test_theme_round_trip() {
    for theme in ColorTheme::ALL {
      assert_eq!(ColorTheme::from_str(theme.as_str()).unwrap(), theme);
    }
    assert!(ColorTheme::from_str("teal").is_err());
  }

  #[test]
  fn test_parse_or_zero() {
    assert_eq!(parse_or_zero("2.5"), dec!(2.5));
    assert_eq!(parse_or_zero(" 10 "), dec!(10));
    assert_eq!(parse_or_zero("abc"), Decimal::ZERO);
    assert_eq!(parse_or_zero(""), Decimal::ZERO);
    assert_eq!(parse_or_zero("1,5"), Decimal::ZERO);
  }
}
