//! Unit prices and order totals.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, ValueObject};

/// A non-rounded decimal price.
///
/// Displayed in its normalized form with at least one fractional digit, so a
/// total of five items at `100.0` reads `"500.0"` and `19.99 × 3` reads
/// `"59.97"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Parse user/store text, falling back to zero for anything unparsable.
    pub fn parse_lenient(text: &str) -> Self {
        text.parse().unwrap_or(Self::ZERO)
    }

    /// `self × quantity`, exact.
    ///
    /// Overflow is only reachable with prices far outside any stocked item; it
    /// is logged and yields zero rather than panicking mid-render.
    pub fn times(&self, quantity: i32) -> Price {
        match self.0.checked_mul(Decimal::from(quantity)) {
            Some(total) => Price(total),
            None => {
                tracing::error!(price = %self.0, quantity, "price multiplication overflowed, defaulting to zero");
                Price::ZERO
            }
        }
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|e| DomainError::validation(format!("price {s:?}: {e}")))?;
        Ok(Self(amount))
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let normalized = self.0.normalize();
        if normalized.scale() == 0 {
            write!(f, "{normalized}.0")
        } else {
            write!(f, "{normalized}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        s.parse().unwrap()
    }

    #[test]
    fn whole_totals_keep_one_fractional_digit() {
        assert_eq!(price("100.0").times(5).to_string(), "500.0");
        assert_eq!(price("50").times(4).to_string(), "200.0");
        assert_eq!(Price::ZERO.to_string(), "0.0");
    }

    #[test]
    fn fractional_totals_are_exact() {
        assert_eq!(price("19.99").times(3).to_string(), "59.97");
        assert_eq!(price("0.10").times(3).to_string(), "0.3");
    }

    #[test]
    fn lenient_parse_falls_back_to_zero() {
        assert_eq!(Price::parse_lenient("abc"), Price::ZERO);
        assert_eq!(Price::parse_lenient(""), Price::ZERO);
        assert_eq!(Price::parse_lenient(" 2.50 "), price("2.5"));
    }

    #[test]
    fn strict_parse_reports_validation_error() {
        let err = "twelve".parse::<Price>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn overflow_yields_zero() {
        assert_eq!(Price::new(Decimal::MAX).times(2), Price::ZERO);
    }
}
