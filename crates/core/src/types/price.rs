//! Currency codes and price formatting for decimal amounts.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes the menu can be priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    SAR,
    AED,
    USD,
    EUR,
    GBP,
}

/// Returned when parsing a currency code that is not supported.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl CurrencyCode {
    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SAR => "SAR",
            Self::AED => "AED",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }

    /// Format an amount in this currency.
    ///
    /// Gulf currencies are written as a plain number followed by the local
    /// unit name, matching the menu boards. Western currencies use a leading
    /// symbol and two decimal places.
    #[must_use]
    pub fn format_amount(&self, amount: Decimal) -> String {
        match self {
            Self::SAR => format!("{} ريال", amount.normalize()),
            Self::AED => format!("{} درهم", amount.normalize()),
            Self::USD => format!("${amount:.2}"),
            Self::EUR => format!("€{amount:.2}"),
            Self::GBP => format!("£{amount:.2}"),
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SAR" => Ok(Self::SAR),
            "AED" => Ok(Self::AED),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            _ => Err(UnknownCurrency(s.to_owned())),
        }
    }
}
