// =================================================================
// pair.rs - Trading pair types and the formatting capability
// =================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separators accepted when parsing a pair from text
const PAIR_SEPARATORS: [char; 3] = ['/', '-', '_'];

/// Error types for pair parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairError {
    #[error("Pair cannot be empty")]
    Empty,

    #[error("Malformed pair '{0}', expected BASE/QUOTE")]
    Malformed(String),

    #[error("Invalid currency code '{0}'")]
    InvalidCurrency(String),
}

/// Anything that can render itself as an exchange-specific pair string.
///
/// Raw strings are passed through untouched, structured pairs apply their
/// own formatting. Exchange adapters only ever see the formatted string.
pub trait PairFormatter: Send + Sync {
    /// Format this pair for the exchange identified by `exchange`
    fn format_for(&self, exchange: &str) -> String;
}

impl PairFormatter for str {
    fn format_for(&self, _exchange: &str) -> String {
        self.to_string()
    }
}

impl PairFormatter for String {
    fn format_for(&self, exchange: &str) -> String {
        self.as_str().format_for(exchange)
    }
}

impl<T: PairFormatter + ?Sized> PairFormatter for &T {
    fn format_for(&self, exchange: &str) -> String {
        (**self).format_for(exchange)
    }
}

/// A structured base/quote trading pair, e.g. BTC/USD
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pair {
    pub base: String,
    pub quote: String,
}

impl Pair {
    /// Create a pair from two currency codes, normalised to uppercase
    pub fn new(base: &str, quote: &str) -> Result<Self, PairError> {
        Ok(Self {
            base: validate_currency(base)?,
            quote: validate_currency(quote)?,
        })
    }
}

impl PairFormatter for Pair {
    // No exchange-specific rules live here; adapters that need them wrap
    // their own formatter.
    fn format_for(&self, _exchange: &str) -> String {
        format!("{}{}", self.base, self.quote)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for Pair {
    type Err = PairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PairError::Empty);
        }

        let parts: Vec<&str> = trimmed.split(&PAIR_SEPARATORS[..]).collect();
        match parts.as_slice() {
            [base, quote] => Pair::new(base, quote),
            _ => Err(PairError::Malformed(trimmed.to_string())),
        }
    }
}

impl TryFrom<String> for Pair {
    type Error = PairError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pair> for String {
    fn from(pair: Pair) -> Self {
        pair.to_string()
    }
}

/// Validate a single currency code and normalise it to uppercase
fn validate_currency(code: &str) -> Result<String, PairError> {
    let code = code.trim();
    if code.is_empty() || !code.chars().all(char::is_alphanumeric) {
        return Err(PairError::InvalidCurrency(code.to_string()));
    }
    Ok(code.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_separators() {
        let expected = Pair::new("BTC", "USD").unwrap();
        assert_eq!("BTC/USD".parse::<Pair>().unwrap(), expected);
        assert_eq!("btc-usd".parse::<Pair>().unwrap(), expected);
        assert_eq!(" btc_usd ".parse::<Pair>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!("".parse::<Pair>(), Err(PairError::Empty));
        assert_eq!(
            "BTCUSD".parse::<Pair>(),
            Err(PairError::Malformed("BTCUSD".to_string()))
        );
        assert!(matches!(
            "BTC/USD/EUR".parse::<Pair>(),
            Err(PairError::Malformed(_))
        ));
        assert!(matches!(
            "BTC/".parse::<Pair>(),
            Err(PairError::InvalidCurrency(_))
        ));
        assert!(matches!(
            "B$C/USD".parse::<Pair>(),
            Err(PairError::InvalidCurrency(_))
        ));
    }

    #[test]
    fn test_formatting() {
        let pair = Pair::new("eth", "btc").unwrap();
        assert_eq!(pair.format_for("kraken"), "ETHBTC");
        assert_eq!(pair.to_string(), "ETH/BTC");
    }

    #[test]
    fn test_raw_strings_pass_through() {
        assert_eq!("tBTCUSD".format_for("bitfinex"), "tBTCUSD");
        assert_eq!(String::from("btc_usd").format_for("poloniex"), "btc_usd");

        let boxed: &dyn PairFormatter = &"XXBTZUSD";
        assert_eq!(boxed.format_for("kraken"), "XXBTZUSD");
    }

    #[test]
    fn test_serde_as_string() {
        let pair = Pair::new("BTC", "EUR").unwrap();
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, "\"BTC/EUR\"");

        let back: Pair = serde_json::from_str("\"btc-eur\"").unwrap();
        assert_eq!(back, pair);

        assert!(serde_json::from_str::<Pair>("\"nonsense\"").is_err());
    }
}
