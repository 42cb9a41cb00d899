// =================================================================
// exchange/types.rs - Data Structures
// =================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::ExchangeError;

/// HTTP verb of a REST call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
            Verb::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "PUT" => Ok(Verb::Put),
            "DELETE" => Ok(Verb::Delete),
            "PATCH" => Ok(Verb::Patch),
            other => Err(ExchangeError::Config(format!("Unknown HTTP verb '{}'", other))),
        }
    }
}

/// Endpoints every REST adapter exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Ticker,
    OrderBook,
    Trades,
    Ask,
    Bid,
    OrderStatus,
    OpenOrders,
    CancelOrder,
    Wallet,
}

impl Endpoint {
    pub const ALL: [Endpoint; 9] = [
        Endpoint::Ticker,
        Endpoint::OrderBook,
        Endpoint::Trades,
        Endpoint::Ask,
        Endpoint::Bid,
        Endpoint::OrderStatus,
        Endpoint::OpenOrders,
        Endpoint::CancelOrder,
        Endpoint::Wallet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Ticker => "ticker",
            Endpoint::OrderBook => "order_book",
            Endpoint::Trades => "trades",
            Endpoint::Ask => "ask",
            Endpoint::Bid => "bid",
            Endpoint::OrderStatus => "order_status",
            Endpoint::OpenOrders => "open_orders",
            Endpoint::CancelOrder => "cancel_order",
            Endpoint::Wallet => "wallet",
        }
    }

    /// Private endpoints go through the authenticated query path
    pub fn is_private(&self) -> bool {
        !matches!(self, Endpoint::Ticker | Endpoint::OrderBook | Endpoint::Trades)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Endpoint::ALL
            .iter()
            .copied()
            .find(|endpoint| endpoint.as_str() == wanted)
            .ok_or_else(|| ExchangeError::Config(format!("Unknown endpoint '{}'", s)))
    }
}

/// Per-request options forwarded to the transport untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    /// Query string parameters, in insertion order
    pub params: Vec<(String, String)>,
    /// JSON request body
    pub body: Option<serde_json::Value>,
    /// Upper bound on the whole transport call
    pub timeout: Option<Duration>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// First value recorded for `key`
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Outcome of validating a pair before a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// The formatted pair is in the supported-pairs list
    Supported,
    /// No list to check against, the request goes out unchecked
    Unchecked,
}

/// Side of an order placed through `ask`/`bid`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_verb_parsing() {
        assert_eq!("get".parse::<Verb>().unwrap(), Verb::Get);
        assert_eq!(" DELETE ".parse::<Verb>().unwrap(), Verb::Delete);
        assert!(matches!("FETCH".parse::<Verb>(), Err(ExchangeError::Config(_))));
        assert_eq!(Verb::Patch.to_string(), "PATCH");
    }

    #[test]
    fn test_endpoint_privacy() {
        let public: Vec<Endpoint> = Endpoint::ALL
            .iter()
            .copied()
            .filter(|e| !e.is_private())
            .collect();
        assert_eq!(public, vec![Endpoint::Ticker, Endpoint::OrderBook, Endpoint::Trades]);
        assert!(Endpoint::Wallet.is_private());
        assert_eq!("order_book".parse::<Endpoint>().unwrap(), Endpoint::OrderBook);
        assert!("withdraw".parse::<Endpoint>().is_err());
    }

    #[test]
    fn test_query_options_builder() {
        let options = QueryOptions::new()
            .with_param("depth", 50)
            .with_param("depth", 10)
            .with_body(json!({"nonce": 1}))
            .with_timeout(Duration::from_secs(5));

        assert_eq!(options.param("depth"), Some("50"));
        assert_eq!(options.params.len(), 2);
        assert_eq!(options.param("missing"), None);
        assert_eq!(options.body, Some(json!({"nonce": 1})));
        assert_eq!(options.timeout, Some(Duration::from_secs(5)));
    }
}
