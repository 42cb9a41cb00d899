// =================================================================
// exchanges.rs - Known exchange identifiers
// =================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown exchange: {0}")]
pub struct UnknownExchange(pub String);

/// Exchanges the unified interface knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeName {
    Bitfinex,
    Bitstamp,
    Bittrex,
    Btce,
    Bter,
    Ccex,
    CoinCheck,
    Cryptopia,
    HitBtc,
    Kraken,
    OkCoin,
    Poloniex,
    QuadrigaCx,
    TheRockTrading,
    Vaultoro,
}

impl ExchangeName {
    /// All known exchanges in declaration order
    pub const ALL: [ExchangeName; 15] = [
        ExchangeName::Bitfinex,
        ExchangeName::Bitstamp,
        ExchangeName::Bittrex,
        ExchangeName::Btce,
        ExchangeName::Bter,
        ExchangeName::Ccex,
        ExchangeName::CoinCheck,
        ExchangeName::Cryptopia,
        ExchangeName::HitBtc,
        ExchangeName::Kraken,
        ExchangeName::OkCoin,
        ExchangeName::Poloniex,
        ExchangeName::QuadrigaCx,
        ExchangeName::TheRockTrading,
        ExchangeName::Vaultoro,
    ];

    /// Identifier handed to pair formatters and used as the config key
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeName::Bitfinex => "bitfinex",
            ExchangeName::Bitstamp => "bitstamp",
            ExchangeName::Bittrex => "bittrex",
            ExchangeName::Btce => "btce",
            ExchangeName::Bter => "bter",
            ExchangeName::Ccex => "ccex",
            ExchangeName::CoinCheck => "coincheck",
            ExchangeName::Cryptopia => "cryptopia",
            ExchangeName::HitBtc => "hitbtc",
            ExchangeName::Kraken => "kraken",
            ExchangeName::OkCoin => "okcoin",
            ExchangeName::Poloniex => "poloniex",
            ExchangeName::QuadrigaCx => "quadrigacx",
            ExchangeName::TheRockTrading => "therocktrading",
            ExchangeName::Vaultoro => "vaultoro",
        }
    }
}

impl fmt::Display for ExchangeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExchangeName {
    type Err = UnknownExchange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ExchangeName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == wanted)
            .ok_or_else(|| UnknownExchange(s.to_string()))
    }
}

impl From<ExchangeName> for String {
    fn from(name: ExchangeName) -> Self {
        name.as_str().to_string()
    }
}
