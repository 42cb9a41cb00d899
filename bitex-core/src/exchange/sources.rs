// =================================================================
// exchange/sources.rs - Supported-pair sources
// =================================================================

use async_trait::async_trait;
use tracing::debug;

use super::{ExchangeError, PairSource, Transport};

/// Source for exchanges that cannot list their pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlisted;

#[async_trait]
impl<T: Transport> PairSource<T> for Unlisted {
    async fn fetch_supported_pairs(
        &self,
        exchange: &str,
        _transport: &T,
    ) -> Result<Vec<String>, ExchangeError> {
        Err(ExchangeError::not_implemented(format!(
            "supported pairs for {}",
            exchange
        )))
    }
}

/// A fixed list of pairs, typically read from configuration
#[derive(Debug, Clone, Default)]
pub struct StaticPairs {
    pairs: Vec<String>,
}

impl StaticPairs {
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pairs: pairs.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl<T: Transport> PairSource<T> for StaticPairs {
    async fn fetch_supported_pairs(
        &self,
        exchange: &str,
        _transport: &T,
    ) -> Result<Vec<String>, ExchangeError> {
        debug!("Using {} static pairs for {}", self.pairs.len(), exchange);
        Ok(self.pairs.clone())
    }
}

/// Either of the built-in sources, picked at runtime from settings
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Static(StaticPairs),
    Unlisted(Unlisted),
}

impl ConfiguredSource {
    pub fn from_pairs(pairs: Option<Vec<String>>) -> Self {
        match pairs {
            Some(pairs) => ConfiguredSource::Static(StaticPairs::new(pairs)),
            None => ConfiguredSource::Unlisted(Unlisted),
        }
    }
}

#[async_trait]
impl<T: Transport> PairSource<T> for ConfiguredSource {
    async fn fetch_supported_pairs(
        &self,
        exchange: &str,
        transport: &T,
    ) -> Result<Vec<String>, ExchangeError> {
        match self {
            ConfiguredSource::Static(source) => {
                source.fetch_supported_pairs(exchange, transport).await
            }
            ConfiguredSource::Unlisted(source) => {
                source.fetch_supported_pairs(exchange, transport).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::mock::RecordingTransport;

    #[tokio::test]
    async fn test_unlisted_reports_not_implemented() {
        let transport = RecordingTransport::new();
        let result = Unlisted.fetch_supported_pairs("kraken", &transport).await;
        assert!(matches!(result, Err(ExchangeError::NotImplemented(_))));
    }

    #[tokio::test]
    async fn test_static_pairs_keep_order() {
        let transport = RecordingTransport::new();
        let source = StaticPairs::new(["ETHUSD", "BTCUSD"]);
        let pairs = source
            .fetch_supported_pairs("kraken", &transport)
            .await
            .unwrap();
        assert_eq!(pairs, vec!["ETHUSD".to_string(), "BTCUSD".to_string()]);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_configured_source_dispatch() {
        let transport = RecordingTransport::new();

        let listed = ConfiguredSource::from_pairs(Some(vec!["BTCUSD".to_string()]));
        assert_eq!(
            listed.fetch_supported_pairs("kraken", &transport).await.unwrap(),
            vec!["BTCUSD".to_string()]
        );

        let unlisted = ConfiguredSource::from_pairs(None);
        assert!(unlisted
            .fetch_supported_pairs("kraken", &transport)
            .await
            .is_err());
    }
}
