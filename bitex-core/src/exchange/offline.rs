// =================================================================
// exchange/offline.rs - Transport for validation-only use
// =================================================================

use async_trait::async_trait;
use tracing::debug;

use super::{ExchangeError, QueryOptions, Transport, Verb};

/// A transport with no network behind it. Every query fails, which lets
/// an `Interface` be used purely to validate pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTransport;

impl OfflineTransport {
    fn refuse(verb: Verb, endpoint: &str) -> ExchangeError {
        debug!("Refusing offline {} {}", verb, endpoint);
        ExchangeError::Transport(format!("offline: {} {} was not sent", verb, endpoint))
    }
}

#[async_trait]
impl Transport for OfflineTransport {
    type Response = ();

    async fn public_query(
        &self,
        verb: Verb,
        endpoint: &str,
        _options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError> {
        Err(Self::refuse(verb, endpoint))
    }

    async fn private_query(
        &self,
        verb: Verb,
        endpoint: &str,
        _options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError> {
        Err(Self::refuse(verb, endpoint))
    }
}
