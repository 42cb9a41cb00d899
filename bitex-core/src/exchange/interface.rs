// =================================================================
// exchange/interface.rs - Pair validation and query dispatch
// =================================================================

use bitex_common::PairFormatter;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use super::{ExchangeError, PairSource, QueryOptions, Transport, Validation, Verb};

/// Validates pairs against an exchange's supported-pairs list and forwards
/// requests to the public or private path of the transport.
///
/// The list is fetched once when the interface is connected and stays fixed
/// until `refresh_supported_pairs` is called.
pub struct Interface<T: Transport> {
    name: String,
    transport: T,
    supported_pairs: Option<Vec<String>>,
    pairs_fetched_at: Option<DateTime<Utc>>,
}

impl<T: Transport> Interface<T> {
    /// Create an interface without a supported-pairs list
    pub fn new(name: impl Into<String>, transport: T) -> Self {
        Self {
            name: name.into(),
            transport,
            supported_pairs: None,
            pairs_fetched_at: None,
        }
    }

    /// Create an interface from an already known list of pairs
    pub fn with_supported_pairs(name: impl Into<String>, transport: T, pairs: Vec<String>) -> Self {
        Self {
            name: name.into(),
            transport,
            supported_pairs: Some(pairs),
            pairs_fetched_at: Some(Utc::now()),
        }
    }

    /// Create an interface and fetch its supported pairs from `source`.
    ///
    /// A source that reports `NotImplemented` leaves the list absent; any
    /// other fetch error is returned.
    pub async fn connect<S>(
        name: impl Into<String>,
        transport: T,
        source: &S,
    ) -> Result<Self, ExchangeError>
    where
        S: PairSource<T> + ?Sized,
    {
        let mut interface = Self::new(name, transport);
        interface.refresh_supported_pairs(source).await?;
        Ok(interface)
    }

    /// Re-run the pair fetch and replace the cached list
    pub async fn refresh_supported_pairs<S>(&mut self, source: &S) -> Result<(), ExchangeError>
    where
        S: PairSource<T> + ?Sized,
    {
        match source
            .fetch_supported_pairs(&self.name, &self.transport)
            .await
        {
            Ok(pairs) => {
                info!("Loaded {} supported pairs for {}", pairs.len(), self.name);
                self.supported_pairs = Some(pairs);
                self.pairs_fetched_at = Some(Utc::now());
                Ok(())
            }
            Err(ExchangeError::NotImplemented(what)) => {
                debug!("No pair listing for {}: {} not implemented", self.name, what);
                self.supported_pairs = None;
                self.pairs_fetched_at = None;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn supported_pairs(&self) -> Option<&[String]> {
        self.supported_pairs.as_deref()
    }

    pub fn pairs_fetched_at(&self) -> Option<DateTime<Utc>> {
        self.pairs_fetched_at
    }

    /// Time since the list was last fetched
    pub fn pairs_age(&self) -> Option<Duration> {
        self.pairs_fetched_at.map(|fetched| Utc::now() - fetched)
    }

    /// True iff the pair, formatted for this exchange, is listed exactly
    pub fn is_supported<P>(&self, pair: &P) -> bool
    where
        P: PairFormatter + ?Sized,
    {
        let formatted = pair.format_for(&self.name);
        self.supported_pairs
            .as_ref()
            .map_or(false, |pairs| pairs.iter().any(|p| *p == formatted))
    }

    /// Check a pair before sending anything.
    ///
    /// Without a list (absent or empty) the check is skipped with a warning.
    pub fn validate<P>(&self, pair: &P) -> Result<Validation, ExchangeError>
    where
        P: PairFormatter + ?Sized,
    {
        let has_list = self
            .supported_pairs
            .as_ref()
            .map_or(false, |pairs| !pairs.is_empty());

        if !has_list {
            warn!(
                "No list of valid pairs available for {}! Check that a pair source is \
                 configured and returns a non-empty list",
                self.name
            );
            return Ok(Validation::Unchecked);
        }

        if self.is_supported(pair) {
            Ok(Validation::Supported)
        } else {
            Err(ExchangeError::UnsupportedPair {
                exchange: self.name.clone(),
                pair: pair.format_for(&self.name),
            })
        }
    }

    /// Validate `pair`, then query `endpoint` on the private path when
    /// `authenticate` is set, otherwise on the public path.
    pub async fn request<P>(
        &self,
        verb: Verb,
        pair: &P,
        endpoint: &str,
        authenticate: bool,
        options: QueryOptions,
    ) -> Result<T::Response, ExchangeError>
    where
        P: PairFormatter + ?Sized,
    {
        self.validate(pair)?;
        self.query(verb, endpoint, authenticate, options).await
    }

    /// Dispatch without pair validation, for endpoints that take no pair
    pub async fn query(
        &self,
        verb: Verb,
        endpoint: &str,
        authenticate: bool,
        options: QueryOptions,
    ) -> Result<T::Response, ExchangeError> {
        debug!(
            "{} {} {} ({})",
            self.name,
            verb,
            endpoint,
            if authenticate { "private" } else { "public" }
        );

        let limit = options.timeout;
        let call = async {
            if authenticate {
                self.transport.private_query(verb, endpoint, options).await
            } else {
                self.transport.public_query(verb, endpoint, options).await
            }
        };

        match limit {
            Some(limit) => tokio::time::timeout(limit, call).await?,
            None => call.await,
        }
    }
}
