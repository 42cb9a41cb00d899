// exchange/traits.rs

use super::{ExchangeError, QueryOptions, Verb};
use async_trait::async_trait;
use bitex_common::PairFormatter;
use rust_decimal::Decimal;

/// The collaborator that actually talks to an exchange.
///
/// Implementations own HTTP, authentication and signing. The interface
/// layer only decides which of the two query paths a call takes.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Whatever the transport hands back, returned to callers unmodified
    type Response: Send;

    /// Unauthenticated call
    async fn public_query(
        &self,
        verb: Verb,
        endpoint: &str,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError>;

    /// Authenticated call
    async fn private_query(
        &self,
        verb: Verb,
        endpoint: &str,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError>;
}

/// Fetches the list of pairs an exchange currently trades.
///
/// Sources that cannot list pairs return `ExchangeError::NotImplemented`,
/// which leaves the interface without a list instead of failing.
#[async_trait]
pub trait PairSource<T: Transport>: Send + Sync {
    async fn fetch_supported_pairs(
        &self,
        exchange: &str,
        transport: &T,
    ) -> Result<Vec<String>, ExchangeError>;
}

/// Endpoint surface every exchange adapter must provide
#[async_trait]
pub trait RestInterface: Send + Sync {
    type Response: Send;

    /// Exchange identifier used for pair formatting
    fn name(&self) -> &str;

    // Public endpoints

    async fn ticker(
        &self,
        pair: &dyn PairFormatter,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError>;

    async fn order_book(
        &self,
        pair: &dyn PairFormatter,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError>;

    async fn trades(
        &self,
        pair: &dyn PairFormatter,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError>;

    // Private endpoints

    async fn ask(
        &self,
        pair: &dyn PairFormatter,
        price: Decimal,
        size: Decimal,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError>;

    async fn bid(
        &self,
        pair: &dyn PairFormatter,
        price: Decimal,
        size: Decimal,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError>;

    async fn order_status(
        &self,
        order_id: &str,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError>;

    async fn open_orders(&self, options: QueryOptions) -> Result<Self::Response, ExchangeError>;

    async fn cancel_order(
        &self,
        order_ids: &[String],
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError>;

    async fn wallet(
        &self,
        currency: &str,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError>;
}
