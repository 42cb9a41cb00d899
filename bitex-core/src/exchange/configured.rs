// =================================================================
// exchange/configured.rs - Table-driven REST adapter
// =================================================================

use async_trait::async_trait;
use bitex_common::{ExchangeName, PairFormatter};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::info;

use super::{
    errors::ExchangeError,
    interface::Interface,
    sources::ConfiguredSource,
    traits::{RestInterface, Transport},
    types::{Endpoint, OrderSide, QueryOptions, Verb},
    utils::{render_path, validate_currency},
};
use crate::config::ExchangeSettings;

/// Verb and path template for one endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRoute {
    pub verb: Verb,
    /// May contain `{pair}`, `{order_id}` or `{currency}`
    pub path: String,
}

impl EndpointRoute {
    pub fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
        }
    }
}

/// Routes for the endpoints an exchange actually serves
#[derive(Debug, Clone, Default)]
pub struct EndpointTable {
    routes: BTreeMap<Endpoint, EndpointRoute>,
}

impl EndpointTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, endpoint: Endpoint, route: EndpointRoute) -> Self {
        self.routes.insert(endpoint, route);
        self
    }

    pub fn insert(&mut self, endpoint: Endpoint, route: EndpointRoute) {
        self.routes.insert(endpoint, route);
    }

    pub fn get(&self, endpoint: Endpoint) -> Option<&EndpointRoute> {
        self.routes.get(&endpoint)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// A `RestInterface` for any exchange whose endpoints are described by an
/// `EndpointTable`. Endpoints missing from the table report
/// `NotImplemented` without touching the transport.
pub struct ConfiguredExchange<T: Transport> {
    interface: Interface<T>,
    routes: EndpointTable,
}

impl<T: Transport> ConfiguredExchange<T> {
    pub fn new(interface: Interface<T>, routes: EndpointTable) -> Self {
        Self { interface, routes }
    }

    /// Build an adapter from the settings of one exchange
    pub async fn from_settings(
        exchange: ExchangeName,
        settings: &ExchangeSettings,
        transport: T,
    ) -> Result<Self, ExchangeError> {
        let routes = settings.endpoint_table()?;
        let source = ConfiguredSource::from_pairs(settings.supported_pairs.clone());
        let interface = Interface::connect(exchange.as_str(), transport, &source).await?;

        info!(
            "Configured {} with {} of {} endpoints",
            exchange,
            routes.len(),
            Endpoint::ALL.len()
        );
        Ok(Self::new(interface, routes))
    }

    pub fn interface(&self) -> &Interface<T> {
        &self.interface
    }

    pub fn routes(&self) -> &EndpointTable {
        &self.routes
    }

    fn route(&self, endpoint: Endpoint) -> Result<&EndpointRoute, ExchangeError> {
        self.routes.get(endpoint).ok_or_else(|| {
            ExchangeError::not_implemented(format!("{} on {}", endpoint, self.interface.name()))
        })
    }

    /// Endpoints keyed by a pair: validated through the interface
    async fn pair_call(
        &self,
        endpoint: Endpoint,
        pair: &dyn PairFormatter,
        options: QueryOptions,
    ) -> Result<T::Response, ExchangeError> {
        let route = self.route(endpoint)?;
        let formatted = pair.format_for(self.interface.name());
        let path = render_path(&route.path, &[("pair", formatted.as_str())])?;

        self.interface
            .request(route.verb, pair, &path, endpoint.is_private(), options)
            .await
    }

    /// Endpoints without a pair skip validation
    async fn plain_call(
        &self,
        endpoint: Endpoint,
        vars: &[(&str, &str)],
        options: QueryOptions,
    ) -> Result<T::Response, ExchangeError> {
        let route = self.route(endpoint)?;
        let path = render_path(&route.path, vars)?;

        self.interface
            .query(route.verb, &path, endpoint.is_private(), options)
            .await
    }

    async fn place_order(
        &self,
        endpoint: Endpoint,
        side: OrderSide,
        pair: &dyn PairFormatter,
        price: Decimal,
        size: Decimal,
        options: QueryOptions,
    ) -> Result<T::Response, ExchangeError> {
        if price <= Decimal::ZERO {
            return Err(ExchangeError::InvalidRequest(
                "Price must be positive".to_string(),
            ));
        }
        if size <= Decimal::ZERO {
            return Err(ExchangeError::InvalidRequest(
                "Size must be positive".to_string(),
            ));
        }

        let options = options
            .with_param("side", side.as_str())
            .with_param("price", price)
            .with_param("size", size);
        self.pair_call(endpoint, pair, options).await
    }
}

#[async_trait]
impl<T: Transport> RestInterface for ConfiguredExchange<T> {
    type Response = T::Response;

    fn name(&self) -> &str {
        self.interface.name()
    }

    async fn ticker(
        &self,
        pair: &dyn PairFormatter,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError> {
        self.pair_call(Endpoint::Ticker, pair, options).await
    }

    async fn order_book(
        &self,
        pair: &dyn PairFormatter,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError> {
        self.pair_call(Endpoint::OrderBook, pair, options).await
    }

    async fn trades(
        &self,
        pair: &dyn PairFormatter,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError> {
        self.pair_call(Endpoint::Trades, pair, options).await
    }

    async fn ask(
        &self,
        pair: &dyn PairFormatter,
        price: Decimal,
        size: Decimal,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError> {
        self.place_order(Endpoint::Ask, OrderSide::Sell, pair, price, size, options)
            .await
    }

    async fn bid(
        &self,
        pair: &dyn PairFormatter,
        price: Decimal,
        size: Decimal,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError> {
        self.place_order(Endpoint::Bid, OrderSide::Buy, pair, price, size, options)
            .await
    }

    async fn order_status(
        &self,
        order_id: &str,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError> {
        if order_id.trim().is_empty() {
            return Err(ExchangeError::InvalidRequest(
                "Order id cannot be empty".to_string(),
            ));
        }

        let options = options.with_param("order_id", order_id);
        self.plain_call(Endpoint::OrderStatus, &[("order_id", order_id)], options)
            .await
    }

    async fn open_orders(&self, options: QueryOptions) -> Result<Self::Response, ExchangeError> {
        self.plain_call(Endpoint::OpenOrders, &[], options).await
    }

    async fn cancel_order(
        &self,
        order_ids: &[String],
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError> {
        if order_ids.is_empty() {
            return Err(ExchangeError::InvalidRequest(
                "No order ids provided".to_string(),
            ));
        }

        let options = order_ids
            .iter()
            .fold(options, |options, id| options.with_param("order_id", id));

        // A single id may also be addressed through the path
        match order_ids {
            [single] => {
                self.plain_call(Endpoint::CancelOrder, &[("order_id", single.as_str())], options)
                    .await
            }
            _ => self.plain_call(Endpoint::CancelOrder, &[], options).await,
        }
    }

    async fn wallet(
        &self,
        currency: &str,
        options: QueryOptions,
    ) -> Result<Self::Response, ExchangeError> {
        let currency = validate_currency(currency)?;
        let options = options.with_param("currency", &currency);
        self.plain_call(Endpoint::Wallet, &[("currency", currency.as_str())], options)
            .await
    }
}
