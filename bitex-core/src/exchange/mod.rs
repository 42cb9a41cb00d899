// exchange/mod.rs
pub mod configured;
pub mod errors;
pub mod interface;
pub mod offline;
pub mod sources;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
pub(crate) mod mock;

// Re-export main interfaces for easy access
pub use configured::{ConfiguredExchange, EndpointRoute, EndpointTable};
pub use errors::ExchangeError;
pub use interface::Interface;
pub use offline::OfflineTransport;
pub use sources::{ConfiguredSource, StaticPairs, Unlisted};
pub use traits::{PairSource, RestInterface, Transport};
pub use types::*;
