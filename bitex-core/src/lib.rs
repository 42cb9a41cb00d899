pub mod config;
pub mod exchange;

// Shared value types live in bitex-common
pub use bitex_common::{ExchangeName, Pair, PairError, PairFormatter};
