pub mod exchanges;
pub mod pair;

// Re-export the shared value types
pub use exchanges::{ExchangeName, UnknownExchange};
pub use pair::{Pair, PairError, PairFormatter};
