pub mod exchange_rate_client;
pub mod yahoo_client;

pub use exchange_rate_client::{ExchangeRateClient, ExchangeRateSource};
pub use yahoo_client::{GoldPriceSource, YahooClient};
