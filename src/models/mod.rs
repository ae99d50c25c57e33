// Re-export model modules
mod currency_data;
mod gold_prices;

pub use currency_data::*;
pub use gold_prices::*;
