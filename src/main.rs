// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

mod api;
mod config;
mod currency_data;
mod gold_prices;
mod models;
mod output;
mod utils;

use anyhow::Result;
use chrono::Local;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = config::load_config()?;
    let today = Local::now().date_naive();

    println!("Fetching gold prices...");
    let yahoo_client = api::YahooClient::new()?;
    let gold_prices = gold_prices::fetch_gold_prices(&yahoo_client, &config, today).await?;
    output::save_json(&gold_prices, &config.gold_output)?;
    println!("✅ Gold prices saved.");

    println!("Fetching currency data...");
    let exchange_rate_client = api::ExchangeRateClient::new(config.exchange_rate_base_url.clone());
    let report = currency_data::fetch_currency_data(&exchange_rate_client, &config, today).await?;

    let missing_years = report.missing_years();
    if !missing_years.is_empty() {
        println!("⚠️  No currency data for {} year(s):", missing_years.len());
        for (year, outcome) in &missing_years {
            println!("  {} - {}", year, outcome);
        }
    }

    let currency_data = report.series();
    if currency_data.is_empty() {
        println!("Failed to fetch currency data.");
    } else {
        output::save_json(&currency_data, &config.currency_output)?;
        println!("✅ Currency data saved.");
    }

    Ok(())
}
