// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use crate::api::GoldPriceSource;
use crate::config::Config;
use crate::models::{GoldPriceSeries, PricePoint};
use crate::utils::round2;
use anyhow::Result;
use chrono::{Datelike, NaiveDate};

/// Fetch the daily gold history from the configured start date to `today`
/// and reduce it to one price per year.
pub async fn fetch_gold_prices<S>(source: &S, config: &Config, today: NaiveDate) -> Result<GoldPriceSeries>
where
    S: GoldPriceSource + Sync + ?Sized,
{
    let points = source
        .get_daily_closes(&config.gold_symbol, config.gold_start_date, today)
        .await?;
    if points.is_empty() {
        anyhow::bail!("No price history returned for {}", config.gold_symbol);
    }
    println!("✅ {} daily closes fetched for {}", points.len(), config.gold_symbol);

    Ok(first_close_per_year(points))
}

/// Keeps the earliest-dated close of each calendar year, rounded to 2 decimals.
///
/// This is the first trading day's close, not the year-end close; later
/// observations in the same year are ignored.
pub fn first_close_per_year(mut points: Vec<PricePoint>) -> GoldPriceSeries {
    points.sort_by_key(|point| point.date);

    let mut gold_prices = GoldPriceSeries::new();
    for point in points {
        gold_prices
            .entry(point.date.year().to_string())
            .or_insert_with(|| round2(point.close));
    }
    gold_prices
}
