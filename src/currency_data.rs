// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use crate::api::ExchangeRateSource;
use crate::config::Config;
use crate::models::{CurrencyFetchReport, CurrencySnapshot, YearOutcome};
use crate::utils::round2;
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;

/// Fetch the year-end USD rates for every year from the configured start
/// year through the year of `today`, one request per year.
pub async fn fetch_currency_data<S>(source: &S, config: &Config, today: NaiveDate) -> Result<CurrencyFetchReport>
where
    S: ExchangeRateSource + Sync + ?Sized,
{
    let years = config.currency_start_year..=today.year();
    let total_years = years.clone().count();

    let progress = ProgressBar::new(total_years as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
            .context("Invalid progress bar template")?
            .progress_chars("=>-"),
    );

    let mut report = CurrencyFetchReport::default();
    for year in years {
        progress.set_message(year.to_string());
        let outcome = fetch_year(source, &config.currencies, year)
            .await
            .with_context(|| format!("Failed to fetch exchange rates for {}", year))?;
        report.push(year, outcome);
        progress.inc(1);
    }
    progress.finish();

    Ok(report)
}

async fn fetch_year<S>(source: &S, currencies: &[String], year: i32) -> Result<YearOutcome>
where
    S: ExchangeRateSource + Sync + ?Sized,
{
    let year_end = NaiveDate::from_ymd_opt(year, 12, 31).with_context(|| format!("Invalid year {}", year))?;
    let response = source.get_timeseries("USD", year_end, year_end, currencies).await?;

    if !response.success {
        return Ok(YearOutcome::Rejected {
            reason: response.failure_reason(),
        });
    }

    let date_key = year_end.format("%Y-%m-%d").to_string();
    match response.rates.as_ref().and_then(|rates| rates.get(&date_key)) {
        Some(rates) => Ok(YearOutcome::Fetched(snapshot_from_rates(rates)?)),
        None => Ok(YearOutcome::NoData),
    }
}

/// Percentage by which one USD outvalues one unit of a currency quoted at
/// `rate` units per USD, rounded to 2 decimals.
pub fn usd_strength_offset(rate: f64) -> f64 {
    round2((1.0 / rate - 1.0) * 100.0)
}

/// Builds a snapshot with the `USD` baseline and one offset per returned rate.
pub fn snapshot_from_rates(rates: &HashMap<String, f64>) -> Result<CurrencySnapshot> {
    let mut snapshot = CurrencySnapshot::new();
    snapshot.insert("USD".to_string(), 0.0);
    for (currency, &rate) in rates {
        if rate == 0.0 {
            anyhow::bail!("Provider returned a zero rate for {}", currency);
        }
        snapshot.insert(currency.clone(), usd_strength_offset(rate));
    }
    Ok(snapshot)
}
