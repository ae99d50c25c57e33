// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::{Context, Result};
use chrono::{NaiveDate, TimeZone, Utc};
use time::OffsetDateTime;
use yahoo_finance_api as yahoo;

use crate::models::PricePoint;

#[async_trait::async_trait]
pub trait GoldPriceSource {
    /// Daily closes for `symbol` between `start` and `end`.
    async fn get_daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>>;
}

pub struct YahooClient {
    connector: yahoo::YahooConnector,
}

impl YahooClient {
    pub fn new() -> Result<Self> {
        let connector =
            yahoo::YahooConnector::new().context("Failed to create Yahoo Finance connector")?;
        Ok(Self { connector })
    }
}

#[async_trait::async_trait]
impl GoldPriceSource for YahooClient {
    async fn get_daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>> {
        if symbol.is_empty() {
            anyhow::bail!("symbol empty");
        }

        let response = self
            .connector
            .get_quote_history(symbol, to_offset_datetime(start)?, to_offset_datetime(end)?)
            .await
            .with_context(|| format!("Failed to fetch price history for {}", symbol))?;

        let quotes = response
            .quotes()
            .with_context(|| format!("No price history returned for {}", symbol))?;

        quotes
            .iter()
            .map(|quote| point_from_quote(quote.timestamp as i64, quote.close))
            .collect()
    }
}

fn to_offset_datetime(date: NaiveDate) -> Result<OffsetDateTime> {
    let timestamp = date
        .and_hms_opt(0, 0, 0)
        .context("Invalid time")?
        .and_utc()
        .timestamp();
    OffsetDateTime::from_unix_timestamp(timestamp)
        .with_context(|| format!("Date out of range: {}", date))
}

/// Quotes are stamped at the session open; the UTC calendar date is the trading day.
fn point_from_quote(timestamp: i64, close: f64) -> Result<PricePoint> {
    let datetime = Utc
        .timestamp_opt(timestamp, 0)
        .single()
        .with_context(|| format!("Invalid timestamp: {}", timestamp))?;
    Ok(PricePoint::new(datetime.date_naive(), close))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_offset_datetime() -> Result<()> {
        let start = NaiveDate::from_ymd_opt(1973, 1, 1).unwrap();
        let converted = to_offset_datetime(start)?;
        assert_eq!(converted.unix_timestamp(), 94_694_400);
        assert_eq!(converted.year(), 1973);
        Ok(())
    }

    #[test]
    fn test_point_from_quote() -> Result<()> {
        // 2020-01-02 05:00:00 UTC, midnight New York time
        let point = point_from_quote(1_577_941_200, 1520.0)?;
        assert_eq!(point.date, NaiveDate::from_ymd_opt(2020, 1, 2).unwrap());
        assert_eq!(point.close, 1520.0);
        Ok(())
    }
}
