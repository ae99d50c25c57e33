// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Client;

use crate::models::TimeseriesResponse;

#[async_trait::async_trait]
pub trait ExchangeRateSource {
    /// Rates of `symbols` against `base` for every day from `start_date` to `end_date`.
    async fn get_timeseries(
        &self,
        base: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        symbols: &[String],
    ) -> Result<TimeseriesResponse>;
}

#[derive(Clone)]
pub struct ExchangeRateClient {
    client: Client,
    base_url: String,
}

impl ExchangeRateClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn timeseries_url(&self) -> String {
        format!("{}/timeseries", self.base_url.trim_end_matches('/'))
    }
}

fn timeseries_query(
    base: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    symbols: &[String],
) -> Vec<(&'static str, String)> {
    vec![
        ("base", base.to_string()),
        ("start_date", start_date.format("%Y-%m-%d").to_string()),
        ("end_date", end_date.format("%Y-%m-%d").to_string()),
        ("symbols", symbols.join(",")),
    ]
}

#[async_trait::async_trait]
impl ExchangeRateSource for ExchangeRateClient {
    async fn get_timeseries(
        &self,
        base: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        symbols: &[String],
    ) -> Result<TimeseriesResponse> {
        let response = self
            .client
            .get(self.timeseries_url())
            .query(&timeseries_query(base, start_date, end_date, symbols))
            .send()
            .await
            .context("Failed to send request")?;

        // The provider reports its own failures in the body, so the status
        // only matters when the body is not a timeseries response.
        let status = response.status();
        let text = response.text().await.context("Failed to get response text")?;

        match serde_json::from_str::<TimeseriesResponse>(&text) {
            Ok(timeseries) => Ok(timeseries),
            Err(e) => {
                eprintln!("Failed to parse response ({}): {}", status, e);
                eprintln!("Raw response: {}", text);
                Err(e).context("Failed to parse exchange-rate response")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeseries_query() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        let symbols = vec!["EUR".to_string(), "GBP".to_string(), "JPY".to_string()];
        let query = timeseries_query("USD", date, date, &symbols);
        assert_eq!(
            query,
            vec![
                ("base", "USD".to_string()),
                ("start_date", "1999-12-31".to_string()),
                ("end_date", "1999-12-31".to_string()),
                ("symbols", "EUR,GBP,JPY".to_string()),
            ]
        );
    }

    #[test]
    fn test_timeseries_url() {
        let client = ExchangeRateClient::new("https://api.exchangerate.host/".to_string());
        assert_eq!(client.timeseries_url(), "https://api.exchangerate.host/timeseries");
        let client = ExchangeRateClient::new("http://localhost:8080".to_string());
        assert_eq!(client.timeseries_url(), "http://localhost:8080/timeseries");
    }
}
