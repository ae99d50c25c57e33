// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Currency code to USD strength offset in percent. Always carries `"USD": 0`.
pub type CurrencySnapshot = BTreeMap<String, f64>;

/// Year ("1999") to that year's year-end snapshot.
pub type CurrencyDataSeries = BTreeMap<String, CurrencySnapshot>;

/// Body of a `timeseries` call.
#[derive(Debug, Deserialize)]
pub struct TimeseriesResponse {
    pub success: bool,
    /// Date ("1999-12-31") to code to units of that currency per 1 USD.
    pub rates: Option<HashMap<String, HashMap<String, f64>>>,
    pub error: Option<ProviderError>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderError {
    pub code: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub info: Option<String>,
}

impl TimeseriesResponse {
    /// Why the provider answered `success: false`, as far as it says.
    pub fn failure_reason(&self) -> String {
        match &self.error {
            Some(ProviderError { info: Some(info), .. }) => info.clone(),
            Some(ProviderError { kind: Some(kind), .. }) => kind.clone(),
            Some(ProviderError { code: Some(code), .. }) => format!("provider error code {}", code),
            _ => "provider reported success: false".to_string(),
        }
    }
}

/// Result of fetching a single year's snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum YearOutcome {
    Fetched(CurrencySnapshot),
    /// The call succeeded but carried no rates for the requested date.
    NoData,
    /// The provider answered `success: false`.
    Rejected { reason: String },
}

impl fmt::Display for YearOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearOutcome::Fetched(snapshot) => write!(f, "{} rates", snapshot.len().saturating_sub(1)),
            YearOutcome::NoData => write!(f, "no rates available for year-end"),
            YearOutcome::Rejected { reason } => write!(f, "request rejected: {}", reason),
        }
    }
}

/// Every year the currency extractor iterated, in order, with its outcome.
#[derive(Debug, Default)]
pub struct CurrencyFetchReport {
    pub years: Vec<(i32, YearOutcome)>,
}

impl CurrencyFetchReport {
    pub fn push(&mut self, year: i32, outcome: YearOutcome) {
        self.years.push((year, outcome));
    }

    /// Snapshots of the years that were fetched; other years have no key.
    pub fn series(&self) -> CurrencyDataSeries {
        self.years
            .iter()
            .filter_map(|(year, outcome)| match outcome {
                YearOutcome::Fetched(snapshot) => Some((year.to_string(), snapshot.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn missing_years(&self) -> Vec<(i32, &YearOutcome)> {
        self.years
            .iter()
            .filter(|(_, outcome)| !matches!(outcome, YearOutcome::Fetched(_)))
            .map(|(year, outcome)| (*year, outcome))
            .collect()
    }
}
