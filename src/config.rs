// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::utils::program_dir;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gold_symbol: String,
    pub gold_start_date: NaiveDate,
    pub currency_start_year: i32,
    pub currencies: Vec<String>,
    pub exchange_rate_base_url: String,
    pub gold_output: String,
    pub currency_output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gold_symbol: "GC=F".to_string(), // Gold futures
            gold_start_date: NaiveDate::from_ymd_opt(1973, 1, 1).expect("1973-01-01 is a valid date"),
            // exchangerate.host has no rates before 1999
            currency_start_year: 1999,
            currencies: [
                "EUR", "GBP", "JPY", "CHF", "CAD", "AUD", "CNY", "INR", "BRL", "RUB", "MXN",
                "ZAR", "SEK", "NOK",
            ]
            .iter()
            .map(|code| code.to_string())
            .collect(),
            exchange_rate_base_url: "https://api.exchangerate.host".to_string(),
            gold_output: "goldPrices.json".to_string(),
            currency_output: "currencyData.json".to_string(),
        }
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path = program_dir()?;
    path.push("config.toml");
    Ok(path)
}

/// Loads `config.toml` from next to the executable, falling back to the
/// built-in defaults when the file does not exist.
pub fn load_config() -> Result<Config> {
    let config_path = get_config_path()?;
    if !config_path.exists() {
        return Ok(Config::default());
    }
    let config_str = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    parse_config(&config_str)
        .with_context(|| format!("Failed to parse {}", config_path.display()))
}

fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.gold_symbol, "GC=F");
        assert_eq!(
            config.gold_start_date,
            NaiveDate::from_ymd_opt(1973, 1, 1).unwrap()
        );
        assert_eq!(config.currency_start_year, 1999);
        assert_eq!(config.currencies.len(), 14);
        assert_eq!(config.currencies.join(","), "EUR,GBP,JPY,CHF,CAD,AUD,CNY,INR,BRL,RUB,MXN,ZAR,SEK,NOK");
        assert!(!config.currencies.iter().any(|c| c == "USD"));
        assert_eq!(config.gold_output, "goldPrices.json");
        assert_eq!(config.currency_output, "currencyData.json");
    }

    #[test]
    fn test_partial_config_keeps_defaults() -> Result<()> {
        let config = parse_config(
            r#"
            currency_start_year = 2010
            currencies = ["EUR", "GBP"]
            gold_start_date = "2000-01-01"
            "#,
        )?;
        assert_eq!(config.currency_start_year, 2010);
        assert_eq!(config.currencies, vec!["EUR", "GBP"]);
        assert_eq!(
            config.gold_start_date,
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );
        assert_eq!(config.gold_symbol, "GC=F");
        assert_eq!(config.exchange_rate_base_url, "https://api.exchangerate.host");
        Ok(())
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(parse_config("currency_start_year = \"soon\"").is_err());
    }
}
