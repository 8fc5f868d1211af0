//! Error types for the converter.
//!
//! [`ConvertError`] renders the exact text shown to the user; [`LoadError`]
//! keeps read and parse failures of the rates file apart.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain an [`ExchangeRateDocument`](crate::ExchangeRateDocument).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Every way a single conversion can stop short of printing a number.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Usage: convert <amount> <currency_code>\nExample: ./convert 100 USD")]
    Usage,

    #[error("Invalid amount '{0}'. Please provide a number.")]
    InvalidAmount(String),

    #[error("System Error: {0}")]
    DataLoad(#[from] LoadError),

    #[error("Currency '{code}' not found.\nAvailable: [{}]", .available.join(" "))]
    CurrencyNotFound {
        code: String,
        available: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_usage_message() {
        assert_eq!(
            ConvertError::Usage.to_string(),
            "Usage: convert <amount> <currency_code>\nExample: ./convert 100 USD"
        );
    }

    #[test]
    fn test_invalid_amount_names_token() {
        let err = ConvertError::InvalidAmount("1.2.3".to_string());
        assert_eq!(err.to_string(), "Invalid amount '1.2.3'. Please provide a number.");
    }

    #[test]
    fn test_read_error_wraps_path_and_source() {
        let err = LoadError::Read {
            path: PathBuf::from("rates.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "could not read file rates.json: gone");
        assert!(err.source().is_some());

        let wrapped = ConvertError::from(err);
        assert_eq!(
            wrapped.to_string(),
            "System Error: could not read file rates.json: gone"
        );
    }

    #[test]
    fn test_parse_error_prefix() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConvertError::from(LoadError::from(source));
        assert!(err.to_string().starts_with("System Error: could not parse JSON: "));
    }

    #[test]
    fn test_currency_not_found_lists_codes() {
        let err = ConvertError::CurrencyNotFound {
            code: "JPY".to_string(),
            available: vec!["GBP".to_string(), "USD".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Currency 'JPY' not found.\nAvailable: [GBP USD]"
        );
    }

    #[test]
    fn test_currency_not_found_empty_mapping() {
        let err = ConvertError::CurrencyNotFound {
            code: "USD".to_string(),
            available: Vec::new(),
        };
        assert_eq!(err.to_string(), "Currency 'USD' not found.\nAvailable: []");
    }
}
