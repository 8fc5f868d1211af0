//! The exchange-rate document read from disk.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::LoadError;

/// Static rates quoted against a single base currency.
///
/// `base` and `date` are carried along but never interpreted. Rates are kept
/// in a `BTreeMap` so listing the available codes is deterministic.
///
/// The file's shape is trusted: a missing or `null` field reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExchangeRateDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub base: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rates: BTreeMap<String, f64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ExchangeRateDocument {
    /// Read and deserialize a rates file.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json(&content)
    }

    /// Deserialize a rates document from JSON text.
    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Rate for an exact (case-sensitive) currency code.
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// All currency codes in the document, sorted.
    pub fn available_codes(&self) -> Vec<String> {
        self.rates.keys().cloned().collect()
    }
}
