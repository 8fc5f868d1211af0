//! A command-line currency converter backed by a static rates file.
//!
//! Given an amount and a currency code, the converter reads `rates.json`
//! from the working directory, looks up the upper-cased code and prints
//! `amount * rate`. Every failure is reported as a human-readable line on
//! the same writer instead of a process error.
//!
//! # Example
//!
//! ```no_run
//! use std::io::stdout;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> std::io::Result<()> {
//!     let args = vec!["100".to_string(), "usd".to_string()];
//!     rate_convert::run(&args, stdout()).await
//! }
//! ```

use std::io::{self, Write};
use std::path::Path;

#[macro_use]
mod tracing;
mod error;
mod rates;

pub use error::{ConvertError, LoadError};
pub use rates::ExchangeRateDocument;

/// Rates file read by the binary, relative to the working directory.
pub const RATES_FILE: &str = "rates.json";

/// Convert using [`RATES_FILE`] and write the result or diagnostic.
///
/// `args` are the command-line tokens after the program name.
pub async fn run<S: AsRef<str>, W: Write>(args: &[S], writer: W) -> io::Result<()> {
    run_with_rates(args, RATES_FILE, writer).await
}

/// Convert using the given rates file and write the result or diagnostic.
///
/// Conversion failures are rendered to `writer`; only a failure to write
/// is returned as an error.
pub async fn run_with_rates<S, P, W>(args: &[S], rates_path: P, mut writer: W) -> io::Result<()>
where
    S: AsRef<str>,
    P: AsRef<Path>,
    W: Write,
{
    match convert(args, rates_path).await {
        Ok(result) => writeln!(writer, "{}", result),
        Err(e) => writeln!(writer, "{}", e),
    }
}

/// Parse the two arguments, load the rates and compute `amount * rate`.
///
/// Arguments are validated before the rates file is touched.
pub async fn convert<S, P>(args: &[S], rates_path: P) -> Result<f64, ConvertError>
where
    S: AsRef<str>,
    P: AsRef<Path>,
{
    let [amount, code] = args else {
        return Err(ConvertError::Usage);
    };
    let amount = parse_amount(amount.as_ref())?;

    let document = match ExchangeRateDocument::load(rates_path.as_ref()).await {
        Ok(document) => document,
        Err(e) => {
            match &e {
                LoadError::Read { path, source } => {
                    error!("Failed to read rates from {}: {}", path.display(), source)
                }
                LoadError::Parse(source) => error!("Failed to parse rates document: {}", source),
            }
            return Err(e.into());
        }
    };
    let code = code.as_ref().to_uppercase();
    match document.rate_for(&code) {
        Some(rate) => Ok(amount * rate),
        None => Err(ConvertError::CurrencyNotFound {
            available: document.available_codes(),
            code,
        }),
    }
}

/// Parse the amount token as an `f64`.
///
/// Finite literals that overflow the `f64` range are rejected instead of
/// saturating to infinity; only an explicit `inf`/`infinity` spelling yields
/// an infinite amount.
fn parse_amount(token: &str) -> Result<f64, ConvertError> {
    let invalid = || ConvertError::InvalidAmount(token.to_string());
    let amount = token.parse::<f64>().map_err(|_| invalid())?;
    if amount.is_infinite() && !is_infinity_literal(token) {
        return Err(invalid());
    }
    Ok(amount)
}

fn is_infinity_literal(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
