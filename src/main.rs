//! CLI entry point for the currency converter.
//!
//! Usage: `convert <amount> <currency_code>`, reading `rates.json` from the
//! working directory.

use std::env;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    // Diagnostics are part of normal output; only a broken stdout is fatal.
    if let Err(e) = rate_convert::run(&args, std::io::stdout()).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
