//! # Demo Command
//!
//! Runs the normalizer over a fixed set of sample amounts and prints one
//! line per sample. Useful as a smoke test of the separator heuristics.

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::info;

use super::{describe, normalize_logged};
use crate::config::CliConfig;
use crate::error::CliResult;

/// Sample inputs covering each separator rule, sign form and failure.
pub const SAMPLE_AMOUNTS: &[&str] = &[
    "$1,234.56",
    "€1.234,56",
    "£1,000",
    "USD 1,000.50",
    "50 EUR",
    "¥1,234",
    "₹1,23,456.78",
    "£10,000,000.00",
    "1.234,56 €",
    "($500.25)",
    "$-500.25",
    "$1,234.567",
    "1,2345",
    "",
    "ten dollars",
];

/// Writes one report line per sample to `out`.
pub async fn run_demo<W>(out: &mut W, config: &CliConfig) -> CliResult<()>
where
    W: AsyncWrite + Unpin,
{
    let mut failed = 0;

    for input in SAMPLE_AMOUNTS {
        let result = normalize_logged(input, config);
        if result.is_err() {
            failed += 1;
        }

        let line = describe(input, &result);
        out.write_all(line.as_bytes()).await?;
        out.write_all(b"\n").await?;
    }
    out.flush().await?;

    info!(samples = SAMPLE_AMOUNTS.len(), failed, "Demo complete");
    Ok(())
}
