//! # Parse Command
//!
//! Normalizes amounts given on the command line.
//!
//! ```text
//! $ mintage parse '$1,234.56' '50 EUR'
//! "$1,234.56" -> 123456 (1234.56)
//! "50 EUR" -> 5000 (50.00)
//!
//! $ mintage parse --json '€1.234,56' ''
//! {"ok":true,"minorUnits":123456}
//! {"ok":false,"errorKind":"EmptyInput","message":"Input must be a non-empty string"}
//! ```

use mintage_core::NormalizeOutcome;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::warn;

use super::{describe, normalize_logged};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Writes one line per amount; fails with `ParseFailures` afterwards if any
/// amount did not parse.
pub async fn run_parse<W>(
    amounts: &[String],
    json: bool,
    out: &mut W,
    config: &CliConfig,
) -> CliResult<()>
where
    W: AsyncWrite + Unpin,
{
    let mut failed = 0;

    for input in amounts {
        let result = normalize_logged(input, config);
        if result.is_err() {
            failed += 1;
        }

        let line = if json {
            serde_json::to_string(&NormalizeOutcome::from(result))?
        } else {
            describe(input, &result)
        };
        out.write_all(line.as_bytes()).await?;
        out.write_all(b"\n").await?;
    }
    out.flush().await?;

    if failed > 0 {
        warn!(failed, total = amounts.len(), "Some amounts failed to parse");
        return Err(CliError::ParseFailures {
            failed,
            total: amounts.len(),
        });
    }
    Ok(())
}
