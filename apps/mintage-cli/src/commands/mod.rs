//! # Commands
//!
//! One module per subcommand. Each command takes its input stream and output
//! stream as parameters so tests can drive it with in-memory buffers.
//!
//! ```text
//! mintage demo          ──► demo::run_demo
//! mintage parse ...     ──► parse::run_parse
//! mintage interactive   ──► interactive::run_interactive
//! mintage workflow      ──► workflow::run_workflow
//! ```

pub mod demo;
pub mod interactive;
pub mod parse;
pub mod workflow;

use mintage_core::{normalize, Money, NormalizeResult};
use tracing::debug;

use crate::config::CliConfig;

/// Normalizes `input` and logs the result at debug level.
///
/// Raw text is only logged when `log_inputs` is set.
pub(crate) fn normalize_logged(input: &str, config: &CliConfig) -> NormalizeResult<Money> {
    let result = normalize(input);

    match (&result, config.log_inputs) {
        (Ok(money), true) => debug!(input, minor_units = money.cents(), "normalized"),
        (Ok(money), false) => debug!(minor_units = money.cents(), "normalized"),
        (Err(e), true) => debug!(input, kind = %e.kind(), error = %e, "normalize failed"),
        (Err(e), false) => debug!(kind = %e.kind(), "normalize failed"),
    }

    result
}

/// One-line report used by `demo` and `parse`.
///
/// ```text
/// "$1,234.56" -> 123456 (1234.56)
/// "" -> error [EmptyInput]: Input must be a non-empty string
/// ```
pub(crate) fn describe(input: &str, result: &NormalizeResult<Money>) -> String {
    match result {
        Ok(money) => format!("{input:?} -> {} ({money})", money.cents()),
        Err(e) => format!("{input:?} -> error [{}]: {e}", e.kind()),
    }
}
