//! # Workflow Command
//!
//! Applies the budget adapter to workflow records read as JSON.
//!
//! Accepts a single record object or an array of them; the output has the
//! same shape. Budget failures are reported in each record's `parseError`
//! field and never fail the command.

use mintage_core::transform_record;
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    pub records: usize,
    pub failed: usize,
}

/// Reads a JSON document from `reader`, transforms it, writes it to `out`.
pub async fn run_workflow<R, W>(mut reader: R, out: &mut W, config: &CliConfig) -> CliResult<WorkflowStats>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut raw = String::new();
    reader.read_to_string(&mut raw).await?;

    let document: Value = serde_json::from_str(&raw)?;
    let (output, stats) = transform_document(document)?;

    let rendered = if config.pretty_json {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    out.write_all(rendered.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;

    if stats.failed > 0 {
        warn!(failed = stats.failed, "Some budgets did not parse");
    }
    info!(records = stats.records, "Workflow records processed");
    Ok(stats)
}

/// Transforms a record or an array of records.
pub fn transform_document(document: Value) -> CliResult<(Value, WorkflowStats)> {
    let mut stats = WorkflowStats::default();

    let output = match document {
        Value::Object(record) => transform_one(Value::Object(record), &mut stats)?,
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| transform_one(item, &mut stats))
                .collect::<CliResult<Vec<_>>>()?,
        ),
        other => {
            return Err(CliError::InvalidRecord(format!(
                "expected an object or an array of objects, got {}",
                json_type(&other)
            )))
        }
    };

    Ok((output, stats))
}

fn transform_one(item: Value, stats: &mut WorkflowStats) -> CliResult<Value> {
    let record = match item {
        Value::Object(record) => record,
        other => {
            return Err(CliError::InvalidRecord(format!(
                "record {} is {}, expected an object",
                stats.records,
                json_type(&other)
            )))
        }
    };

    let output = transform_record(&record);
    stats.records += 1;
    if !output.get("parseError").map_or(true, Value::is_null) {
        stats.failed += 1;
    }
    Ok(Value::Object(output))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
