//! # Workflow Record Adapter
//!
//! Reads `Answers.Budget` from a workflow record, normalizes it, and builds a
//! new record carrying the result.
//!
//! ## Record Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  input record                          output record (new map)          │
//! │  ─────────────                         ───────────────────────          │
//! │  {                                     {                                │
//! │    "Answers": {                          ...every input key...,         │
//! │      "Budget": "€1.234,56"    ──►        "budgetOriginal": "€1.234,56", │
//! │    },                                    "budgetParsed": 123456,        │
//! │    ...                                   "budgetFormatted": "1234.56",  │
//! │  }                                       "parseError": null             │
//! │                                        }                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The input record is never modified. A missing or empty Budget short-circuits
//! with [`WorkflowError::MissingField`] before the normalizer runs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::error::{NormalizeError, WorkflowError, WorkflowResult};
use crate::money::Money;
use crate::normalizer::normalize;

/// Key of the answers object in a workflow record.
pub const ANSWERS_KEY: &str = "Answers";

/// Key of the budget answer inside the answers object.
pub const BUDGET_FIELD: &str = "Budget";

// =============================================================================
// Input Schema
// =============================================================================

/// The part of a workflow record the adapter reads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WorkflowInput {
    #[serde(rename = "Answers", default)]
    pub answers: Option<Answers>,
}

/// Form answers. Only the budget is used; other answers are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Answers {
    /// Raw budget answer. Usually a string, but forms can send anything.
    #[serde(rename = "Budget", default)]
    pub budget: Option<Value>,
}

impl WorkflowInput {
    /// Extracts the typed input from an untyped record.
    ///
    /// An `Answers` value that is not an object is treated as absent.
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let answers = record
            .get(ANSWERS_KEY)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok());

        WorkflowInput { answers }
    }

    /// The raw budget value, if present and not `null`.
    pub fn budget(&self) -> Option<&Value> {
        self.answers.as_ref().and_then(|a| a.budget.as_ref())
    }

    /// The budget as text ready for the normalizer.
    ///
    /// ## Errors
    /// - `MissingField` if absent, `null`, or `""`
    /// - `EmptyInput` if present but not a string
    pub fn budget_text(&self) -> WorkflowResult<&str> {
        match self.budget() {
            None | Some(Value::Null) => Err(missing_budget()),
            Some(Value::String(s)) if s.is_empty() => Err(missing_budget()),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(NormalizeError::EmptyInput.into()),
        }
    }

    /// Parses the budget answer.
    pub fn parse_budget(&self) -> WorkflowResult<Money> {
        Ok(normalize(self.budget_text()?)?)
    }
}

fn missing_budget() -> WorkflowError {
    WorkflowError::MissingField {
        field: BUDGET_FIELD.to_string(),
    }
}

// =============================================================================
// Output
// =============================================================================

/// Fields merged into the output record.
///
/// On failure `budget_parsed` and `budget_formatted` are `None`; on success
/// `parse_error` is `None`. `None` serializes as `null`, never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BudgetOutcome {
    pub budget_original: Option<Value>,
    pub budget_parsed: Option<i64>,
    pub budget_formatted: Option<String>,
    pub parse_error: Option<String>,
}

impl BudgetOutcome {
    /// Runs the adapter over a typed input.
    pub fn evaluate(input: &WorkflowInput) -> Self {
        let budget_original = input.budget().cloned();

        match input.parse_budget() {
            Ok(money) => BudgetOutcome {
                budget_original,
                budget_parsed: Some(money.cents()),
                budget_formatted: Some(money.to_string()),
                parse_error: None,
            },
            Err(e) => BudgetOutcome {
                budget_original,
                budget_parsed: None,
                budget_formatted: None,
                parse_error: Some(e.to_string()),
            },
        }
    }

    /// True when the budget parsed.
    pub fn is_ok(&self) -> bool {
        self.parse_error.is_none()
    }

    fn into_fields(self) -> [(&'static str, Value); 4] {
        [
            ("budgetOriginal", self.budget_original.unwrap_or(Value::Null)),
            (
                "budgetParsed",
                self.budget_parsed.map(Value::from).unwrap_or(Value::Null),
            ),
            (
                "budgetFormatted",
                self.budget_formatted.map(Value::from).unwrap_or(Value::Null),
            ),
            (
                "parseError",
                self.parse_error.map(Value::from).unwrap_or(Value::Null),
            ),
        ]
    }
}

/// Builds the output record: a copy of `record` plus the budget fields.
///
/// Existing keys with the same names are overwritten in the copy.
///
/// ## Example
/// ```rust
/// use mintage_core::workflow::transform_record;
/// use serde_json::json;
///
/// let record = json!({ "Answers": { "Budget": "USD 1,000.50" }, "id": 7 });
/// let out = transform_record(record.as_object().unwrap());
///
/// assert_eq!(out["budgetParsed"], 100050);
/// assert_eq!(out["budgetFormatted"], "1000.50");
/// assert_eq!(out["parseError"], serde_json::Value::Null);
/// assert_eq!(out["id"], 7);
/// ```
pub fn transform_record(record: &Map<String, Value>) -> Map<String, Value> {
    let outcome = BudgetOutcome::evaluate(&WorkflowInput::from_record(record));

    let mut output = record.clone();
    for (key, value) in outcome.into_fields() {
        output.insert(key.to_string(), value);
    }
    output
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_success_merges_fields() {
        let input = record(json!({
            "Answers": { "Budget": "€1.234,56", "Name": "Ada" },
            "submissionId": "abc"
        }));

        let output = transform_record(&input);

        assert_eq!(output["budgetOriginal"], "€1.234,56");
        assert_eq!(output["budgetParsed"], 123456);
        assert_eq!(output["budgetFormatted"], "1234.56");
        assert_eq!(output["parseError"], Value::Null);
        // Original keys survive untouched
        assert_eq!(output["submissionId"], "abc");
        assert_eq!(output["Answers"]["Name"], "Ada");
    }

    #[test]
    fn test_input_record_is_not_modified() {
        let input = record(json!({ "Answers": { "Budget": "$5" } }));
        let before = input.clone();

        let _ = transform_record(&input);

        assert_eq!(input, before);
    }

    #[test]
    fn test_missing_budget() {
        for value in [
            json!({}),
            json!({ "Answers": {} }),
            json!({ "Answers": { "Budget": null } }),
            json!({ "Answers": { "Budget": "" } }),
            json!({ "Answers": "not an object" }),
        ] {
            let output = transform_record(&record(value.clone()));
            assert_eq!(
                output["parseError"], "Budget field is missing or empty",
                "record {value}"
            );
            assert_eq!(output["budgetParsed"], Value::Null);
            assert_eq!(output["budgetFormatted"], Value::Null);
        }
    }

    #[test]
    fn test_missing_budget_error_kind() {
        let input = WorkflowInput::default();
        assert!(matches!(
            input.parse_budget(),
            Err(WorkflowError::MissingField { .. })
        ));
    }

    #[test]
    fn test_blank_budget_is_empty_input() {
        let input = WorkflowInput::from_record(&record(json!({ "Answers": { "Budget": "   " } })));
        assert_eq!(
            input.parse_budget(),
            Err(WorkflowError::Normalize(NormalizeError::EmptyInput))
        );
    }

    #[test]
    fn test_non_string_budget_is_empty_input() {
        let output = transform_record(&record(json!({ "Answers": { "Budget": 1200 } })));
        assert_eq!(output["budgetOriginal"], 1200);
        assert_eq!(output["budgetParsed"], Value::Null);
        assert_eq!(output["parseError"], "Input must be a non-empty string");
    }

    #[test]
    fn test_invalid_budget() {
        let outcome = BudgetOutcome::evaluate(&WorkflowInput::from_record(&record(
            json!({ "Answers": { "Budget": "around 500" } }),
        )));
        assert!(!outcome.is_ok());
        assert_eq!(outcome.budget_parsed, None);
        assert_eq!(
            outcome.parse_error.as_deref(),
            Some("Invalid characters in amount: \"around 500\"")
        );
    }

    #[test]
    fn test_negative_budget_formatting() {
        let output = transform_record(&record(json!({ "Answers": { "Budget": "($500.25)" } })));
        assert_eq!(output["budgetParsed"], -50025);
        assert_eq!(output["budgetFormatted"], "-500.25");
    }

    #[test]
    fn test_existing_output_keys_are_overwritten() {
        let output = transform_record(&record(json!({
            "Answers": { "Budget": "10" },
            "parseError": "stale"
        })));
        assert_eq!(output["parseError"], Value::Null);
        assert_eq!(output["budgetParsed"], 1000);
    }
}
