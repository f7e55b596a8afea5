//! # Normalize Outcome
//!
//! Serializable form of a normalization result, for callers that speak JSON.
//!
//! ```json
//! { "ok": true,  "minorUnits": 123456 }
//! { "ok": false, "errorKind": "EmptyInput", "message": "Input must be a non-empty string" }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ErrorKind, NormalizeResult};
use crate::money::Money;

/// Success/failure record for a single normalization.
///
/// Exactly one of `minor_units` or (`error_kind`, `message`) is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NormalizeOutcome {
    pub ok: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub minor_units: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error_kind: Option<ErrorKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub message: Option<String>,
}

impl NormalizeOutcome {
    /// Returns the parsed amount, if any.
    pub fn money(&self) -> Option<Money> {
        self.minor_units.map(Money::from_cents)
    }
}

impl From<NormalizeResult<Money>> for NormalizeOutcome {
    fn from(result: NormalizeResult<Money>) -> Self {
        match result {
            Ok(money) => NormalizeOutcome {
                ok: true,
                minor_units: Some(money.cents()),
                error_kind: None,
                message: None,
            },
            Err(e) => NormalizeOutcome {
                ok: false,
                minor_units: None,
                error_kind: Some(e.kind()),
                message: Some(e.to_string()),
            },
        }
    }
}
