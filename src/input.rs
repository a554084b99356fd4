//! Untyped entry point for the pair-sum scan.
//!
//! Callers holding JSON-shaped data get the same runtime tag check the
//! typed API enforces at compile time: anything that is not an array of
//! integers, or a target that is not an integer, falls back to `0`.

use serde_json::Value;
use tracing::debug;

use crate::{
    error::{InputError, Result},
    solution::Solution,
};

/// Validated arguments for [`Solution::find_pair_sum`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSumInput {
    pub sequence: Vec<i32>,
    pub target: i32,
}

impl PairSumInput {
    pub fn from_values(sequence: &Value, target: &Value) -> Result<Self> {
        let items = match sequence {
            Value::Array(items) => items,
            other => return Err(InputError::NotASequence(kind_of(other))),
        };

        let sequence = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                as_i32(item).ok_or_else(|| InputError::InvalidElement {
                    index,
                    value: item.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let target = as_i32(target).ok_or_else(|| InputError::InvalidTarget(target.to_string()))?;

        Ok(Self { sequence, target })
    }

    pub fn find_pair_sum(&self) -> i32 {
        Solution::find_pair_sum(&self.sequence, self.target)
    }
}

/// Sum of the first matching pair, or `0` for no pair and for any input
/// that fails validation. Never errors.
pub fn find_pair_sum_value(sequence: &Value, target: &Value) -> i32 {
    match PairSumInput::from_values(sequence, target) {
        Ok(input) => input.find_pair_sum(),
        Err(e) => {
            debug!(error = %e, "input rejected, falling back to 0");
            0
        }
    }
}

/// Integers only: floats such as `9.0` are rejected like in a strict
/// `isinstance(x, int)` check, and so are booleans.
fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
