use thiserror::Error;
use tracing::debug;

use crate::sum::value::SumValue;

/// Enumerate possible summation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SumError {
    /// The named shape has no numeric meaning. Terminal for the call:
    /// one bad leaf anywhere voids the entire aggregate.
    #[error("the value type is unsupported: {0}")]
    UnsupportedValueType(&'static str),
}

/// Reduce a classified value to a single total.
///
/// Dispatch follows the shape table exactly: absent and empty inputs
/// are zero, scalars convert, homogeneous lists fold their elements,
/// mixed lists and mappings recurse. Recursion depth is bounded only
/// by the input's own nesting. There is no partial success and no
/// skip-and-continue; only empty text is tolerated as zero.
pub fn sum(value: &SumValue) -> Result<f64, SumError> {
    match value {
        SumValue::Absent => Ok(0.0),

        SumValue::Float(f) => Ok(*f),

        SumValue::Int(i) => Ok(*i as f64),

        SumValue::Text(s) => parse_text(s),

        SumValue::Floats(items) => Ok(items.iter().sum()),

        SumValue::Ints(items) => Ok(items.iter().map(|i| *i as f64).sum()),

        SumValue::Texts(items) => items
            .iter()
            .try_fold(0.0, |acc, s| Ok(acc + parse_text(s)?)),

        SumValue::Mixed(items) => items
            .iter()
            .try_fold(0.0, |acc, item| Ok(acc + sum(item)?)),

        // Keys are ignored; order is irrelevant for addition.
        SumValue::Mapping(entries) => entries
            .values()
            .try_fold(0.0, |acc, item| Ok(acc + sum(item)?)),

        SumValue::Unsupported(shape) => {
            debug!(shape, "unsupported value shape");
            Err(SumError::UnsupportedValueType(shape))
        }
    }
}

/// Empty text contributes zero; anything else must parse as f64.
fn parse_text(s: &str) -> Result<f64, SumError> {
    if s.is_empty() {
        return Ok(0.0);
    }
    s.parse::<f64>()
        .map_err(|_| SumError::UnsupportedValueType("text"))
}
