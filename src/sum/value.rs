use std::collections::BTreeMap;

use serde_json::Value;

/// Closed set of shapes the summation engine understands.
///
/// Homogeneous lists keep their element type so the engine can reduce
/// them without re-dispatching per element; anything else nests as
/// `Mixed` or `Mapping` and is reduced recursively. Shapes with no
/// numeric meaning classify as `Unsupported` and fail at reduction,
/// not at classification, so the whole input is always classifiable.
#[derive(Debug, Clone, PartialEq)]
pub enum SumValue {
    Absent,
    Float(f64),
    Int(i64),
    Text(String),
    Floats(Vec<f64>),
    Ints(Vec<i64>),
    Texts(Vec<String>),
    Mixed(Vec<SumValue>),
    Mapping(BTreeMap<String, SumValue>),
    Unsupported(&'static str),
}

impl From<Value> for SumValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SumValue::Absent,

            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SumValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    SumValue::Float(f)
                } else {
                    // u64 beyond i64::MAX with no f64 representation
                    SumValue::Unsupported("number")
                }
            }

            Value::String(s) => SumValue::Text(s),

            Value::Array(items) => classify_list(items),

            Value::Object(map) => SumValue::Mapping(
                map.into_iter().map(|(k, v)| (k, SumValue::from(v))).collect(),
            ),

            Value::Bool(_) => SumValue::Unsupported("boolean"),
        }
    }
}

/// Collapse a JSON array into the narrowest list variant: all-int,
/// all-float, all-text, otherwise mixed. An empty array is an empty
/// mixed list and sums to zero.
fn classify_list(items: Vec<Value>) -> SumValue {
    let elems: Vec<SumValue> = items.into_iter().map(SumValue::from).collect();

    if !elems.is_empty() {
        if elems.iter().all(|e| matches!(e, SumValue::Int(_))) {
            return SumValue::Ints(
                elems
                    .into_iter()
                    .map(|e| match e {
                        SumValue::Int(i) => i,
                        _ => unreachable!(),
                    })
                    .collect(),
            );
        }

        if elems.iter().all(|e| matches!(e, SumValue::Float(_) | SumValue::Int(_))) {
            return SumValue::Floats(
                elems
                    .into_iter()
                    .map(|e| match e {
                        SumValue::Float(f) => f,
                        SumValue::Int(i) => i as f64,
                        _ => unreachable!(),
                    })
                    .collect(),
            );
        }

        if elems.iter().all(|e| matches!(e, SumValue::Text(_))) {
            return SumValue::Texts(
                elems
                    .into_iter()
                    .map(|e| match e {
                        SumValue::Text(s) => s,
                        _ => unreachable!(),
                    })
                    .collect(),
            );
        }
    }

    SumValue::Mixed(elems)
}
