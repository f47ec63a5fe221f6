use crate::prelude::{CoordinateSample, KinematicsError, KinematicsResult, MIN_SAMPLES};
use serde::Deserialize;
use serde_json::Value;

/// Body of a calculation request. `coordinates` stays raw until the length
/// check passes so a short list is rejected before entries are inspected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculationRequest {
    #[serde(default)]
    pub coordinates: Option<Value>,
}

impl CalculationRequest {
    pub fn into_samples(self) -> KinematicsResult<Vec<CoordinateSample>> {
        let entries = match self.coordinates {
            None | Some(Value::Null) => return Err(KinematicsError::insufficient_samples()),
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                return Err(KinematicsError::Internal(format!(
                    "coordinates must be an array, got {}",
                    json_kind(&other)
                )))
            }
        };

        if entries.len() < MIN_SAMPLES {
            return Err(KinematicsError::insufficient_samples());
        }

        entries
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| {
                serde_json::from_value::<CoordinateSample>(entry).map_err(|err| {
                    KinematicsError::Internal(format!("coordinate {}: {}", idx, err))
                })
            })
            .collect()
    }
}

/// Decodes a raw request body into samples.
///
/// A body that is not a JSON object is treated like one without
/// `coordinates`, which is a validation failure rather than a fault.
pub fn decode_request(body: &[u8]) -> KinematicsResult<Vec<CoordinateSample>> {
    let request: CalculationRequest = serde_json::from_slice(body).unwrap_or_default();
    request.into_samples()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
