use crate::domain::ports::RecordCodec;
use crate::error::{DecodeError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encodes each entity as a single-line JSON object.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLineCodec;

impl<T> RecordCodec<T> for JsonLineCodec
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, entity: &T) -> Result<String> {
        Ok(serde_json::to_string(entity)?)
    }

    fn decode(&self, line: &str) -> std::result::Result<T, DecodeError> {
        serde_json::from_str(line).map_err(|e| DecodeError(e.to_string()))
    }
}
