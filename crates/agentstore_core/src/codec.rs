//! Wire encoding for persisted agent records.
//!
//! # Responsibility
//! - Define the encode/decode contract the repository relies on.
//! - Provide the default JSON codec.
//!
//! # Invariants
//! - `decode(encode(agent))` is field-wise equal to `agent`.
//! - Decode failures carry enough context to identify the bad payload.

use crate::model::agent::Agent;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Encode/decode pair used by the repository for persisted bytes.
///
/// The repository only requires lossless round trips; the concrete wire
/// format is a backend decision.
pub trait AgentCodec {
    fn encode(&self, agent: &Agent) -> Result<Vec<u8>, CodecError>;
    fn decode(&self, bytes: &[u8]) -> Result<Agent, CodecError>;
}

/// Encoding failure for a persisted record.
#[derive(Debug)]
pub enum CodecError {
    Encode(String),
    Decode(String),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(message) => write!(f, "failed to encode agent: {message}"),
            Self::Decode(message) => write!(f, "failed to decode agent record: {message}"),
        }
    }
}

impl Error for CodecError {}

/// JSON codec over serde.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl AgentCodec for JsonCodec {
    fn encode(&self, agent: &Agent) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(agent).map_err(|err| CodecError::Encode(err.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Agent, CodecError> {
        serde_json::from_slice(bytes).map_err(|err| CodecError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{AgentCodec, CodecError, JsonCodec};
    use crate::model::agent::Agent;
    use uuid::Uuid;

    #[test]
    fn json_round_trip_preserves_all_fields() {
        let correlation_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
        let mut agent = Agent::with_correlation_id(
            "sensor-7-1700000000000",
            correlation_id,
            "sensor-7",
            vec!["rack-2".to_string(), "thermal".to_string()],
        )
        .unwrap();
        agent.id = Some(42);

        let codec = JsonCodec;
        let bytes = codec.encode(&agent).unwrap();
        let decoded = codec.decode(&bytes).unwrap();
        assert_eq!(decoded, agent);
    }

    #[test]
    fn decode_rejects_garbage_bytes() {
        let err = JsonCodec.decode(b"not json").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        let err = JsonCodec.decode(b"{\"identifier\": 3}").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }
}
