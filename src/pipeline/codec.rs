//! Codec trait and shared input types.

use serde_json::Value;

use crate::error::{GatewayError, GatewayResult};
use crate::protocol::{V2Envelope, V2Response};

/// Free-form request parameters (`parameters` field of a predict request).
pub type Parameters = serde_json::Map<String, Value>;

/// What kind of raw input a codec consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// The `inputs` field is used as text directly.
    Text,
    /// The `inputs` field is a descriptor resolved to bytes before encoding.
    Binary,
}

/// Resolved input handed to a codec's encode step.
#[derive(Debug, Clone)]
pub enum PipelineInput {
    Text(String),
    Bytes(Vec<u8>),
}

impl PipelineInput {
    pub fn as_text(&self) -> GatewayResult<&str> {
        match self {
            PipelineInput::Text(text) => Ok(text),
            PipelineInput::Bytes(_) => Err(GatewayError::Internal("expected text input")),
        }
    }

    pub fn as_bytes(&self) -> GatewayResult<&[u8]> {
        match self {
            PipelineInput::Bytes(bytes) => Ok(bytes),
            PipelineInput::Text(_) => Err(GatewayError::Internal("expected binary input")),
        }
    }
}

/// Bidirectional translation for one pipeline.
pub trait PipelineCodec: Send + Sync + std::fmt::Debug {
    /// Pipeline identifier this codec is registered under.
    fn name(&self) -> &'static str;

    /// Input kind; the handler resolves binary inputs before calling encode.
    fn input_kind(&self) -> InputKind {
        InputKind::Text
    }

    /// Build the V2 envelope for the resolved input and request parameters.
    fn encode(&self, input: &PipelineInput, parameters: &Parameters) -> GatewayResult<V2Envelope>;

    /// Translate a successful V2 response into the pipeline's output shape.
    fn decode(&self, response: &V2Response, parameters: &Parameters) -> GatewayResult<Value>;
}

/// `parameters.candidate_labels`, defaulting to an empty list when absent.
pub(crate) fn candidate_labels(parameters: &Parameters) -> Vec<Value> {
    parameters
        .get("candidate_labels")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_candidate_labels_default() {
        let params = Parameters::new();
        assert!(candidate_labels(&params).is_empty());
    }

    #[test]
    fn test_candidate_labels_present() {
        let mut params = Parameters::new();
        params.insert("candidate_labels".into(), json!(["a", "b"]));
        assert_eq!(candidate_labels(&params), vec![json!("a"), json!("b")]);
    }

    #[test]
    fn test_input_kind_mismatch_is_internal_error() {
        let input = PipelineInput::Text("hello".into());
        assert!(input.as_text().is_ok());
        assert!(matches!(
            input.as_bytes(),
            Err(GatewayError::Internal(_))
        ));
    }
}
