//! text-generation codec.

use serde_json::Value;

use crate::error::{GatewayError, GatewayResult};
use crate::pipeline::codec::{Parameters, PipelineCodec, PipelineInput};
use crate::protocol::{Dtype, TensorPayload, V2Envelope, V2Response};

/// Wraps the prompt in a single `text` tensor and returns the first generated
/// string bare, not nested in an object.
#[derive(Debug)]
pub struct TextGeneration;

impl PipelineCodec for TextGeneration {
    fn name(&self) -> &'static str {
        "text-generation"
    }

    fn encode(&self, input: &PipelineInput, _parameters: &Parameters) -> GatewayResult<V2Envelope> {
        let text = input.as_text()?;
        Ok(V2Envelope::new().with(
            "text",
            TensorPayload::new(Dtype::String, vec![Value::String(text.to_owned())]),
        ))
    }

    fn decode(&self, response: &V2Response, _parameters: &Parameters) -> GatewayResult<Value> {
        let tensor = response.output("generated_text")?;
        tensor.data.first().cloned().ok_or_else(|| {
            GatewayError::MalformedResponse("empty `generated_text` data".into())
        })
    }
}
