//! zero-shot-classification codec.

use serde_json::{json, Value};

use crate::error::GatewayResult;
use crate::pipeline::codec::{candidate_labels, Parameters, PipelineCodec, PipelineInput};
use crate::protocol::{Dtype, TensorPayload, V2Envelope, V2Response};

/// Sends the sequence plus the caller's candidate labels; on decode, scores
/// come from the model but labels are echoed from the request parameters, not
/// taken from the downstream response.
#[derive(Debug)]
pub struct ZeroShotClassification;

impl PipelineCodec for ZeroShotClassification {
    fn name(&self) -> &'static str {
        "zero-shot-classification"
    }

    fn encode(&self, input: &PipelineInput, parameters: &Parameters) -> GatewayResult<V2Envelope> {
        let sequence = input.as_text()?;
        Ok(V2Envelope::new()
            .with(
                "sequence",
                TensorPayload::new(Dtype::String, vec![Value::String(sequence.to_owned())]),
            )
            .with(
                "candidate_labels",
                TensorPayload::new(Dtype::String, candidate_labels(parameters)),
            ))
    }

    fn decode(&self, response: &V2Response, parameters: &Parameters) -> GatewayResult<Value> {
        let scores = response.output("scores")?;
        Ok(json!({
            "sequence_classification": {
                "scores": scores.data.clone(),
                "labels": candidate_labels(parameters),
            }
        }))
    }
}
