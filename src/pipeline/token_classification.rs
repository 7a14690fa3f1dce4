//! token-classification codec.

use serde_json::{json, Value};

use crate::error::GatewayResult;
use crate::pipeline::codec::{Parameters, PipelineCodec, PipelineInput};
use crate::protocol::{Dtype, TensorPayload, V2Envelope, V2Response};

/// Splits the input on whitespace into a `tokens` tensor; on decode, pairs
/// entities with tags. The pairing truncates at the shorter sequence —
/// unmatched trailing elements are dropped on purpose, never an index error.
#[derive(Debug)]
pub struct TokenClassification;

impl PipelineCodec for TokenClassification {
    fn name(&self) -> &'static str {
        "token-classification"
    }

    fn encode(&self, input: &PipelineInput, _parameters: &Parameters) -> GatewayResult<V2Envelope> {
        let tokens: Vec<Value> = input
            .as_text()?
            .split_whitespace()
            .map(|token| Value::String(token.to_owned()))
            .collect();

        Ok(V2Envelope::new().with(
            "tokens",
            TensorPayload::new(Dtype::String, tokens).with_shape(vec![-1]),
        ))
    }

    fn decode(&self, response: &V2Response, _parameters: &Parameters) -> GatewayResult<Value> {
        let entities = response.output("entities")?;
        let tags = response.output("tags")?;

        let pairs: Vec<Value> = entities
            .data
            .iter()
            .zip(tags.data.iter())
            .map(|(entity, label)| json!({"entity": entity, "label": label}))
            .collect();

        Ok(json!({ "entity_classification": pairs }))
    }
}
