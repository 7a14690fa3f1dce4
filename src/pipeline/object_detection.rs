//! object-detection codec.

use serde_json::{json, Value};

use crate::error::{GatewayError, GatewayResult};
use crate::pipeline::codec::{InputKind, Parameters, PipelineCodec, PipelineInput};
use crate::protocol::{Dtype, TensorPayload, V2Envelope, V2Response};

/// Encodes resolved image bytes as a `BYTES` tensor; on decode, zips classes,
/// scores, and boxes into detection records, truncating at the shortest of the
/// three sequences.
#[derive(Debug)]
pub struct ObjectDetection;

impl PipelineCodec for ObjectDetection {
    fn name(&self) -> &'static str {
        "object-detection"
    }

    fn input_kind(&self) -> InputKind {
        InputKind::Binary
    }

    fn encode(&self, input: &PipelineInput, _parameters: &Parameters) -> GatewayResult<V2Envelope> {
        let bytes = input.as_bytes()?;
        let data: Vec<Value> = bytes.iter().map(|byte| Value::from(*byte)).collect();

        Ok(V2Envelope::new().with(
            "image",
            TensorPayload::new(Dtype::Bytes, data).with_shape(vec![bytes.len() as i64]),
        ))
    }

    fn decode(&self, response: &V2Response, _parameters: &Parameters) -> GatewayResult<Value> {
        let classes = response.output("detection_classes")?;
        let scores = response.output("detection_scores")?;
        let boxes = response.output("detection_boxes")?;

        let detections: Vec<Value> = classes
            .data
            .iter()
            .zip(scores.data.iter())
            .zip(boxes.data.iter())
            .map(|((label, confidence), bbox)| {
                let coords = bbox.as_array().filter(|coords| coords.len() >= 4).ok_or_else(
                    || {
                        GatewayError::MalformedResponse(
                            "detection box must be an array of four coordinates".into(),
                        )
                    },
                )?;
                Ok(json!({
                    "label": label,
                    "confidence": confidence,
                    "bounding_box": {
                        "xmin": coords[0],
                        "ymin": coords[1],
                        "xmax": coords[2],
                        "ymax": coords[3],
                    }
                }))
            })
            .collect::<GatewayResult<_>>()?;

        Ok(json!({ "detections": detections }))
    }
}
