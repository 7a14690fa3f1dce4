//! V2 envelope and response definitions.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GatewayError, GatewayResult};

/// Tensor element type understood by the V2 protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dtype {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "BYTES")]
    Bytes,
}

/// A single named tensor: element type, optional shape, and a flat data array.
///
/// When `shape` is present, `data` length must be consistent with it; the
/// wildcard dimension `-1` defers the length to the data array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TensorPayload {
    pub dtype: Dtype,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Vec<i64>>,
    pub data: Vec<Value>,
}

impl TensorPayload {
    pub fn new(dtype: Dtype, data: Vec<Value>) -> Self {
        Self {
            dtype,
            shape: None,
            data,
        }
    }

    pub fn with_shape(mut self, shape: Vec<i64>) -> Self {
        self.shape = Some(shape);
        self
    }
}

/// Request envelope sent to the model deployment endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct V2Envelope {
    pub inputs: BTreeMap<String, TensorPayload>,
}

impl V2Envelope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named input tensor, builder style.
    pub fn with(mut self, name: impl Into<String>, tensor: TensorPayload) -> Self {
        self.inputs.insert(name.into(), tensor);
        self
    }
}

/// Output tensor returned by the model deployment endpoint.
///
/// Decoding only reads `data`; the dtype is whatever the endpoint reports and
/// is deliberately not constrained to [`Dtype`].
#[derive(Debug, Clone, Deserialize)]
pub struct OutputTensor {
    #[serde(default)]
    pub dtype: Option<String>,
    #[serde(default)]
    pub shape: Option<Vec<i64>>,
    #[serde(default)]
    pub data: Vec<Value>,
}

/// Response body returned by the model deployment endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct V2Response {
    #[serde(default)]
    pub outputs: HashMap<String, OutputTensor>,
}

impl V2Response {
    /// Look up a named output tensor.
    ///
    /// A missing slot is a protocol violation by the downstream endpoint and
    /// surfaces as a structured error rather than a panic.
    pub fn output(&self, name: &str) -> GatewayResult<&OutputTensor> {
        self.outputs.get(name).ok_or_else(|| {
            GatewayError::MalformedResponse(format!("missing output tensor `{name}`"))
        })
    }
}
