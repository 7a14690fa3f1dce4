//! Static codec registry.
//!
//! # Design Decisions
//! - Closed set: exactly the four built-in pipelines. Unknown identifiers fail
//!   before any network call is attempted.
//! - Built once at startup and shared immutably; no registration after boot.

use std::collections::HashMap;

use crate::error::{GatewayError, GatewayResult};
use crate::pipeline::codec::PipelineCodec;
use crate::pipeline::object_detection::ObjectDetection;
use crate::pipeline::text_generation::TextGeneration;
use crate::pipeline::token_classification::TokenClassification;
use crate::pipeline::zero_shot::ZeroShotClassification;

/// Dispatch table from pipeline identifier to its codec.
pub struct CodecRegistry {
    codecs: HashMap<&'static str, Box<dyn PipelineCodec>>,
}

impl CodecRegistry {
    /// Registry holding the four built-in pipeline codecs.
    pub fn builtin() -> Self {
        let mut registry = Self {
            codecs: HashMap::new(),
        };
        registry.register(Box::new(TextGeneration));
        registry.register(Box::new(ZeroShotClassification));
        registry.register(Box::new(TokenClassification));
        registry.register(Box::new(ObjectDetection));
        registry
    }

    fn register(&mut self, codec: Box<dyn PipelineCodec>) {
        self.codecs.insert(codec.name(), codec);
    }

    /// Look up the codec for a pipeline identifier.
    pub fn get(&self, pipeline: &str) -> GatewayResult<&dyn PipelineCodec> {
        self.codecs
            .get(pipeline)
            .map(|codec| codec.as_ref())
            .ok_or_else(|| GatewayError::UnsupportedPipeline(pipeline.to_owned()))
    }

    /// Registered pipeline identifiers, for startup logging.
    pub fn pipelines(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.codecs.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
