use crate::classifier::error::EngineError;
use crate::classifier::pixel_tensor_encoder::{InputTensor, CHANNELS};
use crate::inference_engine::interface::InferenceEngine;
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use tract_onnx::prelude::*;

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

/// ONNX classifier taking NHWC `[1, height, width, 3]` f32 input.
pub struct InferenceEngineTractOnnx {
    model: Option<Plan>,
    output_len: usize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl InferenceEngineTractOnnx {
    pub fn from_bytes(
        model_bytes: &[u8],
        width: u32,
        height: u32,
        output_len: usize,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, EngineError> {
        let input_shape = [1, height as usize, width as usize, CHANNELS];
        let model = tract_onnx::onnx()
            .model_for_read(&mut std::io::Cursor::new(model_bytes))
            .and_then(|model| model.with_input_fact(0, f32::fact(input_shape).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| EngineError::Load(e.to_string()))?;

        let logger = logger.with_namespace("tract_onnx");
        let _ = logger.info(&format!(
            "Loaded ONNX model with input {:?} and {} outputs",
            input_shape, output_len
        ));

        Ok(Self {
            model: Some(model),
            output_len,
            logger,
        })
    }
}

impl InferenceEngine for InferenceEngineTractOnnx {
    fn output_len(&self) -> usize {
        self.output_len
    }

    fn run(&mut self, input: &InputTensor, output: &mut [f32]) -> Result<(), EngineError> {
        let model = self.model.as_ref().ok_or(EngineError::Closed)?;

        let tensor = Tensor::from_shape::<f32>(&input.shape(), input.as_slice())
            .map_err(|e| EngineError::Run(e.to_string()))?;
        let outputs = model
            .run(tvec!(tensor.into_tvalue()))
            .map_err(|e| EngineError::Run(e.to_string()))?;
        let scores = outputs
            .first()
            .ok_or_else(|| EngineError::Run("model produced no outputs".to_string()))?
            .as_slice::<f32>()
            .map_err(|e| EngineError::Run(e.to_string()))?;

        if scores.len() != output.len() {
            return Err(EngineError::OutputLength {
                expected: output.len(),
                actual: scores.len(),
            });
        }
        output.copy_from_slice(scores);
        Ok(())
    }

    fn close(&mut self) {
        if self.model.take().is_some() {
            let _ = self.logger.info("Released ONNX model");
        }
    }
}
