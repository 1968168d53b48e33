use crate::classifier::error::EngineError;
use crate::classifier::pixel_tensor_encoder::InputTensor;

/// The model runtime: a fixed-shape tensor in, one score per label out.
pub trait InferenceEngine: Send {
    /// Number of scores written by every `run`.
    fn output_len(&self) -> usize;

    /// Runs the model, writing exactly `output_len()` scores into `output`.
    fn run(&mut self, input: &InputTensor, output: &mut [f32]) -> Result<(), EngineError>;

    /// Releases the runtime. Later `run` calls fail with `EngineError::Closed`.
    fn close(&mut self);
}
