use crate::classifier::error::EngineError;
use crate::classifier::pixel_tensor_encoder::InputTensor;
use crate::inference_engine::interface::InferenceEngine;
use rand::distr::{Distribution, Uniform};

#[derive(Debug, Clone)]
pub enum FakeBehavior {
    /// Random scores normalized to sum to one.
    Random,
    Constant(Vec<f32>),
    Fail(String),
}

pub struct InferenceEngineFake {
    output_len: usize,
    behavior: FakeBehavior,
    closed: bool,
    runs: usize,
}

impl InferenceEngineFake {
    pub fn new(output_len: usize, behavior: FakeBehavior) -> Self {
        Self {
            output_len,
            behavior,
            closed: false,
            runs: 0,
        }
    }

    pub fn random(output_len: usize) -> Self {
        Self::new(output_len, FakeBehavior::Random)
    }

    #[allow(dead_code)]
    pub fn constant(scores: Vec<f32>) -> Self {
        Self::new(scores.len(), FakeBehavior::Constant(scores))
    }

    #[allow(dead_code)]
    pub fn failing(output_len: usize, message: &str) -> Self {
        Self::new(output_len, FakeBehavior::Fail(message.to_string()))
    }

    #[allow(dead_code)]
    pub fn runs(&self) -> usize {
        self.runs
    }
}

impl InferenceEngine for InferenceEngineFake {
    fn output_len(&self) -> usize {
        self.output_len
    }

    fn run(&mut self, _input: &InputTensor, output: &mut [f32]) -> Result<(), EngineError> {
        if self.closed {
            return Err(EngineError::Closed);
        }
        if output.len() != self.output_len {
            return Err(EngineError::OutputLength {
                expected: output.len(),
                actual: self.output_len,
            });
        }
        self.runs += 1;

        match &self.behavior {
            FakeBehavior::Random => {
                let dist = Uniform::new(0.0f32, 1.0).map_err(|e| EngineError::Run(e.to_string()))?;
                let mut rng = rand::rng();
                for score in output.iter_mut() {
                    *score = dist.sample(&mut rng);
                }
                let total: f32 = output.iter().sum();
                if total > 0.0 {
                    output.iter_mut().for_each(|score| *score /= total);
                }
                Ok(())
            }
            FakeBehavior::Constant(scores) => {
                output.copy_from_slice(scores);
                Ok(())
            }
            FakeBehavior::Fail(message) => Err(EngineError::Run(message.clone())),
        }
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
