use crate::classifier::error::ClassifierError;
use crate::classifier::label_list::LabelList;
use crate::classifier::pixel_tensor_encoder::{PixelBuffer, PixelTensorEncoder};
use crate::classifier::ranked_result::RankedResult;
use crate::classifier::temporal_smoother::TemporalSmoother;
use crate::classifier::top_k_selector::TopKSelector;
use crate::config::Config;
use crate::inference_engine::interface::InferenceEngine;
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use std::time::Instant;

/// Text shown in place of a ranking while no engine is bound.
pub const UNINITIALIZED_TEXT: &str = "Uninitialized Classifier.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStatus {
    Uninitialized,
    Ready,
    Closed,
}

enum State {
    Uninitialized,
    Ready { engine: Box<dyn InferenceEngine> },
    Closed,
}

impl State {
    fn status(&self) -> PipelineStatus {
        match self {
            State::Uninitialized => PipelineStatus::Uninitialized,
            State::Ready { .. } => PipelineStatus::Ready,
            State::Closed => PipelineStatus::Closed,
        }
    }
}

/// Frame in, ranked labels out: encode, infer, smooth, select.
///
/// Owns every per-frame buffer, so one instance serves one frame at a time.
pub struct ClassificationPipeline {
    state: State,
    labels: LabelList,
    encoder: PixelTensorEncoder,
    smoother: TemporalSmoother,
    selector: TopKSelector,
    scores: Vec<f32>,
    results_to_show: usize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ClassificationPipeline {
    pub fn new(
        config: &Config,
        labels: LabelList,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifierError> {
        let encoder = PixelTensorEncoder::new(
            config.image_width,
            config.image_height,
            config.image_mean,
            config.image_std,
        )?;
        let smoother =
            TemporalSmoother::new(labels.len(), config.filter_stages, config.filter_factor)?;
        let logger = logger.with_namespace("image_classifier");

        let _ = logger.debug(&format!(
            "Created image classifier for {} labels, input {}x{}",
            labels.len(),
            config.image_width,
            config.image_height
        ));

        Ok(Self {
            state: State::Uninitialized,
            scores: vec![0.0; labels.len()],
            labels,
            encoder,
            smoother,
            selector: TopKSelector::new(config.results_to_show),
            results_to_show: config.results_to_show,
            logger,
        })
    }

    pub fn status(&self) -> PipelineStatus {
        self.state.status()
    }

    pub fn num_labels(&self) -> usize {
        self.labels.len()
    }

    /// Attaches the engine and moves to `Ready`. The engine must produce one
    /// score per label; on mismatch the pipeline stays `Uninitialized`.
    pub fn bind(&mut self, engine: Box<dyn InferenceEngine>) -> Result<(), ClassifierError> {
        let status = self.status();
        if status != PipelineStatus::Uninitialized {
            return Err(ClassifierError::InvalidTransition(status));
        }
        if engine.output_len() != self.labels.len() {
            return Err(ClassifierError::LabelCountMismatch {
                labels: self.labels.len(),
                outputs: engine.output_len(),
            });
        }

        self.state = State::Ready { engine };
        let _ = self.logger.info("Inference engine bound");
        Ok(())
    }

    pub fn classify(&mut self, frame: &PixelBuffer) -> Result<RankedResult, ClassifierError> {
        let State::Ready { engine } = &mut self.state else {
            let _ = self
                .logger
                .error("Image classifier has not been initialized; Skipped.");
            return Err(ClassifierError::NotReady);
        };

        let encode_start = Instant::now();
        let tensor = self.encoder.encode(frame)?;
        let _ = self.logger.debug(&format!(
            "Timecost to put values into tensor: {:?}",
            encode_start.elapsed()
        ));

        let inference_start = Instant::now();
        engine.run(tensor, &mut self.scores)?;
        let inference_time = inference_start.elapsed();
        let _ = self.logger.debug(&format!(
            "Timecost to run model inference: {:?}",
            inference_time
        ));

        self.smoother.smooth(&mut self.scores)?;

        let entries = self
            .selector
            .select(&self.scores, &self.labels, self.results_to_show);

        Ok(RankedResult {
            entries,
            inference_time,
        })
    }

    /// Formatted ranking, or `UNINITIALIZED_TEXT` when no engine is bound.
    pub fn classify_text(&mut self, frame: &PixelBuffer) -> Result<String, ClassifierError> {
        match self.classify(frame) {
            Ok(result) => Ok(result.to_string()),
            Err(ClassifierError::NotReady) => Ok(UNINITIALIZED_TEXT.to_string()),
            Err(e) => Err(e),
        }
    }

    /// Releases the engine. Safe to call repeatedly and from any state.
    pub fn close(&mut self) {
        match std::mem::replace(&mut self.state, State::Closed) {
            State::Ready { mut engine } => {
                engine.close();
                let _ = self.logger.info("Inference engine released");
            }
            State::Uninitialized | State::Closed => {}
        }
    }
}

impl Drop for ClassificationPipeline {
    fn drop(&mut self) {
        self.close();
    }
}
