use crate::classifier::pipeline::PipelineStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to load model: {0}")]
    Load(String),
    #[error("inference failed: {0}")]
    Run(String),
    #[error("engine produced {actual} outputs, expected {expected}")]
    OutputLength { expected: usize, actual: usize },
    #[error("engine has been closed")]
    Closed,
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("invalid frame: expected {expected_width}x{expected_height} ({expected} pixels), got {width}x{height} ({actual} pixels)")]
    InvalidInput {
        expected_width: u32,
        expected_height: u32,
        expected: usize,
        width: u32,
        height: u32,
        actual: usize,
    },
    #[error("image classifier has not been initialized")]
    NotReady,
    #[error(transparent)]
    EngineFailure(#[from] EngineError),
    #[error("label list has {labels} entries but the engine outputs {outputs} scores")]
    LabelCountMismatch { labels: usize, outputs: usize },
    #[error("got {actual} scores for {expected} labels")]
    ScoreLengthMismatch { expected: usize, actual: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind an engine while {0:?}")]
    InvalidTransition(PipelineStatus),
    #[error("failed to read labels: {0}")]
    LabelSource(#[from] std::io::Error),
}
