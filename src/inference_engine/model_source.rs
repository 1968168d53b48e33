use crate::classifier::error::EngineError;
use std::path::Path;

/// Reads the model blob as-is; its format is the engine's concern.
pub fn load_model(path: impl AsRef<Path>) -> Result<Vec<u8>, EngineError> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|e| EngineError::Load(format!("{}: {}", path.display(), e)))
}
