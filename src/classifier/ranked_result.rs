use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

/// Up to K labels, highest score first, with the time spent in the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub entries: Vec<LabelScore>,
    pub inference_time: Duration,
}

impl RankedResult {
    #[cfg(test)]
    pub fn top(&self) -> Option<&LabelScore> {
        self.entries.first()
    }
}

impl fmt::Display for RankedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.inference_time.as_millis())?;
        for entry in &self.entries {
            write!(f, "\n{}: {:4.2}", entry.label, entry.score)?;
        }
        Ok(())
    }
}
