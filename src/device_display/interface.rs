use std::error::Error;

/// Surface the ranked labels are shown on.
pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Replaces the displayed text. Multi-line text is shown line by line.
    fn show(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}
