use chrono::{Offset, Utc};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Console,
    Gui,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub image_width: u32,
    pub image_height: u32,
    pub image_mean: f32,
    pub image_std: f32,
    pub filter_stages: usize,
    pub filter_factor: f32,
    pub results_to_show: usize,
    pub tick_rate: Duration,
    pub max_frames: Option<usize>,
    pub logger_timezone: chrono::FixedOffset,
    pub model_path: Option<String>,
    pub label_path: Option<String>,
    pub image_path: Option<String>,
    pub display: DisplayKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_width: 224,
            image_height: 224,
            image_mean: 128.0,
            image_std: 128.0,
            filter_stages: 3,
            filter_factor: 0.4,
            results_to_show: 3,
            tick_rate: Duration::from_millis(100),
            max_frames: None,
            logger_timezone: Utc.fix(),
            model_path: None,
            label_path: None,
            image_path: None,
            display: DisplayKind::Console,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut config = Self::default();

        if let Some(path) = lookup("FRAME_CLASSIFIER_MODEL") {
            config.model_path = Some(path);
        }
        if let Some(path) = lookup("FRAME_CLASSIFIER_LABELS") {
            config.label_path = Some(path);
        }
        if let Some(path) = lookup("FRAME_CLASSIFIER_IMAGE") {
            config.image_path = Some(path);
        }
        if let Some(frames) = lookup("FRAME_CLASSIFIER_FRAMES") {
            let frames = frames
                .parse::<usize>()
                .map_err(|e| format!("FRAME_CLASSIFIER_FRAMES={:?}: {}", frames, e))?;
            config.max_frames = Some(frames);
        }
        if let Some(display) = lookup("FRAME_CLASSIFIER_DISPLAY") {
            config.display = match display.to_lowercase().as_str() {
                "console" => DisplayKind::Console,
                "gui" => DisplayKind::Gui,
                other => {
                    return Err(format!(
                        "FRAME_CLASSIFIER_DISPLAY={:?}: expected console or gui",
                        other
                    )
                    .into())
                }
            };
        }

        Ok(config)
    }
}
