use crate::classifier::pipeline::ClassificationPipeline;
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct App {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    camera: Box<dyn DeviceCamera>,
    display: Box<dyn DeviceDisplay>,
    pipeline: ClassificationPipeline,
    stop_requested: Arc<AtomicBool>,
}

impl App {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        camera: Box<dyn DeviceCamera>,
        display: Box<dyn DeviceDisplay>,
        pipeline: ClassificationPipeline,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("app"),
            camera,
            display,
            pipeline,
            stop_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Setting the returned flag ends `start` after the current frame.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.stop_requested.clone()
    }

    /// Runs frames until `max_frames` is reached or a stop is requested,
    /// then releases the engine and stops the camera.
    pub fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.camera.start()?;
        self.display.init()?;

        let mut frames = 0;
        let result = loop {
            if self.stop_requested.load(Ordering::SeqCst)
                || self.config.max_frames.is_some_and(|max| frames >= max)
            {
                break Ok(());
            }
            if let Err(e) = self.step() {
                break Err(e);
            }
            frames += 1;

            std::thread::sleep(self.config.tick_rate);
        };

        self.stop()?;
        result
    }

    /// One capture, classify, show cycle. Classification errors are shown
    /// and logged; only device failures end the loop.
    pub fn step(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let frame = self.camera.capture_frame()?;

        let text = match self.pipeline.classify_text(&frame) {
            Ok(text) => text,
            Err(e) => {
                self.logger.error(&format!("Failed to classify frame: {}", e))?;
                format!("Error: {}", e)
            }
        };

        self.display.show(&text)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn pipeline_status(&self) -> crate::classifier::pipeline::PipelineStatus {
        self.pipeline.status()
    }

    pub fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.pipeline.close();
        self.display.clear()?;
        self.camera.stop()?;
        self.logger.info("Stopped")?;
        Ok(())
    }
}
