use crate::classifier::pixel_tensor_encoder::PixelBuffer;
use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use rand::Rng;
use std::sync::Arc;

/// Serves frames of random noise at the model's input size.
pub struct DeviceCameraFake {
    width: u32,
    height: u32,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(width: u32, height: u32, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            width,
            height,
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Camera started")?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Camera stopped")?;
        Ok(())
    }

    fn capture_frame(&self) -> Result<PixelBuffer, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = rand::rng();
        let pixels = (0..self.width as usize * self.height as usize)
            .map(|_| 0xFF00_0000 | (rng.random::<u32>() & 0x00FF_FFFF))
            .collect();
        self.logger.debug("Frame captured")?;
        Ok(PixelBuffer::new(self.width, self.height, pixels))
    }
}
