use crate::classifier::pixel_tensor_encoder::PixelBuffer;
use crate::device_camera::resize::resize_image_to_pixel_buffer;
use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// A still image played back as a camera feed.
pub struct DeviceCameraImageFile {
    frame: PixelBuffer,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraImageFile {
    pub fn new(
        path: &str,
        width: u32,
        height: u32,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let image = image::open(path)?;
        Ok(Self::from_image(&image, width, height, logger))
    }

    pub fn from_image(
        image: &image::DynamicImage,
        width: u32,
        height: u32,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            frame: resize_image_to_pixel_buffer(image, width, height),
            logger: logger.with_namespace("camera").with_namespace("image_file"),
        }
    }
}

impl DeviceCamera for DeviceCameraImageFile {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "Serving {}x{} still frame",
            self.frame.width, self.frame.height
        ))?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Camera stopped")?;
        Ok(())
    }

    fn capture_frame(&self) -> Result<PixelBuffer, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.frame.clone())
    }
}
