use crate::classifier::pixel_tensor_encoder::PixelBuffer;

pub trait DeviceCamera: Send {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn capture_frame(&self) -> Result<PixelBuffer, Box<dyn std::error::Error + Send + Sync>>;
}
