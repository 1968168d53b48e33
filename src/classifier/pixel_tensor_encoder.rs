use crate::classifier::error::ClassifierError;

pub const BATCH_SIZE: usize = 1;
pub const CHANNELS: usize = 3;

/// A frame of packed `0xAARRGGBB` pixels in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    #[cfg(test)]
    pub fn filled(width: u32, height: u32, pixel: u32) -> Self {
        Self::new(width, height, vec![pixel; width as usize * height as usize])
    }
}

/// Flat NHWC float tensor, `[1, height, width, 3]`.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTensor {
    data: Vec<f32>,
    shape: [usize; 4],
}

impl InputTensor {
    fn zeroed(width: u32, height: u32) -> Self {
        let shape = [BATCH_SIZE, height as usize, width as usize, CHANNELS];
        Self {
            data: vec![0.0; shape.iter().product()],
            shape,
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn shape(&self) -> [usize; 4] {
        self.shape
    }
}

pub struct PixelTensorEncoder {
    width: u32,
    height: u32,
    mean: f32,
    std: f32,
    tensor: InputTensor,
}

impl PixelTensorEncoder {
    pub fn new(width: u32, height: u32, mean: f32, std: f32) -> Result<Self, ClassifierError> {
        if width == 0 || height == 0 {
            return Err(ClassifierError::InvalidConfig(format!(
                "input size must be non-zero, got {}x{}",
                width, height
            )));
        }
        if !(std.is_finite() && std != 0.0) {
            return Err(ClassifierError::InvalidConfig(format!(
                "image std must be finite and non-zero, got {}",
                std
            )));
        }

        Ok(Self {
            width,
            height,
            mean,
            std,
            tensor: InputTensor::zeroed(width, height),
        })
    }

    /// Overwrites the owned tensor with the normalized R,G,B channels of `frame`.
    /// A frame of the wrong size leaves the tensor untouched.
    pub fn encode(&mut self, frame: &PixelBuffer) -> Result<&InputTensor, ClassifierError> {
        let expected = self.width as usize * self.height as usize;
        if frame.width != self.width
            || frame.height != self.height
            || frame.pixels.len() != expected
        {
            return Err(ClassifierError::InvalidInput {
                expected_width: self.width,
                expected_height: self.height,
                expected,
                width: frame.width,
                height: frame.height,
                actual: frame.pixels.len(),
            });
        }

        let (mean, std) = (self.mean, self.std);
        let normalize = |channel: u32| ((channel & 0xFF) as f32 - mean) / std;

        for (out, &pixel) in self
            .tensor
            .data
            .chunks_exact_mut(CHANNELS)
            .zip(frame.pixels.iter())
        {
            out[0] = normalize(pixel >> 16);
            out[1] = normalize(pixel >> 8);
            out[2] = normalize(pixel);
        }

        Ok(&self.tensor)
    }

    #[cfg(test)]
    fn tensor(&self) -> &InputTensor {
        &self.tensor
    }
}
