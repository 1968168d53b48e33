use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Remembers every text shown, for tests.
pub struct DeviceDisplayFake {
    shown: Arc<Mutex<Vec<String>>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            shown: Arc::new(Mutex::new(Vec::new())),
            logger: logger.with_namespace("display").with_namespace("fake"),
        }
    }

    /// Handle that stays readable after the display is boxed.
    pub fn shown(&self) -> Arc<Mutex<Vec<String>>> {
        self.shown.clone()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::init()")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::clear()")?;
        Ok(())
    }

    fn show(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger
            .info(&format!("DeviceDisplayFake::show({:?})", text))?;
        self.shown
            .lock()
            .map_err(|e| e.to_string())?
            .push(text.to_string());
        Ok(())
    }
}
