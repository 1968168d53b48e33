use crate::device_display::interface::DeviceDisplay;
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// The egui window. winit only drives event loops from the main thread, so
/// `run` blocks the caller and the frame loop has to live elsewhere.
#[derive(Clone)]
pub struct ResultWindow {
    text: Arc<Mutex<String>>,
}

impl ResultWindow {
    pub fn text(&self) -> String {
        match self.text.lock() {
            Ok(text) => text.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Opens the window and returns once it is closed.
    pub fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([400.0, 240.0])
                .with_resizable(false),
            ..Default::default()
        };

        eframe::run_native(
            "Frame Classifier",
            options,
            Box::new(|_cc| Box::new(self)),
        )
        .map_err(|e| format!("result window failed: {}", e))?;
        Ok(())
    }
}

impl eframe::App for ResultWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let text = self.text();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);

                let rect = ui.available_rect_before_wrap();
                ui.painter()
                    .rect_filled(rect, 0.0, egui::Color32::from_rgb(30, 30, 30));
                ui.painter().rect_stroke(
                    rect,
                    0.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(100, 100, 100)),
                );

                for line in text.lines() {
                    ui.label(
                        egui::RichText::new(line)
                            .monospace()
                            .color(egui::Color32::WHITE)
                            .size(20.0),
                    );
                }
            });
        });

        // Frames arrive from the classification loop, not from input events.
        ctx.request_repaint_after(std::time::Duration::from_millis(50));
    }
}

/// Display half handed to the frame loop; `window()` is run on the main thread.
pub struct DeviceDisplayGui {
    text: Arc<Mutex<String>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            text: Arc::new(Mutex::new(String::new())),
        }
    }

    pub fn window(&self) -> ResultWindow {
        ResultWindow {
            text: self.text.clone(),
        }
    }

    fn set_text(&self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut current = self.text.lock().map_err(|e| e.to_string())?;
        *current = text.to_string();
        Ok(())
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.set_text("Starting...")
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.set_text("")
    }

    fn show(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.set_text(text)
    }
}
