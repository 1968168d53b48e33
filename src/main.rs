use app::App;
use classifier::label_list::LabelList;
use classifier::pipeline::ClassificationPipeline;
use config::{Config, DisplayKind};
use device_camera::{
    impl_fake::DeviceCameraFake, impl_image_file::DeviceCameraImageFile, interface::DeviceCamera,
};
use device_display::{
    impl_console::DeviceDisplayConsole,
    impl_gui::{DeviceDisplayGui, ResultWindow},
    interface::DeviceDisplay,
};
use inference_engine::{
    impl_fake::InferenceEngineFake, impl_tract_onnx::InferenceEngineTractOnnx,
    interface::InferenceEngine, model_source::load_model,
};
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;

mod app;
mod classifier;
mod config;
mod device_camera;
mod device_display;
mod inference_engine;
mod library;

const DEMO_LABELS: &str = "dog\ncat\nperson\ncar\nchair\ntable\nbird\ntree\nbicycle\nbook";

fn load_engine(
    config: &Config,
    num_labels: usize,
    logger: &Arc<dyn Logger + Send + Sync>,
) -> Result<Box<dyn InferenceEngine>, Box<dyn std::error::Error + Send + Sync>> {
    match &config.model_path {
        Some(path) => {
            let model = load_model(path)?;
            let engine = InferenceEngineTractOnnx::from_bytes(
                &model,
                config.image_width,
                config.image_height,
                num_labels,
                logger.clone(),
            )?;
            Ok(Box::new(engine))
        }
        None => {
            logger.info("No model configured, using fake inference engine")?;
            Ok(Box::new(InferenceEngineFake::random(num_labels)))
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let labels = match &config.label_path {
        Some(path) => LabelList::load(path)?,
        None => LabelList::parse(DEMO_LABELS),
    };

    let mut pipeline = ClassificationPipeline::new(&config, labels, logger.clone())?;

    // A missing or broken model leaves the pipeline uninitialized; frames are
    // still shown, with the uninitialized notice instead of labels.
    let num_labels = pipeline.num_labels();
    match load_engine(&config, num_labels, &logger) {
        Ok(engine) => {
            if let Err(e) = pipeline.bind(engine) {
                logger.error(&format!("Failed to bind inference engine: {}", e))?;
            }
        }
        Err(e) => logger.error(&format!("Failed to load inference engine: {}", e))?,
    }

    let camera: Box<dyn DeviceCamera> = match &config.image_path {
        Some(path) => Box::new(DeviceCameraImageFile::new(
            path,
            config.image_width,
            config.image_height,
            logger.clone(),
        )?),
        None => Box::new(DeviceCameraFake::new(
            config.image_width,
            config.image_height,
            logger.clone(),
        )),
    };

    match config.display {
        DisplayKind::Console => {
            let display: Box<dyn DeviceDisplay> = Box::new(DeviceDisplayConsole::new());
            let mut app = App::new(config, logger, camera, display, pipeline);
            app.start()
        }
        DisplayKind::Gui => {
            let display = DeviceDisplayGui::new();
            let window = display.window();
            let app = App::new(config, logger.clone(), camera, Box::new(display), pipeline);
            run_with_window(app, window, &logger)
        }
    }
}

/// The window takes the main thread; frames are classified on a worker until
/// the window closes or the loop ends on its own.
fn run_with_window(
    mut app: App,
    window: ResultWindow,
    logger: &Arc<dyn Logger + Send + Sync>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let stop = app.stop_handle();
    let worker = thread::spawn(move || app.start());

    let window_result = window.run();
    if let Err(e) = &window_result {
        logger.error(&e.to_string())?;
    }

    stop.store(true, Ordering::SeqCst);
    let loop_result = worker
        .join()
        .map_err(|_| "frame loop panicked".to_string())?;

    loop_result?;
    window_result
}
