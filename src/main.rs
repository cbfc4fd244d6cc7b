use mandelbrot_viewer::{ViewerApp, ViewerConfig};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ViewerConfig::default();
    let native_options = config.native_options();
    let title = config.title.clone();

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            let app = ViewerApp::new(cc, &config).inspect_err(|e| log::error!("{e}"))?;
            Ok(Box::new(app))
        }),
    )
}
