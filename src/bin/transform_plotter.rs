use transform_plotter::app::TransformApp;
use transform_plotter::constants;
use transform_plotter::logging;

fn main() -> eframe::Result {
    logging::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(constants::TRANSFORM_WINDOW_SIZE)
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Integral Transform Visualizer",
        options,
        Box::new(|_cc| Ok(Box::<TransformApp>::default())),
    )
}
