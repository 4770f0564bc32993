use transform_plotter::app::FunctionApp;
use transform_plotter::constants;
use transform_plotter::logging;

fn main() -> eframe::Result {
    logging::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(constants::FUNCTION_WINDOW_SIZE)
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Function Visualizer",
        options,
        Box::new(|_cc| Ok(Box::<FunctionApp>::default())),
    )
}
