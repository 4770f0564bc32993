mod function;
mod transform;

pub use function::FunctionApp;
pub use transform::TransformApp;

use crate::error::{AppError, Result};

fn parse_f64(name: &str, text: &str) -> Result<f64> {
    text.trim().parse().map_err(|_| AppError::Number {
        name: name.to_string(),
        text: text.trim().to_string(),
    })
}

fn parse_usize(name: &str, text: &str) -> Result<usize> {
    text.trim().parse().map_err(|_| AppError::Number {
        name: name.to_string(),
        text: text.trim().to_string(),
    })
}

fn entry_row(ui: &mut egui::Ui, label: &str, text: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.text_edit_singleline(text);
    });
}
