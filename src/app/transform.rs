use crate::app::{entry_row, parse_f64, parse_usize};
use crate::constants;
use crate::error::Result;
use crate::expr::Expr;
use crate::grid::Grid;
use crate::transform::{self, TransformResult, TransformSpec};

pub struct TransformApp {
    source_text: String,
    kernel_text: String,
    alpha_text: String,
    x_start_text: String,
    x_end_text: String,
    x_samples_text: String,
    ksi_start_text: String,
    ksi_end_text: String,
    ksi_samples_text: String,
    result: Option<TransformResult>,
    summary: String,
    error: Option<String>,
}

impl Default for TransformApp {
    fn default() -> Self {
        let mut app = Self {
            source_text: constants::DEFAULT_SOURCE.to_string(),
            kernel_text: constants::DEFAULT_KERNEL.to_string(),
            alpha_text: constants::DEFAULT_ALPHA.to_string(),
            x_start_text: constants::DEFAULT_X_START.to_string(),
            x_end_text: constants::DEFAULT_X_END.to_string(),
            x_samples_text: constants::DEFAULT_X_SAMPLES.to_string(),
            ksi_start_text: constants::DEFAULT_KSI_START.to_string(),
            ksi_end_text: constants::DEFAULT_KSI_END.to_string(),
            ksi_samples_text: constants::DEFAULT_KSI_SAMPLES.to_string(),
            result: None,
            summary: String::new(),
            error: None,
        };
        app.recompute();
        app
    }
}

impl eframe::App for TransformApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .inner_margin(20)
                    .fill(constants::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width(380.0);
                        entry_row(ui, "f(x):", &mut self.source_text);
                        entry_row(ui, "K(x, ksi):", &mut self.kernel_text);
                        entry_row(ui, "alpha:", &mut self.alpha_text);
                        entry_row(ui, "a:", &mut self.x_start_text);
                        entry_row(ui, "b:", &mut self.x_end_text);
                        entry_row(ui, "n_x:", &mut self.x_samples_text);
                        entry_row(ui, "p:", &mut self.ksi_start_text);
                        entry_row(ui, "q:", &mut self.ksi_end_text);
                        entry_row(ui, "m_ksi:", &mut self.ksi_samples_text);

                        if ui.button("Update plots").clicked() {
                            self.recompute();
                        }

                        if let Some(error) = &self.error {
                            ui.colored_label(egui::Color32::LIGHT_RED, error);
                        }
                    });

                    if let Some(result) = &self.result {
                        ui.vertical(|ui| {
                            ui.label(&self.summary);
                            egui_plot::Plot::new("Transform")
                                .legend(egui_plot::Legend::default())
                                .show(ui, |plot_ui| {
                                    plot_ui.line(
                                        egui_plot::Line::new(egui_plot::PlotPoints::from(
                                            result.magnitude_points(),
                                        ))
                                        .name("Abs")
                                        .color(constants::MAGNITUDE_COLOR),
                                    );
                                    plot_ui.line(
                                        egui_plot::Line::new(egui_plot::PlotPoints::from(
                                            result.phase_points(),
                                        ))
                                        .name("Arg")
                                        .color(constants::PHASE_COLOR),
                                    );
                                });
                        });
                    }
                });
            });
    }
}

impl TransformApp {
    fn build_spec(&self) -> Result<TransformSpec> {
        let alpha = parse_f64("alpha", &self.alpha_text)?;
        let x_start = parse_f64("a", &self.x_start_text)?;
        let x_end = parse_f64("b", &self.x_end_text)?;
        let x_samples = parse_usize("n_x", &self.x_samples_text)?;
        let ksi_start = parse_f64("p", &self.ksi_start_text)?;
        let ksi_end = parse_f64("q", &self.ksi_end_text)?;
        let ksi_samples = parse_usize("m_ksi", &self.ksi_samples_text)?;

        let source = Expr::parse(self.source_text.trim())?;
        let kernel = Expr::parse(self.kernel_text.trim())?.set_variable("alpha", alpha);

        Ok(TransformSpec {
            source,
            kernel,
            x_grid: Grid::new(x_start, x_end, x_samples)?,
            ksi_grid: Grid::new(ksi_start, ksi_end, ksi_samples)?,
        })
    }

    /// Recompute on demand; a failure keeps the previous plot and shows the
    /// error inline.
    pub fn recompute(&mut self) {
        match self.build_spec().and_then(|spec| transform::compute(&spec)) {
            Ok(result) => {
                self.summary = format!(
                    "Parameters: alpha={}, a={}, b={}, p={}, q={}",
                    self.alpha_text.trim(),
                    self.x_start_text.trim(),
                    self.x_end_text.trim(),
                    self.ksi_start_text.trim(),
                    self.ksi_end_text.trim()
                );
                self.result = Some(result);
                self.error = None;
            }
            Err(error) => {
                tracing::warn!(%error, "transform update failed");
                self.error = Some(error.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use more_asserts::assert_gt;

    use super::*;

    fn small_app() -> TransformApp {
        let mut app = TransformApp {
            source_text: "1".to_string(),
            kernel_text: "x*ksi".to_string(),
            alpha_text: "1.0".to_string(),
            x_start_text: "0.0".to_string(),
            x_end_text: "1.0".to_string(),
            x_samples_text: "50".to_string(),
            ksi_start_text: "0.0".to_string(),
            ksi_end_text: "2.0".to_string(),
            ksi_samples_text: "40".to_string(),
            result: None,
            summary: String::new(),
            error: None,
        };
        app.recompute();
        app
    }

    #[test]
    fn startup_computes_the_default_transform() {
        let app = small_app();
        assert!(app.error.is_none());
        let result = app.result.expect("initial result");
        assert_eq!(result.values.len(), 40);
    }

    #[test]
    fn invalid_expression_shows_a_message_and_keeps_the_plot() {
        let mut app = small_app();
        app.kernel_text = "x*(".to_string();
        app.recompute();

        let error = app.error.clone().expect("error message");
        assert!(error.contains("parse error"));
        assert!(app.result.is_some());
    }

    #[test]
    fn invalid_number_shows_a_message() {
        let mut app = small_app();
        app.alpha_text = "one".to_string();
        app.recompute();
        assert_eq!(
            app.error.as_deref(),
            Some("invalid value for alpha: 'one'")
        );
    }

    #[test]
    fn changing_alpha_changes_the_output() {
        let mut app = small_app();
        app.kernel_text = "alpha*x*ksi".to_string();
        app.recompute();
        let before = app.result.as_ref().expect("result").magnitude_points();

        app.alpha_text = "2.0".to_string();
        app.recompute();
        let after = app.result.as_ref().expect("result").magnitude_points();

        assert_eq!(before.len(), after.len());
        assert_gt!(after[39][1], before[39][1]);
    }

    #[test]
    fn unbound_kernel_symbol_is_reported() {
        let mut app = small_app();
        app.kernel_text = "beta*x".to_string();
        app.recompute();
        assert_eq!(app.error.as_deref(), Some("unbound variable 'beta'"));
    }
}
