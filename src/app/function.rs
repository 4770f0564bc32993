use std::collections::BTreeMap;

use crate::app::{entry_row, parse_usize};
use crate::constants;
use crate::curve;
use crate::error::{AppError, Result};
use crate::expr::Expr;
use crate::grid::Grid;

pub struct FunctionApp {
    expr_text: String,
    interval_text: String,
    samples_text: String,
    expr: Option<Expr>,
    parameters: BTreeMap<String, f64>,
    curve: Option<Vec<[f64; 2]>>,
    error: Option<String>,
}

impl Default for FunctionApp {
    fn default() -> Self {
        Self {
            expr_text: String::new(),
            interval_text: constants::DEFAULT_INTERVAL.to_string(),
            samples_text: constants::DEFAULT_CURVE_SAMPLES.to_string(),
            expr: None,
            parameters: BTreeMap::new(),
            curve: None,
            error: None,
        }
    }
}

impl eframe::App for FunctionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .inner_margin(20)
                    .fill(constants::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    entry_row(ui, "Expression in x:", &mut self.expr_text);
                    if ui.button("Apply").clicked() {
                        self.apply();
                    }

                    entry_row(ui, "Interval (min,max):", &mut self.interval_text);
                    entry_row(ui, "Sample points:", &mut self.samples_text);

                    if self.expr.is_some() {
                        ui.horizontal(|ui| {
                            for (name, value) in self.parameters.iter_mut() {
                                ui.add(
                                    egui::DragValue::new(value)
                                        .speed(0.1)
                                        .prefix(format!("{}: ", name)),
                                );
                            }
                            if ui.button("Plot").clicked() {
                                self.plot();
                            }
                        });
                    }

                    if let Some(error) = &self.error {
                        ui.colored_label(egui::Color32::LIGHT_RED, error);
                    }

                    if let Some(points) = &self.curve {
                        egui_plot::Plot::new("Function")
                            .legend(egui_plot::Legend::default())
                            .show(ui, |plot_ui| {
                                plot_ui.line(
                                    egui_plot::Line::new(egui_plot::PlotPoints::from(
                                        points.clone(),
                                    ))
                                    .name("f(x)")
                                    .color(constants::CURVE_COLOR),
                                );
                            });
                    }
                });
            });
    }
}

impl FunctionApp {
    /// Reparse the expression and rebuild one numeric field per free symbol
    /// other than `x`. Values reset to 1.0 on every apply.
    pub fn apply(&mut self) {
        match Expr::parse(self.expr_text.trim()) {
            Ok(expr) => {
                self.parameters = expr
                    .variables()
                    .into_iter()
                    .filter(|name| name != "x")
                    .map(|name| (name, 1.0))
                    .collect();
                self.expr = Some(expr);
                self.error = None;
            }
            Err(error) => {
                tracing::warn!(%error, "could not apply expression");
                self.error = Some(error.to_string());
            }
        }
    }

    pub fn plot(&mut self) {
        match self.sample_curve() {
            Ok(points) => {
                self.curve = Some(points);
                self.error = None;
            }
            Err(error) => {
                tracing::warn!(%error, "could not plot function");
                self.error = Some(error.to_string());
            }
        }
    }

    fn sample_curve(&self) -> Result<Vec<[f64; 2]>> {
        let expr = self.expr.as_ref().ok_or(AppError::MissingExpression)?;
        let (start, end) = parse_interval(&self.interval_text)?;
        let samples = parse_usize("sample points", &self.samples_text)?;
        let grid = Grid::new(start, end, samples)?;
        curve::sample(expr, &grid, &self.parameters)
    }
}

fn parse_interval(text: &str) -> Result<(f64, f64)> {
    let invalid = || AppError::Interval(text.trim().to_string());
    let mut parts = text.split(',');
    let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let start = start.trim().parse().map_err(|_| invalid())?;
    let end = end.trim().parse().map_err(|_| invalid())?;
    Ok((start, end))
}
