use nalgebra::{DMatrix, DVector};
use num::Complex;

use crate::error::Result;
use crate::expr::{Expr, Value};
use crate::grid::Grid;

pub struct TransformSpec {
    pub source: Expr,
    pub kernel: Expr,
    pub x_grid: Grid,
    pub ksi_grid: Grid,
}

#[derive(Debug)]
pub struct TransformResult {
    pub ksi: Vec<f64>,
    pub values: DVector<Complex<f64>>,
}

impl TransformResult {
    pub fn magnitude_points(&self) -> Vec<[f64; 2]> {
        self.ksi
            .iter()
            .zip(self.values.iter())
            .map(|(&ksi, value)| [ksi, value.norm()])
            .collect()
    }

    pub fn phase_points(&self) -> Vec<[f64; 2]> {
        self.ksi
            .iter()
            .zip(self.values.iter())
            .map(|(&ksi, value)| [ksi, value.arg()])
            .collect()
    }
}

/// Discretize `F(ksi) = ∫ K(x, ksi) f(x) dx` over the grids: sample the
/// source, build the kernel matrix and contract, scaled by the x step.
pub fn compute(spec: &TransformSpec) -> Result<TransformResult> {
    let x = spec.x_grid.points();
    let ksi = spec.ksi_grid.points();
    let step = spec.x_grid.step();

    let mut source_values = Vec::with_capacity(x.len());
    for &x_j in &x {
        source_values.push(spec.source.eval(&[("x", Value::from(x_j))])?);
    }
    let source = DVector::from_vec(source_values);

    let mut kernel_values = Vec::with_capacity(ksi.len() * x.len());
    for &ksi_i in &ksi {
        for &x_j in &x {
            kernel_values.push(
                spec.kernel
                    .eval(&[("x", Value::from(x_j)), ("ksi", Value::from(ksi_i))])?,
            );
        }
    }
    let kernel = DMatrix::from_row_iterator(ksi.len(), x.len(), kernel_values);

    let values = kernel * source * Complex::from(step);
    tracing::debug!(n_x = x.len(), m_ksi = ksi.len(), "transform computed");

    Ok(TransformResult { ksi, values })
}
