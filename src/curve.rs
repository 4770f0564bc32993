use std::collections::BTreeMap;

use crate::error::Result;
use crate::expr::{Expr, Value};
use crate::grid::Grid;

/// Sample a single-variable expression over a grid, with every extra symbol
/// bound to its current parameter value. The plotted ordinate is the real
/// part.
pub fn sample(expr: &Expr, grid: &Grid, parameters: &BTreeMap<String, f64>) -> Result<Vec<[f64; 2]>> {
    let mut bindings: Vec<(&str, Value)> = parameters
        .iter()
        .map(|(name, &value)| (name.as_str(), Value::from(value)))
        .collect();
    bindings.push(("x", Value::from(0.0)));
    let x_slot = bindings.len() - 1;

    let mut points = Vec::with_capacity(grid.num());
    for x in grid.points() {
        bindings[x_slot].1 = Value::from(x);
        let y = expr.eval(&bindings)?;
        points.push([x, y.re]);
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use crate::error::AppError;
    use crate::expr::ExprError;

    use super::*;

    #[test]
    fn samples_expected_length_and_values() {
        let expr = Expr::parse("x^2").unwrap();
        let grid = Grid::new(0.0, 2.0, 3).unwrap();
        let points = sample(&expr, &grid, &BTreeMap::new()).unwrap();
        assert_eq!(points.len(), 3);
        assert_approx_eq!(points[0][1], 0.0);
        assert_approx_eq!(points[1][1], 1.0);
        assert_approx_eq!(points[2][1], 4.0);
    }

    #[test]
    fn parameter_values_change_the_curve() {
        let expr = Expr::parse("k*x").unwrap();
        let grid = Grid::new(0.0, 1.0, 10).unwrap();

        let slope_one = sample(
            &expr,
            &grid,
            &BTreeMap::from([("k".to_string(), 1.0)]),
        )
        .unwrap();
        let slope_two = sample(
            &expr,
            &grid,
            &BTreeMap::from([("k".to_string(), 2.0)]),
        )
        .unwrap();

        assert_approx_eq!(slope_one[9][1], 1.0);
        assert_approx_eq!(slope_two[9][1], 2.0);
    }

    #[test]
    fn sampling_is_deterministic() {
        let expr = Expr::parse("sin(a*x) + b").unwrap();
        let grid = Grid::new(-1.0, 1.0, 50).unwrap();
        let parameters = BTreeMap::from([("a".to_string(), 2.0), ("b".to_string(), 0.5)]);
        assert_eq!(
            sample(&expr, &grid, &parameters).unwrap(),
            sample(&expr, &grid, &parameters).unwrap()
        );
    }

    #[test]
    fn missing_parameter_is_an_error() {
        let expr = Expr::parse("k*x").unwrap();
        let grid = Grid::new(0.0, 1.0, 10).unwrap();
        assert_eq!(
            sample(&expr, &grid, &BTreeMap::new()).unwrap_err(),
            AppError::Expr(ExprError::UnboundVariable("k".to_string()))
        );
    }
}
