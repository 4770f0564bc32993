use crate::error::{AppError, Result};

/// `num` uniformly spaced samples with both endpoints included.
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as f64;
            (0..num).map(|i| start + step * i as f64).collect()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    start: f64,
    end: f64,
    num: usize,
}

impl Grid {
    pub fn new(start: f64, end: f64, num: usize) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(AppError::Grid(format!(
                "bounds must be finite, got [{}, {}]",
                start, end
            )));
        }
        if end <= start {
            return Err(AppError::Grid(format!(
                "upper bound must exceed lower bound, got [{}, {}]",
                start, end
            )));
        }
        if num < 2 {
            return Err(AppError::Grid(format!(
                "need at least 2 sample points, got {}",
                num
            )));
        }
        Ok(Self { start, end, num })
    }

    pub fn num(&self) -> usize {
        self.num
    }

    pub fn points(&self) -> Vec<f64> {
        linspace(self.start, self.end, self.num)
    }

    /// Quadrature weight: the interval length over the sample count.
    pub fn step(&self) -> f64 {
        (self.end - self.start) / self.num as f64
    }
}
