use thiserror::Error;

use crate::expr::ExprError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error(transparent)]
    Expr(#[from] ExprError),

    #[error("invalid grid: {0}")]
    Grid(String),

    #[error("invalid value for {name}: '{text}'")]
    Number { name: String, text: String },

    #[error("invalid interval '{0}': expected 'min,max'")]
    Interval(String),

    #[error("apply an expression before plotting")]
    MissingExpression,
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expr_errors_pass_through_unchanged() {
        let parse_error = ExprError::UnboundVariable("y".to_string());
        let wrapped = AppError::from(parse_error.clone());
        assert_eq!(wrapped.to_string(), parse_error.to_string());
    }
}
