mod parser;

use crate::special;
use num::Complex;
use std::collections::BTreeSet;
use std::fmt;

pub type Value = Complex<f64>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExprError {
    #[error("parse error at position {position}: {message}")]
    Parse { position: usize, message: String },

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("'{name}' expects {expected} argument(s), got {got}")]
    WrongArity {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("unbound variable '{0}'")]
    UnboundVariable(String),

    #[error("bessel order must be a non-negative integer, got {0}")]
    BesselOrder(f64),
}

#[derive(Debug, PartialEq, Clone, Copy, variant_count::VariantCount)]
pub enum UnaryFn {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Sqrt,
    Abs,
    Arg,
    Re,
    Im,
    Conj,
}

impl UnaryFn {
    pub const ALL: [Self; Self::VARIANT_COUNT] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Exp,
        Self::Ln,
        Self::Sqrt,
        Self::Abs,
        Self::Arg,
        Self::Re,
        Self::Im,
        Self::Conj,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UnaryFn::Sin => "sin",
            UnaryFn::Cos => "cos",
            UnaryFn::Tan => "tan",
            UnaryFn::Asin => "asin",
            UnaryFn::Acos => "acos",
            UnaryFn::Atan => "atan",
            UnaryFn::Sinh => "sinh",
            UnaryFn::Cosh => "cosh",
            UnaryFn::Tanh => "tanh",
            UnaryFn::Exp => "exp",
            UnaryFn::Ln => "ln",
            UnaryFn::Sqrt => "sqrt",
            UnaryFn::Abs => "abs",
            UnaryFn::Arg => "arg",
            UnaryFn::Re => "re",
            UnaryFn::Im => "im",
            UnaryFn::Conj => "conj",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        // sympy spells the natural logarithm "log"
        if name == "log" {
            return Some(UnaryFn::Ln);
        }
        UnaryFn::ALL.iter().find(|f| f.name() == name).copied()
    }

    pub fn apply(&self, z: Value) -> Value {
        match self {
            UnaryFn::Sin => z.sin(),
            UnaryFn::Cos => z.cos(),
            UnaryFn::Tan => z.tan(),
            UnaryFn::Asin => z.asin(),
            UnaryFn::Acos => z.acos(),
            UnaryFn::Atan => z.atan(),
            UnaryFn::Sinh => z.sinh(),
            UnaryFn::Cosh => z.cosh(),
            UnaryFn::Tanh => z.tanh(),
            UnaryFn::Exp => z.exp(),
            UnaryFn::Ln => z.ln(),
            UnaryFn::Sqrt => z.sqrt(),
            UnaryFn::Abs => Value::from(z.norm()),
            UnaryFn::Arg => Value::from(z.arg()),
            UnaryFn::Re => Value::from(z.re),
            UnaryFn::Im => Value::from(z.im),
            UnaryFn::Conj => z.conj(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(Value),
    Var(String),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Unary(UnaryFn, Box<Expr>),
    BesselJ(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn parse(input: &str) -> Result<Expr, ExprError> {
        parser::parse(input)
    }

    pub fn eval(&self, bindings: &[(&str, Value)]) -> Result<Value, ExprError> {
        match self {
            Expr::Const(value) => Ok(*value),
            Expr::Var(name) => bindings
                .iter()
                .find(|(bound, _)| *bound == name.as_str())
                .map(|(_, value)| *value)
                .ok_or_else(|| ExprError::UnboundVariable(name.clone())),
            Expr::Add(lhs, rhs) => Ok(lhs.eval(bindings)? + rhs.eval(bindings)?),
            Expr::Sub(lhs, rhs) => Ok(lhs.eval(bindings)? - rhs.eval(bindings)?),
            Expr::Mul(lhs, rhs) => Ok(lhs.eval(bindings)? * rhs.eval(bindings)?),
            Expr::Div(lhs, rhs) => Ok(lhs.eval(bindings)? / rhs.eval(bindings)?),
            Expr::Pow(base, exponent) => {
                Ok(pow(base.eval(bindings)?, exponent.eval(bindings)?))
            }
            Expr::Neg(inner) => Ok(-inner.eval(bindings)?),
            Expr::Unary(function, inner) => Ok(function.apply(inner.eval(bindings)?)),
            Expr::BesselJ(order, argument) => {
                let order = order.eval(bindings)?;
                let argument = argument.eval(bindings)?;
                let rounded = order.re.round();
                if order.im.abs() > 1e-9 || (order.re - rounded).abs() > 1e-9 || rounded < 0.0 {
                    return Err(ExprError::BesselOrder(order.re));
                }
                Ok(Value::from(special::bessel_j(rounded as u32, argument.re)))
            }
        }
    }

    /// Substitute a real constant for a symbol, leaving other symbols free.
    pub fn set_variable(&self, name: &str, value: f64) -> Expr {
        let subs = |inner: &Expr| Box::new(inner.set_variable(name, value));
        match self {
            Expr::Var(var) if var == name => Expr::Const(Value::from(value)),
            Expr::Const(_) | Expr::Var(_) => self.clone(),
            Expr::Add(lhs, rhs) => Expr::Add(subs(lhs), subs(rhs)),
            Expr::Sub(lhs, rhs) => Expr::Sub(subs(lhs), subs(rhs)),
            Expr::Mul(lhs, rhs) => Expr::Mul(subs(lhs), subs(rhs)),
            Expr::Div(lhs, rhs) => Expr::Div(subs(lhs), subs(rhs)),
            Expr::Pow(base, exponent) => Expr::Pow(subs(base), subs(exponent)),
            Expr::Neg(inner) => Expr::Neg(subs(inner)),
            Expr::Unary(function, inner) => Expr::Unary(*function, subs(inner)),
            Expr::BesselJ(order, argument) => Expr::BesselJ(subs(order), subs(argument)),
        }
    }

    /// Free symbols in sorted order.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut BTreeSet<String>) {
        match self {
            Expr::Const(_) => {}
            Expr::Var(name) => {
                names.insert(name.clone());
            }
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs)
            | Expr::BesselJ(lhs, rhs) => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
            Expr::Neg(inner) | Expr::Unary(_, inner) => inner.collect_variables(names),
        }
    }
}

/// Integer exponents go through `powi` so that e.g. `(-2)^2` stays exact.
fn pow(base: Value, exponent: Value) -> Value {
    if exponent.im == 0.0 && exponent.re.fract() == 0.0 && exponent.re.abs() <= 64.0 {
        base.powi(exponent.re as i32)
    } else {
        base.powc(exponent)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Const(value) => {
                if value.im == 0.0 {
                    write!(f, "{}", value.re)
                } else if value.re == 0.0 {
                    write!(f, "{}*I", value.im)
                } else {
                    write!(f, "({} + {}*I)", value.re, value.im)
                }
            }
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exponent) => write!(f, "({} ^ {})", base, exponent),
            Expr::Neg(inner) => write!(f, "(-{})", inner),
            Expr::Unary(function, inner) => write!(f, "{}({})", function.name(), inner),
            Expr::BesselJ(order, argument) => write!(f, "besselj({}, {})", order, argument),
        }
    }
}
