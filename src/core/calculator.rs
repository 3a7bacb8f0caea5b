/// Four-function calculator behind the `calculator` command
///
/// Operands are `f64`; results are formatted the same way every time so the
/// bot never answers `12` for one sum and `12.0` for another.

use crate::error::CommandError;
use std::str::FromStr;

/// Integral results below this magnitude keep a trailing `.0`
const PLAIN_INTEGRAL_LIMIT: f64 = 1e16;

/// Supported operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl FromStr for Operator {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            _ => Err(CommandError::UnknownOperator),
        }
    }
}

impl Operator {
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CommandError> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Subtract => Ok(a - b),
            Operator::Multiply => Ok(a * b),
            Operator::Divide if b == 0.0 => Err(CommandError::DivideByZero),
            Operator::Divide => Ok(a / b),
        }
    }
}

/// Evaluate `<a> <op> <b>`.
///
/// Checks run in this order: token count, operands, operator.
pub fn evaluate(args: &[&str]) -> Result<f64, CommandError> {
    let [a, op, b] = args else {
        return Err(CommandError::CalculatorFormat);
    };

    let (a, b) = match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(a), Ok(b)) => (a, b),
        _ => return Err(CommandError::InvalidNumbers),
    };

    op.parse::<Operator>()?.apply(a, b)
}

/// Render a result: `12.0`, `2.5`, `0.3333333333333333`, `Infinity`
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if value.fract() == 0.0 && value.abs() < PLAIN_INTEGRAL_LIMIT {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
