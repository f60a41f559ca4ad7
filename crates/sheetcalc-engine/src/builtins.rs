//! Built-in spreadsheet functions.
//!
//! Every function is variadic over numbers. Calling one with no arguments
//! yields 0.

use std::fmt;

/// A built-in aggregate function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    Sum,
    Avg,
    Max,
    Min,
}

impl Function {
    pub const ALL: [Function; 4] = [Function::Sum, Function::Avg, Function::Max, Function::Min];

    /// Look up a function by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Function> {
        Function::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sum => "SUM",
            Function::Avg => "AVG",
            Function::Max => "MAX",
            Function::Min => "MIN",
        }
    }

    pub fn apply(self, args: &[f64]) -> f64 {
        if args.is_empty() {
            return 0.0;
        }
        match self {
            Function::Sum => sum(args),
            Function::Avg => sum(args) / args.len() as f64,
            Function::Max => args.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Function::Min => args.iter().copied().fold(f64::INFINITY, f64::min),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn sum(args: &[f64]) -> f64 {
    args.iter().sum()
}
