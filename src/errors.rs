// src/errors.rs
//! Error handling for the curve engine.
//! Every recoverable failure of the arithmetic is a `CurveError`; each variant
//! carries a severity so callers can decide how loudly to report it.
//! Broken postconditions inside the group law are not errors: they panic.

use rug::Integer;
use std::fmt;
use thiserror::Error;
use log::{error, warn};

use crate::curves::CurvePoint;
use crate::params::ParamsError;

/// Severity levels for error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Caller bug or malformed curve; the computation cannot continue
    High,
    /// Recoverable by the caller, e.g. a non-invertible denominator
    Medium,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorSeverity::High => write!(f, "HIGH"),
            ErrorSeverity::Medium => write!(f, "MEDIUM"),
        }
    }
}

/// Errors raised by the field and group arithmetic
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("Impossible inverse: {value} is divisible by {modulus}")]
    DivisionByZero {
        value: Integer,
        modulus: Integer,
    },

    #[error("Invalid input: {operand} operand {point} is not on the curve")]
    InvalidInput {
        operand: &'static str,
        point: CurvePoint,
    },

    #[error("Order search for {point} exceeded bound {bound}")]
    OrderSearchExhausted {
        point: CurvePoint,
        bound: Integer,
    },

    #[error("Invalid curve parameters: {0}")]
    InvalidParameters(#[from] ParamsError),
}

impl CurveError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CurveError::DivisionByZero { .. } => ErrorSeverity::Medium,
            CurveError::InvalidInput { .. } => ErrorSeverity::High,
            CurveError::OrderSearchExhausted { .. } => ErrorSeverity::High,
            CurveError::InvalidParameters(_) => ErrorSeverity::High,
        }
    }

    /// Log the error with its call site, at a level matching its severity
    pub fn log_with_context(&self, module: &str, function: &str, line: u32) {
        let log_message = format!(
            "[{}:{}:{}] [SEVERITY: {}] {}",
            module,
            function,
            line,
            self.severity(),
            self
        );

        match self.severity() {
            ErrorSeverity::High => error!("{}", log_message),
            ErrorSeverity::Medium => warn!("{}", log_message),
        }
    }
}

/// Extension trait that logs the error side of a `Result` and passes it on
pub trait LogOnError {
    fn log_on_error(self, module: &str, function: &str, line: u32) -> Self;
}

impl<T> LogOnError for Result<T, CurveError> {
    fn log_on_error(self, module: &str, function: &str, line: u32) -> Self {
        if let Err(ref error) = self {
            error.log_with_context(module, function, line);
        }
        self
    }
}
