use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the scicalc crate
///
/// Blank input is not an error: it evaluates to an empty value instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A fragment of the input is not a number, operator, function or
    /// constant
    TokenError(String),
    /// A fragment looked numeric but is not a valid literal
    ParseError(String),
    /// A `)` without its `(`, or a `(` that is never closed
    ParenMismatch,
    /// An operator found fewer operands on the stack than it consumes
    StackUnderflow,
    /// Division by an operand exactly equal to zero
    DivisionByZero,
    /// Operand outside of the real domain of a function
    DomainError(String),
    /// Values left on the stack once the whole expression was consumed. The
    /// payload counts the extra values.
    StackExtraValues(usize),
}

impl Error {
    /// The text a front end should display for this error.
    ///
    /// Only division by zero and domain errors carry a specific message,
    /// everything else is reported as a generic failure.
    ///
    /// ```
    /// # use scicalc::Error;
    /// assert_eq!(Error::DivisionByZero.user_message(), "Division by zero");
    /// assert_eq!(Error::StackUnderflow.user_message(), "Error");
    /// ```
    #[must_use]
    pub fn user_message(&self) -> String {
        match *self {
            Self::DivisionByZero => "Division by zero".into(),
            Self::DomainError(ref cause) => format!("Error: {}", cause),
            _ => "Error".into(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::TokenError(ref fragment) => {
                write!(fmt, "TokenError: unrecognized input '{}'", fragment)
            }
            Self::ParseError(ref literal) => {
                write!(fmt, "ParseError: invalid number '{}'", literal)
            }
            Self::ParenMismatch => write!(fmt, "ParenMismatch: mismatched parenthesis"),
            Self::StackUnderflow => write!(fmt, "StackUnderflow: missing operand"),
            Self::DivisionByZero => write!(fmt, "DivisionByZero: division by zero"),
            Self::DomainError(ref cause) => write!(fmt, "DomainError: {}", cause),
            Self::StackExtraValues(count) => {
                write!(fmt, "StackExtraValues: {} unused value(s)", count)
            }
        }
    }
}

impl error::Error for Error {}
