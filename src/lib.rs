#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::non_ascii_literal
)]

//! scicalc, the expression engine of a scientific calculator.
//!
//! This crate evaluates human-typed calculator input, embedded in strings.
//! The easiest way to use it is with a [`Session`](struct.Session.html),
//! which remembers the angle mode and the last answer between evaluations:
//!
//! ```
//! use scicalc::Session;
//!
//! let mut session = Session::new();
//! assert_eq!(session.evaluate("3 + 5 * 2"), Ok("13".into()));
//! assert_eq!(session.evaluate("Ans / 2"), Ok("6.5".into()));
//! ```
//!
//! Trigonometric functions follow the angle mode of the session, degrees by
//! default:
//!
//! ```
//! use scicalc::{AngleMode, Session};
//!
//! let mut session = Session::new();
//! assert_eq!(session.evaluate("sin(90)"), Ok("1".into()));
//!
//! session.set_angle_mode(AngleMode::Radians);
//! assert_eq!(session.compute("atan(0)"), Ok(Some(0.0)));
//! ```
//!
//! Failures are classified, and [`Error::user_message`](enum.Error.html)
//! gives the text to display:
//!
//! ```
//! use scicalc::{Error, Session};
//!
//! let mut session = Session::new();
//! assert_eq!(session.evaluate("10 / 0"), Err(Error::DivisionByZero));
//! assert_eq!(
//!     session.evaluate("log(0)").unwrap_err().user_message(),
//!     "Error: logarithm of a non-positive number"
//! );
//! ```
//!
//! # Language definition
//!
//! The language implemented by scicalc can contain the following elements:
//!
//! - float literal values: `12`, `0.45`, `.5`;
//! - left and right parenthesis;
//! - binary operators: `+`, `-`, `*` (or `×`), `/` (or `÷`) and `^` for
//!   exponentiation. A `-` where a value is expected is a negation,
//!   `+` is always binary;
//! - prefix functions: `sin`, `cos`, `tan`, `asin`, `acos`, `atan`, `ln`,
//!   `log` (base 10), `exp`, `√`/`sqrt`, `³√`/`cbrt`, `x²`/`sqr`,
//!   `x³`/`cube` and `1/x`/`recip`. Parenthesis around the argument are
//!   optional: `sin 30` and `sin(30)` are the same;
//! - postfix operators: `%` (divide by 100) and `!` (factorial);
//! - constants: `π`/`pi`, `e`, and `Ans`, the last answer.
//!
//! Names are case-insensitive, glyphs must match exactly. A number followed
//! by a constant, a function or a parenthesis is multiplied with it, as is a
//! closing parenthesis followed by a value: `2π`, `3(1 + 1)`, `(1 + 1)2`.
//!
//! # Technical details
//!
//! scicalc tokenizes the input with a longest-match lexer, converts it to
//! postfix order with the Shunting-Yard algorithm, and runs the result on a
//! small stack machine. It works only with `f64` data.

#[macro_use]
extern crate lazy_static;

mod error;
mod lexer;
mod machine;
mod registry;
mod session;
mod shunting;
mod token;

pub use error::Error;
pub use lexer::{tokenize, Lexer};
pub use machine::Machine;
pub use registry::{Registry, Symbol, REGISTRY};
pub use session::{evaluate, format_value, AngleMode, ParseAngleModeError, Session};
pub use shunting::to_postfix;
pub use token::{Associativity, Constant, Op, Token};
