use crate::error::Error;
use crate::session::AngleMode;
use crate::token::{Constant, Op, Token};

/// Stack machine executing a postfix token sequence.
///
/// The machine only reads the angle mode and the last answer, the caller
/// decides what to do with the result.
#[derive(Debug, Clone)]
pub struct Machine {
    stack: Vec<f64>,
    angle_mode: AngleMode,
    last_answer: f64,
}

impl Machine {
    pub fn new(angle_mode: AngleMode, last_answer: f64) -> Self {
        Self {
            stack: Vec::new(),
            angle_mode,
            last_answer,
        }
    }

    /// Execute `postfix` and return the single value it leaves on the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scicalc::{AngleMode, Machine, Op, Token};
    ///
    /// let postfix = [Token::Number(6.0), Token::Number(7.0), Token::Operator(Op::Mul)];
    /// assert_eq!(Machine::new(AngleMode::Degrees, 0.0).run(&postfix), Ok(42.0));
    /// ```
    pub fn run(mut self, postfix: &[Token]) -> Result<f64, Error> {
        self.stack.reserve(postfix.len());
        for &token in postfix {
            match token {
                Token::Number(value) => self.stack.push(value),
                Token::Constant(constant) => {
                    let value = self.constant(constant);
                    self.stack.push(value);
                }
                Token::Operator(op) | Token::Function(op) => {
                    let value = self.apply(op)?;
                    self.stack.push(value);
                }
                // the shunting-yard never outputs parenthesis
                Token::LParen | Token::RParen => return Err(Error::ParenMismatch),
            }
        }

        match self.stack.len() {
            0 => Err(Error::StackUnderflow),
            1 => self.pop(),
            extra => Err(Error::StackExtraValues(extra - 1)),
        }
    }

    fn constant(&self, constant: Constant) -> f64 {
        match constant {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
            Constant::Ans => self.last_answer,
        }
    }

    fn pop(&mut self) -> Result<f64, Error> {
        self.stack.pop().ok_or(Error::StackUnderflow)
    }

    /// Pop the operands of a binary operator, as `(left, right)`
    fn pop_pair(&mut self) -> Result<(f64, f64), Error> {
        let right = self.pop()?;
        let left = self.pop()?;
        Ok((left, right))
    }

    fn apply(&mut self, op: Op) -> Result<f64, Error> {
        let value = match op {
            Op::Plus => {
                let (a, b) = self.pop_pair()?;
                a + b
            }
            Op::Minus => {
                let (a, b) = self.pop_pair()?;
                a - b
            }
            Op::Mul => {
                let (a, b) = self.pop_pair()?;
                a * b
            }
            Op::Div => {
                let (a, b) = self.pop_pair()?;
                if b == 0.0 {
                    return Err(Error::DivisionByZero);
                }
                a / b
            }
            Op::Pow => {
                let (a, b) = self.pop_pair()?;
                power(a, b)?
            }
            Op::Neg => -self.pop()?,
            Op::Square => {
                let x = self.pop()?;
                x * x
            }
            Op::Cube => {
                let x = self.pop()?;
                x * x * x
            }
            Op::Sqrt => {
                let x = self.pop()?;
                if x < 0.0 {
                    return Err(domain("square root of a negative number"));
                }
                x.sqrt()
            }
            Op::Cbrt => libm::cbrt(self.pop()?),
            Op::Recip => {
                let x = self.pop()?;
                if x == 0.0 {
                    return Err(domain("reciprocal of zero"));
                }
                1.0 / x
            }
            Op::Percent => self.pop()? / 100.0,
            Op::Factorial => factorial(self.pop()?)?,
            Op::Sin => {
                let x = self.pop()?;
                self.angle_mode.to_radians(x).sin()
            }
            Op::Cos => {
                let x = self.pop()?;
                self.angle_mode.to_radians(x).cos()
            }
            Op::Tan => {
                let x = self.pop()?;
                self.angle_mode.to_radians(x).tan()
            }
            Op::Asin => {
                let x = unit_interval(self.pop()?, "asin")?;
                self.angle_mode.from_radians(x.asin())
            }
            Op::Acos => {
                let x = unit_interval(self.pop()?, "acos")?;
                self.angle_mode.from_radians(x.acos())
            }
            Op::Atan => {
                let x = self.pop()?;
                self.angle_mode.from_radians(x.atan())
            }
            Op::Ln => positive(self.pop()?)?.ln(),
            Op::Log => positive(self.pop()?)?.log10(),
            Op::Exp => self.pop()?.exp(),
        };
        Ok(value)
    }
}

fn domain(cause: &str) -> Error {
    Error::DomainError(cause.into())
}

fn power(base: f64, exponent: f64) -> Result<f64, Error> {
    if base == 0.0 && exponent < 0.0 {
        return Err(Error::DivisionByZero);
    }
    let value = libm::pow(base, exponent);
    if value.is_nan() && !base.is_nan() && !exponent.is_nan() {
        return Err(domain("non-real power"));
    }
    Ok(value)
}

fn unit_interval(x: f64, name: &str) -> Result<f64, Error> {
    if (-1.0..=1.0).contains(&x) {
        Ok(x)
    } else {
        Err(Error::DomainError(format!("{} argument outside [-1, 1]", name)))
    }
}

fn positive(x: f64) -> Result<f64, Error> {
    if x > 0.0 {
        Ok(x)
    } else {
        Err(domain("logarithm of a non-positive number"))
    }
}

/// Integer factorial, computed in `f64`. Overflows to infinity above 170!.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn factorial(x: f64) -> Result<f64, Error> {
    if x == f64::INFINITY {
        return Ok(f64::INFINITY);
    }
    if x < 0.0 || x.fract() != 0.0 {
        return Err(domain("factorial of a negative or non-integer number"));
    }
    if x > 170.0 {
        return Ok(f64::INFINITY);
    }
    Ok((2..=x as u32).map(f64::from).product())
}
