use crate::error::Error;
use crate::lexer::Lexer;
use crate::machine::Machine;
use crate::registry::{Registry, REGISTRY};
use crate::shunting::to_postfix;
use log::debug;
use std::error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// How trigonometric operands and results are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// Convert an angle expressed in this mode to radians
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle.to_radians(),
            Self::Radians => angle,
        }
    }

    /// Convert an angle in radians to this mode
    pub fn from_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle.to_degrees(),
            Self::Radians => angle,
        }
    }

    /// The other angle mode
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Degrees,
        }
    }
}

impl Display for AngleMode {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Degrees => write!(fmt, "DEG"),
            Self::Radians => write!(fmt, "RAD"),
        }
    }
}

/// Error returned when parsing an unknown angle mode name
#[derive(Debug, Clone, PartialEq)]
pub struct ParseAngleModeError(String);

impl Display for ParseAngleModeError {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "unknown angle mode '{}', expected DEG or RAD", self.0)
    }
}

impl error::Error for ParseAngleModeError {}

impl FromStr for AngleMode {
    type Err = ParseAngleModeError;

    /// ```
    /// # use scicalc::AngleMode;
    /// assert_eq!("rad".parse(), Ok(AngleMode::Radians));
    /// assert_eq!("DEG".parse(), Ok(AngleMode::Degrees));
    /// assert!("grad".parse::<AngleMode>().is_err());
    /// ```
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(Self::Degrees),
            "rad" | "radian" | "radians" => Ok(Self::Radians),
            _ => Err(ParseAngleModeError(name.into())),
        }
    }
}

/// Calculator state carried between evaluations: the angle mode and the last
/// answer, available as `Ans` in expressions.
///
/// # Examples
///
/// ```
/// use scicalc::{AngleMode, Session};
///
/// let mut session = Session::new();
/// assert_eq!(session.evaluate("7 * 8"), Ok("56".to_string()));
/// assert_eq!(session.evaluate("Ans + 4"), Ok("60".to_string()));
///
/// session.set_angle_mode(AngleMode::Radians);
/// assert_eq!(session.evaluate("cos 0"), Ok("1".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    registry: &'static Registry,
    angle_mode: AngleMode,
    last_answer: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_angle_mode(AngleMode::default())
    }
}

impl Session {
    /// Create a session in degrees, with `Ans` set to 0
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_angle_mode(angle_mode: AngleMode) -> Self {
        Self {
            registry: &REGISTRY,
            angle_mode,
            last_answer: 0.0,
        }
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// The value `Ans` currently resolves to
    pub fn last_answer(&self) -> f64 {
        self.last_answer
    }

    pub fn set_angle_mode(&mut self, angle_mode: AngleMode) {
        debug!("angle mode {} -> {}", self.angle_mode, angle_mode);
        self.angle_mode = angle_mode;
    }

    /// Switch between degrees and radians, and return the new mode
    pub fn toggle_angle_mode(&mut self) -> AngleMode {
        self.set_angle_mode(self.angle_mode.toggled());
        self.angle_mode
    }

    /// Evaluate `expression` to a number.
    ///
    /// Returns `Ok(None)` for blank input. On success the result becomes the
    /// new `Ans`, on failure the session is left untouched.
    ///
    /// ```
    /// # use scicalc::{Error, Session};
    /// let mut session = Session::new();
    /// assert_eq!(session.compute("2 ^ 3 ^ 2"), Ok(Some(512.0)));
    /// assert_eq!(session.compute("  "), Ok(None));
    /// assert_eq!(session.compute("10 / 0"), Err(Error::DivisionByZero));
    /// assert_eq!(session.last_answer(), 512.0);
    /// ```
    pub fn compute(&mut self, expression: &str) -> Result<Option<f64>, Error> {
        let tokens = Lexer::new(self.registry, expression).tokenize()?;
        if tokens.is_empty() {
            return Ok(None);
        }
        let postfix = to_postfix(&tokens)?;
        let result = Machine::new(self.angle_mode, self.last_answer).run(&postfix);
        debug!("{:?} => {:?}", expression, result);

        let value = result?;
        self.last_answer = value;
        Ok(Some(value))
    }

    /// Evaluate `expression` and format the result for display. Blank input
    /// gives an empty string.
    pub fn evaluate(&mut self, expression: &str) -> Result<String, Error> {
        Ok(self.compute(expression)?.map(format_value).unwrap_or_default())
    }
}

/// Evaluate a single expression from `input` against `session`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// tokenizing or evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use scicalc::{evaluate, Error, Session};
/// let mut session = Session::new();
///
/// assert_eq!(evaluate("45 - 2^3", &mut session), Ok("37".into()));
/// assert_eq!(evaluate("", &mut session), Ok("".into()));
/// assert_eq!(evaluate("sqrt(-1)", &mut session).map_err(|e| e.user_message()),
///            Err("Error: square root of a negative number".into()));
/// ```
pub fn evaluate(input: &str, session: &mut Session) -> Result<String, Error> {
    session.evaluate(input)
}

/// Format a result for display: integral values without a fractional part,
/// scientific notation for very large or very small magnitudes.
///
/// ```
/// # use scicalc::format_value;
/// assert_eq!(format_value(14.0), "14");
/// assert_eq!(format_value(0.125), "0.125");
/// assert_eq!(format_value(1e20), "1e20");
/// assert_eq!(format_value(f64::INFINITY), "inf");
/// ```
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && (magnitude >= 1e15 || (magnitude != 0.0 && magnitude < 1e-9)) {
        format!("{:e}", value)
    } else if value == 0.0 {
        // no "-0"
        "0".into()
    } else {
        format!("{}", value)
    }
}
