/// Possible tokens to find in the input string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// Binary operator, postfix operator or sign
    Operator(Op),
    /// Prefix function, written before its argument
    Function(Op),
    /// Named constant, resolved during evaluation
    Constant(Constant),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

impl Token {
    /// Check if the token is an operator or a function, i.e. something the
    /// shunting-yard keeps on its operator stack
    pub fn op(self) -> Option<Op> {
        match self {
            Self::Operator(op) | Self::Function(op) => Some(op),
            _ => None,
        }
    }
}

/// Tie-break rule between operators of equal precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Every operator and function known to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Plus,
    Minus,
    Mul,
    Div,
    Pow,
    /// unary `-`
    Neg,
    Square,
    Cube,
    Sqrt,
    Cbrt,
    Recip,
    Percent,
    Factorial,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Ln,
    Log,
    Exp,
}

impl Op {
    /// Number of operands consumed by the operator
    pub fn arity(self) -> usize {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div | Self::Pow => 2,
            _ => 1,
        }
    }

    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first. All unary operators share the top tier.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
            _ => 4,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div | Self::Factorial => {
                Associativity::Left
            }
            _ => Associativity::Right,
        }
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        self.associativity() == Associativity::Left
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }

    /// Check if the operator is written after its operand (`5!`, `25%`)
    pub fn is_postfix(self) -> bool {
        matches!(self, Self::Percent | Self::Factorial)
    }

    /// Check if the operator is written before its operand (`sin 30`, `√16`)
    pub fn is_prefix(self) -> bool {
        self.arity() == 1 && !self.is_postfix() && self != Self::Neg
    }
}

/// Named constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
    /// The last successfully computed answer
    Ans,
}
