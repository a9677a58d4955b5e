use crate::error::Error;
use crate::registry::{Registry, REGISTRY};
use crate::token::{Op, Token};
use log::trace;

/// Split `input` into tokens using the standard registry.
///
/// Blank input gives an empty token sequence.
///
/// # Examples
///
/// ```
/// # use scicalc::{tokenize, Constant, Op, Token};
///
/// assert_eq!(
///     tokenize("2π"),
///     Ok(vec![Token::Number(2.0), Token::Operator(Op::Mul), Token::Constant(Constant::Pi)])
/// );
/// assert_eq!(tokenize("   "), Ok(vec![]));
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(&REGISTRY, input).tokenize()
}

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    registry: &'a Registry,
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(registry: &'a Registry, input: &'a str) -> Self {
        Lexer {
            registry,
            input,
            position: 0,
        }
    }

    /// Produce the token sequence, with negations resolved and implicit
    /// multiplications made explicit
    pub fn tokenize(mut self) -> Result<Vec<Token>, Error> {
        if self.input.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut raw = Vec::new();
        while self.next_tokens(&mut raw)? {}

        let mut tokens: Vec<Token> = Vec::with_capacity(raw.len());
        for token in raw {
            let previous = tokens.last().copied();
            let token = match token {
                Token::Operator(Op::Minus) if expects_operand(previous) => Token::Operator(Op::Neg),
                other => other,
            };
            if is_implicit_multiplication(previous, token) {
                tokens.push(Token::Operator(Op::Mul));
            }
            tokens.push(token);
        }

        trace!("tokens for {:?}: {:?}", self.input, tokens);
        Ok(tokens)
    }

    fn rest(&self) -> &'a str {
        let input: &'a str = self.input;
        &input[self.position..]
    }

    /// Scan the next fragment of the input into `output`. Returns `false` at
    /// the end of the input.
    fn next_tokens(&mut self, output: &mut Vec<Token>) -> Result<bool, Error> {
        let rest = self.rest();
        let c = match rest.chars().next() {
            Some(c) => c,
            None => return Ok(false),
        };

        if c.is_whitespace() {
            self.position += c.len_utf8();
        } else if let Some((glyph, symbol)) = self.registry.longest_glyph(rest) {
            // glyphs go first, `1/x` starts with a digit
            self.position += glyph.len();
            output.push(symbol.into());
        } else if c == '(' {
            self.position += 1;
            output.push(Token::LParen);
        } else if c == ')' {
            self.position += 1;
            output.push(Token::RParen);
        } else if is_number_part(c) {
            let literal = self.take_while(is_number_part);
            let value = literal
                .parse::<f64>()
                .map_err(|_| Error::ParseError(literal.into()))?;
            output.push(Token::Number(value));
        } else if c.is_ascii_alphabetic() {
            let letters = self.take_while(|c| c.is_ascii_alphabetic());
            self.split_letters(letters, output)?;
        } else {
            return Err(Error::TokenError(self.unknown_fragment().into()));
        }
        Ok(true)
    }

    fn take_while<P: Fn(char) -> bool>(&mut self, predicate: P) -> &'a str {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(rest.len(), |(index, _)| index);
        self.position += len;
        &rest[..len]
    }

    /// Split a run of letters into names, longest name first: `sinpi` is
    /// `sin π`.
    fn split_letters(&self, letters: &str, output: &mut Vec<Token>) -> Result<(), Error> {
        let mut start = 0;
        while start < letters.len() {
            match self.registry.longest_name(&letters[start..]) {
                Some((len, symbol)) => {
                    output.push(symbol.into());
                    start += len;
                }
                None => return Err(Error::TokenError(letters[start..].into())),
            }
        }
        Ok(())
    }

    /// The unrecognized text at the current position, up to the next
    /// whitespace, parenthesis or known glyph
    fn unknown_fragment(&self) -> &'a str {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .skip(1)
            .find(|&(index, c)| {
                c.is_whitespace()
                    || c == '('
                    || c == ')'
                    || self.registry.longest_glyph(&rest[index..]).is_some()
            })
            .map_or(rest.len(), |(index, _)| index);
        &rest[..len]
    }
}

/// Check if `c` can appear inside a numeric literal
fn is_number_part(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Check if a `-` coming after `previous` is a negation rather than a
/// subtraction
fn expects_operand(previous: Option<Token>) -> bool {
    match previous {
        None | Some(Token::LParen) | Some(Token::Function(_)) => true,
        Some(Token::Operator(op)) => !op.is_postfix(),
        Some(_) => false,
    }
}

/// `2π`, `2(3)`, `2sin 30`, `(1)(2)`, `(1)2`
fn is_implicit_multiplication(previous: Option<Token>, next: Token) -> bool {
    match (previous, next) {
        (Some(Token::Number(_)), Token::Constant(_))
        | (Some(Token::Number(_)), Token::Function(_))
        | (Some(Token::Number(_)), Token::LParen) => true,
        (Some(Token::RParen), Token::Number(_))
        | (Some(Token::RParen), Token::Constant(_))
        | (Some(Token::RParen), Token::Function(_))
        | (Some(Token::RParen), Token::LParen) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Constant, Op, Token};
    use test_case::test_case;

    #[test_case("2 + 2" => Ok(vec![Token::Number(2.0), Token::Operator(Op::Plus), Token::Number(2.0)]) ; "addition is tokenized properly")]
    #[test_case("2+2" => Ok(vec![Token::Number(2.0), Token::Operator(Op::Plus), Token::Number(2.0)]) ; "spaces are optional")]
    #[test_case("  \t " => Ok(vec![]) ; "blank input is empty")]
    #[test_case("³√27" => Ok(vec![Token::Function(Op::Cbrt), Token::Number(27.0)]) ; "cube root is not a square root")]
    #[test_case("1/x 8" => Ok(vec![Token::Function(Op::Recip), Token::Number(8.0)]) ; "reciprocal glyph")]
    #[test_case("1/8" => Ok(vec![Token::Number(1.0), Token::Operator(Op::Div), Token::Number(8.0)]) ; "division is not a reciprocal")]
    #[test_case("x² 5" => Ok(vec![Token::Function(Op::Square), Token::Number(5.0)]) ; "square glyph")]
    #[test_case("5!" => Ok(vec![Token::Number(5.0), Token::Operator(Op::Factorial)]) ; "factorial")]
    #[test_case("SIN(30)" => Ok(vec![Token::Function(Op::Sin), Token::LParen, Token::Number(30.0), Token::RParen]) ; "names ignore case")]
    #[test_case("asin 1" => Ok(vec![Token::Function(Op::Asin), Token::Number(1.0)]) ; "longest name wins")]
    #[test_case("3 × 4 ÷ 2" => Ok(vec![Token::Number(3.0), Token::Operator(Op::Mul), Token::Number(4.0), Token::Operator(Op::Div), Token::Number(2.0)]) ; "keypad glyphs")]
    fn tokens(input: &str) -> Result<Vec<Token>, Error> {
        tokenize(input)
    }

    #[test_case("2π" => Ok(vec![Token::Number(2.0), Token::Operator(Op::Mul), Token::Constant(Constant::Pi)]) ; "number then constant")]
    #[test_case("2(3)" => Ok(vec![Token::Number(2.0), Token::Operator(Op::Mul), Token::LParen, Token::Number(3.0), Token::RParen]) ; "number then parenthesis")]
    #[test_case("2 sin 30" => Ok(vec![Token::Number(2.0), Token::Operator(Op::Mul), Token::Function(Op::Sin), Token::Number(30.0)]) ; "number then function")]
    #[test_case("2√9" => Ok(vec![Token::Number(2.0), Token::Operator(Op::Mul), Token::Function(Op::Sqrt), Token::Number(9.0)]) ; "number then glyph function")]
    #[test_case("(1)5" => Ok(vec![Token::LParen, Token::Number(1.0), Token::RParen, Token::Operator(Op::Mul), Token::Number(5.0)]) ; "parenthesis then number")]
    #[test_case("(1)(2)" => Ok(vec![Token::LParen, Token::Number(1.0), Token::RParen, Token::Operator(Op::Mul), Token::LParen, Token::Number(2.0), Token::RParen]) ; "parenthesis then parenthesis")]
    #[test_case("(1)Ans" => Ok(vec![Token::LParen, Token::Number(1.0), Token::RParen, Token::Operator(Op::Mul), Token::Constant(Constant::Ans)]) ; "parenthesis then constant")]
    #[test_case("5!2" => Ok(vec![Token::Number(5.0), Token::Operator(Op::Factorial), Token::Number(2.0)]) ; "no multiplication after a postfix operator")]
    fn implicit_multiplication(input: &str) -> Result<Vec<Token>, Error> {
        tokenize(input)
    }

    #[test_case("-3" => Ok(vec![Token::Operator(Op::Neg), Token::Number(3.0)]) ; "leading minus")]
    #[test_case("(-3)!" => Ok(vec![Token::LParen, Token::Operator(Op::Neg), Token::Number(3.0), Token::RParen, Token::Operator(Op::Factorial)]) ; "minus after parenthesis")]
    #[test_case("2 * -3" => Ok(vec![Token::Number(2.0), Token::Operator(Op::Mul), Token::Operator(Op::Neg), Token::Number(3.0)]) ; "minus after operator")]
    #[test_case("√-1" => Ok(vec![Token::Function(Op::Sqrt), Token::Operator(Op::Neg), Token::Number(1.0)]) ; "minus after function")]
    #[test_case("+2" => Ok(vec![Token::Operator(Op::Plus), Token::Number(2.0)]) ; "plus is always binary")]
    #[test_case("5% - 1" => Ok(vec![Token::Number(5.0), Token::Operator(Op::Percent), Token::Operator(Op::Minus), Token::Number(1.0)]) ; "minus after postfix operator is binary")]
    fn signs(input: &str) -> Result<Vec<Token>, Error> {
        tokenize(input)
    }

    #[test_case("abc" => Err(Error::TokenError("abc".into())) ; "unknown word")]
    #[test_case("2 + foo" => Err(Error::TokenError("foo".into())) ; "unknown word after operator")]
    #[test_case("sinx" => Err(Error::TokenError("x".into())) ; "unknown name tail")]
    #[test_case("3 $$ 4" => Err(Error::TokenError("$$".into())) ; "unknown symbols")]
    #[test_case("2@+1" => Err(Error::TokenError("@".into())) ; "unknown symbol stops at glyph")]
    #[test_case("1.2.3" => Err(Error::ParseError("1.2.3".into())) ; "two decimal points")]
    #[test_case("." => Err(Error::ParseError(".".into())) ; "lonely decimal point")]
    fn errors(input: &str) -> Result<Vec<Token>, Error> {
        tokenize(input)
    }

    #[test]
    fn letters_split_into_names() {
        assert_eq!(
            tokenize("sinpi"),
            Ok(vec![Token::Function(Op::Sin), Token::Constant(Constant::Pi)])
        );
        assert_eq!(
            tokenize("ln e"),
            Ok(vec![Token::Function(Op::Ln), Token::Constant(Constant::E)])
        );
        assert_eq!(tokenize("exp"), Ok(vec![Token::Function(Op::Exp)]));
    }
}
