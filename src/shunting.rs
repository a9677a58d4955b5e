use crate::error::Error;
use crate::token::Token;
use log::trace;

/// Rewrite an infix token sequence in postfix order, using the
/// Shunting-Yard algorithm.
///
/// Unbalanced parentheses are reported as `Error::ParenMismatch`. Missing or
/// surplus operands are not checked here, the stack machine reports them.
///
/// # Examples
///
/// ```
/// # use scicalc::{to_postfix, tokenize, Op, Token};
///
/// let postfix = to_postfix(&tokenize("1 + 2 * 3").unwrap()).unwrap();
/// assert_eq!(
///     postfix,
///     vec![
///         Token::Number(1.0),
///         Token::Number(2.0),
///         Token::Number(3.0),
///         Token::Operator(Op::Mul),
///         Token::Operator(Op::Plus),
///     ]
/// );
/// ```
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, Error> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    'tokens: for &token in tokens {
        match token {
            Token::Number(_) | Token::Constant(_) => output.push(token),
            Token::Operator(o1) | Token::Function(o1) => {
                'operators: while let Some(&top) = operators.last() {
                    let o2 = match top.op() {
                        Some(o2) => o2,
                        None => break 'operators,
                    };
                    let pop_me = o2.precedence() > o1.precedence()
                        || o2.precedence() == o1.precedence() && o1.is_left_associative();
                    if pop_me {
                        operators.pop();
                        output.push(top);
                    } else {
                        break 'operators;
                    }
                }
                operators.push(token);
            }
            Token::LParen => operators.push(token),
            Token::RParen => {
                while let Some(top) = operators.pop() {
                    match top {
                        Token::LParen => continue 'tokens,
                        other => output.push(other),
                    }
                }
                return Err(Error::ParenMismatch);
            }
        }
    }

    while let Some(token) = operators.pop() {
        match token {
            Token::LParen => return Err(Error::ParenMismatch),
            other => output.push(other),
        }
    }

    trace!("postfix: {:?}", output);
    Ok(output)
}
