use crate::token::{Constant, Op, Token};
use hashbrown::HashMap;

lazy_static! {
    /// The standard table of operators, functions and constants, built once.
    pub static ref REGISTRY: Registry = Registry::standard();
}

/// What a registered symbol stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Binary operator, postfix operator or negation
    Operator(Op),
    /// Prefix function
    Function(Op),
    /// Named constant
    Constant(Constant),
}

impl From<Symbol> for Token {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Operator(op) => Token::Operator(op),
            Symbol::Function(op) => Token::Function(op),
            Symbol::Constant(constant) => Token::Constant(constant),
        }
    }
}

/// Read-only map from symbol to operator, function or constant.
///
/// Symbols come in two flavours: names made only of ASCII letters (`sin`,
/// `Ans`, `pi`), matched case-insensitively, and glyphs (`√`, `³√`, `x²`,
/// `1/x`, `+`), matched exactly.
///
/// ```
/// use scicalc::{Op, Symbol, REGISTRY};
///
/// assert_eq!(REGISTRY.get("SIN"), Some(Symbol::Function(Op::Sin)));
/// assert_eq!(REGISTRY.longest_glyph("³√27"), Some(("³√", Symbol::Function(Op::Cbrt))));
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    /// lowercase names
    names: HashMap<&'static str, Symbol>,
    /// sorted by decreasing length
    glyphs: Vec<(&'static str, Symbol)>,
    longest_name: usize,
}

impl Registry {
    /// Build the standard calculator registry
    pub fn standard() -> Self {
        let mut registry = Self {
            names: HashMap::new(),
            glyphs: Vec::new(),
            longest_name: 0,
        };

        registry.insert("+", Symbol::Operator(Op::Plus));
        registry.insert("-", Symbol::Operator(Op::Minus));
        registry.insert("−", Symbol::Operator(Op::Minus));
        registry.insert("*", Symbol::Operator(Op::Mul));
        registry.insert("×", Symbol::Operator(Op::Mul));
        registry.insert("·", Symbol::Operator(Op::Mul));
        registry.insert("/", Symbol::Operator(Op::Div));
        registry.insert("÷", Symbol::Operator(Op::Div));
        registry.insert("^", Symbol::Operator(Op::Pow));
        registry.insert("%", Symbol::Operator(Op::Percent));
        registry.insert("!", Symbol::Operator(Op::Factorial));

        registry.insert("x²", Symbol::Function(Op::Square));
        registry.insert("sqr", Symbol::Function(Op::Square));
        registry.insert("x³", Symbol::Function(Op::Cube));
        registry.insert("cube", Symbol::Function(Op::Cube));
        registry.insert("√", Symbol::Function(Op::Sqrt));
        registry.insert("sqrt", Symbol::Function(Op::Sqrt));
        registry.insert("³√", Symbol::Function(Op::Cbrt));
        registry.insert("cbrt", Symbol::Function(Op::Cbrt));
        registry.insert("1/x", Symbol::Function(Op::Recip));
        registry.insert("recip", Symbol::Function(Op::Recip));
        registry.insert("sin", Symbol::Function(Op::Sin));
        registry.insert("cos", Symbol::Function(Op::Cos));
        registry.insert("tan", Symbol::Function(Op::Tan));
        registry.insert("asin", Symbol::Function(Op::Asin));
        registry.insert("acos", Symbol::Function(Op::Acos));
        registry.insert("atan", Symbol::Function(Op::Atan));
        registry.insert("ln", Symbol::Function(Op::Ln));
        registry.insert("log", Symbol::Function(Op::Log));
        registry.insert("exp", Symbol::Function(Op::Exp));

        registry.insert("π", Symbol::Constant(Constant::Pi));
        registry.insert("pi", Symbol::Constant(Constant::Pi));
        registry.insert("e", Symbol::Constant(Constant::E));
        registry.insert("ans", Symbol::Constant(Constant::Ans));

        registry
            .glyphs
            .sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        registry.names.shrink_to_fit();
        registry
    }

    fn insert(&mut self, symbol: &'static str, meaning: Symbol) {
        if is_name(symbol) {
            debug_assert_eq!(symbol, symbol.to_ascii_lowercase());
            let previous = self.names.insert(symbol, meaning);
            debug_assert!(previous.is_none(), "duplicated symbol {}", symbol);
            self.longest_name = self.longest_name.max(symbol.len());
        } else {
            debug_assert!(
                self.glyphs.iter().all(|&(glyph, _)| glyph != symbol),
                "duplicated symbol {}",
                symbol
            );
            self.glyphs.push((symbol, meaning));
        }
    }

    /// Look up a single symbol. Names are case-insensitive, glyphs exact.
    pub fn get(&self, symbol: &str) -> Option<Symbol> {
        if is_name(symbol) {
            self.names.get(symbol.to_ascii_lowercase().as_str()).copied()
        } else {
            self.glyphs
                .iter()
                .find(|&&(glyph, _)| glyph == symbol)
                .map(|&(_, meaning)| meaning)
        }
    }

    /// Find the longest glyph `input` starts with
    pub fn longest_glyph(&self, input: &str) -> Option<(&'static str, Symbol)> {
        self.glyphs
            .iter()
            .find(|&&(glyph, _)| input.starts_with(glyph))
            .copied()
    }

    /// Find the longest name `letters` starts with, and return its length in
    /// bytes. Input that is not ASCII never matches.
    pub fn longest_name(&self, letters: &str) -> Option<(usize, Symbol)> {
        if !letters.is_ascii() {
            return None;
        }
        let lowercase = letters.to_ascii_lowercase();
        (1..=self.longest_name.min(lowercase.len()))
            .rev()
            .find_map(|len| self.names.get(&lowercase[..len]).map(|&s| (len, s)))
    }
}

/// Check if `symbol` is a name, i.e. only made of ASCII letters
fn is_name(symbol: &str) -> bool {
    !symbol.is_empty() && symbol.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::{Registry, Symbol, REGISTRY};
    use crate::token::{Constant, Op};
    use test_case::test_case;

    #[test_case("sin" => Some(Symbol::Function(Op::Sin)) ; "name")]
    #[test_case("SqRt" => Some(Symbol::Function(Op::Sqrt)) ; "names ignore case")]
    #[test_case("Ans" => Some(Symbol::Constant(Constant::Ans)) ; "last answer")]
    #[test_case("√" => Some(Symbol::Function(Op::Sqrt)) ; "glyph")]
    #[test_case("X²" => None ; "glyphs are exact")]
    #[test_case("÷" => Some(Symbol::Operator(Op::Div)) ; "division alias")]
    #[test_case("foo" => None ; "unknown")]
    fn get(symbol: &str) -> Option<Symbol> {
        REGISTRY.get(symbol)
    }

    #[test]
    fn longest_glyph_first() {
        let registry = Registry::standard();
        assert_eq!(
            registry.longest_glyph("³√8"),
            Some(("³√", Symbol::Function(Op::Cbrt)))
        );
        assert_eq!(
            registry.longest_glyph("√8"),
            Some(("√", Symbol::Function(Op::Sqrt)))
        );
        assert_eq!(
            registry.longest_glyph("1/x 8"),
            Some(("1/x", Symbol::Function(Op::Recip)))
        );
        assert_eq!(registry.longest_glyph("1/2"), None);
    }

    #[test]
    fn longest_name_first() {
        assert_eq!(
            REGISTRY.longest_name("asin"),
            Some((4, Symbol::Function(Op::Asin)))
        );
        assert_eq!(
            REGISTRY.longest_name("exp"),
            Some((3, Symbol::Function(Op::Exp)))
        );
        assert_eq!(
            REGISTRY.longest_name("epi"),
            Some((1, Symbol::Constant(Constant::E)))
        );
        assert_eq!(
            REGISTRY.longest_name("SINpi"),
            Some((3, Symbol::Function(Op::Sin)))
        );
        assert_eq!(REGISTRY.longest_name("xyz"), None);
        assert_eq!(REGISTRY.longest_name("é"), None);
        assert_eq!(REGISTRY.longest_name("sinπ"), None);
    }
}
