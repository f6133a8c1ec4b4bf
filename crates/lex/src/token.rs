use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers and literals
    Identifier,
    Int,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,

    // Comparisons
    LessThan,
    GreaterThan,
    Eq,
    NotEq,

    // Punctuation
    Comma,
    Semicolon,

    // Groupings
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

/// Every reserved word and the kind it lexes to.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

impl TokenKind {
    /// Returns the keyword kind spelled by `text`, if it is reserved.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(spelling, _)| *spelling == text)
            .map(|(_, kind)| *kind)
    }

    fn name(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies an identifier-shaped run, falling back to `Identifier` for
/// anything not in the keyword table.
pub fn lookup_ident(text: &str) -> TokenKind {
    TokenKind::keyword(text).unwrap_or(TokenKind::Identifier)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_matches_lookup() {
        for (text, kind) in KEYWORDS {
            assert_eq!(TokenKind::keyword(text), Some(*kind));
            assert_eq!(lookup_ident(text), *kind);
        }
    }

    #[test]
    fn non_keywords_are_identifiers() {
        let inputs = ["foobar", "x", "_tmp", "Let", "function", "iff", "els"];

        for input in inputs {
            assert_eq!(TokenKind::keyword(input), None);
            assert_eq!(lookup_ident(input), TokenKind::Identifier);
        }
    }

    #[test]
    fn keyword_spellings_are_unique() {
        for (i, (text, _)) in KEYWORDS.iter().enumerate() {
            assert!(KEYWORDS[i + 1..].iter().all(|(other, _)| other != text));
        }
    }

    #[test]
    fn display() {
        assert_eq!(TokenKind::Eq.to_string(), "==");
        assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
        assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
    }
}
