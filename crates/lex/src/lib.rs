mod token;

pub use crate::token::{lookup_ident, Token, TokenKind, KEYWORDS};

/// Byte-oriented scanner over a fully resident source string.
///
/// `ch` holds the byte at `position`, or `None` once the input is exhausted.
/// `read_position` always points one past `position`.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    read_position: usize,
    ch: Option<u8>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let token = match self.ch {
            Some(b'=') => {
                if self.peek_char() == Some(b'=') {
                    self.read_pair(TokenKind::Eq)
                } else {
                    self.read_single(TokenKind::Assign)
                }
            }
            Some(b'!') => {
                if self.peek_char() == Some(b'=') {
                    self.read_pair(TokenKind::NotEq)
                } else {
                    self.read_single(TokenKind::Bang)
                }
            }
            Some(b';') => self.read_single(TokenKind::Semicolon),
            Some(b'(') => self.read_single(TokenKind::LeftParen),
            Some(b')') => self.read_single(TokenKind::RightParen),
            Some(b'{') => self.read_single(TokenKind::LeftBrace),
            Some(b'}') => self.read_single(TokenKind::RightBrace),
            Some(b',') => self.read_single(TokenKind::Comma),
            Some(b'+') => self.read_single(TokenKind::Plus),
            Some(b'-') => self.read_single(TokenKind::Minus),
            Some(b'/') => self.read_single(TokenKind::Slash),
            Some(b'*') => self.read_single(TokenKind::Asterisk),
            Some(b'<') => self.read_single(TokenKind::LessThan),
            Some(b'>') => self.read_single(TokenKind::GreaterThan),
            // End of input is sticky, so the cursor stays where it is.
            None => return Token::eof(),
            // Identifiers and numbers leave the cursor past their last byte already.
            Some(c) if is_letter(c) => {
                let text = self.read_identifier();
                return Token::new(lookup_ident(text), text);
            }
            Some(c) if is_digit(c) => {
                let text = self.read_number();
                return Token::new(TokenKind::Int, text);
            }
            Some(_) => self.read_illegal(),
        };

        self.read_char();
        token
    }

    /// Consumes the lexer, yielding every token up to and including `Eof`.
    pub fn tokens(self) -> Tokens<'a> {
        Tokens {
            lexer: self,
            done: false,
        }
    }

    /// Byte after the current one, without advancing.
    pub fn peek_char(&self) -> Option<u8> {
        self.input.as_bytes().get(self.read_position).copied()
    }

    fn read_char(&mut self) {
        self.ch = self.input.as_bytes().get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn read_single(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, &self.input[self.position..self.read_position])
    }

    // Leaves the cursor on the second byte; the shared advance steps past it.
    fn read_pair(&mut self, kind: TokenKind) -> Token<'a> {
        let start = self.position;
        self.read_char();
        Token::new(kind, &self.input[start..self.read_position])
    }

    fn read_identifier(&mut self) -> &'a str {
        self.read_while(is_letter)
    }

    fn read_number(&mut self) -> &'a str {
        self.read_while(is_digit)
    }

    fn read_while<F>(&mut self, func: F) -> &'a str
    where
        F: Fn(u8) -> bool,
    {
        let start = self.position;
        while let Some(c) = self.ch {
            if !func(c) {
                break;
            }
            self.read_char();
        }
        &self.input[start..self.position]
    }

    // Classification is ASCII only, but a non-ASCII character is reported
    // whole so the token text stays valid UTF-8.
    fn read_illegal(&mut self) -> Token<'a> {
        let start = self.position;
        let width = self.input[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);

        for _ in 1..width {
            self.read_char();
        }

        Token::new(TokenKind::Illegal, &self.input[start..start + width])
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.ch {
            self.read_char();
        }
    }
}

/// Iterator returned by [`Lexer::tokens`]. Each call to `next` scans exactly
/// one token.
pub struct Tokens<'a> {
    lexer: Lexer<'a>,
    done: bool,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let token = self.lexer.next_token();
        self.done = token.is_eof();
        Some(token)
    }
}

fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}
