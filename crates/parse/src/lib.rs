mod errors;

pub use crate::errors::*;

use lex::{Lexer, Token, TokenKind};

use tracing::{debug, trace};

/// Root node of a parsed source file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Program {}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur_token: Token<'a>,
    peek_token: Token<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Self {
            lexer,
            cur_token: Token::eof(),
            peek_token: Token::eof(),
        };

        // Read two tokens so both `cur_token` and `peek_token` are set.
        parser.next_token();
        parser.next_token();

        parser
    }

    pub fn cur_token(&self) -> Token<'a> {
        self.cur_token
    }

    pub fn peek_token(&self) -> Token<'a> {
        self.peek_token
    }

    pub fn next_token(&mut self) {
        self.cur_token = self.peek_token;
        self.peek_token = self.lexer.next_token();
        trace!(kind = %self.peek_token.kind, text = self.peek_token.text, "pulled token");
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        //TODO: Parse let, return and expression statements once the AST exists. Until then
        // the token stream is only walked to the end and checked for illegal input.
        let mut count = 0;

        while !self.cur_token.is_eof() {
            if self.cur_token.kind == TokenKind::Illegal {
                return Err(ParseError::IllegalToken(self.cur_token.text.to_string()));
            }
            count += 1;
            self.next_token();
        }

        debug!(tokens = count, "reached end of input");
        Ok(Program::default())
    }
}
