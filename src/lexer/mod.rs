pub mod token;

use token::{Token, TokenKind};
use crate::options::ParserOptions;
use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq)]
enum LexerState {
    Initial,
    Scripting,
}

/// Byte-level scanner. Never ends: once the input is exhausted it keeps
/// yielding `Eof`.
pub struct Lexer<'src> {
    input: &'src [u8],
    cursor: usize,
    state: LexerState,
    short_open_tag: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(input: &'src [u8]) -> Self {
        Self::with_options(input, &ParserOptions::default())
    }

    pub fn with_options(input: &'src [u8], options: &ParserOptions) -> Self {
        Self {
            input,
            cursor: 0,
            state: LexerState::Initial,
            short_open_tag: options.short_open_tag,
        }
    }

    pub fn source(&self) -> &'src [u8] {
        self.input
    }

    pub fn input_slice(&self, span: Span) -> &'src [u8] {
        &self.input[span.start.min(self.input.len())..span.end.min(self.input.len())]
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.cursor).copied()
    }

    fn peek_at(&self, n: usize) -> Option<u8> {
        self.input.get(self.cursor + n).copied()
    }

    fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Never moves past the end of input, so spans stay inside the source.
    fn advance_n(&mut self, n: usize) {
        self.cursor = (self.cursor + n).min(self.input.len());
    }

    fn eat(&mut self, c: u8) -> bool {
        if self.peek() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) {
        while let Some(c) = self.peek() {
            // PHP allows extended ASCII in identifiers
            if c.is_ascii_alphanumeric() || c == b'_' || c >= 0x80 {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_digits(&mut self, accept: impl Fn(u8) -> bool) {
        while let Some(c) = self.peek() {
            if accept(c) || c == b'_' {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> TokenKind {
        // Check for hex/binary/octal
        if self.peek() == Some(b'0') {
            match self.peek_at(1) {
                Some(b'x' | b'X') => {
                    self.advance_n(2);
                    self.read_digits(|c| c.is_ascii_hexdigit());
                    return TokenKind::LNumber;
                }
                Some(b'b' | b'B') => {
                    self.advance_n(2);
                    self.read_digits(|c| c == b'0' || c == b'1');
                    return TokenKind::LNumber;
                }
                Some(b'o' | b'O') => {
                    self.advance_n(2);
                    self.read_digits(|c| (b'0'..=b'7').contains(&c));
                    return TokenKind::LNumber;
                }
                _ => {}
            }
        }

        let mut is_float = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == b'_' {
                self.advance();
            } else if c == b'.' && !is_float {
                is_float = true;
                self.advance();
            } else if (c == b'e' || c == b'E')
                && matches!(self.peek_at(1), Some(b'0'..=b'9' | b'+' | b'-'))
            {
                is_float = true;
                self.advance();
                if matches!(self.peek(), Some(b'+' | b'-')) {
                    self.advance();
                }
            } else {
                break;
            }
        }

        if is_float {
            TokenKind::DNumber
        } else {
            TokenKind::LNumber
        }
    }

    fn consume_single_line_comment(&mut self) -> TokenKind {
        while let Some(c) = self.peek() {
            if c == b'\n' || c == b'\r' {
                break;
            } else if c == b'?' && self.peek_at(1) == Some(b'>') {
                // Don't consume closing tag
                break;
            }
            self.advance();
        }
        TokenKind::Comment
    }

    fn consume_multi_line_comment(&mut self) -> TokenKind {
        let is_doc = self.peek() == Some(b'*') && self.peek_at(1) != Some(b'/');
        if is_doc {
            self.advance();
        }

        match memchr::memmem::find(&self.input[self.cursor..], b"*/") {
            Some(offset) => {
                self.advance_n(offset + 2);
                if is_doc { TokenKind::DocComment } else { TokenKind::Comment }
            }
            None => {
                // Unterminated comment
                self.cursor = self.input.len();
                TokenKind::Error
            }
        }
    }

    fn read_single_quoted(&mut self) -> TokenKind {
        while let Some(c) = self.peek() {
            self.advance();
            match c {
                b'\\' => self.advance(),
                b'\'' => return TokenKind::StringLiteral,
                _ => {}
            }
        }
        TokenKind::Error
    }

    /// Interpolation is not split out; the literal is kept whole.
    fn read_double_quoted(&mut self, quote: u8) -> TokenKind {
        while let Some(c) = self.peek() {
            self.advance();
            if c == b'\\' {
                self.advance();
            } else if c == quote {
                return TokenKind::StringLiteral;
            }
        }
        TokenKind::Error
    }

    fn next_in_initial(&mut self) -> Token {
        let start = self.cursor;
        while self.cursor < self.input.len() {
            let rest = &self.input[self.cursor..];
            let tag = if rest.starts_with(b"<?php") {
                Some((TokenKind::OpenTag, 5))
            } else if rest.starts_with(b"<?=") {
                Some((TokenKind::OpenTagEcho, 3))
            } else if self.short_open_tag && rest.starts_with(b"<?") {
                Some((TokenKind::OpenTag, 2))
            } else {
                None
            };

            if let Some((kind, len)) = tag {
                if self.cursor > start {
                    return Token {
                        kind: TokenKind::InlineHtml,
                        span: Span::new(start, self.cursor),
                    };
                }

                self.state = LexerState::Scripting;
                self.advance_n(len);
                // Check for trailing newline/whitespace after <?php
                if kind == TokenKind::OpenTag && self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
                    self.advance();
                }
                return Token {
                    kind,
                    span: Span::new(start, self.cursor),
                };
            }

            match memchr::memchr(b'<', &self.input[self.cursor + 1..]) {
                Some(offset) => self.advance_n(offset + 1),
                None => self.cursor = self.input.len(),
            }
        }

        if self.cursor > start {
            return Token {
                kind: TokenKind::InlineHtml,
                span: Span::new(start, self.cursor),
            };
        }

        Token {
            kind: TokenKind::Eof,
            span: Span::new(self.cursor, self.cursor),
        }
    }

    fn keyword(text: &[u8]) -> TokenKind {
        match text.to_ascii_lowercase().as_slice() {
            b"function" => TokenKind::Function,
            b"fn" => TokenKind::Fn,
            b"class" => TokenKind::Class,
            b"interface" => TokenKind::Interface,
            b"trait" => TokenKind::Trait,
            b"extends" => TokenKind::Extends,
            b"implements" => TokenKind::Implements,
            b"if" => TokenKind::If,
            b"else" => TokenKind::Else,
            b"return" => TokenKind::Return,
            b"echo" => TokenKind::Echo,
            b"while" => TokenKind::While,
            b"for" => TokenKind::For,
            b"foreach" => TokenKind::Foreach,
            b"try" => TokenKind::Try,
            b"catch" => TokenKind::Catch,
            b"finally" => TokenKind::Finally,
            b"throw" => TokenKind::Throw,
            b"var" | b"public" => TokenKind::Public,
            b"protected" => TokenKind::Protected,
            b"private" => TokenKind::Private,
            b"static" => TokenKind::Static,
            b"abstract" => TokenKind::Abstract,
            b"final" => TokenKind::Final,
            b"readonly" => TokenKind::Readonly,
            b"namespace" => TokenKind::Namespace,
            b"use" => TokenKind::Use,
            b"global" => TokenKind::Global,
            b"new" => TokenKind::New,
            b"clone" => TokenKind::Clone,
            b"instanceof" => TokenKind::InstanceOf,
            b"const" => TokenKind::Const,
            _ => TokenKind::Identifier,
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == LexerState::Initial {
            return Some(self.next_in_initial());
        }

        self.skip_whitespace();

        if self.cursor >= self.input.len() {
            return Some(Token {
                kind: TokenKind::Eof,
                span: Span::new(self.cursor, self.cursor),
            });
        }

        let start = self.cursor;
        let char = self.input[self.cursor];
        self.advance();

        let kind = match char {
            b'$' => {
                if self.peek().is_some_and(|c| c.is_ascii_alphabetic() || c == b'_' || c >= 0x80) {
                    self.read_identifier();
                    TokenKind::Variable
                } else {
                    TokenKind::Dollar
                }
            }
            b'\\' => TokenKind::NsSeparator,
            b'\'' => self.read_single_quoted(),
            b'"' => self.read_double_quoted(b'"'),
            b'`' => self.read_double_quoted(b'`'),
            b'#' => self.consume_single_line_comment(),
            b';' => TokenKind::SemiColon,
            b':' => {
                if self.eat(b':') {
                    TokenKind::DoubleColon
                } else {
                    TokenKind::Colon
                }
            }
            b',' => TokenKind::Comma,
            b'{' => TokenKind::OpenBrace,
            b'}' => TokenKind::CloseBrace,
            b'(' => TokenKind::OpenParen,
            b')' => TokenKind::CloseParen,
            b'[' => TokenKind::OpenBracket,
            b']' => TokenKind::CloseBracket,
            b'+' => {
                if self.eat(b'+') {
                    TokenKind::Inc
                } else if self.eat(b'=') {
                    TokenKind::PlusEq
                } else {
                    TokenKind::Plus
                }
            }
            b'-' => {
                if self.eat(b'>') {
                    TokenKind::Arrow
                } else if self.eat(b'-') {
                    TokenKind::Dec
                } else if self.eat(b'=') {
                    TokenKind::MinusEq
                } else {
                    TokenKind::Minus
                }
            }
            b'*' => {
                if self.eat(b'*') {
                    if self.eat(b'=') {
                        TokenKind::PowEq
                    } else {
                        TokenKind::Pow
                    }
                } else if self.eat(b'=') {
                    TokenKind::MulEq
                } else {
                    TokenKind::Asterisk
                }
            }
            b'/' => {
                if self.eat(b'/') {
                    self.consume_single_line_comment()
                } else if self.eat(b'*') {
                    self.consume_multi_line_comment()
                } else if self.eat(b'=') {
                    TokenKind::DivEq
                } else {
                    TokenKind::Slash
                }
            }
            b'%' => {
                if self.eat(b'=') {
                    TokenKind::ModEq
                } else {
                    TokenKind::Percent
                }
            }
            b'.' => {
                if self.eat(b'=') {
                    TokenKind::ConcatEq
                } else if self.peek() == Some(b'.') && self.peek_at(1) == Some(b'.') {
                    self.advance_n(2);
                    TokenKind::Ellipsis
                } else if let Some(c) = self.peek() && c.is_ascii_digit() {
                    self.cursor -= 1;
                    self.read_number()
                } else {
                    TokenKind::Dot
                }
            }
            b'=' => {
                if self.eat(b'=') {
                    if self.eat(b'=') {
                        TokenKind::EqEqEq
                    } else {
                        TokenKind::EqEq
                    }
                } else if self.eat(b'>') {
                    TokenKind::DoubleArrow
                } else {
                    TokenKind::Eq
                }
            }
            b'!' => {
                if self.eat(b'=') {
                    if self.eat(b'=') {
                        TokenKind::BangEqEq
                    } else {
                        TokenKind::BangEq
                    }
                } else {
                    TokenKind::Bang
                }
            }
            b'<' => {
                if self.eat(b'=') {
                    if self.eat(b'>') {
                        TokenKind::Spaceship
                    } else {
                        TokenKind::LtEq
                    }
                } else if self.eat(b'<') {
                    if self.eat(b'=') {
                        TokenKind::SlEq
                    } else {
                        TokenKind::Sl
                    }
                } else if self.eat(b'>') {
                    TokenKind::BangEq
                } else {
                    TokenKind::Lt
                }
            }
            b'>' => {
                if self.eat(b'=') {
                    TokenKind::GtEq
                } else if self.eat(b'>') {
                    if self.eat(b'=') {
                        TokenKind::SrEq
                    } else {
                        TokenKind::Sr
                    }
                } else {
                    TokenKind::Gt
                }
            }
            b'&' => {
                if self.eat(b'&') {
                    TokenKind::AmpersandAmpersand
                } else if self.eat(b'=') {
                    TokenKind::AndEq
                } else {
                    TokenKind::Ampersand
                }
            }
            b'|' => {
                if self.eat(b'|') {
                    TokenKind::PipePipe
                } else if self.eat(b'=') {
                    TokenKind::OrEq
                } else {
                    TokenKind::Pipe
                }
            }
            b'^' => {
                if self.eat(b'=') {
                    TokenKind::XorEq
                } else {
                    TokenKind::Caret
                }
            }
            b'~' => TokenKind::BitNot,
            b'@' => TokenKind::At,
            b'?' => {
                if self.eat(b'>') {
                    self.state = LexerState::Initial;
                    // A single newline right after ?> belongs to the tag
                    if self.peek() == Some(b'\n') {
                        self.advance();
                    }
                    TokenKind::CloseTag
                } else if self.eat(b'?') {
                    if self.eat(b'=') {
                        TokenKind::CoalesceEq
                    } else {
                        TokenKind::Coalesce
                    }
                } else if self.peek() == Some(b'-') && self.peek_at(1) == Some(b'>') {
                    self.advance_n(2);
                    TokenKind::NullSafeArrow
                } else {
                    TokenKind::Question
                }
            }
            c if c.is_ascii_digit() => {
                self.cursor -= 1;
                self.read_number()
            }
            c if c.is_ascii_alphabetic() || c == b'_' || c >= 0x80 => {
                self.read_identifier();
                Self::keyword(&self.input[start..self.cursor])
            }
            _ => TokenKind::Error,
        };

        Some(Token {
            kind,
            span: Span::new(start, self.cursor),
        })
    }
}
