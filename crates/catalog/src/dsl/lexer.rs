use std::{iter::Peekable, ops::Range, str::CharIndices};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Field names and unquoted values
    // Examples: tag, ImageFile, 10.05.2023, 5MB
    Ident,
    String,
    Colon,
    Gt,
    Gte,
    Lt,
    Lte,
    Eq,
    Eof,
}

/// Single token with lexeme and span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub span: Range<usize>,
}

pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn token(&self, kind: TokenKind, span: Range<usize>) -> Token<'a> {
        Token {
            kind,
            lexeme: &self.input[span.clone()],
            span,
        }
    }

    fn advance_until(&mut self, end: usize) {
        while let Some(&(i, _)) = self.chars.peek() {
            if i >= end {
                break;
            }
            self.chars.next();
        }
    }

    fn scan_word(&mut self, start: usize, first_char: char) -> usize {
        let mut end = start + first_char.len_utf8();

        while let Some(&(i, c)) = self.chars.peek() {
            if is_delimiter(c) {
                break;
            }
            end = i + c.len_utf8();
            self.chars.next();
        }

        end
    }

    /// `>` or `<`, optionally followed by `=`.
    fn scan_comparison(
        &mut self,
        start: usize,
        strict: TokenKind,
        inclusive: TokenKind,
    ) -> Token<'a> {
        if let Some(&(_, '=')) = self.chars.peek() {
            self.chars.next();
            return self.token(inclusive, start..start + 2);
        }
        self.token(strict, start..start + 1)
    }

    pub fn next_token(&mut self) -> Token<'a> {
        loop {
            let Some((start, c)) = self.chars.next() else {
                let len = self.input.len();
                return self.token(TokenKind::Eof, len..len);
            };

            if c.is_whitespace() {
                continue;
            }

            return match c {
                ':' => self.token(TokenKind::Colon, start..start + 1),
                '=' => self.token(TokenKind::Eq, start..start + 1),
                '>' => self.scan_comparison(start, TokenKind::Gt, TokenKind::Gte),
                '<' => self.scan_comparison(start, TokenKind::Lt, TokenKind::Lte),
                '"' => {
                    // NOTE: No escaping; an unterminated string runs to the end.
                    let content_start = start + 1;
                    let content_end = self.input[content_start..]
                        .find('"')
                        .map_or(self.input.len(), |rel| content_start + rel);
                    let end = (content_end + 1).min(self.input.len());
                    self.advance_until(end);
                    Token {
                        kind: TokenKind::String,
                        lexeme: &self.input[content_start..content_end],
                        span: start..end,
                    }
                }
                _ => {
                    let end = self.scan_word(start, c);
                    self.token(TokenKind::Ident, start..end)
                }
            };
        }
    }
}

// Dates (10.05.2023), sizes (5MB) and paths stay single identifiers.
#[inline]
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, ':' | '>' | '<' | '=' | '"')
}

pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::with_capacity(16);

    loop {
        let token = lexer.next_token();
        let is_eof = token.kind == TokenKind::Eof;
        tokens.push(token);
        if is_eof {
            break;
        }
    }

    tokens
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
