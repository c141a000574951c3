use thiserror::Error;

use crate::{
    dsl::{
        fields::{CmpOp, apply_field},
        lexer::{Token, TokenKind, lex},
    },
    query::Criteria,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{0}` needs a value")]
    MissingValue(String),

    #[error("unknown file type `{0}`")]
    UnknownType(String),

    #[error("invalid size `{0}`")]
    InvalidSize(String),

    #[error("`{0}` is not a field:value pair")]
    BareTerm(String),

    #[error("unexpected `{0}`")]
    UnexpectedToken(String),

    #[error("field `{0}` does not take a comparison")]
    UnsupportedComparison(String),
}

/// Parsed form of a textual query such as `type:ImageFile size:>=1000 sort:size`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub criteria: Criteria,
    /// Sort key name as written; resolved at sort time
    pub sort: Option<String>,
}

struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn peek_at(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn peek(&self) -> TokenKind {
        self.peek_at(0)
    }

    fn advance(&mut self) -> Option<&'a Token<'a>> {
        let tok = self.tokens.get(self.pos);
        self.pos += 1;
        tok
    }

    fn parse(&mut self) -> Result<SearchRequest, CriteriaError> {
        let mut req = SearchRequest::default();

        while self.peek() != TokenKind::Eof {
            self.parse_atom(&mut req)?;
        }

        Ok(req)
    }

    /// IDENT ':' [op] VALUE
    fn parse_atom(&mut self, req: &mut SearchRequest) -> Result<(), CriteriaError> {
        let is_field = self.peek() == TokenKind::Ident && self.peek_at(1) == TokenKind::Colon;

        let Some(first) = self.advance() else {
            return Ok(());
        };

        if !is_field {
            return Err(match first.kind {
                TokenKind::Ident | TokenKind::String => {
                    CriteriaError::BareTerm(first.lexeme.to_owned())
                }
                _ => CriteriaError::UnexpectedToken(first.lexeme.to_owned()),
            });
        }

        self.advance(); // ':'

        let op = CmpOp::from_token(self.peek());
        if op.is_some() {
            self.advance();
        }

        match self.peek() {
            TokenKind::Ident | TokenKind::String => {
                let value = self
                    .advance()
                    .ok_or_else(|| CriteriaError::MissingValue(first.lexeme.to_owned()))?;
                apply_field(req, first.lexeme, op, value)
            }
            _ => Err(CriteriaError::MissingValue(first.lexeme.to_owned())),
        }
    }
}

/// Parse a conjunctive query. Empty input matches everything.
pub fn parse_search(input: &str) -> Result<SearchRequest, CriteriaError> {
    let tokens = lex(input);
    Parser::new(&tokens).parse()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
