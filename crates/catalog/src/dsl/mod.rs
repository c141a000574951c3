mod fields;
mod lexer;
mod parser;

pub use lexer::{Token, TokenKind};
pub use parser::{CriteriaError, SearchRequest, parse_search};
