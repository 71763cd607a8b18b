use crate::span::Span;
use crate::token::{Token, TokenKind};
use thiserror::Error;

use super::context::MAX_DEPTH;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unexpected token `{0}` at position {1}{}", diagnostic_expect_token(.2))]
    UnexpectedToken(Token, Span, Option<TokenKind>),

    /// Only reachable through [`super::parse`] with hand-built items; the
    /// lexer emits digit runs, which always convert.
    #[error("Unable to parse `{0}` to a number at position {1}")]
    ParseToNumber(String, Span),

    #[error("Expression at position {0} nests deeper than {} levels", MAX_DEPTH)]
    TooDeep(Span),

    #[error("Unexpected end of input at position {0}{}", diagnostic_expect_token(.1))]
    Eof(Span, Option<TokenKind>),
}

impl ParseError {
    pub fn span(&self) -> Span {
        use ParseError::*;
        match self {
            UnexpectedToken(_, s, _) => *s,
            ParseToNumber(_, s) => *s,
            Eof(s, _) => *s,
            TooDeep(s) => *s,
        }
    }

    pub fn get_source_start(&self, input: &str) -> (usize, usize) {
        self.span().to_start_row_col(input)
    }
}

fn diagnostic_expect_token(o: &Option<TokenKind>) -> String {
    match o {
        None => ", expected a number, an identifier, `null` or `(`".to_string(),
        Some(t) => format!(", expected token `{}`", t),
    }
}
