use crate::ast::BinaryOperator;
use crate::span::Span;
use crate::token::TokenKind;

use super::error::ParseError;
use super::lex::LexItem;

/// Deepest expression tree, and deepest parenthesis nesting, a parse may
/// produce. Evaluation and printing recurse once per tree level.
pub const MAX_DEPTH: usize = 256;

/// Cursor over one parse's lex items. Never steps past the trailing
/// `EndOfFile` item.
pub struct Context<'a> {
    input: &'a str,
    items: &'a [LexItem],
    curr_pos: usize,
    nesting: usize,
}

impl<'a> Context<'a> {
    pub fn new(input: &'a str, items: &'a [LexItem]) -> Self {
        Self {
            input,
            items,
            curr_pos: 0,
            nesting: 0,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.items
            .get(self.curr_pos)
            .map_or(true, |li| li.token.kind == TokenKind::EndOfFile)
    }

    pub fn get_curr(&self) -> Result<&'a LexItem, ParseError> {
        match self.items.get(self.curr_pos) {
            Some(li) => Ok(li),
            None => Err(ParseError::Eof(self.end_span(), None)),
        }
    }

    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.curr_pos += 1;
        }
    }

    pub fn consume_token(&mut self, kind: TokenKind) -> Result<&'a LexItem, ParseError> {
        let li = self.get_curr()?;
        if li.token.kind != kind {
            return Err(unexpected(li, Some(kind)));
        }
        self.advance();
        Ok(li)
    }

    /// Enters one level of parentheses opened at `span`.
    pub fn enter_group(&mut self, span: Span) -> Result<(), ParseError> {
        if self.nesting >= MAX_DEPTH {
            return Err(ParseError::TooDeep(span));
        }
        self.nesting += 1;
        Ok(())
    }

    pub fn leave_group(&mut self) {
        self.nesting -= 1;
    }

    /// Consumes the current token if it is one of `match_ops` and returns
    /// the operator it spells with its span.
    pub fn next_operator(
        &mut self,
        match_ops: &'static [BinaryOperator],
    ) -> Option<(BinaryOperator, Span)> {
        let li = self.items.get(self.curr_pos)?;
        if li.token.kind != TokenKind::BinaryOperator {
            return None;
        }
        let op = BinaryOperator::from_glyph(&li.token.value)?;
        if !match_ops.contains(&op) {
            return None;
        }
        self.advance();
        Some((op, li.span))
    }

    fn end_span(&self) -> Span {
        Span::empty(self.input.len())
    }
}

/// Error for finding `li` where something else was required. Running into
/// `EndOfFile` is reported as an unexpected end of input.
pub fn unexpected(li: &LexItem, expected: Option<TokenKind>) -> ParseError {
    match li.token.kind {
        TokenKind::EndOfFile => ParseError::Eof(li.span, expected),
        _ => ParseError::UnexpectedToken(li.token.clone(), li.span, expected),
    }
}
