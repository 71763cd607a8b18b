use log::{debug, trace};

use crate::ast::*;
use crate::span::Span;
use crate::token::TokenKind;

use super::context::{unexpected, Context, MAX_DEPTH};
use super::error::ParseError;
use super::lex::{lex, LexItem, Lexed};

/// Entry point for turning source text into a [`Program`].
///
/// Holds no token buffer between calls: every [`Parser::produce_ast`] lexes
/// into its own item list, so one parser can serve any number of inputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Parser
    }

    pub fn produce_ast(&self, source: &str) -> Result<Program, ParseError> {
        self.parse_lexed(source, &lex(source))
    }

    /// Parses the result of lexing `source`, for callers that also want the
    /// tokens themselves.
    pub fn parse_lexed(&self, source: &str, lexed: &Lexed) -> Result<Program, ParseError> {
        for li in &lexed.items {
            debug!(
                "{} - {}: {:?}",
                li.span,
                li.token,
                li.span.str_from_source(source)
            );
        }

        let program = parse(source, &lexed.items)?;
        trace!("{:?}", &program);
        Ok(program)
    }
}

/// Parses already lexed items. `items` must end with an `EndOfFile` item.
pub fn parse(input: &str, items: &[LexItem]) -> Result<Program, ParseError> {
    let mut state = Context::new(input, items);
    let mut body = vec![];
    while !state.is_at_end() {
        body.push(parse_stmt(&mut state)?);
    }
    state.consume_token(TokenKind::EndOfFile)?;
    Ok(Program { body })
}

// An expression together with the height of its tree.
type Parsed = (Expression, usize);

fn parse_stmt(state: &mut Context) -> Result<Statement, ParseError> {
    parse_expr(state).map(|(expr, _)| expr)
}

fn parse_expr(state: &mut Context) -> Result<Parsed, ParseError> {
    parse_additive(state)
}

fn parse_additive(state: &mut Context) -> Result<Parsed, ParseError> {
    let (mut lhs, mut depth) = parse_multiplicative(state)?;

    while let Some((op, span)) = state.next_operator(BinaryOperator::ADDITIVE) {
        let (rhs, rhs_depth) = parse_multiplicative(state)?;
        depth = fold_depth(depth, rhs_depth, span)?;
        lhs = Expression::binary(lhs, op, rhs);
    }

    Ok((lhs, depth))
}

fn parse_multiplicative(state: &mut Context) -> Result<Parsed, ParseError> {
    let (mut lhs, mut depth) = parse_primary(state)?;

    while let Some((op, span)) = state.next_operator(BinaryOperator::MULTIPLICATIVE) {
        let (rhs, rhs_depth) = parse_primary(state)?;
        depth = fold_depth(depth, rhs_depth, span)?;
        lhs = Expression::binary(lhs, op, rhs);
    }

    Ok((lhs, depth))
}

fn fold_depth(lhs: usize, rhs: usize, op_span: Span) -> Result<usize, ParseError> {
    let depth = lhs.max(rhs) + 1;
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeep(op_span));
    }
    Ok(depth)
}

fn parse_primary(state: &mut Context) -> Result<Parsed, ParseError> {
    let li = state.get_curr()?;
    match li.token.kind {
        TokenKind::Identifier => {
            state.advance();
            Ok((Expression::Identifier(li.token.value.clone()), 1))
        }
        TokenKind::Null => {
            state.advance();
            Ok((Expression::NullLiteral, 1))
        }
        TokenKind::Number => parse_number(state).map(|expr| (expr, 1)),
        TokenKind::OpenParen => parse_group(state),
        _ => Err(unexpected(li, None)),
    }
}

fn parse_group(state: &mut Context) -> Result<Parsed, ParseError> {
    let open = state.consume_token(TokenKind::OpenParen)?;
    state.enter_group(open.span)?;
    let expr = parse_expr(state)?;
    state.consume_token(TokenKind::CloseParen)?;
    state.leave_group();
    Ok(expr)
}

fn parse_number(state: &mut Context) -> Result<Expression, ParseError> {
    let li = state.consume_token(TokenKind::Number)?;
    match li.token.value.parse::<f64>() {
        Err(_) => Err(ParseError::ParseToNumber(li.token.value.clone(), li.span)),
        Ok(num) => Ok(Expression::NumericLiteral(num)),
    }
}
