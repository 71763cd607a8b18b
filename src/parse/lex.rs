use std::iter::Peekable;
use std::str::CharIndices;

use log::warn;
use thiserror::Error;

use crate::span::Span;
use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq)]
pub struct LexItem {
    pub span: Span,
    pub token: Token,
}

impl LexItem {
    pub fn new(token: Token, span: Span) -> Self {
        LexItem { token, span }
    }
}

/// Non-fatal lexer diagnostic. The offending input produces no token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexWarning {
    #[error("Unrecognised character `{0}` at position {1}")]
    UnrecognizedCharacter(char, Span),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    pub items: Vec<LexItem>,
    pub warnings: Vec<LexWarning>,
}

impl Lexed {
    pub fn tokens(&self) -> Vec<Token> {
        self.items.iter().map(|li| li.token.clone()).collect()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.items.into_iter().map(|li| li.token).collect()
    }
}

type Chars<'a> = Peekable<CharIndices<'a>>;

fn is_alpha(c: char) -> bool {
    c.to_uppercase().ne(c.to_lowercase())
}

fn is_skippable(c: char) -> bool {
    c == ' ' || c == '\n' || c == '\t'
}

/// Scans `input` into spanned tokens, always terminated by a single
/// `EndOfFile` item. Unrecognised characters are logged, collected and
/// skipped.
pub fn lex(input: &str) -> Lexed {
    let mut chars = input.char_indices().peekable();
    let mut items = vec![];
    let mut warnings = vec![];

    while let Some(&(offset, c)) = chars.peek() {
        let single = |kind| LexItem::new(Token::new(c, kind), Span::new(offset, offset + 1));
        match c {
            '(' => {
                chars.next();
                items.push(single(TokenKind::OpenParen));
            }
            ')' => {
                chars.next();
                items.push(single(TokenKind::CloseParen));
            }
            '+' | '-' | '*' | '/' | '%' => {
                chars.next();
                items.push(single(TokenKind::BinaryOperator));
            }
            '=' => {
                chars.next();
                items.push(single(TokenKind::Equals));
            }
            c if c.is_ascii_digit() => items.push(lex_number(input, &mut chars)),
            c if is_alpha(c) => items.push(lex_keyword_or_identifier(input, &mut chars)),
            c if is_skippable(c) => {
                chars.next();
            }
            c => {
                chars.next();
                let warning =
                    LexWarning::UnrecognizedCharacter(c, Span::new(offset, offset + c.len_utf8()));
                warn!("{}", warning);
                warnings.push(warning);
            }
        }
    }

    items.push(LexItem::new(Token::end_of_file(), Span::empty(input.len())));
    Lexed { items, warnings }
}

/// The bare token sequence, without spans. Warnings are still logged.
pub fn tokenize(input: &str) -> Vec<Token> {
    lex(input).into_tokens()
}

fn lex_number(input: &str, chars: &mut Chars) -> LexItem {
    let span = consume_while(input, chars, |c| c.is_ascii_digit());
    LexItem::new(
        Token::new(span.str_from_source(input), TokenKind::Number),
        span,
    )
}

fn lex_keyword_or_identifier(input: &str, chars: &mut Chars) -> LexItem {
    let span = consume_while(input, chars, is_alpha);
    LexItem::new(
        Token::keyword_or_identifier(span.str_from_source(input)),
        span,
    )
}

fn consume_while(input: &str, chars: &mut Chars, accept: fn(char) -> bool) -> Span {
    let start = chars.peek().map_or(input.len(), |&(offset, _)| offset);
    let mut end = start;

    while let Some(&(offset, c)) = chars.peek() {
        if !accept(c) {
            break;
        }
        end = offset + c.len_utf8();
        chars.next();
    }

    Span::new(start, end)
}
