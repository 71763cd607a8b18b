use derive_more::Display;
use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenKind {
    // literals
    Null,
    Number,
    Identifier,

    // keywords
    Let,

    // grouping and operators
    Equals,
    OpenParen,
    CloseParen,
    BinaryOperator,

    EndOfFile,
}

pub static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "let" => TokenKind::Let,
    "null" => TokenKind::Null,
};

pub const END_OF_FILE: &str = "EndOfFile";

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}({:?})", kind, value)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind) -> Self {
        Token {
            value: value.into(),
            kind,
        }
    }

    pub fn end_of_file() -> Self {
        Token::new(END_OF_FILE, TokenKind::EndOfFile)
    }

    pub fn keyword_or_identifier(word: &str) -> Self {
        let kind = KEYWORDS.get(word).copied().unwrap_or(TokenKind::Identifier);
        Token::new(word, kind)
    }
}
