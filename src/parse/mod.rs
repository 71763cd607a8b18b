mod context;
mod error;
mod lex;
mod parser;

pub use context::MAX_DEPTH;
pub use error::ParseError;
pub use lex::{lex, tokenize, LexItem, LexWarning, Lexed};
pub use parser::{parse, Parser};
