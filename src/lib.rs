//! Lexer, recursive-descent parser and tree-walking evaluator for a small
//! arithmetic language of numbers, `null`, parentheses and `+ - * / %`.
//!
//! ```
//! use arith_repl::{evaluate, Parser, RuntimeVal};
//!
//! let program = Parser::new().produce_ast("(2 + 3) * 4").unwrap();
//! assert_eq!(evaluate(&program).unwrap(), RuntimeVal::Number(20.0));
//! ```

pub mod ast;
pub mod config;
pub mod interpret;
pub mod parse;
pub mod session;
pub mod span;
pub mod token;

pub use ast::{BinaryOperator, Expression, Program, Statement};
pub use interpret::{evaluate, Error as EvalError, Evaluate, RuntimeVal};
pub use parse::{lex, tokenize, LexWarning, ParseError, Parser, MAX_DEPTH};
pub use token::{Token, TokenKind};
