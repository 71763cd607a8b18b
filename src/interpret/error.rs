use thiserror::Error;

use crate::ast::Expression;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("AST node `{}` of kind {} has not been set up for interpretation", .0, .0.kind_name())]
    UnsupportedNode(Expression),
}
