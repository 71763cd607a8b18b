use log::trace;

use super::error::Error;
use super::value::RuntimeVal;
use crate::ast::*;

/// A node the tree walker knows how to reduce to a [`RuntimeVal`].
pub trait Evaluate {
    fn evaluate(&self) -> Result<RuntimeVal, Error>;
}

pub fn evaluate<N: Evaluate + ?Sized>(node: &N) -> Result<RuntimeVal, Error> {
    node.evaluate()
}

impl Evaluate for Program {
    /// The value of the last statement, or `null` for an empty program.
    fn evaluate(&self) -> Result<RuntimeVal, Error> {
        let mut last = RuntimeVal::Null;
        for stmt in &self.body {
            last = stmt.evaluate()?;
        }
        Ok(last)
    }
}

impl Evaluate for Expression {
    fn evaluate(&self) -> Result<RuntimeVal, Error> {
        let value = match self {
            Expression::NumericLiteral(n) => RuntimeVal::Number(*n),
            Expression::NullLiteral => RuntimeVal::Null,
            Expression::BinaryExpr(lhs, op, rhs) => interpret_binary_expr(lhs, *op, rhs)?,
            Expression::Identifier(_) => return Err(Error::UnsupportedNode(self.clone())),
        };
        trace!("{} => {}", self, value);
        Ok(value)
    }
}

fn interpret_binary_expr(
    lhs: &Expression,
    op: BinaryOperator,
    rhs: &Expression,
) -> Result<RuntimeVal, Error> {
    // both sides are always evaluated
    let lhs = lhs.evaluate()?;
    let rhs = rhs.evaluate()?;

    Ok(match (lhs, rhs) {
        (RuntimeVal::Number(l), RuntimeVal::Number(r)) => RuntimeVal::Number(op.apply(l, r)),
        _ => RuntimeVal::Null,
    })
}
