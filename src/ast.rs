use std::fmt;

use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BinaryOperator {
    #[display(fmt = "+")]
    Add,
    #[display(fmt = "-")]
    Sub,
    #[display(fmt = "*")]
    Mul,
    #[display(fmt = "/")]
    Div,
    #[display(fmt = "%")]
    Rem,
}

impl BinaryOperator {
    pub const ADDITIVE: &'static [BinaryOperator] = &[BinaryOperator::Add, BinaryOperator::Sub];
    pub const MULTIPLICATIVE: &'static [BinaryOperator] = &[
        BinaryOperator::Mul,
        BinaryOperator::Div,
        BinaryOperator::Rem,
    ];

    pub fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Sub),
            "*" => Some(BinaryOperator::Mul),
            "/" => Some(BinaryOperator::Div),
            "%" => Some(BinaryOperator::Rem),
            _ => None,
        }
    }

    /// Division by zero is not checked: it yields infinity or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOperator::Add => lhs + rhs,
            BinaryOperator::Sub => lhs - rhs,
            BinaryOperator::Mul => lhs * rhs,
            BinaryOperator::Div => lhs / rhs,
            BinaryOperator::Rem => lhs % rhs,
        }
    }
}

/// Expressions print as S-expressions, e.g. `(- (- 10 2) 3)`.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum Expression {
    #[display(fmt = "{}", _0)]
    NumericLiteral(f64),
    #[display(fmt = "null")]
    NullLiteral,
    #[display(fmt = "{}", _0)]
    Identifier(String),
    #[display(fmt = "({} {} {})", _1, _0, _2)]
    BinaryExpr(Box<Expression>, BinaryOperator, Box<Expression>),
}

impl Expression {
    pub fn binary(lhs: Expression, op: BinaryOperator, rhs: Expression) -> Self {
        Expression::BinaryExpr(Box::new(lhs), op, Box::new(rhs))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::NumericLiteral(_) => "NumericLiteral",
            Expression::NullLiteral => "NullLiteral",
            Expression::Identifier(_) => "Identifier",
            Expression::BinaryExpr(..) => "BinaryExpr",
        }
    }
}

// The language has no statement forms of its own.
pub type Statement = Expression;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.body.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
