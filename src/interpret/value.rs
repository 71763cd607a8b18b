use derive_more::Display;

#[derive(Display, Debug, Clone, Copy, PartialEq)]
pub enum RuntimeVal {
    #[display(fmt = "{}", _0)]
    Number(f64),

    #[display(fmt = "null")]
    Null,
}

impl RuntimeVal {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RuntimeVal::Number(n) => Some(*n),
            RuntimeVal::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RuntimeVal::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            RuntimeVal::Number(_) => "number",
            RuntimeVal::Null => "null",
        }
    }
}
