mod error;
mod interpreter;
mod value;

pub use error::Error;
pub use interpreter::{evaluate, Evaluate};
pub use value::RuntimeVal;
