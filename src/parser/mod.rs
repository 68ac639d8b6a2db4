pub mod instruction;
pub mod parser;

pub use crate::parser::instruction::{Flow, Instruction};
pub use crate::parser::parser::parse;
