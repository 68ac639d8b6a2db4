pub mod token;
pub mod tokenizer;

pub use crate::tokenizer::token::{Opcode, Token};
pub use crate::tokenizer::tokenizer::{decode, instruction_code, tokenize};
