use std::collections::VecDeque;

use super::instruction::Instruction;
use crate::error::{GlyphoError, GlyphoErrorType};
use crate::program::Program;
use crate::tokenizer::{tokenize, Opcode, Token};

/// Turns Glypho source text into a [`Program`], pairing every `[` with its `]`.
pub fn parse(source: &str) -> Result<Program, GlyphoError> {
    let tokens = tokenize(source)?;
    Parser::new(tokens).parse()
}

struct Parser {
    tokens: VecDeque<Token>,
    instructions: Vec<Instruction>,
    lbrace_indices: Vec<usize>,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        let instructions = Vec::with_capacity(tokens.len());
        Parser { tokens: tokens.into(), instructions, lbrace_indices: Vec::new() }
    }
    fn get_next_token(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }
    fn parse(mut self) -> Result<Program, GlyphoError> {
        while let Some(token) = self.get_next_token() {
            let index = self.instructions.len();
            let mut instruction = Instruction::new(token.opcode);
            match token.opcode {
                Opcode::Lbrace => self.lbrace_indices.push(index),
                Opcode::Rbrace => {
                    let open = self
                        .lbrace_indices
                        .pop()
                        .ok_or_else(|| GlyphoErrorType::UnmatchedRbrace.at(index))?;
                    // `[` jumps past its `]`, `]` jumps back onto its `[`
                    let distance = (index - open) as isize;
                    self.instructions[open].set_offset(distance + 1);
                    instruction.set_offset(-distance);
                }
                _ => {}
            }
            self.instructions.push(instruction);
        }

        if !self.lbrace_indices.is_empty() {
            return Err(GlyphoErrorType::UnmatchedLbrace.at(self.instructions.len()));
        }
        log::debug!("parsed {} instructions", self.instructions.len());
        Ok(Program::new(self.instructions))
    }
}

#[test]
fn test_brace_offsets() {
    // [ 1 [ ] ]
    let program = parse("abba aabc abba abcd abcd").unwrap();
    let offsets: Vec<isize> = program.instructions().iter().map(|i| i.offset()).collect();
    assert_eq!(offsets, vec![5, 1, 2, -1, -4]);
}

#[test]
fn test_brace_errors() {
    let err = parse("aabc abcd aabc").unwrap_err();
    assert!(matches!(err.kind(), GlyphoErrorType::UnmatchedRbrace));
    assert_eq!(err.instruction_index(), 1);

    let err = parse("abba aabc abba abcd").unwrap_err();
    assert!(matches!(err.kind(), GlyphoErrorType::UnmatchedLbrace));
    assert_eq!(err.instruction_index(), 4);

    // an incomplete trailing instruction wins over bracket errors
    let err = parse("abcd aab").unwrap_err();
    assert!(matches!(err.kind(), GlyphoErrorType::IncompleteInstruction));
    assert_eq!(err.instruction_index(), 1);
}
