use std::io::{BufRead, Write};

use big_num::BigInt;

use crate::error::{GlyphoErrorType, Result};
use crate::program::Machine;
use crate::tokenizer::{decode, Opcode};

/// Where execution continues after an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Move the instruction pointer by this many instructions.
    Jump(isize),
    Halt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    opcode: Opcode,
    offset: isize,
}

impl Instruction {
    pub fn new(opcode: Opcode) -> Self {
        Instruction { opcode, offset: 1 }
    }
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }
    /// Jump distance of a bracket; `1` for everything else.
    pub fn offset(&self) -> isize {
        self.offset
    }
    pub(crate) fn set_offset(&mut self, offset: isize) {
        self.offset = offset;
    }

    pub fn execute<R: BufRead, W: Write>(&self, machine: &mut Machine<R, W>) -> Result<Flow> {
        let memory = &mut machine.memory;
        match self.opcode {
            Opcode::Halt => return Ok(Flow::Halt),
            Opcode::Nop => {}
            Opcode::Input => {
                let token = machine.read_token()?.ok_or(GlyphoErrorType::EndOfInput)?;
                let value = BigInt::from_str_radix(&token, machine.environment.base())?;
                machine.memory.push(value);
            }
            Opcode::Rot => memory.shift_up()?,
            Opcode::Swap => memory.swap_top()?,
            Opcode::Push => memory.push(BigInt::one()),
            Opcode::RRot => memory.shift_down()?,
            Opcode::Dup => memory.duplicate_top()?,
            Opcode::Add => {
                let (a, b) = (memory.pop()?, memory.pop()?);
                memory.push(a + b);
            }
            Opcode::Lbrace => {
                if memory.peek()?.is_zero() {
                    return Ok(Flow::Jump(self.offset));
                }
            }
            Opcode::Output => {
                let value = memory.pop()?;
                writeln!(machine.output, "{}", value.to_str_radix(machine.environment.base()))?;
            }
            Opcode::Multiply => {
                let (a, b) = (memory.pop()?, memory.pop()?);
                memory.push(a * b);
            }
            Opcode::Execute => {
                let symbols = [memory.pop()?, memory.pop()?, memory.pop()?, memory.pop()?];
                let opcode = decode(&symbols);
                log::debug!("execute decoded `{}`", opcode.symbol());
                if opcode.is_brace() {
                    return Err(GlyphoErrorType::ExecuteBrace);
                }
                return Instruction::new(opcode).execute(machine);
            }
            Opcode::Negate => memory.peek_mut()?.negate(),
            Opcode::Pop => memory.remove_top()?,
            Opcode::Rbrace => return Ok(Flow::Jump(self.offset)),
        }
        Ok(Flow::Jump(1))
    }
}
