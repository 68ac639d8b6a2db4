use std::fmt;
use std::io::{BufRead, Write};

use crate::environment::Environment;
use crate::error::{GlyphoError, GlyphoErrorType, Result};
use crate::memory::Memory;
use crate::parser::{Flow, Instruction};

/// A parsed Glypho program. Instructions are addressed by index; brackets carry
/// the relative jump to their partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Program { instructions }
    }
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
    pub fn len(&self) -> usize {
        self.instructions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// The `.glh` symbolic notation, one character per instruction.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.instructions.iter().try_for_each(|i| write!(f, "{}", i.opcode().symbol()))
    }
}

/// Everything a running program touches: its stack, its settings and its I/O.
pub struct Machine<R, W> {
    pub(crate) memory: Memory,
    pub(crate) environment: Environment,
    pub(crate) input: R,
    pub(crate) output: W,
}

impl<R: BufRead, W: Write> Machine<R, W> {
    pub fn new(environment: Environment, input: R, output: W) -> Self {
        Machine { memory: Memory::new(), environment, input, output }
    }
    pub fn memory(&self) -> &Memory {
        &self.memory
    }
    pub fn environment(&self) -> &Environment {
        &self.environment
    }
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs `program` from its first instruction until the instruction pointer
    /// leaves the program or a halt executes.
    pub fn run(&mut self, program: &Program) -> std::result::Result<(), GlyphoError> {
        let mut index = 0;
        while let Some(instruction) = program.instructions().get(index) {
            log::trace!("{:>6}: {}", index, instruction.opcode().symbol());
            let flow = instruction.execute(self).map_err(|kind| kind.at(index));
            let flow = match flow {
                Ok(flow) => flow,
                Err(err) => {
                    // keep what was printed before the failure
                    let _ = self.output.flush();
                    return Err(err);
                }
            };
            if self.environment.dump_memory() {
                self.memory.dump(&mut self.output).map_err(|kind| kind.at(index))?;
            }
            match flow {
                Flow::Halt => break,
                Flow::Jump(offset) => match index.checked_add_signed(offset) {
                    Some(next) => index = next,
                    None => break,
                },
            }
        }
        self.output.flush().map_err(|err| GlyphoErrorType::from(err).at(index))
    }

    /// Next whitespace-delimited token of the input, `None` once the input is exhausted.
    pub(crate) fn read_token(&mut self) -> Result<Option<String>> {
        let mut token = Vec::new();
        loop {
            let buf = self.input.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &byte in buf {
                used += 1;
                if byte.is_ascii_whitespace() {
                    if token.is_empty() {
                        continue;
                    }
                    done = true;
                    break;
                }
                token.push(byte);
            }
            self.input.consume(used);
            if done {
                break;
            }
        }
        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(String::from_utf8_lossy(&token).into_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use big_num::BigInt;

    /// Runs `source` with `input`, returning the output and the final stack.
    fn run(source: &str, input: &str, base: u32) -> (std::result::Result<(), GlyphoError>, String, Vec<BigInt>) {
        let program = parse(source).unwrap();
        let environment = Environment::new("test.gly", base).unwrap();
        let mut machine = Machine::new(environment, input.as_bytes(), Vec::new());
        let result = machine.run(&program);
        let stack = machine.memory().iter().cloned().collect();
        let output = String::from_utf8(machine.into_output()).unwrap();
        (result, output, stack)
    }

    #[test]
    fn test_push_add_output() {
        // 1 1 + o
        let (result, output, stack) = run("aabc aabc abac abbb", "", 10);
        assert!(result.is_ok());
        assert_eq!(output, "2\n");
        assert!(stack.is_empty());
    }

    #[test]
    fn test_input_multiply() {
        // i i * o
        let (result, output, _) = run("aaab aaab abbc abbb", "FF\n  -2  ", 16);
        assert!(result.is_ok());
        assert_eq!(output, "-1FE\n");
    }

    #[test]
    fn test_negate_dup_swap() {
        // 1 d + - d 1 \ o o
        let (result, output, stack) = run("aabc abab abac abcb abab aabc aabb abbb abbb", "", 10);
        assert!(result.is_ok());
        assert_eq!(output, "-2\n1\n");
        assert_eq!(stack, vec![BigInt::from(-2)]);
    }

    #[test]
    fn test_rotate() {
        // i i i > o o o
        let (_, output, _) = run("aaab aaab aaab aaba abbb abbb abbb", "1 2 3", 10);
        assert_eq!(output, "2\n1\n3\n");
        // i i i < o o o
        let (_, output, _) = run("aaab aaab aaab abaa abbb abbb abbb", "1 2 3", 10);
        assert_eq!(output, "1\n3\n2\n");
    }

    #[test]
    fn test_loop() {
        // count down from the input: i [ d o 1 - + ] !
        let (result, output, stack) = run("aaab abba abab abbb aabc abcb abac abcd abcc", "3", 10);
        assert!(result.is_ok());
        assert_eq!(output, "3\n2\n1\n");
        assert!(stack.is_empty());
    }

    #[test]
    fn test_loop_skipped() {
        // i [ o ] o: the top is zero so the loop body never runs
        let (result, output, _) = run("aaab abba abbb abcd abbb", "0", 10);
        assert!(result.is_ok());
        assert_eq!(output, "0\n");
    }

    #[test]
    fn test_execute() {
        // i i i i e o: the popped values 1 1 2 3 follow the pattern `aabc`, which pushes 1
        let (result, output, stack) = run("aaab aaab aaab aaab abca abbb", "3 2 1 1", 10);
        assert!(result.is_ok());
        assert_eq!(output, "1\n");
        assert!(stack.is_empty());

        // 1 2 2 1 follows `abba`, a bracket
        let (result, _, _) = run("aaab aaab aaab aaab abca", "1 2 2 1", 10);
        let err = result.unwrap_err();
        assert!(matches!(err.kind(), GlyphoErrorType::ExecuteBrace));
        assert_eq!(err.instruction_index(), 4);
    }

    #[test]
    fn test_empty_stack() {
        // 1 ! o
        let (result, output, _) = run("aabc abcc abbb", "", 10);
        let err = result.unwrap_err();
        assert!(matches!(err.kind(), GlyphoErrorType::EmptyStack));
        assert_eq!(err.instruction_index(), 2);
        assert!(output.is_empty());
    }

    #[test]
    fn test_invalid_input() {
        let (result, _, _) = run("aaab", "12", 2);
        let err = result.unwrap_err();
        assert!(matches!(err.kind(), GlyphoErrorType::InvalidDigit(_)));
        assert_eq!(err.instruction_index(), 0);

        let (result, _, _) = run("aaab", "   ", 10);
        assert!(matches!(result.unwrap_err().kind(), GlyphoErrorType::EndOfInput));
    }

    #[test]
    fn test_dump_memory() {
        // i d o with the stack dumped in decimal after each step
        let program = parse("aaab abab abbb").unwrap();
        let environment = Environment::resolve("dump.gly", Some(16), true, &Default::default()).unwrap();
        let mut machine = Machine::new(environment, &b"FF"[..], Vec::new());
        machine.run(&program).unwrap();
        let output = String::from_utf8(machine.into_output()).unwrap();
        assert_eq!(
            output,
            "MEM_DUMP [0]: 255\n\nMEM_DUMP [0]: 255\nMEM_DUMP [1]: 255\n\nFF\nMEM_DUMP [0]: 255\n\n"
        );
    }

    #[test]
    fn test_display() {
        let program = parse("aaaa aaab aaba aabb aabc abaa abab abac abba abbb abbc abca abcb abcc abcd").unwrap();
        assert_eq!(program.to_string(), "ni>\\1<d+[o*e-!]");
    }
}
