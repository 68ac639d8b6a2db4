//! Glypho \
//! An interpreter for Glypho, a stack language whose instructions are spelled by
//! the equality pattern of four symbols and whose only values are [`BigInt`]s.
//!
//! ```
//! use glypho::{parse, Environment, Machine};
//!
//! // 1 1 + o
//! let program = parse("aabc aabc abac abbb").unwrap();
//! let environment = Environment::new("sum.gly", 10).unwrap();
//! let mut machine = Machine::new(environment, &b""[..], Vec::new());
//! machine.run(&program).unwrap();
//! assert_eq!(machine.into_output(), b"2\n");
//! ```

pub mod environment;
pub mod error;
pub mod memory;
pub mod parser;
pub mod program;
pub mod tokenizer;

pub use big_num::BigInt;
pub use crate::environment::Environment;
pub use crate::error::{GlyphoError, GlyphoErrorType};
pub use crate::memory::Memory;
pub use crate::parser::parse;
pub use crate::program::{Machine, Program};

#[cfg(test)]
mod tests {
    use crate::{parse, Environment, Machine};

    #[test]
    fn it_works() {
        // read two numbers in base 36 and print their product
        let program = parse("xxxy 0001 abbc  z % % %").unwrap();
        assert_eq!(program.to_string(), "ii*o");
        let environment = Environment::new("product.gly", 36).unwrap();
        let input = "ZZZZZZZZZZZZZZZZZZZZ\n-10\n";
        let mut machine = Machine::new(environment, input.as_bytes(), Vec::new());
        machine.run(&program).unwrap();
        let output = String::from_utf8(machine.into_output()).unwrap();
        assert_eq!(output, "-ZZZZZZZZZZZZZZZZZZZZ0\n");
    }
}
