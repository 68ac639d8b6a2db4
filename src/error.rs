use std::{error, fmt, io};

use big_num::ParseBigIntError;

#[derive(Debug)]
pub enum GlyphoErrorType {
    // program loading
    IncompleteInstruction,
    UnmatchedRbrace,
    UnmatchedLbrace,

    // execution
    EmptyStack,
    InvalidDigit(ParseBigIntError),
    ExecuteBrace,
    EndOfInput,

    Io(io::Error),
}

impl GlyphoErrorType {
    /// `true` for failures raised while running, `false` for failures raised while loading.
    pub fn is_exception(&self) -> bool {
        !matches!(
            self,
            GlyphoErrorType::IncompleteInstruction | GlyphoErrorType::UnmatchedRbrace | GlyphoErrorType::UnmatchedLbrace
        )
    }
    pub fn at(self, instruction_index: usize) -> GlyphoError {
        GlyphoError(self, instruction_index)
    }
}

impl fmt::Display for GlyphoErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphoErrorType::IncompleteInstruction => f.write_str("incomplete instruction at end of program"),
            GlyphoErrorType::UnmatchedRbrace => f.write_str("`]` without a matching `[`"),
            GlyphoErrorType::UnmatchedLbrace => f.write_str("`[` is never closed"),
            GlyphoErrorType::EmptyStack => f.write_str("not enough values on the stack"),
            GlyphoErrorType::InvalidDigit(err) => write!(f, "invalid input: {}", err),
            GlyphoErrorType::ExecuteBrace => f.write_str("cannot execute a bracket instruction"),
            GlyphoErrorType::EndOfInput => f.write_str("no input left to read"),
            GlyphoErrorType::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl From<ParseBigIntError> for GlyphoErrorType {
    fn from(err: ParseBigIntError) -> Self {
        GlyphoErrorType::InvalidDigit(err)
    }
}

impl From<io::Error> for GlyphoErrorType {
    fn from(err: io::Error) -> Self {
        GlyphoErrorType::Io(err)
    }
}

/// A failure together with the index of the instruction it belongs to.
#[derive(Debug)]
pub struct GlyphoError(pub GlyphoErrorType, pub usize);

pub const EXIT_ERROR: i32 = -1;
pub const EXIT_EXCEPTION: i32 = -2;

impl GlyphoError {
    pub fn kind(&self) -> &GlyphoErrorType {
        &self.0
    }
    pub fn instruction_index(&self) -> usize {
        self.1
    }
    /// `Error:<index>` for load failures, `Exception:<index>` for run-time failures.
    pub fn status_line(&self) -> String {
        let label = if self.0.is_exception() { "Exception" } else { "Error" };
        format!("{}:{}", label, self.1)
    }
    pub fn exit_code(&self) -> i32 {
        if self.0.is_exception() {
            EXIT_EXCEPTION
        } else {
            EXIT_ERROR
        }
    }
}

impl fmt::Display for GlyphoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (instruction {})", self.0, self.1)
    }
}

impl error::Error for GlyphoError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.0 {
            GlyphoErrorType::InvalidDigit(err) => Some(err),
            GlyphoErrorType::Io(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T, E = GlyphoErrorType> = std::result::Result<T, E>;

#[test]
fn test_status_line() {
    let err = crate::parse("abcd").unwrap_err();
    assert!(!err.kind().is_exception());
    assert_eq!(err.status_line(), "Error:0");
    assert_eq!(err.exit_code(), EXIT_ERROR);

    let err = GlyphoErrorType::UnmatchedLbrace.at(3);
    assert_eq!(err.status_line(), "Error:3");

    let err = GlyphoErrorType::EmptyStack.at(7);
    assert!(err.kind().is_exception());
    assert_eq!(err.status_line(), "Exception:7");
    assert_eq!(err.exit_code(), EXIT_EXCEPTION);
    assert_eq!(GlyphoErrorType::EndOfInput.at(0).exit_code(), EXIT_EXCEPTION);
}
