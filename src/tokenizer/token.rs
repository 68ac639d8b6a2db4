/// A Glypho instruction, named after its `.glh` symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    Halt,
    Nop,
    Input,
    Rot,
    Swap,
    Push,
    RRot,
    Dup,
    Add,
    Lbrace,
    Output,
    Multiply,
    Execute,
    Negate,
    Pop,
    Rbrace,
}

impl Opcode {
    /// Maps a code of the equality network to its instruction. Unused codes halt.
    pub fn from_code(code: u8) -> Opcode {
        match code {
            0 => Opcode::Nop,
            1 => Opcode::Input,
            3 => Opcode::Rot,
            4 => Opcode::Swap,
            5 => Opcode::Push,
            9 => Opcode::RRot,
            10 => Opcode::Dup,
            11 => Opcode::Add,
            12 => Opcode::Lbrace,
            13 => Opcode::Output,
            14 => Opcode::Multiply,
            15 => Opcode::Execute,
            16 => Opcode::Negate,
            17 => Opcode::Pop,
            18 => Opcode::Rbrace,
            _ => Opcode::Halt,
        }
    }
    /// Character of the `.glh` symbolic notation.
    pub fn symbol(self) -> char {
        match self {
            Opcode::Halt => '?',
            Opcode::Nop => 'n',
            Opcode::Input => 'i',
            Opcode::Rot => '>',
            Opcode::Swap => '\\',
            Opcode::Push => '1',
            Opcode::RRot => '<',
            Opcode::Dup => 'd',
            Opcode::Add => '+',
            Opcode::Lbrace => '[',
            Opcode::Output => 'o',
            Opcode::Multiply => '*',
            Opcode::Execute => 'e',
            Opcode::Negate => '-',
            Opcode::Pop => '!',
            Opcode::Rbrace => ']',
        }
    }
    pub fn is_brace(self) -> bool {
        matches!(self, Opcode::Lbrace | Opcode::Rbrace)
    }
}

/// One decoded instruction of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub symbols: [char; 4],
    pub opcode: Opcode,
}

impl Token {
    pub fn new(symbols: [char; 4]) -> Token {
        let opcode = super::decode(&symbols);
        Token { symbols, opcode }
    }
}
