use super::token::{Opcode, Token};
use crate::error::{GlyphoError, GlyphoErrorType};

/// Code of the equality pattern of four symbols. Only which symbols are equal
/// matters, so `abcd`, `1234` and `xyzw` all give the same code.
pub fn instruction_code<T: PartialEq>(symbols: &[T; 4]) -> u8 {
    let flag0 = symbols[1] != symbols[0];
    let flag1 = symbols[2] != symbols[0];
    let flag2 = flag1 && symbols[2] != symbols[1];
    let flag3 = flag0 && flag2;
    let flag4 = symbols[3] != symbols[0];
    let flag5 = symbols[3] != symbols[1];
    let flag6 = flag0 && flag4 && flag5;
    let flag7 = flag2 && flag4 && flag5 && symbols[3] != symbols[2];
    9 * flag0 as u8 + 3 * (flag1 as u8 + flag3 as u8) + (flag4 as u8 + flag6 as u8 + flag7 as u8)
}

pub fn decode<T: PartialEq>(symbols: &[T; 4]) -> Opcode {
    Opcode::from_code(instruction_code(symbols))
}

/// Splits source text into instructions of four symbols each, ignoring whitespace.
pub fn tokenize(source: &str) -> Result<Vec<Token>, GlyphoError> {
    let symbols: Vec<char> = source.chars().filter(|c| !c.is_whitespace()).collect();
    let chunks = symbols.chunks_exact(4);
    if !chunks.remainder().is_empty() {
        return Err(GlyphoErrorType::IncompleteInstruction.at(symbols.len() / 4));
    }
    Ok(chunks.map(|chunk| Token::new([chunk[0], chunk[1], chunk[2], chunk[3]])).collect())
}

#[test]
fn test_decode() {
    let table = [
        ("aaaa", Opcode::Nop),
        ("aaab", Opcode::Input),
        ("aaba", Opcode::Rot),
        ("aabb", Opcode::Swap),
        ("aabc", Opcode::Push),
        ("abaa", Opcode::RRot),
        ("abab", Opcode::Dup),
        ("abac", Opcode::Add),
        ("abba", Opcode::Lbrace),
        ("abbb", Opcode::Output),
        ("abbc", Opcode::Multiply),
        ("abca", Opcode::Execute),
        ("abcb", Opcode::Negate),
        ("abcc", Opcode::Pop),
        ("abcd", Opcode::Rbrace),
    ];
    for (pattern, opcode) in table {
        let chars: Vec<char> = pattern.chars().collect();
        assert_eq!(decode(&[chars[0], chars[1], chars[2], chars[3]]), opcode, "{}", pattern);
    }
    // only the pattern matters
    assert_eq!(decode(&['x', 'y', 'y', 'x']), Opcode::Lbrace);
    assert_eq!(decode(&[7, 7, 7, 8]), Opcode::Input);
    assert_eq!(Opcode::from_code(2), Opcode::Halt);
}

#[test]
fn test_tokenize() {
    let tokens = tokenize("aabc\n a a b c\tabbb").unwrap();
    let opcodes: Vec<Opcode> = tokens.iter().map(|t| t.opcode).collect();
    assert_eq!(opcodes, vec![Opcode::Push, Opcode::Push, Opcode::Output]);
    assert_eq!(tokens[1].symbols, ['a', 'a', 'b', 'c']);

    let err = tokenize("aabc abb").unwrap_err();
    assert!(matches!(err.kind(), GlyphoErrorType::IncompleteInstruction));
    assert_eq!(err.instruction_index(), 1);

    assert!(tokenize("  \n").unwrap().is_empty());
}
