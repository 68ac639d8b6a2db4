pub const DIGITS: [u8; 36] = [
    b'0', b'1', b'2', b'3', b'4', b'5',
    b'6', b'7', b'8', b'9', b'A', b'B',
    b'C', b'D', b'E', b'F', b'G', b'H',
    b'I', b'J', b'K', b'L', b'M', b'N',
    b'O', b'P', b'Q', b'R', b'S', b'T',
    b'U', b'V', b'W', b'X', b'Y', b'Z'
];

pub const MIN_RADIX: u32 = 2;

pub const MAX_RADIX: u32 = 36;

/// Marks a byte that is not a digit in any radix.
pub const NOT_A_DIGIT: u8 = u8::MAX;
