use lazy_static::*;

use crate::big_num_constants::*;
use crate::word_ops::Word;

lazy_static! {
    /// Value of every byte read as a digit, `NOT_A_DIGIT` for bytes outside `[0-9A-Za-z]`.
    pub static ref DIGIT_VALUES: [u8; 256] = {
        let mut values = [NOT_A_DIGIT; 256];
        for (value, &digit) in DIGITS.iter().enumerate() {
            values[digit as usize] = value as u8;
            values[digit.to_ascii_lowercase() as usize] = value as u8;
        }
        values
    };
    /// For every radix, the largest power `radix^k` that fits in a [`Word`], paired with `k`.
    pub static ref BIG_RADIX: [(Word, usize); MAX_RADIX as usize + 1] = {
        let mut big_radix = [(0, 0); MAX_RADIX as usize + 1];
        for radix in MIN_RADIX..=MAX_RADIX {
            let radix = radix as Word;
            let mut power = radix;
            let mut digits = 1;
            while let Some(next) = power.checked_mul(radix) {
                power = next;
                digits += 1;
            }
            big_radix[radix as usize] = (power, digits);
        }
        big_radix
    };
}

#[test]
fn test_digit_values() {
    assert_eq!(DIGIT_VALUES[b'0' as usize], 0);
    assert_eq!(DIGIT_VALUES[b'9' as usize], 9);
    assert_eq!(DIGIT_VALUES[b'A' as usize], 10);
    assert_eq!(DIGIT_VALUES[b'z' as usize], 35);
    assert_eq!(DIGIT_VALUES[b'-' as usize], NOT_A_DIGIT);
    assert_eq!(DIGIT_VALUES[b' ' as usize], NOT_A_DIGIT);
}

#[test]
fn test_big_radix() {
    assert_eq!(BIG_RADIX[10], (10_000_000_000_000_000_000, 19));
    assert_eq!(BIG_RADIX[16], (1 << 60, 15));
    assert_eq!(BIG_RADIX[2], (1 << 63, 63));
    assert_eq!(BIG_RADIX[36], (36_u64.pow(12), 12));
}
