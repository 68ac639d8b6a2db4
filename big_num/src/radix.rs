//! Conversion between [`BigInt`] and text in radix 2 to 36.
//!
//! Radixes whose digits pack exactly into a word (2, 4 and 16) are converted by
//! bit slicing. Every other radix goes through word arithmetic: Horner's method
//! when parsing, repeated single-word division when formatting.

use std::fmt;
use std::str::FromStr;

use crate::big_int::{trim_leading_zero, BigInt};
use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::ParseBigIntError;
use crate::word_ops::{Word, WordOps};

fn check_radix(radix: u32) {
    assert!(
        (MIN_RADIX..=MAX_RADIX).contains(&radix),
        "radix must lie in [{}, {}], got {}", MIN_RADIX, MAX_RADIX, radix
    );
}

/// Bits per digit when `radix` digits tile a word exactly.
fn packed_bits(radix: u32) -> Option<u32> {
    if !radix.is_power_of_two() {
        return None;
    }
    let bits = (radix as Word).log2_floor();
    if Word::BITS % bits == 0 {
        Some(bits)
    } else {
        None
    }
}

// 实现解析
impl BigInt {
    /// Parses `text` as an optional `-` followed by digits of `radix`.
    ///
    /// Letters stand for the digits 10 to 35 and may be in either case.
    ///
    /// # Panics
    /// If `radix` is outside `[2, 36]`.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        check_radix(radix);

        let bytes = text.as_bytes();
        let (sign, start) = match bytes.first() {
            Some(b'-') => (true, 1),
            _ => (false, 0),
        };
        if bytes.len() == start {
            return Err(ParseBigIntError::empty(start));
        }

        let mut values = Vec::with_capacity(bytes.len() - start);
        for (index, &symbol) in bytes.iter().enumerate().skip(start) {
            let value = DIGIT_VALUES[symbol as usize];
            if value as u32 >= radix {
                return Err(ParseBigIntError::invalid_digit(index));
            }
            values.push(value);
        }

        // skip leading zero
        let first = values.iter().position(|&v| v != 0).unwrap_or(values.len());
        let values = &values[first..];
        if values.is_empty() {
            return Ok(BigInt::zero());
        }

        let mag = match packed_bits(radix) {
            Some(bits) => BigInt::parse_packed(values, bits),
            None => BigInt::parse_horner(values, radix),
        };
        log::trace!("parsed {} digits of radix {} into {} words", values.len(), radix, mag.len());
        Ok(BigInt::from_raw(mag, sign))
    }

    /// Each word is one chunk of digits, chunked from the least significant end.
    fn parse_packed(values: &[u8], bits: u32) -> Vec<Word> {
        let digits_per_word = (Word::BITS / bits) as usize;
        values
            .rchunks(digits_per_word)
            .map(|chunk| chunk.iter().fold(0, |word: Word, &v| (word << bits) | v as Word))
            .collect()
    }

    /// Horner's method run from the least significant digit: `acc += power * digit; power *= radix`.
    fn parse_horner(values: &[u8], radix: u32) -> Vec<Word> {
        let bits = values.len() * (radix as Word).log2_ceil() as usize;
        let num_words = (bits + Word::BITS as usize - 1) / Word::BITS as usize + 1;

        let mut acc: Vec<Word> = Vec::with_capacity(num_words);
        let mut power: Vec<Word> = Vec::with_capacity(num_words);
        let mut digit_value: Vec<Word> = Vec::with_capacity(num_words);
        acc.push(0);
        power.push(1);

        for &digit in values.iter().rev() {
            if digit != 0 {
                digit_value.clear();
                digit_value.extend_from_slice(&power);
                BigInt::mul_word_assign(&mut digit_value, digit as Word);
                BigInt::add_assign_mag(&mut acc, &digit_value);
            }
            BigInt::mul_word_assign(&mut power, radix as Word);
        }
        acc
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_str_radix(s, 10)
    }
}

// 实现打印
impl BigInt {
    /// Formats the value in `radix` with uppercase digits and a leading `-` when negative.
    ///
    /// # Panics
    /// If `radix` is outside `[2, 36]`.
    pub fn to_str_radix(&self, radix: u32) -> String {
        let digits = self.magnitude_to_str_radix(radix);
        if self.sign {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    fn magnitude_to_str_radix(&self, radix: u32) -> String {
        check_radix(radix);
        if self.is_zero() {
            return String::from("0");
        }

        // least significant digit first
        let digits = match packed_bits(radix) {
            Some(bits) => self.packed_digits(bits),
            None => self.divided_digits(radix),
        };
        digits.iter().rev().map(|&d| d as char).collect()
    }

    fn packed_digits(&self, bits: u32) -> Vec<u8> {
        let mask: Word = (1 << bits) - 1;
        let digits_per_word = Word::BITS / bits;
        let mut digits = Vec::with_capacity(self.mag.len() * digits_per_word as usize);
        for &word in &self.mag {
            for group in 0..digits_per_word {
                digits.push(DIGITS[((word >> (group * bits)) & mask) as usize]);
            }
        }
        // down to the highest set bit
        while digits.last() == Some(&b'0') {
            digits.pop();
        }
        digits
    }

    /// Divides by the largest power of `radix` that fits in a word, then expands each
    /// remainder into its digits. All groups but the most significant are zero padded.
    fn divided_digits(&self, radix: u32) -> Vec<u8> {
        let (big_radix, group_len) = BIG_RADIX[radix as usize];
        let radix = radix as Word;
        let mut work = self.mag.clone();
        let mut digits = Vec::with_capacity(self.mag.len() * group_len);

        loop {
            let mut rem = BigInt::div_rem_word_assign(&mut work, big_radix);
            if BigInt::is_zero_mag(&work) {
                while rem != 0 {
                    digits.push(DIGITS[(rem % radix) as usize]);
                    rem /= radix;
                }
                return digits;
            }
            for _ in 0..group_len {
                digits.push(DIGITS[(rem % radix) as usize]);
                rem /= radix;
            }
        }
    }

    /// Long division of `x` by a single word, most significant word first. Returns the remainder.
    pub(crate) fn div_rem_word_assign(x: &mut Vec<Word>, divisor: Word) -> Word {
        let mut rem: Word = 0;
        for word in x.iter_mut().rev() {
            // rem < divisor, so every step's quotient fits in a word
            let (q, r) = Word::divide_wide(rem, *word, divisor);
            *word = q;
            rem = r;
        }
        trim_leading_zero!(x);
        rem
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.sign, "", &self.magnitude_to_str_radix(10))
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.sign, "0b", &self.magnitude_to_str_radix(2))
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.sign, "0o", &self.magnitude_to_str_radix(8))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.sign, "0x", &self.magnitude_to_str_radix(16))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.sign, "0x", &self.magnitude_to_str_radix(16).to_ascii_lowercase())
    }
}

#[test]
fn test_from_str_radix() {
    let a = BigInt::from_str_radix("FF", 16).unwrap();
    assert_eq!(a, BigInt::from(255));
    let a = BigInt::from_str_radix("-ff", 16).unwrap();
    assert_eq!(a, BigInt::from(-255));
    let a = BigInt::from_str_radix("1010", 2).unwrap();
    assert_eq!(a, BigInt::from(10));
    let a = BigInt::from_str_radix("-Z", 36).unwrap();
    assert_eq!(a, BigInt::from(-35));
    let a = BigInt::from_str_radix("18446744073709551616", 10).unwrap();
    assert_eq!(a.magnitude(), &[0, 1]);
    let a = BigInt::from_str_radix("10000000000000000", 16).unwrap();
    assert_eq!(a.magnitude(), &[0, 1]);
    let a = BigInt::from_str_radix("0000000000000000000000000000000000000001", 4).unwrap();
    assert_eq!(a, BigInt::one());
}

#[test]
fn test_canonical_zero() {
    for radix in MIN_RADIX..=MAX_RADIX {
        for text in ["0", "-0", "00", "-000000000000000000000000000000000000000000000000000000000000000000000"] {
            let zero = BigInt::from_str_radix(text, radix).unwrap();
            assert!(zero.is_zero(), "{} in radix {}", text, radix);
            assert!(!zero.is_negative(), "{} in radix {}", text, radix);
            assert_eq!(zero.width(), 1);
        }
    }
}

#[test]
fn test_parse_errors() {
    use crate::error::ParseErrorKind;

    let err = BigInt::from_str_radix("", 10).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::Empty);
    let err = BigInt::from_str_radix("-", 10).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::Empty);

    let err = BigInt::from_str_radix("12A", 10).unwrap_err();
    assert_eq!((err.kind(), err.position()), (ParseErrorKind::InvalidDigit, 2));
    let err = BigInt::from_str_radix("102", 2).unwrap_err();
    assert_eq!((err.kind(), err.position()), (ParseErrorKind::InvalidDigit, 2));
    let err = BigInt::from_str_radix("-1G", 16).unwrap_err();
    assert_eq!((err.kind(), err.position()), (ParseErrorKind::InvalidDigit, 2));
    let err = BigInt::from_str_radix("1-1", 10).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::InvalidDigit);
    let err = BigInt::from_str_radix("+1", 10).unwrap_err();
    assert_eq!((err.kind(), err.position()), (ParseErrorKind::InvalidDigit, 0));
    let err = BigInt::from_str_radix("1 ", 10).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::InvalidDigit);
}

#[test]
#[should_panic]
fn test_bad_radix() {
    let _ = BigInt::from_str_radix("1", 37);
}

#[test]
fn test_to_string() {
    let a = BigInt::from_str_radix("FF", 16).unwrap() * BigInt::from_str_radix("2", 16).unwrap();
    assert_eq!(a.to_str_radix(16), "1FE");

    let text = "123456789012345678901234567890";
    assert_eq!(BigInt::from_str_radix(text, 10).unwrap().to_str_radix(10), text);

    assert_eq!(BigInt::from_str_radix("1010", 2).unwrap().to_str_radix(2), "1010");

    let a = BigInt::from_str_radix("1000", 10).unwrap() - BigInt::from_str_radix("999", 10).unwrap();
    assert_eq!(a.to_str_radix(10), "1");

    // zero padding inside the value survives group division
    let text = "100000000000000000000000000000000000000000000000000000000000000000000000001";
    assert_eq!(BigInt::from_str_radix(text, 10).unwrap().to_string(), text);
    let text = "-10000000000000000000000000000000000000000000000000000000000000000000000000000000000";
    assert_eq!(BigInt::from_str_radix(text, 2).unwrap().to_str_radix(2), text);

    for radix in MIN_RADIX..=MAX_RADIX {
        assert_eq!(BigInt::zero().to_str_radix(radix), "0");
        assert_eq!(BigInt::from(-1).to_str_radix(radix), "-1");
    }
    assert_eq!(BigInt::from(u64::MAX).to_str_radix(16), "FFFFFFFFFFFFFFFF");
    assert_eq!(BigInt::from(35).to_str_radix(36), "Z");
    assert_eq!(BigInt::from(-36).to_str_radix(36), "-10");
}

#[test]
fn test_display() {
    let a = BigInt::from(-255);
    assert_eq!(format!("{}", a), "-255");
    assert_eq!(format!("{:>6}", a), "  -255");
    assert_eq!(format!("{:X}", a), "-FF");
    assert_eq!(format!("{:#x}", a), "-0xff");
    assert_eq!(format!("{:b}", BigInt::from(5)), "101");
    assert_eq!(format!("{:o}", BigInt::from(64)), "100");
    assert_eq!("-42".parse::<BigInt>().unwrap(), BigInt::from(-42));
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::RandomBits;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_round_trip() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..50 {
            let bits = prng.gen_range(1..400);
            let reference: num_bigint::BigInt = prng.sample(RandomBits::new(bits));
            for radix in MIN_RADIX..=MAX_RADIX {
                let text = reference.to_str_radix(radix);
                let value = BigInt::from_str_radix(&text, radix).unwrap();
                assert_eq!(value.to_str_radix(radix), text.to_ascii_uppercase());
                assert_eq!(BigInt::from_str_radix(&value.to_str_radix(radix), radix).unwrap(), value);
            }
        }
    }
}
