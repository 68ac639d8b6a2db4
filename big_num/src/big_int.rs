//! # BigInt
//! Sign-magnitude arbitrary-precision integers. The magnitude is a little-endian
//! sequence of [`Word`]s, so the value grows as large as memory allows.
//! # Example
//! ```
//! use big_num::BigInt;
//!
//! let a = BigInt::from_str_radix("10000000000000", 10).unwrap();
//! let b = BigInt::from_str_radix("-900000000000", 10).unwrap();
//! assert_eq!((&a + &b).to_string(), "9100000000000");
//! assert_eq!((&a - &b).to_string(), "10900000000000");
//! assert_eq!((&a * &b).to_str_radix(16), "-771D2FA45345AA9000000");
//! ```

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Neg,
};

use crate::word_ops::{Word, WordOps};

/// Drops high-order zero words, keeping a single `0` word for zero.
macro_rules! trim_leading_zero {
    ($vec: expr) => {
        {
            while $vec.len() > 1 && $vec.last() == Some(&0) {
                $vec.pop();
            }
            if $vec.is_empty() {
                $vec.push(0);
            }
        }
    };
}

pub(crate) use trim_leading_zero;

/// An arbitrary-precision signed integer.
///
/// The representation is always canonical: the magnitude has no high-order zero
/// words (zero is the single word `0`) and zero is never negative. Equality and
/// hashing can therefore work on the fields directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) sign: bool,
    pub(crate) mag: Vec<Word>,
}

// 实现构造
impl BigInt {
    pub fn zero() -> Self {
        BigInt { sign: false, mag: vec![0] }
    }
    pub fn one() -> Self {
        BigInt { sign: false, mag: vec![1] }
    }
    /// Wraps a single word. `sign` is ignored when `value` is zero.
    pub fn from_word(value: Word, sign: bool) -> Self {
        BigInt { sign: sign && value != 0, mag: vec![value] }
    }
    /// Adopts a little-endian magnitude without copying it.
    ///
    /// High-order zero words are trimmed and a zero result is made non-negative.
    pub fn from_raw(mut mag: Vec<Word>, sign: bool) -> Self {
        trim_leading_zero!(mag);
        let sign = sign && !BigInt::is_zero_mag(&mag);
        BigInt { sign, mag }
    }
    /// Number of words in the magnitude.
    pub fn width(&self) -> usize {
        self.mag.len()
    }
    /// The little-endian magnitude words.
    pub fn magnitude(&self) -> &[Word] {
        &self.mag
    }
}

macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::from_word(val as Word, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_num {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::from_word(val.unsigned_abs() as Word, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_num!(u8, u16, u32, usize, u64);
impl_signed_to_big_num!(i8, i16, i32, isize, i64);

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// 实现判定
impl BigInt {
    pub(crate) fn is_zero_mag(mag: &[Word]) -> bool {
        mag.len() == 1 && mag[0] == 0
    }
    pub fn is_zero(&self) -> bool {
        BigInt::is_zero_mag(&self.mag)
    }
    pub fn is_one(&self) -> bool {
        !self.sign && self.mag.len() == 1 && self.mag[0] == 1
    }
    /// `true` if the value is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.sign
    }
    /// `true` if the value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.sign && !self.is_zero()
    }
}

// 实现大小比较
impl BigInt {
    /// Compares the absolute values of `self` and `other`.
    pub fn compare_mag(&self, other: &BigInt) -> Ordering {
        BigInt::cmp_mag(&self.mag, &other.mag)
    }

    // both slices are minimal, so the longer one is larger
    fn cmp_mag(x: &[Word], y: &[Word]) -> Ordering {
        match x.len().cmp(&y.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for (a, b) in x.iter().rev().zip(y.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.compare_mag(other),
            (true, true) => other.compare_mag(self),
        }
    }
}

// 实现绝对值与取反
impl BigInt {
    pub fn abs(&self) -> BigInt {
        BigInt { sign: false, mag: self.mag.clone() }
    }
    /// Flips the sign in place. Zero stays non-negative.
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.sign = !self.sign;
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl BigInt {
    /// `x + y` where `y` is taken with sign `y_sign`; subtraction passes the flipped sign.
    fn add_signed(x: &BigInt, y: &BigInt, y_sign: bool) -> BigInt {
        if x.sign == y_sign {
            return BigInt::from_raw(BigInt::add_mag(&x.mag, &y.mag), x.sign);
        }
        match x.compare_mag(y) {
            Ordering::Greater => BigInt::from_raw(BigInt::sub_mag(&x.mag, &y.mag), x.sign),
            Ordering::Less => BigInt::from_raw(BigInt::sub_mag(&y.mag, &x.mag), y_sign),
            Ordering::Equal => BigInt::zero(),
        }
    }

    fn add_big(x: &BigInt, y: &BigInt) -> BigInt {
        BigInt::add_signed(x, y, y.sign)
    }

    fn sub_big(x: &BigInt, y: &BigInt) -> BigInt {
        BigInt::add_signed(x, y, !y.sign)
    }

    fn add_mag(x: &[Word], y: &[Word]) -> Vec<Word> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let mut result = Vec::with_capacity(long.len() + 1);
        result.extend_from_slice(long);
        BigInt::add_assign_mag(&mut result, short);
        result
    }

    /// Ripple-carry `acc += y`, growing `acc` as needed.
    pub(crate) fn add_assign_mag(acc: &mut Vec<Word>, y: &[Word]) {
        if acc.len() < y.len() {
            acc.resize(y.len(), 0);
        }
        let mut carry = false;
        for (a, &b) in acc.iter_mut().zip(y) {
            let (sum, c1) = a.overflowing_add(b);
            let (sum, c2) = sum.overflowing_add(carry as Word);
            *a = sum;
            carry = c1 || c2;
        }
        let mut index = y.len();
        while carry && index < acc.len() {
            let (sum, c) = acc[index].overflowing_add(1);
            acc[index] = sum;
            carry = c;
            index += 1;
        }
        if carry {
            acc.push(1);
        }
    }
}

// 实现减法
impl BigInt {
    /// Ripple-borrow `big - little`. Requires `|big| >= |little|`.
    fn sub_mag(big: &[Word], little: &[Word]) -> Vec<Word> {
        debug_assert!(BigInt::cmp_mag(big, little) != Ordering::Less);
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = false;
        let mut width = 1;

        for (index, (&a, &b)) in big.iter().zip(little).enumerate() {
            let (diff, b1) = a.overflowing_sub(b);
            let (diff, b2) = diff.overflowing_sub(borrow as Word);
            result.push(diff);
            borrow = b1 || b2;
            if diff != 0 {
                width = index + 1;
            }
        }
        for (index, &a) in big.iter().enumerate().skip(little.len()) {
            let (diff, b) = a.overflowing_sub(borrow as Word);
            result.push(diff);
            borrow = b;
            if diff != 0 {
                width = index + 1;
            }
        }
        debug_assert!(!borrow);

        result.truncate(width);
        result
    }
}

// 实现乘法
impl BigInt {
    /// `x *= y` for a single word `y`, chaining the high half of each product into the next word.
    pub(crate) fn mul_word_assign(x: &mut Vec<Word>, y: Word) {
        let mut carry: Word = 0;
        for a in x.iter_mut() {
            let (high, low) = a.multiply_wide(y);
            let (low, c) = low.overflowing_add(carry);
            *a = low;
            carry = high + c as Word;
        }
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Schoolbook product; `x` should be the longer operand.
    fn mul_mag(x: &[Word], y: &[Word]) -> Vec<Word> {
        if y.len() == 1 {
            let mut result = x.to_vec();
            BigInt::mul_word_assign(&mut result, y[0]);
            return result;
        }

        let mut result: Vec<Word> = vec![0; x.len() + y.len()];
        for (y_index, &b) in y.iter().enumerate() {
            if b == 0 {
                continue;
            }
            let mut carry: Word = 0;
            for (x_index, &a) in x.iter().enumerate() {
                // a * b + result + carry <= (B - 1)^2 + 2(B - 1) < B^2, so the high half never overflows
                let (high, low) = a.multiply_wide(b);
                let slot = &mut result[x_index + y_index];
                let (sum, c1) = slot.overflowing_add(low);
                let (sum, c2) = sum.overflowing_add(carry);
                *slot = sum;
                carry = high + c1 as Word + c2 as Word;
            }
            result[y_index + x.len()] = carry;
        }
        result
    }

    fn mul_signed(x: &BigInt, y: &BigInt) -> BigInt {
        let mag = if x.mag.len() >= y.mag.len() {
            BigInt::mul_mag(&x.mag, &y.mag)
        } else {
            BigInt::mul_mag(&y.mag, &x.mag)
        };
        BigInt::from_raw(mag, x.sign != y.sign)
    }
}

macro_rules! forward_binop {
    ($($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident, $f: expr;)*) => {
    $(
    impl $imp<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            $f(self, rhs)
        }
    }

    impl $imp for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: Self) -> Self::Output {
            $f(&self, &rhs)
        }
    }

    impl $imp<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            $f(&self, rhs)
        }
    }

    impl $imp<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            $f(self, &rhs)
        }
    }

    impl $imp_assign<&BigInt> for BigInt {
        fn $method_assign(&mut self, rhs: &BigInt) {
            *self = $f(&*self, rhs);
        }
    }

    impl $imp_assign for BigInt {
        fn $method_assign(&mut self, rhs: Self) {
            *self = $f(&*self, &rhs);
        }
    }
    )*
    };
}

forward_binop! {
    Add, add, AddAssign, add_assign, BigInt::add_big;
    Sub, sub, SubAssign, sub_assign, BigInt::sub_big;
    Mul, mul, MulAssign, mul_assign, BigInt::mul_signed;
}

#[test]
fn test_from() {
    let big: BigInt = 12_i8.into();
    assert_eq!((big.mag[0], big.sign), (12, false));

    let big: BigInt = (-100_i16).into();
    assert_eq!((big.mag[0], big.sign), (100, true));

    let big: BigInt = i64::MIN.into();
    assert_eq!((big.mag[0], big.sign), (1 << 63, true));

    let big: BigInt = u64::MAX.into();
    assert_eq!((big.mag[0], big.sign), (u64::MAX, false));

    let big: BigInt = 0_isize.into();
    assert!(big.is_zero() && !big.is_negative());
}

#[test]
fn test_from_raw() {
    let big = BigInt::from_raw(vec![5, 0, 0], true);
    assert_eq!(big.width(), 1);
    assert_eq!(big, BigInt::from(-5));

    let big = BigInt::from_raw(vec![0, 0], true);
    assert_eq!(big, BigInt::zero());
    assert!(!big.is_negative());

    assert_eq!(BigInt::from_raw(vec![], false), BigInt::zero());
    assert_eq!(BigInt::from_word(0, true), BigInt::zero());
}

#[test]
fn test_predicates() {
    assert!(BigInt::zero().is_zero());
    assert!(!BigInt::zero().is_positive());
    assert!(!BigInt::zero().is_negative());
    assert!(BigInt::one().is_one());
    assert!(!BigInt::from(-1).is_one());
    assert!(BigInt::from(-1).is_negative());
    assert!(BigInt::from(7_u8).is_positive());
}

#[test]
fn test_compare() {
    let values: Vec<BigInt> = vec![
        BigInt::from_raw(vec![0, 1], true),
        BigInt::from(-10),
        BigInt::from(-5),
        BigInt::from(-1),
        BigInt::zero(),
        BigInt::one(),
        BigInt::from(u64::MAX),
        BigInt::from_raw(vec![0, 1], false),
        BigInt::from_raw(vec![1, 1], false),
        BigInt::from_raw(vec![0, 0, 1], false),
    ];
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} <=> {}", a, b);
            assert_eq!(a == b, i == j);
        }
    }
    assert!(BigInt::from(-10) < BigInt::from(-5));
    assert!(BigInt::from(-1) <= BigInt::zero());
    assert!(BigInt::one() >= BigInt::zero());
    assert_eq!(BigInt::from(-3).compare_mag(&BigInt::from(2)), Ordering::Greater);
}

#[test]
fn test_negate() {
    let mut a = BigInt::from(42);
    a.negate();
    assert_eq!(a, BigInt::from(-42));
    a.negate();
    assert_eq!(a, BigInt::from(42));

    let mut zero = BigInt::zero();
    zero.negate();
    assert!(!zero.is_negative());
    assert_eq!(-BigInt::zero(), BigInt::zero());
    assert_eq!(-&BigInt::from(-9), BigInt::from(9));
}

#[test]
fn test_abs() {
    assert_eq!(BigInt::from(-42).abs(), BigInt::from(42));
    assert_eq!(BigInt::from(42).abs(), BigInt::from(42));
    assert_eq!(BigInt::zero().abs(), BigInt::zero());
    let wide = BigInt::from_raw(vec![1, 2, 3], true);
    assert_eq!(wide.abs(), BigInt::from_raw(vec![1, 2, 3], false));
    assert!(!wide.abs().is_negative());
}

#[test]
fn test_mul_multi_word() {
    // (2^64 + 1)^2 = 2^128 + 2^65 + 1
    let a = BigInt::from_raw(vec![1, 1], false);
    assert_eq!(&a * &a, BigInt::from_raw(vec![1, 2, 1], false));
    // (2^128 - 1) * -(2^128 - 1) = -(2^256 - 2^129 + 1)
    let b = BigInt::from_raw(vec![Word::MAX, Word::MAX], false);
    let c = BigInt::from_raw(vec![Word::MAX, Word::MAX], true);
    assert_eq!(&b * &c, BigInt::from_raw(vec![1, 0, Word::MAX - 1, Word::MAX], true));
}

#[test]
fn test_add_carry() {
    let a = BigInt::from(u64::MAX);
    let b = BigInt::one();
    let sum = &a + &b;
    assert_eq!(sum.magnitude(), &[0, 1]);

    let a = BigInt::from_raw(vec![u64::MAX, u64::MAX, u64::MAX], false);
    let sum = &a + &b;
    assert_eq!(sum.magnitude(), &[0, 0, 0, 1]);
    assert_eq!(&b + &a, sum);
}

#[test]
fn test_add_mixed_sign() {
    assert!((BigInt::from(-7) + BigInt::from(7)).is_zero());
    assert!(!(BigInt::from(-7) + BigInt::from(7)).is_negative());
    assert_eq!(BigInt::from(-7) + BigInt::from(3), BigInt::from(-4));
    assert_eq!(BigInt::from(7) + BigInt::from(-3), BigInt::from(4));
    assert_eq!(BigInt::from(3) + BigInt::from(-7), BigInt::from(-4));
    assert_eq!(BigInt::from(-3) + BigInt::from(-7), BigInt::from(-10));
}

#[test]
fn test_sub_shrinks() {
    let a = BigInt::from_raw(vec![0, 0, 1], false);
    let b = BigInt::from_raw(vec![u64::MAX, u64::MAX], false);
    let diff = &a - &b;
    assert_eq!(diff.magnitude(), &[1]);
    assert_eq!(&b - &a, BigInt::from(-1));

    assert_eq!(BigInt::from(1000) - BigInt::from(999), BigInt::one());
    assert_eq!(BigInt::from(5) - BigInt::from(-5), BigInt::from(10));
    assert_eq!(BigInt::from(-5) - BigInt::from(5), BigInt::from(-10));
    assert_eq!(BigInt::zero() - BigInt::from(5), BigInt::from(-5));
    assert_eq!(BigInt::from(-5) - BigInt::from(-5), BigInt::zero());
    assert!(!(BigInt::from(-5) - BigInt::from(-5)).is_negative());
}

#[test]
fn test_mul_by_word() {
    let a = BigInt::from_raw(vec![u64::MAX, u64::MAX], false);
    let product = &a * &BigInt::from(2);
    assert_eq!(product.magnitude(), &[u64::MAX - 1, u64::MAX, 1]);

    let product = &BigInt::from(-3) * &a;
    assert!(product.is_negative());
    assert_eq!(product.width(), 3);

    let zero = &a * &BigInt::zero();
    assert!(zero.is_zero());
    let zero = &BigInt::from(-1) * &BigInt::zero();
    assert!(!zero.is_negative());
}

#[test]
fn test_mul_to_len() {
    // (2^128 - 1)^2 = 2^256 - 2^129 + 1
    let a = BigInt::from_raw(vec![u64::MAX, u64::MAX], false);
    let square = &a * &a;
    assert_eq!(square.magnitude(), &[1, 0, u64::MAX - 1, u64::MAX]);

    // the top word stays zero and is trimmed
    let b = BigInt::from_raw(vec![0, 1], true);
    let product = &b * &b;
    assert_eq!(product.magnitude(), &[0, 0, 1]);
    assert!(!product.is_negative());

    let mut c = BigInt::from_raw(vec![3, 5], false);
    c *= BigInt::from(-1);
    assert_eq!(c, BigInt::from_raw(vec![3, 5], true));
}

#[test]
fn test_assign_ops() {
    let mut a = BigInt::from(10);
    a += BigInt::from(5);
    a -= &BigInt::from(20);
    assert_eq!(a, BigInt::from(-5));
    a *= &BigInt::from(-5);
    assert_eq!(a, BigInt::from(25));
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::{BigUint, Sign};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn random_big_int(prng: &mut ChaCha20Rng) -> BigInt {
        let width = prng.gen_range(1..6);
        let mut mag: Vec<Word> = (0..width).map(|_| prng.gen()).collect();
        // small and boundary values show up often enough to matter
        match prng.gen_range(0..6) {
            0 => mag.truncate(1),
            1 => mag.iter_mut().for_each(|w| *w = u64::MAX),
            2 => mag[0] = 0,
            _ => {}
        }
        BigInt::from_raw(mag, prng.gen())
    }

    fn to_reference(value: &BigInt) -> num_bigint::BigInt {
        let digits: Vec<u32> = value
            .magnitude()
            .iter()
            .flat_map(|w| [*w as u32, (*w >> 32) as u32])
            .collect();
        let sign = if value.is_negative() { Sign::Minus } else { Sign::Plus };
        num_bigint::BigInt::from_biguint(sign, BigUint::new(digits))
    }

    #[test]
    fn test_algebraic_laws() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..200 {
            let a = random_big_int(&mut prng);
            let b = random_big_int(&mut prng);
            let c = random_big_int(&mut prng);

            assert_eq!(&a + &b, &b + &a);
            assert_eq!(&a * &b, &b * &a);
            assert_eq!(&(&a + &b) - &b, a);
            assert_eq!(&a - &a, BigInt::zero());
            assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
            assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }
    }

    #[test]
    fn test_against_reference() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);

        for _ in 0..200 {
            let a = random_big_int(&mut prng);
            let b = random_big_int(&mut prng);
            let (ra, rb) = (to_reference(&a), to_reference(&b));

            assert_eq!(to_reference(&(&a + &b)), &ra + &rb);
            assert_eq!(to_reference(&(&a - &b)), &ra - &rb);
            assert_eq!(to_reference(&(&a * &b)), &ra * &rb);
            assert_eq!(a.cmp(&b), ra.cmp(&rb));
        }
    }

    #[test]
    fn test_canonical_results() {
        let mut prng = ChaCha20Rng::seed_from_u64(2);

        for _ in 0..200 {
            let a = random_big_int(&mut prng);
            let b = random_big_int(&mut prng);
            for result in [&a + &b, &a - &b, &a * &b, -&a] {
                assert!(result.width() == 1 || *result.magnitude().last().unwrap() != 0);
                assert!(!(result.is_zero() && result.is_negative()));
            }
        }
    }
}
