//! # Word Ops
//! Machine word primitives the big integer engine is built on.
//!
//! Every operation works on a single unsigned word, or on a double word given
//! as a `(high, low)` pair. The double-width arithmetic is carried out in the
//! next wider native integer, so the results are the same on every target.

/// The digit type of [`BigInt`](crate::BigInt). The magnitude is stored in base `2^Word::BITS`.
pub type Word = u64;

/// Native integer wide enough to hold the product of two [`Word`]s.
pub type DoubleWord = u128;

pub trait WordOps: Copy + Sized {
    /// Bit width of the word.
    const BITS: u32;

    /// Full product `self * rhs`, returned as `(high, low)`.
    fn multiply_wide(self, rhs: Self) -> (Self, Self);

    /// Divides the double word `(high, low)` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// # Panics
    /// If `divisor` is zero, or if `high >= divisor` (the quotient would not fit in one word).
    fn divide_wide(high: Self, low: Self, divisor: Self) -> (Self, Self);

    /// Index of the highest set bit.
    ///
    /// # Panics
    /// If `self` is zero.
    fn log2_floor(self) -> u32;

    /// `log2_floor`, rounded up when `self` is not a power of two.
    ///
    /// # Panics
    /// If `self` is zero.
    fn log2_ceil(self) -> u32;
}

macro_rules! impl_word_ops {
    ($($word: ty => $double: ty),*) => {
    $(
    impl WordOps for $word {
        const BITS: u32 = <$word>::BITS;

        #[inline(always)]
        fn multiply_wide(self, rhs: Self) -> (Self, Self) {
            let product = (self as $double) * (rhs as $double);
            ((product >> <$word>::BITS) as $word, product as $word)
        }

        #[inline(always)]
        fn divide_wide(high: Self, low: Self, divisor: Self) -> (Self, Self) {
            assert!(divisor != 0, "divide_wide: division by zero");
            assert!(high < divisor, "divide_wide: quotient overflows a word ({} >= {})", high, divisor);
            let dividend = ((high as $double) << <$word>::BITS) | (low as $double);
            let divisor = divisor as $double;
            ((dividend / divisor) as $word, (dividend % divisor) as $word)
        }

        #[inline(always)]
        fn log2_floor(self) -> u32 {
            assert!(self != 0, "log2_floor: log of zero");
            <$word>::BITS - 1 - self.leading_zeros()
        }

        #[inline(always)]
        fn log2_ceil(self) -> u32 {
            let floor = self.log2_floor();
            floor + (floor != self.trailing_zeros()) as u32
        }
    }
    )*
    };
}

impl_word_ops!(u32 => u64, u64 => u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_wide() {
        assert_eq!(0_u64.multiply_wide(u64::MAX), (0, 0));
        assert_eq!(u64::MAX.multiply_wide(u64::MAX), (u64::MAX - 1, 1));
        assert_eq!((1_u64 << 63).multiply_wide(2), (1, 0));
        assert_eq!(0xFFFF_FFFF_u32.multiply_wide(0x1_0000 - 1), (0xFFFE, 0xFFFF_0001));
    }

    #[test]
    fn test_divide_wide() {
        assert_eq!(u64::divide_wide(0, 100, 7), (14, 2));
        assert_eq!(u64::divide_wide(1, 0, 2), (1 << 63, 0));
        assert_eq!(u64::divide_wide(6, 5, 7), ((((6_u128 << 64) | 5) / 7) as u64, (((6_u128 << 64) | 5) % 7) as u64));
        assert_eq!(u32::divide_wide(9, 9, 10), (0xE666_6667, 3));
    }

    #[test]
    #[should_panic]
    fn test_divide_wide_overflow() {
        u64::divide_wide(7, 0, 7);
    }

    #[test]
    #[should_panic]
    fn test_divide_wide_by_zero() {
        u32::divide_wide(0, 1, 0);
    }

    #[test]
    fn test_log2() {
        assert_eq!(1_u64.log2_floor(), 0);
        assert_eq!(1_u64.log2_ceil(), 0);
        assert_eq!(16_u64.log2_floor(), 4);
        assert_eq!(16_u64.log2_ceil(), 4);
        assert_eq!(10_u64.log2_floor(), 3);
        assert_eq!(10_u64.log2_ceil(), 4);
        assert_eq!(36_u32.log2_ceil(), 6);
        assert_eq!(u64::MAX.log2_floor(), 63);
        assert_eq!(u64::MAX.log2_ceil(), 64);
    }

    #[test]
    #[should_panic]
    fn test_log2_zero() {
        0_u64.log2_floor();
    }
}
