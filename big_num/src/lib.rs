//! Big Num \
//! This crate provides:
//! - [`BigInt`]: sign-magnitude arbitrary-precision integers with add, subtract, multiply and negate.
//! - Text conversion of [`BigInt`] in any radix from 2 to 36.
//! - [`WordOps`]: the double-width machine word primitives the arithmetic is built on.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;
mod radix;
pub mod word_ops;

pub use big_int::BigInt;
pub use big_num_constants::{MAX_RADIX, MIN_RADIX};
pub use error::{ParseBigIntError, ParseErrorKind};
pub use word_ops::{DoubleWord, Word, WordOps};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "-900000000000".parse().unwrap();
        assert_eq!(format!("{}", &a + &b), "9100000000000");
        assert_eq!(format!("{}", &a - &b), "10900000000000");
        assert_eq!(format!("{}", &a * &b), "-9000000000000000000000000");
        assert_eq!(format!("{}", -&b), "900000000000");
    }
}
