use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::iter::{successors, Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

pub mod bb31;

pub trait FieldExpOps: Mul<Output = Self> + MulAssign + Sized + One + Clone {
    fn square(&self) -> Self {
        self.clone() * self.clone()
    }

    fn pow(&self, exp: u128) -> Self {
        let mut res = Self::one();
        let mut base = self.clone();
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                res *= base.clone();
            }
            base = base.square();
            exp >>= 1;
        }
        res
    }

    fn inverse(&self) -> Self;
}

/// A prime field whose elements are backed by canonical integers below [`Field::MODULUS`].
pub trait Field:
    FieldExpOps
    + Copy
    + Debug
    + Display
    + Eq
    + Hash
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + DivAssign
    + Sum
    + for<'a> Sum<&'a Self>
    + Product
    + for<'a> Product<&'a Self>
    + Send
    + Sync
{
    /// The field modulus.
    const MODULUS: u64;

    /// A generator of the whole multiplicative group.
    const GENERATOR: u64;

    /// Reduces `value` modulo [`Field::MODULUS`].
    fn from_raw(value: u64) -> Self;

    /// Returns the canonical integer representative, in `[0, MODULUS)`.
    fn to_raw(&self) -> u64;

    /// Returns true if the multiplicative group has a subgroup of order `n`.
    fn supports_domain(n: usize) -> bool {
        n != 0 && (Self::MODULUS - 1) % n as u64 == 0
    }

    /// Returns the canonical generator of the subgroup of order `n`.
    ///
    /// # Panics
    ///
    /// Panics if there is no subgroup of order `n`.
    fn root_of_unity(n: usize) -> Self {
        assert!(Self::supports_domain(n), "no subgroup of order {n}");
        Self::from_raw(Self::GENERATOR).pow(((Self::MODULUS - 1) / n as u64) as u128)
    }

    /// Returns `[1, ω, ω^2, .., ω^(n-1)]` where `ω` is [`Field::root_of_unity`] of order `n`.
    ///
    /// # Panics
    ///
    /// Panics if there is no subgroup of order `n`.
    fn roots_of_unity(n: usize) -> Vec<Self> {
        let omega = Self::root_of_unity(n);
        successors(Some(Self::one()), |&x| Some(x * omega))
            .take(n)
            .collect()
    }
}

/// Inverts a batch of elements using Montgomery's trick.
///
/// # Panics
///
/// Panics if any element is zero.
pub fn batch_inverse<F: Field>(column: &[F]) -> Vec<F> {
    let n = column.len();
    let mut dst = vec![F::zero(); n];
    if n == 0 {
        return dst;
    }

    // First pass.
    dst[0] = column[0];
    for i in 1..n {
        dst[i] = dst[i - 1] * column[i];
    }

    // Inverse cumulative product.
    let mut curr_inverse = dst[n - 1].inverse();

    // Second pass.
    for i in (1..n).rev() {
        dst[i] = dst[i - 1] * curr_inverse;
        curr_inverse *= column[i];
    }
    dst[0] = curr_inverse;
    dst
}

/// Implements a prime field over a `u32` newtype whose inner value is kept canonical.
///
/// `$modulus` must fit in 31 bits and `$generator` must generate the multiplicative group.
#[macro_export]
macro_rules! impl_field {
    ($field_name: ident, $modulus: expr, $generator: expr) => {
        impl $field_name {
            pub const fn from_u32_unchecked(arg: u32) -> Self {
                Self(arg)
            }

            pub fn reduce(val: u64) -> Self {
                Self((val % ($modulus as u64)) as u32)
            }

            /// Parses an integer in the given radix and reduces it into the field.
            pub fn from_str_radix(
                src: &str,
                radix: u32,
            ) -> Result<Self, ::std::num::ParseIntError> {
                u64::from_str_radix(src, radix).map(Self::reduce)
            }
        }

        impl From<u32> for $field_name {
            fn from(value: u32) -> Self {
                Self::reduce(value as u64)
            }
        }

        impl ::std::fmt::Display for $field_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::std::ops::Add for $field_name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self::reduce((self.0 as u64) + (rhs.0 as u64))
            }
        }

        impl ::std::ops::Neg for $field_name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self::reduce(($modulus as u64) - (self.0 as u64))
            }
        }

        impl ::std::ops::Sub for $field_name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self::reduce((self.0 as u64) + ($modulus as u64) - (rhs.0 as u64))
            }
        }

        impl ::std::ops::Mul for $field_name {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                Self::reduce((self.0 as u64) * (rhs.0 as u64))
            }
        }

        impl ::std::ops::Div for $field_name {
            type Output = Self;

            #[allow(clippy::suspicious_arithmetic_impl)]
            fn div(self, rhs: Self) -> Self::Output {
                use $crate::core::fields::FieldExpOps;
                self * rhs.inverse()
            }
        }

        impl ::std::ops::AddAssign for $field_name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl ::std::ops::SubAssign for $field_name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl ::std::ops::MulAssign for $field_name {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl ::std::ops::DivAssign for $field_name {
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl ::num_traits::One for $field_name {
            fn one() -> Self {
                Self(1)
            }
        }

        impl ::num_traits::Zero for $field_name {
            fn zero() -> Self {
                Self(0)
            }

            fn is_zero(&self) -> bool {
                self.0 == 0
            }
        }

        impl ::std::iter::Sum for $field_name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self(0), |acc, x| acc + x)
            }
        }

        impl<'a> ::std::iter::Sum<&'a Self> for $field_name {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(Self(0), |acc, &x| acc + x)
            }
        }

        impl ::std::iter::Product for $field_name {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self(1), |acc, x| acc * x)
            }
        }

        impl<'a> ::std::iter::Product<&'a Self> for $field_name {
            fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(Self(1), |acc, &x| acc * x)
            }
        }

        impl $crate::core::fields::FieldExpOps for $field_name {
            fn inverse(&self) -> Self {
                assert!(self.0 != 0, "0 has no inverse");
                <Self as $crate::core::fields::FieldExpOps>::pow(self, ($modulus as u128) - 2)
            }
        }

        impl $crate::core::fields::Field for $field_name {
            const MODULUS: u64 = $modulus as u64;
            const GENERATOR: u64 = $generator as u64;

            fn from_raw(value: u64) -> Self {
                Self::reduce(value)
            }

            fn to_raw(&self) -> u64 {
                self.0 as u64
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use num_traits::One;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::bb31::{BabyBear, P};
    use super::{batch_inverse, Field, FieldExpOps};
    use crate::core::test_utils::F5;

    #[test]
    fn test_batch_inverse() {
        let mut rng = SmallRng::seed_from_u64(0);
        let elements = (0..16)
            .map(|_| BabyBear::from_u32_unchecked(rng.gen_range(1..P)))
            .collect::<Vec<_>>();

        let actual = batch_inverse(&elements);

        let expected = elements.iter().map(|e| e.inverse()).collect::<Vec<_>>();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_batch_inverse_empty() {
        assert!(batch_inverse::<BabyBear>(&[]).is_empty());
    }

    #[test]
    fn toy_field_roots_of_unity() {
        let roots = F5::roots_of_unity(4);

        assert_eq!(roots, [1, 2, 4, 3].map(F5::from_u32_unchecked));
    }

    #[test]
    fn roots_of_unity_form_subgroup() {
        for log_size in 0..10 {
            let n = 1 << log_size;
            let roots = BabyBear::roots_of_unity(n);

            assert_eq!(roots.len(), n);
            assert_eq!(roots[0], BabyBear::one());
            if n > 1 {
                assert_eq!(roots[n - 1] * roots[1], BabyBear::one());
                assert_eq!(roots[n / 2], -BabyBear::one());
            }
        }
    }

    #[test]
    fn roots_of_unity_are_stable() {
        assert_eq!(BabyBear::roots_of_unity(64), BabyBear::roots_of_unity(64));
        assert_eq!(BabyBear::root_of_unity(64), BabyBear::roots_of_unity(64)[1]);
    }

    #[test]
    #[should_panic(expected = "no subgroup of order 7")]
    fn roots_of_unity_rejects_unsupported_order() {
        F5::roots_of_unity(7);
    }

    #[test]
    fn supports_domain_works() {
        assert!(F5::supports_domain(2));
        assert!(F5::supports_domain(4));
        assert!(!F5::supports_domain(0));
        assert!(!F5::supports_domain(8));
        assert!(BabyBear::supports_domain(1 << 27));
        assert!(!BabyBear::supports_domain(1 << 28));
    }
}
