use crate::impl_field;

pub const P: u32 = 2013265921; // 15 * 2 ** 27 + 1
pub const GENERATOR: u32 = 31;
pub const TWO_ADICITY: u32 = 27;

/// The BabyBear prime field.
///
/// Its multiplicative group has a subgroup of order `2^k` for every `k <= 27`, so every
/// power-of-two domain up to that size is available for FFTs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BabyBear(u32);

impl_field!(BabyBear, P, GENERATOR);

#[cfg(test)]
#[macro_export]
macro_rules! bb31 {
    ($m:expr) => {
        $crate::core::fields::bb31::BabyBear::from_u32_unchecked($m)
    };
}

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::{BabyBear, P, TWO_ADICITY};
    use crate::core::fields::{Field, FieldExpOps};

    fn mul_p(a: u32, b: u32) -> u32 {
        ((a as u64 * b as u64) % P as u64) as u32
    }

    fn add_p(a: u32, b: u32) -> u32 {
        ((a as u64 + b as u64) % P as u64) as u32
    }

    fn neg_p(a: u32) -> u32 {
        if a == 0 {
            0
        } else {
            P - a
        }
    }

    #[test]
    fn test_basic_ops() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..10000 {
            let x: u32 = rng.gen::<u32>() % P;
            let y: u32 = rng.gen::<u32>() % P;
            assert_eq!(bb31!(add_p(x, y)), bb31!(x) + bb31!(y));
            assert_eq!(bb31!(mul_p(x, y)), bb31!(x) * bb31!(y));
            assert_eq!(bb31!(neg_p(x)), -bb31!(x));
            assert_eq!(bb31!(x) - bb31!(y) + bb31!(y), bb31!(x));
        }
    }

    #[test]
    fn test_inverse() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..100 {
            let x = bb31!(rng.gen_range(1..P));
            assert_eq!(x * x.inverse(), BabyBear::one());
            assert_eq!(bb31!(1) / x, x.inverse());
        }
    }

    #[test]
    #[should_panic(expected = "0 has no inverse")]
    fn inverse_of_zero_panics() {
        BabyBear::zero().inverse();
    }

    #[test]
    fn generator_has_full_order() {
        let g = BabyBear::from_raw(BabyBear::GENERATOR);

        // p - 1 = 2^27 * 3 * 5
        for factor in [2, 3, 5] {
            assert_ne!(g.pow(((P - 1) / factor) as u128), BabyBear::one());
        }
        assert_eq!(g.pow((P - 1) as u128), BabyBear::one());
    }

    #[test]
    fn largest_two_adic_root() {
        let omega = BabyBear::root_of_unity(1 << TWO_ADICITY);

        assert_eq!(omega.pow(1 << (TWO_ADICITY - 1)), -BabyBear::one());
    }

    #[test]
    fn raw_conversion_reduces() {
        assert_eq!(BabyBear::from_raw(P as u64 + 3), bb31!(3));
        assert_eq!(BabyBear::from(P), BabyBear::zero());
        assert_eq!((-bb31!(1)).to_raw(), (P - 1) as u64);
    }

    #[test]
    fn from_str_radix_works() {
        assert_eq!(BabyBear::from_str_radix("ff", 16).unwrap(), bb31!(255));
        assert_eq!(BabyBear::from_str_radix("2013265922", 10).unwrap(), bb31!(1));
        assert!(BabyBear::from_str_radix("not a number", 10).is_err());
    }

    #[test]
    fn display_prints_canonical_value() {
        assert_eq!((-bb31!(1)).to_string(), "2013265920");
    }
}
