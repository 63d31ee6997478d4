use rand::rngs::SmallRng;
use rand::Rng;

use super::fields::bb31::{BabyBear, P};
use crate::impl_field;

/// The prime field of order 5, small enough to check transforms by hand.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct F5(u32);

impl_field!(F5, 5u32, 2u32);

pub fn f5_vec(values: &[u32]) -> Vec<F5> {
    values.iter().map(|&v| F5::from(v)).collect()
}

pub fn random_values(rng: &mut SmallRng, n: usize) -> Vec<BabyBear> {
    (0..n)
        .map(|_| BabyBear::from_u32_unchecked(rng.gen::<u32>() % P))
        .collect()
}
