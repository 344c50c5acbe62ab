use crate::{DistanceFunction, Primitive, Vector};

/// Manhattan (taxicab) distance: `sum(|a_i - b_i|)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanDistance;

impl<T: Primitive, const D: usize> DistanceFunction<T, D> for ManhattanDistance {
    #[inline(always)]
    fn distance(&self, a: &Vector<T, D>, b: &Vector<T, D>) -> T {
        manhattan(a, b)
    }
}

#[inline(always)]
pub fn manhattan<T: Primitive, const D: usize>(a: &Vector<T, D>, b: &Vector<T, D>) -> T {
    a.iter().zip(b.iter())
        .map(|(&av, &bv)| (av - bv).abs())
        .sum()
}
