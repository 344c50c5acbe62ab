use crate::{DistanceFunction, Primitive, Vector};

/// Squared euclidean distance: `sum((a_i - b_i)^2)`.
///
/// The square root is skipped, since nearest-centroid selection only depends on the ordering.
#[derive(Clone, Copy, Debug, Default)]
pub struct SquaredEuclideanDistance;

impl<T: Primitive, const D: usize> DistanceFunction<T, D> for SquaredEuclideanDistance {
    #[inline(always)]
    fn distance(&self, a: &Vector<T, D>, b: &Vector<T, D>) -> T {
        squared_euclidean(a, b)
    }
}

#[inline(always)]
pub fn squared_euclidean<T: Primitive, const D: usize>(a: &Vector<T, D>, b: &Vector<T, D>) -> T {
    a.iter().zip(b.iter())
        .map(|(&av, &bv)| av - bv)
        .map(|v| v * v)
        .sum()
}
