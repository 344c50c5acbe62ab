use crate::{Primitive, Result, Seeder, Vector};
use rand::prelude::*;

/// The Forgy method.
///
/// ## Description
/// Every one of the **k** centroids is a copy of a uniformly drawn observation. Draws are
/// independent, so the same observation may be chosen for more than one centroid.
#[derive(Clone, Copy, Debug, Default)]
pub struct Forgy;

impl<T: Primitive, const D: usize> Seeder<T, D> for Forgy {
    fn seed(&self, k: usize, observations: &[Vector<T, D>], out: &mut [Vector<T, D>], rnd: &mut dyn RngCore) -> Result<()> {
        super::check_arguments(k, observations, out)?;
        out.iter_mut().take(k).for_each(|c| {
            *c = observations[rnd.gen_range(0..observations.len())];
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KMeansError;

    #[test]
    fn picks_existing_observations() {
        let observations = [Vector::from([0.0f32]), Vector::from([10.0])];
        let mut rnd = StdRng::seed_from_u64(1337);
        for _ in 0..50 {
            let mut out = [Vector::zero()];
            Forgy.seed(1, &observations, &mut out, &mut rnd).unwrap();
            assert!(observations.contains(&out[0]));
        }
    }

    #[test]
    fn draws_are_independent() {
        // With two observations and eight slots, some slot has to repeat
        let observations = [Vector::from([1.0f64, 1.0]), Vector::from([2.0, 2.0])];
        let mut out = [Vector::zero(); 8];
        Forgy.seed(8, &observations, &mut out, &mut StdRng::seed_from_u64(7)).unwrap();
        assert!(out.iter().all(|c| observations.contains(c)));
        let firsts = out.iter().filter(|c| **c == observations[0]).count();
        assert!(firsts > 1 || out.len() - firsts > 1);
    }

    #[test]
    fn deterministic_with_seeded_generator() {
        let observations: Vec<Vector<f64, 1>> = (0..100).map(|i| Vector::from([i as f64])).collect();
        let (mut a, mut b) = ([Vector::zero(); 4], [Vector::zero(); 4]);
        Forgy.seed(4, &observations, &mut a, &mut StdRng::seed_from_u64(42)).unwrap();
        Forgy.seed(4, &observations, &mut b, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_arguments() {
        let mut rnd = StdRng::seed_from_u64(1);
        let mut out = [Vector::<f32, 1>::zero(); 2];
        assert_eq!(Forgy.seed(2, &[], &mut out, &mut rnd), Err(KMeansError::EmptyObservations));
        assert_eq!(Forgy.seed(0, &[Vector::zero()], &mut out, &mut rnd), Err(KMeansError::InvalidClusterCount));
        assert_eq!(
            Forgy.seed(3, &[Vector::zero()], &mut out, &mut rnd),
            Err(KMeansError::OutOfRange { what: "seed output", index: 2, len: 2 })
        );
    }
}
