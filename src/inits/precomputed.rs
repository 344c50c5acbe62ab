use crate::{KMeansError, Primitive, Result, Seeder, Vector};
use rand::RngCore;

/// Use caller-provided centroids as the seed.
///
/// The first **k** entries are used, any surplus is ignored.
#[derive(Clone, Debug)]
pub struct Precomputed<T: Primitive, const D: usize>(pub Vec<Vector<T, D>>);

impl<T: Primitive, const D: usize> Seeder<T, D> for Precomputed<T, D> {
    fn seed(&self, k: usize, observations: &[Vector<T, D>], out: &mut [Vector<T, D>], _rnd: &mut dyn RngCore) -> Result<()> {
        super::check_arguments(k, observations, out)?;
        if self.0.len() < k {
            return Err(KMeansError::NotEnoughMeans { expected: k, found: self.0.len() });
        }
        out[..k].copy_from_slice(&self.0[..k]);
        Ok(())
    }
}
