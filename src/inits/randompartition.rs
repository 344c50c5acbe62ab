use crate::{KMeansError, Primitive, Result, Seeder, Vector};
use rand::prelude::*;

/// Random-Partition initialization method
///
/// ## Description
/// This initialization method randomly partitions the observations into k partitions, and then
/// calculates these partition's means. These means are then used as initial centroids.
///
/// ## Errors
/// A partition that received no observation has no mean. In that case, [`KMeansError::EmptyCluster`]
/// is returned and **out** is left untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPartition;

impl<T: Primitive, const D: usize> Seeder<T, D> for RandomPartition {
    fn seed(&self, k: usize, observations: &[Vector<T, D>], out: &mut [Vector<T, D>], rnd: &mut dyn RngCore) -> Result<()> {
        super::check_arguments(k, observations, out)?;

        let mut sums = vec![Vector::<T, D>::zero(); k];
        let mut frequency = vec![0usize; k];
        observations.iter().for_each(|o| {
            let cluster = rnd.gen_range(0..k);
            sums[cluster] += *o;
            frequency[cluster] += 1;
        });

        if let Some(cluster) = frequency.iter().position(|&f| f == 0) {
            return Err(KMeansError::EmptyCluster { cluster });
        }
        out.iter_mut()
            .zip(sums.into_iter().zip(frequency.into_iter()))
            .for_each(|(c, (sum, freq))| {
                *c = sum.scale(T::one() / T::from_count(freq));
            });
        Ok(())
    }
}
