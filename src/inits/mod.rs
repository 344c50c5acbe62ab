pub(crate) mod forgy;
pub(crate) mod precomputed;
pub(crate) mod randompartition;

pub use forgy::Forgy;
pub use precomputed::Precomputed;
pub use randompartition::RandomPartition;

use crate::{KMeansError, Primitive, Result, Vector};

/// Shared argument validation for all seeders.
pub(crate) fn check_arguments<T: Primitive, const D: usize>(
    k: usize, observations: &[Vector<T, D>], out: &[Vector<T, D>],
) -> Result<()> {
    if k == 0 {
        return Err(KMeansError::InvalidClusterCount);
    }
    if observations.is_empty() {
        return Err(KMeansError::EmptyObservations);
    }
    if out.len() < k {
        return Err(KMeansError::OutOfRange { what: "seed output", index: k - 1, len: out.len() });
    }
    Ok(())
}
