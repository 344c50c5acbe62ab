use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KMeansError>;

/// Errors surfaced by the clustering engine and the seeders.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KMeansError {
    /// The requested cluster count was zero.
    #[error("cluster count must be at least 1")]
    InvalidClusterCount,

    /// The engine was constructed without any observations.
    #[error("observation set must not be empty")]
    EmptyObservations,

    /// An accessor was called with an index outside of its valid domain.
    #[error("{what} index {index} out of range (len {len})")]
    OutOfRange {
        /// Name of the indexed collection.
        what: &'static str,
        /// The offending index.
        index: usize,
        /// Length of the indexed collection.
        len: usize,
    },

    /// Fewer initial means than clusters were supplied.
    #[error("expected at least {expected} means, got {found}")]
    NotEnoughMeans {
        /// Number of clusters.
        expected: usize,
        /// Number of means supplied.
        found: usize,
    },

    /// A cluster has no assigned observations, so its mean is undefined.
    #[error("cluster {cluster} has no assigned observations")]
    EmptyCluster {
        /// Index of the empty cluster.
        cluster: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(KMeansError::InvalidClusterCount.to_string(), "cluster count must be at least 1");
        assert_eq!(
            KMeansError::OutOfRange { what: "observation", index: 4, len: 4 }.to_string(),
            "observation index 4 out of range (len 4)"
        );
        assert_eq!(KMeansError::EmptyCluster { cluster: 2 }.to_string(), "cluster 2 has no assigned observations");
        assert_eq!(
            KMeansError::NotEnoughMeans { expected: 3, found: 1 }.to_string(),
            "expected at least 3 means, got 1"
        );
    }
}
