use crate::{api::EmptyClusterPolicy, DistanceFunction, KMeans, KMeansConfig, KMeansError, Primitive, Result, Vector};
use tracing::{debug, info, trace, warn};

impl<T: Primitive, const D: usize, F: DistanceFunction<T, D>> KMeans<T, D, F> {
    /// Index of the centroid nearest to **observation**.
    ///
    /// Ties are broken towards the lowest centroid index: a later centroid only wins if it is
    /// strictly closer than the best one seen so far.
    fn nearest_centroid(&self, observation: &Vector<T, D>) -> usize {
        let mut best_idx = 0;
        let mut best_dist = self.distance.distance(observation, &self.means[0]);
        for (idx, mean) in self.means.iter().enumerate().skip(1) {
            let dist = self.distance.distance(observation, mean);
            if dist < best_dist {
                best_idx = idx;
                best_dist = dist;
            }
        }
        best_idx
    }

    /// Assign every observation to the cluster of its nearest centroid and recount the cluster sizes.
    /// Centroids are not touched.
    ///
    /// ## Returns
    /// - **true** if at least one observation changed its cluster
    /// - **false** if all labels stayed the same (converged)
    pub fn assign(&mut self) -> bool {
        let nearest: Vec<usize> = self.observations.iter().map(|o| self.nearest_centroid(o)).collect();

        let (assignments, cluster_sizes) = (&mut self.assignments, &mut self.cluster_sizes);
        cluster_sizes.iter_mut().for_each(|v| *v = 0);
        let mut changed = 0usize;
        assignments.iter_mut()
            .zip(nearest.into_iter())
            .for_each(|(assignment, cluster)| {
                if *assignment != cluster {
                    changed += 1;
                }
                *assignment = cluster;
                cluster_sizes[cluster] += 1;
            });
        trace!(changed, "assignment pass done");
        changed > 0
    }

    /// Recompute every centroid as the mean of the observations currently assigned to it.
    /// Labels and cluster sizes are not touched.
    ///
    /// ## Errors
    /// With [`EmptyClusterPolicy::Fail`], a cluster without observations aborts the update with
    /// [`KMeansError::EmptyCluster`] before any centroid is modified.
    pub fn update(&mut self) -> Result<()> {
        // Sum all observations in a cluster together
        let mut sums = vec![Vector::<T, D>::zero(); self.k()];
        self.observations.iter()
            .zip(self.assignments.iter().cloned())
            .for_each(|(o, cluster)| sums[cluster] += *o);

        if let Some(cluster) = self.cluster_sizes.iter().position(|&size| size == 0) {
            match self.empty_cluster_policy {
                EmptyClusterPolicy::Fail => return Err(KMeansError::EmptyCluster { cluster }),
                EmptyClusterPolicy::KeepPrevious => self.cluster_sizes.iter().enumerate()
                    .filter(|(_, &size)| size == 0)
                    .for_each(|(cluster, _)| warn!(cluster, "cluster is empty, keeping previous centroid")),
            }
        }

        self.means.iter_mut()
            .zip(sums.into_iter())
            .zip(self.cluster_sizes.iter().cloned())
            .filter(|(_, size)| *size > 0)
            .for_each(|((mean, sum), size)| {
                *mean = sum.scale(T::one() / T::from_count(size));
            });
        Ok(())
    }

    /// Alternate [`KMeans::assign`] and [`KMeans::update`] until an assignment pass changes no label
    /// or **max_iterations** rounds were performed.
    ///
    /// The budget is checked before every assignment pass, so `run(0)` does nothing at all.
    ///
    /// ## Returns
    /// Amount of assign/update rounds actually performed.
    pub fn run(&mut self, max_iterations: usize) -> Result<usize> {
        self.iterate(max_iterations, &mut |_, _| {})
    }

    /// Same as [`KMeans::run`], but notifies the `iteration_done` callback of **config** after every round.
    pub fn run_with(&mut self, max_iterations: usize, config: &KMeansConfig<'_, T, D>) -> Result<usize> {
        self.iterate(max_iterations, &mut |nr, means| (config.iteration_done)(nr, means))
    }

    fn iterate(&mut self, max_iterations: usize, on_iteration: &mut dyn FnMut(usize, &[Vector<T, D>])) -> Result<usize> {
        let mut iterations = 0;
        while iterations < max_iterations && self.assign() {
            self.update()?;
            iterations += 1;
            debug!(iteration = iterations, distsum = %self.distsum(), "iteration done");
            on_iteration(iterations, &self.means);
        }
        if iterations < max_iterations {
            info!(iterations, "converged");
        } else {
            info!(iterations, "stopped at iteration budget");
        }
        Ok(iterations)
    }
}
