use crate::{KMeansError, Primitive, Result, Vector};
use rand::prelude::*;
use std::cell::RefCell;
use std::ops::DerefMut;
use tracing::debug;

pub type InitDoneCallbackFn<'a, T, const D: usize> = &'a dyn Fn(&[Vector<T, D>]);
pub type IterationDoneCallbackFn<'a, T, const D: usize> = &'a dyn Fn(usize, &[Vector<T, D>]);

/// Dissimilarity between two observations of the same dimension.
///
/// Implementations have to be symmetric, non-negative and return zero for identical vectors.
/// Besides the provided [`crate::SquaredEuclideanDistance`] and [`crate::ManhattanDistance`], every
/// `Fn(&Vector<T, D>, &Vector<T, D>) -> T` (closures, function pointers) can be used.
pub trait DistanceFunction<T: Primitive, const D: usize> {
    fn distance(&self, a: &Vector<T, D>, b: &Vector<T, D>) -> T;
}
impl<T: Primitive, const D: usize, F> DistanceFunction<T, D> for F
where
    F: Fn(&Vector<T, D>, &Vector<T, D>) -> T,
{
    #[inline(always)]
    fn distance(&self, a: &Vector<T, D>, b: &Vector<T, D>) -> T {
        self(a, b)
    }
}

/// Strategy producing the initial centroids.
///
/// ## Arguments
/// - **k**: Amount of centroids to produce
/// - **observations**: All observations of the clustering
/// - **out**: Output location, has to hold at least **k** vectors. Only the first **k** are written.
/// - **rnd**: Random number generator to draw from
///
/// Besides [`crate::Forgy`], [`crate::RandomPartition`] and [`crate::Precomputed`], every function
/// with the same signature as [`Seeder::seed`] can be used.
pub trait Seeder<T: Primitive, const D: usize> {
    fn seed(&self, k: usize, observations: &[Vector<T, D>], out: &mut [Vector<T, D>], rnd: &mut dyn RngCore) -> Result<()>;
}
impl<T: Primitive, const D: usize, F> Seeder<T, D> for F
where
    F: Fn(usize, &[Vector<T, D>], &mut [Vector<T, D>], &mut dyn RngCore) -> Result<()>,
{
    fn seed(&self, k: usize, observations: &[Vector<T, D>], out: &mut [Vector<T, D>], rnd: &mut dyn RngCore) -> Result<()> {
        self(k, observations, out, rnd)
    }
}

/// Behavior of [`KMeans::update`] when a cluster has no assigned observations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EmptyClusterPolicy {
    /// Abort the update with [`KMeansError::EmptyCluster`]. No centroid is modified.
    #[default]
    Fail,
    /// Keep the empty cluster's previous centroid and update all others.
    KeepPrevious,
}


/// Options shared by [`KMeans::seed`] and [`KMeans::run_with`].
///
/// Seeding draws from the contained random number generator and reports the seeded centroids
/// through `init_done`. `run_with` reports the centroids after every assign/update round
/// through `iteration_done`. Build instances with [`KMeansConfigBuilder`].
pub struct KMeansConfig<'a, T: Primitive, const D: usize> {
    /// Receives the centroids right after [`KMeans::seed`] wrote them
    pub(crate) init_done: InitDoneCallbackFn<'a, T, D>,
    /// Receives the round number (starting at 1) and the updated centroids after every
    /// round of [`KMeans::run_with`]
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T, D>,
    /// Source of randomness for seeders, entropy-seeded unless replaced
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
}
impl<'a, T: Primitive, const D: usize> Default for KMeansConfig<'a, T, D> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_, _| {},
            rnd: Box::new(RefCell::new(rand::thread_rng())),
        }
    }
}
impl<'a, T: Primitive, const D: usize> KMeansConfig<'a, T, D> {
    /// Start from the defaults: no-op callbacks and a thread-local generator.
    pub fn build() -> KMeansConfigBuilder<'a, T, D> {
        KMeansConfigBuilder { config: KMeansConfig::default() }
    }
}
impl<'a, T: Primitive, const D: usize> std::fmt::Debug for KMeansConfig<'a, T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KMeansConfig").finish_non_exhaustive()
    }
}

pub struct KMeansConfigBuilder<'a, T: Primitive, const D: usize> {
    config: KMeansConfig<'a, T, D>,
}
impl<'a, T: Primitive, const D: usize> KMeansConfigBuilder<'a, T, D> {
    /// Observe the seeded centroids before the first assignment pass.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T, D>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Observe the centroids after each update of [`KMeans::run_with`].
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T, D>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Replace the generator handed to the [`Seeder`]. A seeded generator makes [`KMeans::seed`] repeatable.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd)); self
    }
    /// Finish the configuration.
    pub fn build(self) -> KMeansConfig<'a, T, D> { self.config }
}


/// Entrypoint of this crate's API-Surface.
///
/// The engine takes over the observations and owns the per-observation cluster labels, the
/// per-cluster sizes and the per-cluster centroids (means).
///
/// ## Lifecycle
/// 1. [`KMeans::new`]: fix observations and cluster count. All labels are `0`, all centroids zero.
/// 2. [`KMeans::seed`] or [`KMeans::initialize`]: set the initial centroids.
/// 3. [`KMeans::assign`] / [`KMeans::update`] alternately, or [`KMeans::run`] to do that until convergence.
/// 4. Read back the result using the accessors.
///
/// ## Generics
/// - **T**: Underlying primitive type
/// - **D**: Dimension of every observation
/// - **F**: The [`DistanceFunction`] used to find the nearest centroid
pub struct KMeans<T: Primitive, const D: usize, F: DistanceFunction<T, D>> {
    pub(crate) observations: Vec<Vector<T, D>>,
    pub(crate) means: Vec<Vector<T, D>>,
    pub(crate) assignments: Vec<usize>,
    pub(crate) cluster_sizes: Vec<usize>,
    pub(crate) distance: F,
    pub(crate) empty_cluster_policy: EmptyClusterPolicy,
}
impl<T: Primitive, const D: usize, F: DistanceFunction<T, D>> KMeans<T, D, F> {
    /// Create a new instance of the [`KMeans`] structure.
    ///
    /// ## Arguments
    /// - **k**: Amount of clusters (`>= 1`)
    /// - **observations**: The observations to cluster (non-empty)
    /// - **distance**: The distance function to use
    pub fn new(k: usize, observations: Vec<Vector<T, D>>, distance: F) -> Result<Self> {
        if k == 0 {
            return Err(KMeansError::InvalidClusterCount);
        }
        if observations.is_empty() {
            return Err(KMeansError::EmptyObservations);
        }
        let n = observations.len();
        Ok(Self {
            observations,
            means: vec![Vector::zero(); k],
            assignments: vec![0usize; n],
            cluster_sizes: vec![0usize; k],
            distance,
            empty_cluster_policy: EmptyClusterPolicy::default(),
        })
    }

    /// Set the [`EmptyClusterPolicy`] used by [`KMeans::update`].
    /// ## Default
    /// [`EmptyClusterPolicy::Fail`]
    pub fn with_empty_cluster_policy(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster_policy = policy; self
    }

    /// Overwrite all centroids from **means**. Entries beyond **k** are ignored.
    pub fn initialize(&mut self, means: &[Vector<T, D>]) -> Result<()> {
        let k = self.k();
        if means.len() < k {
            return Err(KMeansError::NotEnoughMeans { expected: k, found: means.len() });
        }
        self.means.copy_from_slice(&means[..k]);
        Ok(())
    }

    /// Produce the initial centroids using **seeder** and the random number generator of **config**,
    /// then notify the config's `init_done` callback.
    pub fn seed<S: Seeder<T, D> + ?Sized>(&mut self, seeder: &S, config: &KMeansConfig<'_, T, D>) -> Result<()> {
        let mut means = vec![Vector::zero(); self.k()];
        seeder.seed(self.k(), &self.observations, &mut means, config.rnd.borrow_mut().deref_mut())?;
        self.initialize(&means)?;
        debug!(k = self.k(), n = self.n(), "centroids seeded");
        (config.init_done)(&self.means);
        Ok(())
    }

    /// Amount of observations.
    pub fn n(&self) -> usize { self.observations.len() }
    /// Amount of clusters.
    pub fn k(&self) -> usize { self.means.len() }

    /// Observation at **index**.
    pub fn observation(&self, index: usize) -> Result<&Vector<T, D>> {
        checked(&self.observations, index, "observation")
    }
    /// Cluster label of the observation at **index**.
    ///
    /// Before the first [`KMeans::assign`], every observation is in cluster `0`.
    pub fn cluster(&self, index: usize) -> Result<usize> {
        checked(&self.assignments, index, "observation").copied()
    }
    /// Amount of observations assigned to **cluster** by the last [`KMeans::assign`].
    pub fn cluster_size(&self, cluster: usize) -> Result<usize> {
        checked(&self.cluster_sizes, cluster, "cluster").copied()
    }
    /// Centroid of **cluster**.
    pub fn mean(&self, cluster: usize) -> Result<&Vector<T, D>> {
        checked(&self.means, cluster, "cluster")
    }

    pub fn observations(&self) -> &[Vector<T, D>] { &self.observations }
    pub fn clusters(&self) -> &[usize] { &self.assignments }
    pub fn cluster_sizes(&self) -> &[usize] { &self.cluster_sizes }
    pub fn means(&self) -> &[Vector<T, D>] { &self.means }

    /// Sum of the distances from every observation to the centroid of its current cluster.
    pub fn distsum(&self) -> T {
        self.observations.iter()
            .zip(self.assignments.iter().cloned())
            .map(|(o, c)| self.distance.distance(o, &self.means[c]))
            .sum()
    }
}

fn checked<'s, V>(values: &'s [V], index: usize, what: &'static str) -> Result<&'s V> {
    values.get(index).ok_or(KMeansError::OutOfRange { what, index, len: values.len() })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Forgy, ManhattanDistance, SquaredEuclideanDistance};
    use std::cell::Cell;

    fn line(values: &[f64]) -> Vec<Vector<f64, 1>> {
        values.iter().map(|&v| Vector::from([v])).collect()
    }

    #[test]
    fn construction() {
        let kmean = KMeans::new(3, line(&[1.0, 2.0]), SquaredEuclideanDistance).unwrap();
        assert_eq!(kmean.n(), 2);
        assert_eq!(kmean.k(), 3);
        assert_eq!(kmean.clusters(), &[0, 0]);
        assert_eq!(kmean.cluster_sizes(), &[0, 0, 0]);
        assert_eq!(kmean.means(), &[Vector::<f64, 1>::zero(); 3]);
        assert_eq!(kmean.observation(1), Ok(&Vector::from([2.0])));
    }

    #[test]
    fn invalid_construction() {
        assert!(matches!(KMeans::new(0, line(&[1.0]), ManhattanDistance), Err(KMeansError::InvalidClusterCount)));
        assert!(matches!(KMeans::new(2, line(&[]), ManhattanDistance), Err(KMeansError::EmptyObservations)));
    }

    #[test]
    fn accessors_are_bounds_checked() {
        let kmean = KMeans::new(2, line(&[1.0, 2.0, 3.0]), SquaredEuclideanDistance).unwrap();
        assert_eq!(kmean.observation(3), Err(KMeansError::OutOfRange { what: "observation", index: 3, len: 3 }));
        assert_eq!(kmean.cluster(3), Err(KMeansError::OutOfRange { what: "observation", index: 3, len: 3 }));
        assert_eq!(kmean.cluster_size(2), Err(KMeansError::OutOfRange { what: "cluster", index: 2, len: 2 }));
        assert_eq!(kmean.mean(2), Err(KMeansError::OutOfRange { what: "cluster", index: 2, len: 2 }));
        assert_eq!(kmean.cluster(2), Ok(0));
        assert_eq!(kmean.cluster_size(1), Ok(0));
    }

    #[test]
    fn initialize_uses_first_k_means() {
        let mut kmean = KMeans::new(2, line(&[1.0, 2.0]), SquaredEuclideanDistance).unwrap();
        kmean.initialize(&line(&[4.0, 5.0, 6.0])).unwrap();
        assert_eq!(kmean.means(), line(&[4.0, 5.0]).as_slice());

        assert_eq!(kmean.initialize(&line(&[7.0])), Err(KMeansError::NotEnoughMeans { expected: 2, found: 1 }));
        assert_eq!(kmean.means(), line(&[4.0, 5.0]).as_slice());
    }

    #[test]
    fn seed_notifies_init_done() {
        let calls = Cell::new(0);
        let on_init = |means: &[Vector<f64, 1>]| {
            assert_eq!(means.len(), 2);
            calls.set(calls.get() + 1);
        };
        let conf = KMeansConfig::build()
            .random_generator(StdRng::seed_from_u64(1337))
            .init_done(&on_init)
            .build();

        let observations = line(&[1.0, 2.0, 3.0, 4.0]);
        let mut kmean = KMeans::new(2, observations.clone(), SquaredEuclideanDistance).unwrap();
        kmean.seed(&Forgy, &conf).unwrap();
        assert_eq!(calls.get(), 1);
        assert!(kmean.means().iter().all(|m| observations.contains(m)));
    }

    fn first_observations(k: usize, observations: &[Vector<f64, 1>], out: &mut [Vector<f64, 1>], _: &mut dyn RngCore) -> Result<()> {
        out[..k].copy_from_slice(&observations[..k]);
        Ok(())
    }

    #[test]
    fn function_seeder_and_distance() {
        let metric: fn(&Vector<f64, 1>, &Vector<f64, 1>) -> f64 = crate::distances::manhattan;
        let mut kmean = KMeans::new(2, line(&[3.0, 9.0, 4.0]), metric).unwrap();
        kmean.seed(&first_observations, &KMeansConfig::default()).unwrap();
        assert_eq!(kmean.means(), line(&[3.0, 9.0]).as_slice());
        assert_eq!(kmean.distsum(), 0.0 + 6.0 + 1.0);
    }

    #[test]
    fn closure_distance() {
        let chebyshev = |a: &Vector<f32, 2>, b: &Vector<f32, 2>| {
            a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).fold(0.0f32, f32::max)
        };
        let observations = vec![Vector::from([0.0f32, 0.0]), Vector::from([3.0, 1.0])];
        let mut kmean = KMeans::new(1, observations, chebyshev).unwrap();
        kmean.initialize(&[Vector::zero()]).unwrap();
        assert_eq!(kmean.distsum(), 3.0);
    }
}
