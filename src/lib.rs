//! # lloyd - API documentation
//!
//! Lloyd is a small rust library for k-means clustering of fixed-dimension vectors.
//!
//! ## Design target
//! The library exposes the single steps of Lloyd's algorithm (assign observations to their nearest
//! centroid, move every centroid to the mean of its observations) as well as a driver running them
//! until convergence. Both the distance function and the centroid seeding are pluggable.
//! Observations are [`Vector`]s whose dimension is part of the type, so mixing dimensions is a
//! compile error instead of a runtime failure.
//!
//! ## Supported distance functions
//! - Squared euclidean [`SquaredEuclideanDistance`]
//! - Manhattan [`ManhattanDistance`]
//! - Any `Fn(&Vector<T, D>, &Vector<T, D>) -> T` (see [`DistanceFunction`])
//!
//! ## Supported centroid initializations
//! - Forgy [`Forgy`]
//! - Random-Partition [`RandomPartition`]
//! - Caller supplied centroids [`Precomputed`] / [`KMeans::initialize`]
//! - Any function matching [`Seeder::seed`]
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use lloyd::*;
//! use rand::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Two obvious groups of 2-dimensional observations
//!     let observations = vec![
//!         Vector::from([1.0f64, 1.0]), Vector::from([1.5, 2.0]), Vector::from([1.0, 0.5]),
//!         Vector::from([8.0, 8.0]), Vector::from([9.0, 8.5]), Vector::from([8.5, 9.5]),
//!     ];
//!
//!     let conf = KMeansConfig::build().random_generator(StdRng::seed_from_u64(42)).build();
//!     let mut kmean = KMeans::new(2, observations, SquaredEuclideanDistance)?;
//!     kmean.seed(&Forgy, &conf)?;
//!     let iterations = kmean.run(100)?;
//!
//!     println!("Converged after {} iterations", iterations);
//!     println!("Centroids: {:?}", kmean.means());
//!     println!("Cluster-Assignments: {:?}", kmean.clusters());
//!     println!("Error: {}", kmean.distsum());
//!     Ok(())
//! }
//! ```
//!
//! ## Example (using the status event callbacks)
//! ```rust
//! use lloyd::*;
//!
//! fn main() -> Result<()> {
//!     let observations: Vec<Vector<f32, 1>> = [1.0, 2.0, 8.0, 9.0].iter().map(|&v| Vector::from([v])).collect();
//!
//!     let conf: KMeansConfig<f32, 1> = KMeansConfig::build()
//!         .init_done(&|means| println!("Initialization completed: {:?}", means))
//!         .iteration_done(&|nr, means| println!("Iteration {} - Centroids: {:?}", nr, means))
//!         .build();
//!
//!     let mut kmean = KMeans::new(2, observations, ManhattanDistance)?;
//!     kmean.seed(&Precomputed(vec![Vector::from([4.5]), Vector::from([5.5])]), &conf)?;
//!     assert_eq!(kmean.run_with(10, &conf)?, 1);
//!     assert_eq!(kmean.means(), &[Vector::from([1.5f32]), Vector::from([8.5])]);
//!     Ok(())
//! }
//! ```
//!
//! ## Short API-Overview / Description
//! Entry-point of the library is the [`KMeans`] struct. It is generic over the underlying primitive type,
//! the dimension and the distance function. An instance takes over the observations and owns the cluster
//! labels, cluster sizes and centroids. It is driven synchronously by the caller: [`KMeans::assign`] and
//! [`KMeans::update`] each run to completion before returning. Independent instances share no state, so
//! multiple clusterings (e.g. for different k or seeds) can simply use multiple instances.
//!
//! Randomness is only used for seeding and comes from the generator in [`KMeansConfig`], which
//! defaults to an entropy-seeded generator. Pass a seeded generator for reproducible runs.
//!
//! ## Errors
//! All fallible operations return [`Result`]. Empty clusters are reported as
//! [`KMeansError::EmptyCluster`] unless [`EmptyClusterPolicy::KeepPrevious`] is selected.

#[macro_use] mod helpers;
mod primitive;
mod error;
mod vector;
mod api;
mod lloyd;
pub mod distances;
mod inits;

pub use api::{DistanceFunction, EmptyClusterPolicy, KMeans, KMeansConfig, KMeansConfigBuilder, Seeder};
pub use distances::{ManhattanDistance, SquaredEuclideanDistance};
pub use error::{KMeansError, Result};
pub use inits::{Forgy, Precomputed, RandomPartition};
pub use primitive::Primitive;
pub use vector::Vector;
