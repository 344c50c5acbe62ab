use lloyd::*;
use rand::prelude::*;
use std::cell::RefCell;

type Vector2 = Vector<f64, 2>;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let (cluster_cnt, sample_cnt, max_iter) = (4, 2000, 10);

    // Generate some random data around a few random centers
    let mut rnd = StdRng::seed_from_u64(1337);
    let centers: Vec<Vector2> = (0..cluster_cnt)
        .map(|_| Vector::from([rnd.gen_range(-50.0..50.0), rnd.gen_range(-50.0..50.0)]))
        .collect();
    let observations: Vec<Vector2> = (0..sample_cnt)
        .map(|i| centers[i % cluster_cnt] + Vector::from([rnd.gen_range(-8.0..8.0), rnd.gen_range(-8.0..8.0)]))
        .collect();

    // Record the centroids of every iteration, starting with the seeded ones (iteration 0)
    let history: RefCell<Vec<Vec<Vector2>>> = RefCell::new(Vec::new());
    let on_init = |means: &[Vector2]| history.borrow_mut().push(means.to_vec());
    let on_iteration = |_: usize, means: &[Vector2]| history.borrow_mut().push(means.to_vec());
    let conf = KMeansConfig::build()
        .random_generator(rnd)
        .init_done(&on_init)
        .iteration_done(&on_iteration)
        .build();

    let mut kmean = KMeans::new(cluster_cnt, observations, SquaredEuclideanDistance)?
        .with_empty_cluster_policy(EmptyClusterPolicy::KeepPrevious);
    kmean.seed(&Forgy, &conf)?;
    let iterations = kmean.run_with(max_iter, &conf)?;

    for (nr, means) in history.borrow().iter().enumerate() {
        println!("# iteration {}", nr);
        means.iter().for_each(|m| println!("{}", m));
    }
    println!("Iterations: {}", iterations);
    println!("Cluster sizes: {:?}", kmean.cluster_sizes());
    println!("Error: {}", kmean.distsum());
    Ok(())
}
