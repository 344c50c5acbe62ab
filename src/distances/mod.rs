mod manhattandistance;
mod squaredeuclideandistance;

pub use manhattandistance::{manhattan, ManhattanDistance};
pub use squaredeuclideandistance::{squared_euclidean, SquaredEuclideanDistance};
