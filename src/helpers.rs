#[cfg(test)]
macro_rules! assert_approx_eq {
	($left: expr, $right: expr, $tol: expr) => ({
		match ($left, $right, $tol) {
			(left_val , right_val, tol_val) => {
				let delta = (left_val - right_val).abs();
				if !(delta < tol_val) {
					panic!(
						"assertion failed: `(left ≈ right)` \
						(left: `{}`, right: `{}`) \
						with ∆={:1.1e} (allowed ∆={:e})",
						left_val , right_val, delta, tol_val
					)
				}
			}
		}
	});
	($left: expr, $right: expr) => (assert_approx_eq!(($left), ($right), 1e-15))
}

#[cfg(test)]
pub(crate) mod testing {
	use std::collections::HashMap;

	use crate::{Primitive, Vector};

	/// Compare two cluster labelings, ignoring how the clusters are numbered.
	///
	/// ## Returns
	/// Mapping from **should** cluster ids to **actual** cluster ids.
	pub fn assert_partition_eq(should: &[usize], actual: &[usize]) -> HashMap<usize, usize> {
		assert_eq!(should.len(), actual.len());
		let mut idmap = HashMap::new();
		let mut idrevmap = HashMap::new();
		for idx in 0..should.len() {
			let (should_id, actual_id) = (should[idx], actual[idx]);
			if !idmap.contains_key(&should_id) {
				assert_eq!(idrevmap.contains_key(&actual_id), false);
				idmap.insert(should_id, actual_id);
				idrevmap.insert(actual_id, should_id);
			}
			if idmap[&should_id] != actual_id {
				panic!(
					"Cluster assignments different at idx {}.\nMapping(should -> actual): {:?}\nActual: {:?}\nShould: {:?}",
					idx, idmap, actual, should
				);
			}
		}
		idmap
	}

	/// Compare centroids component-wise with tolerance **eps**, using a mapping from [`assert_partition_eq`].
	pub fn assert_means_eq<T: Primitive, const D: usize>(
		should: &[Vector<T, D>], actual: &[Vector<T, D>], idmap: &HashMap<usize, usize>, eps: T,
	) {
		for (&should_idx, &actual_idx) in idmap.iter() {
			for d in 0..D {
				assert_approx_eq!(should[should_idx][d], actual[actual_idx][d], eps);
			}
		}
	}
}


#[cfg(test)]
mod tests {
	use super::testing::*;
	use crate::Vector;

	#[test]
	fn partition_relabeling() {
		let idmap = assert_partition_eq(&[0, 0, 1, 2, 1], &[2, 2, 0, 1, 0]);
		assert_eq!(idmap[&0], 2);
		assert_eq!(idmap[&1], 0);
		assert_eq!(idmap[&2], 1);

		let should = [Vector::from([1.0f64]), Vector::from([2.0]), Vector::from([3.0])];
		let actual = [Vector::from([2.0f64]), Vector::from([3.0]), Vector::from([1.0 + 1e-12])];
		assert_means_eq(&should, &actual, &idmap, 1e-9);
	}

	#[test]
	#[should_panic]
	fn partition_mismatch() {
		assert_partition_eq(&[0, 0, 1], &[1, 0, 1]);
	}
}
