use crate::Primitive;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// Fixed-dimension vector of [`Primitive`] components.
///
/// The dimension **D** is part of the type, so binary operations between vectors of
/// differing dimension do not compile. All arithmetic operators work component-wise and
/// equality is exact (no epsilon).
///
/// ## Example
/// ```rust
/// use lloyd::Vector;
///
/// let a = Vector::from([1.0f64, 2.0]);
/// let b = Vector::from_slice(&[3.0]); // padded -> [3.0, 0.0]
/// assert_eq!(a + b, Vector::from([4.0, 2.0]));
/// assert_eq!(a.dot(&b), 3.0);
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Vector<T: Primitive, const D: usize> {
    data: [T; D],
}

impl<T: Primitive, const D: usize> Vector<T, D> {
    /// All-zero vector.
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Vector with every component set to **value**.
    pub fn splat(value: T) -> Self {
        Self { data: [value; D] }
    }

    /// Build a vector from the leading components of **values**.
    /// Missing components are zero, surplus values are ignored.
    pub fn from_slice(values: &[T]) -> Self {
        let mut result = Self::zero();
        result.data.iter_mut().zip(values.iter().cloned()).for_each(|(c, v)| *c = v);
        result
    }

    /// The dimension **D**.
    pub const fn dims(&self) -> usize {
        D
    }

    /// Bounds-checked component access.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Multiply every component by **scalar**.
    pub fn scale(&self, scalar: T) -> Self {
        let mut result = *self;
        result.data.iter_mut().for_each(|c| *c *= scalar);
        result
    }

    /// Scalar product of `self` and **other**.
    pub fn dot(&self, other: &Self) -> T {
        self.data.iter().zip(other.data.iter()).map(|(&a, &b)| a * b).sum()
    }

    #[inline(always)]
    fn zip_with(mut self, rhs: Self, op: impl Fn(&mut T, T)) -> Self {
        self.data.iter_mut().zip(rhs.data.iter().cloned()).for_each(|(c, r)| op(c, r));
        self
    }
}

impl<T: Primitive, const D: usize> Default for Vector<T, D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Primitive, const D: usize> From<[T; D]> for Vector<T, D> {
    fn from(data: [T; D]) -> Self {
        Self { data }
    }
}

impl<T: Primitive, const D: usize> Index<usize> for Vector<T, D> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Primitive, const D: usize> IndexMut<usize> for Vector<T, D> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Primitive, const D: usize> Neg for Vector<T, D> {
    type Output = Self;
    fn neg(mut self) -> Self {
        self.data.iter_mut().for_each(|c| *c = -*c);
        self
    }
}

impl<T: Primitive, const D: usize> Add for Vector<T, D> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |c, r| *c += r)
    }
}

impl<T: Primitive, const D: usize> Sub for Vector<T, D> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |c, r| *c -= r)
    }
}

impl<T: Primitive, const D: usize> Mul for Vector<T, D> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, |c, r| *c *= r)
    }
}

impl<T: Primitive, const D: usize> Div for Vector<T, D> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.zip_with(rhs, |c, r| *c /= r)
    }
}

impl<T: Primitive, const D: usize> AddAssign for Vector<T, D> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Primitive, const D: usize> SubAssign for Vector<T, D> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Primitive, const D: usize> MulAssign for Vector<T, D> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Primitive, const D: usize> DivAssign for Vector<T, D> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: Primitive, const D: usize> Sum for Vector<T, D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

impl<'a, T: Primitive, const D: usize> Sum<&'a Vector<T, D>> for Vector<T, D> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + *v)
    }
}

impl<T: Primitive, const D: usize> fmt::Display for Vector<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
