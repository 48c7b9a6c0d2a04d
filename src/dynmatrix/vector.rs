use alloc::vec::Vec;
use core::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::traits::{LinalgScalar, MatrixMut, MatrixRef, Scalar};

use super::DynMatrix;

/// Dynamically-sized vector (wraps a 1×N `DynMatrix`).
///
/// Single-index access `v[i]`; used for right-hand sides, ODE states and
/// transformed signals.
///
/// # Examples
///
/// ```
/// use numlab::DynVector;
///
/// let v = DynVector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// assert!((v.dot(&v) - 14.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynVector<T> {
    pub(crate) inner: DynMatrix<T>,
}

impl<T: Scalar> DynVector<T> {
    /// Create a vector from a flat slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            inner: DynMatrix::from_slice(1, data.len(), data),
        }
    }

    /// Create a vector from an owned `Vec`.
    ///
    /// ```
    /// use numlab::DynVector;
    /// let v = DynVector::from_vec(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(v[2], 3.0);
    /// ```
    pub fn from_vec(data: Vec<T>) -> Self {
        let n = data.len();
        Self {
            inner: DynMatrix::from_vec(1, n, data),
        }
    }

    /// Create a zero vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self {
            inner: DynMatrix::zeros(1, n),
        }
    }

    /// Dot product (no conjugation).
    ///
    /// ```
    /// use numlab::DynVector;
    /// let a = DynVector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = DynVector::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> T {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        self.iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// `self + alpha * x`, the building block of every multistep update.
    pub fn add_scaled(&self, alpha: T, x: &Self) -> Self {
        assert_eq!(self.len(), x.len(), "vector length mismatch");
        let data = self
            .iter()
            .zip(x.iter())
            .map(|(&a, &b)| a + alpha * b)
            .collect();
        Self::from_vec(data)
    }

    /// View as an `n × 1` column matrix.
    pub fn to_column(&self) -> DynMatrix<T> {
        DynMatrix::from_slice(self.len(), 1, self.as_slice())
    }
}

impl<T: LinalgScalar> DynVector<T> {
    /// Keep only entries with no NaN / infinite component.
    ///
    /// ```
    /// use numlab::DynVector;
    /// let v = DynVector::from_slice(&[1.0_f64, f64::NAN, 3.0, f64::INFINITY]);
    /// assert_eq!(v.finite_only().as_slice(), &[1.0, 3.0]);
    /// ```
    pub fn finite_only(&self) -> Self {
        Self::from_vec(self.iter().copied().filter(|x| x.lis_finite()).collect())
    }

    /// `true` if every entry is finite.
    pub fn all_finite(&self) -> bool {
        self.iter().all(|x| x.lis_finite())
    }
}

impl<T> DynVector<T> {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.ncols()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View the vector data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// View the vector data as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }

    /// Iterate over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl<T: Scalar> Add<&DynVector<T>> for &DynVector<T> {
    type Output = DynVector<T>;
    fn add(self, rhs: &DynVector<T>) -> DynVector<T> {
        DynVector {
            inner: &self.inner + &rhs.inner,
        }
    }
}

impl<T: Scalar> Sub<&DynVector<T>> for &DynVector<T> {
    type Output = DynVector<T>;
    fn sub(self, rhs: &DynVector<T>) -> DynVector<T> {
        DynVector {
            inner: &self.inner - &rhs.inner,
        }
    }
}

impl<T: Scalar> Mul<T> for &DynVector<T> {
    type Output = DynVector<T>;
    fn mul(self, rhs: T) -> DynVector<T> {
        DynVector {
            inner: &self.inner * rhs,
        }
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for DynVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.inner[(0, i)]
    }
}

impl<T> IndexMut<usize> for DynVector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.inner[(0, i)]
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for DynVector<T> {
    #[inline]
    fn nrows(&self) -> usize {
        1
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        self.inner.get(row, col)
    }
}

impl<T> MatrixMut<T> for DynVector<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        self.inner.get_mut(row, col)
    }
}

impl<T: Scalar> From<Vec<T>> for DynVector<T> {
    fn from(v: Vec<T>) -> Self {
        Self::from_vec(v)
    }
}
