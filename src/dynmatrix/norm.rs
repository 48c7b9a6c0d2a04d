use num_traits::{Float, Zero};

use crate::traits::LinalgScalar;

use super::vector::DynVector;
use super::DynMatrix;

/// `sqrt(Σ |x|²)` over any run of elements.
pub(crate) fn l2_norm<'a, T: LinalgScalar + 'a>(xs: impl IntoIterator<Item = &'a T>) -> T::Real {
    let mut sum = <T::Real as Zero>::zero();
    for &x in xs {
        let m = x.modulus();
        sum = sum + m * m;
    }
    Float::sqrt(sum)
}

// ── Vector norms ────────────────────────────────────────────────────

impl<T: LinalgScalar> DynVector<T> {
    /// L2 (Euclidean) norm.
    ///
    /// ```
    /// use numlab::DynVector;
    /// let v = DynVector::from_slice(&[3.0_f64, 4.0]);
    /// assert!((v.norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn norm(&self) -> T::Real {
        l2_norm(self.iter())
    }

    /// Infinity norm (largest modulus). Zero for an empty vector.
    pub fn norm_inf(&self) -> T::Real {
        self.iter()
            .fold(<T::Real as Zero>::zero(), |m, x| Float::max(m, x.modulus()))
    }
}

// ── Matrix norms ────────────────────────────────────────────────────

impl<T: LinalgScalar> DynMatrix<T> {
    /// Frobenius norm (square root of sum of squared moduli).
    ///
    /// ```
    /// use numlab::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T::Real {
        l2_norm(self.data.iter())
    }

    /// Largest element modulus (max-abs norm).
    pub fn max_abs(&self) -> T::Real {
        self.data
            .iter()
            .fold(<T::Real as Zero>::zero(), |m, x| Float::max(m, x.modulus()))
    }

    /// Largest modulus strictly below the main diagonal.
    ///
    /// Zero for an upper-triangular matrix.
    pub fn max_abs_below_diagonal(&self) -> T::Real {
        let mut max = <T::Real as Zero>::zero();
        for j in 0..self.ncols {
            for i in (j + 1)..self.nrows {
                max = Float::max(max, self[(i, j)].modulus());
            }
        }
        max
    }
}
