use alloc::vec;

use num_traits::{Float, One, Zero};

use crate::dynmatrix::{DynMatrix, DynVector};
use crate::linalg::LinalgError;
use crate::traits::{LinalgScalar, MatrixMut, MatrixRef};

/// Householder QR factorization in place.
///
/// On entry `r` holds the `m × n` matrix to factor and `q` an `m × m`
/// accumulator, normally the identity. On return `r` is upper triangular and
/// `q` has been right-multiplied by every reflection applied, so that
/// `q_out * r_out == q_in * r_in` holds throughout.
///
/// Column `i` is reduced with the reflection mapping `x = r[i.., i]` onto
/// `w = -sign(x₀)·‖x‖·e₀`, with `sign(0) = -1` (see [`LinalgScalar::sign`]).
/// Norms are computed on the column scaled by its largest modulus, so
/// entries far below or above `1` are reduced like any other.
///
/// All-zero columns are left untouched. A column whose sub-diagonal part is
/// at most `ε·‖x‖` is not reflected either; those sub-diagonal entries are
/// set to zero, which moves `r` by no more than `ε·‖x‖`. Every column of the
/// returned `r` is therefore exactly zero below the diagonal. For complex
/// matrices the reflections are
/// `H = I - 2·v·vᴴ / (vᴴv)` and `q` becomes unitary.
///
/// Returns the number of reflections applied.
///
/// # Errors
///
/// - [`LinalgError::InvalidShape`] if `m < n`.
/// - [`LinalgError::NumericDegeneracy`] if a column holds NaN / infinity, or
///   its scaled norm or reflector is not finite.
///
/// Panics if `q` is not `m × m`.
pub fn householder_qr_in_place<T: LinalgScalar>(
    r: &mut impl MatrixMut<T>,
    q: &mut impl MatrixMut<T>,
) -> Result<usize, LinalgError> {
    let m = r.nrows();
    let n = r.ncols();
    if m < n {
        return Err(LinalgError::InvalidShape { nrows: m, ncols: n });
    }
    assert!(
        q.nrows() == m && q.ncols() == m,
        "Q accumulator must be {}x{}, got {}x{}",
        m,
        m,
        q.nrows(),
        q.ncols(),
    );

    let eps = T::lepsilon();
    let two = <T::Real as One>::one() + <T::Real as One>::one();
    let mut v = vec![T::zero(); m];
    let mut reflections = 0;

    for i in 0..n {
        // Largest modulus in r[i.., i]; norms are formed on x / xmax so
        // tiny or huge columns neither underflow nor overflow.
        let mut xmax = <T::Real as Zero>::zero();
        for row in i..m {
            let x = *r.get(row, i);
            if !x.lis_finite() {
                return Err(LinalgError::NumericDegeneracy { col: i });
            }
            xmax = Float::max(xmax, x.modulus());
        }
        if !Float::is_finite(xmax) {
            return Err(LinalgError::NumericDegeneracy { col: i });
        }
        if xmax == <T::Real as Zero>::zero() {
            #[cfg(feature = "log")]
            log::trace!("qr: column {} is zero, reflection skipped", i);
            continue;
        }

        // Scaled squared norm of r[i+1.., i]
        let mut tail_sq = <T::Real as Zero>::zero();
        for row in (i + 1)..m {
            let a = r.get(row, i).modulus() / xmax;
            tail_sq = tail_sq + a * a;
        }
        let x0 = *r.get(i, i);
        let x0_abs = x0.modulus() / xmax;
        let norm_sq = x0_abs * x0_abs + tail_sq;

        if !Float::is_finite(norm_sq) {
            return Err(LinalgError::NumericDegeneracy { col: i });
        }

        // Already reduced: what is left below the diagonal is rounding noise.
        if tail_sq <= eps * eps * norm_sq {
            for row in (i + 1)..m {
                *r.get_mut(row, i) = T::zero();
            }
            #[cfg(feature = "log")]
            log::trace!("qr: column {} already triangular, reflection skipped", i);
            continue;
        }

        let norm_scaled = Float::sqrt(norm_sq);
        let norm = norm_scaled * xmax;
        if !Float::is_finite(norm) {
            return Err(LinalgError::NumericDegeneracy { col: i });
        }
        let w0 = T::zero() - x0.sign() * T::from_real(norm);

        // v = (w - x) / xmax over rows i..m
        let k = m - i;
        v[0] = T::zero() - x0.sign() * T::from_real(norm_scaled) - x0.div_real(xmax);
        for j in 1..k {
            v[j] = T::zero() - r.get(i + j, i).div_real(xmax);
        }
        let v0_abs = v[0].modulus();
        let vhv = v0_abs * v0_abs + tail_sq;
        if !(vhv > <T::Real as Zero>::zero()) || !Float::is_finite(vhv) {
            return Err(LinalgError::NumericDegeneracy { col: i });
        }
        let scale = T::from_real(two / vhv);

        // The reflection sends x to w exactly.
        *r.get_mut(i, i) = w0;
        for row in (i + 1)..m {
            *r.get_mut(row, i) = T::zero();
        }

        // r[i.., c] -= scale * v * (vᴴ r[i.., c])
        for c in (i + 1)..n {
            let mut dot = T::zero();
            for j in 0..k {
                dot = dot + v[j].conj() * *r.get(i + j, c);
            }
            let s = scale * dot;
            for j in 0..k {
                let cur = *r.get(i + j, c);
                *r.get_mut(i + j, c) = cur - v[j] * s;
            }
        }

        // q[:, i..] -= (q[:, i..] * scale * v) * vᴴ
        for row in 0..m {
            let mut dot = T::zero();
            for j in 0..k {
                dot = dot + *q.get(row, i + j) * v[j];
            }
            let s = dot * scale;
            for j in 0..k {
                let cur = *q.get(row, i + j);
                *q.get_mut(row, i + j) = cur - s * v[j].conj();
            }
        }

        reflections += 1;
    }

    #[cfg(feature = "log")]
    log::debug!(
        "qr: factored {}x{} matrix with {} reflections",
        m,
        n,
        reflections
    );

    Ok(reflections)
}

/// Full QR factorization `A = Q·R` of an `m × n` matrix (`m ≥ n`).
///
/// Returns `(Q, R)` with `Q` orthogonal (unitary for complex input), `m × m`,
/// and `R` upper triangular, `m × n`. The input is copied, never mutated.
///
/// ```
/// use numlab::{householder_qr, DynMatrix};
///
/// let a = DynMatrix::from_rows(2, 2, &[0.0_f64, -4.0, 3.0, 0.0]);
/// let (q, r) = householder_qr(&a).unwrap();
/// assert_eq!(r[(0, 0)], 3.0);
/// assert_eq!(r[(1, 0)], 0.0);
/// let qr = &q * &r;
/// assert!((&qr - &a).frobenius_norm() < 1e-12);
/// ```
pub fn householder_qr<T: LinalgScalar>(
    a: &impl MatrixRef<T>,
) -> Result<(DynMatrix<T>, DynMatrix<T>), LinalgError> {
    QrDecomposition::new(a).map(QrDecomposition::into_parts)
}

/// Householder QR decomposition of a dynamically-sized matrix (M >= N).
///
/// Holds the explicit `Q` (M × M) and `R` (M × N) factors.
///
/// # Example
///
/// ```
/// use numlab::{DynMatrix, DynVector};
///
/// // Least-squares fit: y = c0 + c1*x to points (0,1), (1,2), (2,4)
/// let a = DynMatrix::from_rows(3, 2, &[
///     1.0_f64, 0.0,
///     1.0, 1.0,
///     1.0, 2.0,
/// ]);
/// let b = DynVector::from_slice(&[1.0, 2.0, 4.0]);
/// let x = a.qr().unwrap().solve(&b).unwrap();
/// assert!((x[0] - 5.0 / 6.0).abs() < 1e-10);
/// assert!((x[1] - 3.0 / 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct QrDecomposition<T> {
    q: DynMatrix<T>,
    r: DynMatrix<T>,
    reflections: usize,
}

impl<T: LinalgScalar> QrDecomposition<T> {
    /// Decompose a matrix.
    pub fn new(a: &impl MatrixRef<T>) -> Result<Self, LinalgError> {
        let m = a.nrows();
        let n = a.ncols();
        if m < n {
            return Err(LinalgError::InvalidShape { nrows: m, ncols: n });
        }
        let mut r = DynMatrix::from_fn(m, n, |i, j| *a.get(i, j));
        let mut q = DynMatrix::identity(m);
        let reflections = householder_qr_in_place(&mut r, &mut q)?;
        Ok(Self { q, r, reflections })
    }

    /// The orthogonal / unitary factor (M × M).
    pub fn q(&self) -> &DynMatrix<T> {
        &self.q
    }

    /// The upper-triangular factor (M × N).
    pub fn r(&self) -> &DynMatrix<T> {
        &self.r
    }

    /// Number of Householder reflections applied (skipped columns excluded).
    pub fn reflections(&self) -> usize {
        self.reflections
    }

    /// Consume the decomposition, returning `(Q, R)`.
    pub fn into_parts(self) -> (DynMatrix<T>, DynMatrix<T>) {
        (self.q, self.r)
    }

    /// Solve the least-squares problem `min ‖Ax - b‖` for `x`.
    ///
    /// Computes `x = R₁⁻¹ (Qᴴ b)[..N]` by back substitution on the leading
    /// N × N block of R.
    ///
    /// Returns [`LinalgError::Singular`] if a diagonal entry of R is
    /// negligible relative to the largest one. Panics if `b.len() != M`.
    pub fn solve(&self, b: &DynVector<T>) -> Result<DynVector<T>, LinalgError> {
        let m = self.r.nrows();
        let n = self.r.ncols();
        assert_eq!(b.len(), m, "right-hand side length must equal nrows");

        let mut max_diag = <T::Real as Zero>::zero();
        for i in 0..n {
            max_diag = Float::max(max_diag, self.r[(i, i)].modulus());
        }
        let size = <T::Real as num_traits::NumCast>::from(m).unwrap_or_else(<T::Real as One>::one);
        let tol = T::lepsilon() * size * max_diag;

        // y = Qᴴ b, first N entries
        let mut x = vec![T::zero(); n];
        for (j, xj) in x.iter_mut().enumerate() {
            let mut dot = T::zero();
            for i in 0..m {
                dot = dot + self.q[(i, j)].conj() * b[i];
            }
            *xj = dot;
        }

        for i in (0..n).rev() {
            let d = self.r[(i, i)];
            if !(d.modulus() > tol) {
                return Err(LinalgError::Singular);
            }
            let mut sum = x[i];
            for j in (i + 1)..n {
                sum = sum - self.r[(i, j)] * x[j];
            }
            x[i] = sum / d;
        }

        Ok(DynVector::from_vec(x))
    }

    /// Determinant of the original matrix (square only).
    ///
    /// `det(A) = (-1)^reflections · Π Rᵢᵢ`, since every Householder
    /// reflection has determinant -1.
    pub fn det(&self) -> Result<T, LinalgError> {
        if !self.r.is_square() {
            return Err(LinalgError::InvalidShape {
                nrows: self.r.nrows(),
                ncols: self.r.ncols(),
            });
        }
        let mut d = T::one();
        for i in 0..self.r.ncols() {
            d = d * self.r[(i, i)];
        }
        if self.reflections % 2 == 1 {
            d = T::zero() - d;
        }
        Ok(d)
    }
}

/// Convenience methods on dynamically-sized matrices.
impl<T: LinalgScalar> DynMatrix<T> {
    /// QR decomposition using Householder reflections.
    pub fn qr(&self) -> Result<QrDecomposition<T>, LinalgError> {
        QrDecomposition::new(self)
    }

    /// Solve `Ax = b` (least squares when tall) via QR decomposition.
    pub fn solve_qr(&self, b: &DynVector<T>) -> Result<DynVector<T>, LinalgError> {
        self.qr()?.solve(b)
    }
}
