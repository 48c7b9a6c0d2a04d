pub(crate) mod qr;

pub use qr::{householder_qr, householder_qr_in_place, QrDecomposition};

/// Errors from linear algebra operations.
///
/// Returned by the QR factorization and its convenience methods
/// (`qr`, `solve_qr`, `det`).
///
/// ```
/// use numlab::DynMatrix;
/// use numlab::linalg::LinalgError;
///
/// let wide = DynMatrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// assert_eq!(
///     wide.qr().unwrap_err(),
///     LinalgError::InvalidShape { nrows: 2, ncols: 3 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LinalgError {
    /// Fewer rows than columns; the factorization is undefined.
    #[error("QR factorization requires nrows >= ncols, got a {nrows}x{ncols} matrix")]
    InvalidShape { nrows: usize, ncols: usize },
    /// A column could not be reduced: its norm or reflector was not finite,
    /// or the reflector's squared norm underflowed to zero.
    #[error("numeric degeneracy while reducing column {col}")]
    NumericDegeneracy { col: usize },
    /// Triangular factor is singular or nearly singular.
    #[error("matrix is singular")]
    Singular,
}
