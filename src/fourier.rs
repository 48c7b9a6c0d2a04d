//! Discrete Fourier transform with unitary normalization.
//!
//! `y_k = (1/√n) Σ_j x_j · exp(∓2πi·jk/n)`, minus sign for the forward
//! transform. The same `1/√n` scale on both sides makes [`idft`] the exact
//! inverse of [`dft`] and preserves the Euclidean norm.
//!
//! Direct `O(n²)` evaluation. Requires the `complex` feature.
//!
//! ```
//! use numlab::fourier::{dft, idft};
//! use numlab::Complex;
//!
//! let x = [Complex::new(1.0_f64, 0.0), Complex::new(2.0, -1.0), Complex::new(0.0, 3.0)];
//! let y = idft(dft(&x).as_slice());
//! for (a, b) in x.iter().zip(y.iter()) {
//!     assert!((a - b).norm() < 1e-12);
//! }
//! ```

use alloc::vec::Vec;

use num_complex::Complex;

use crate::dynmatrix::DynVector;
use crate::traits::FloatScalar;

/// Forward DFT, `ω = exp(-2πi/n)`. Empty input gives an empty vector.
///
/// ```
/// use numlab::fourier::dft;
/// use numlab::Complex;
///
/// // A unit impulse has a flat spectrum of height 1/√n
/// let mut x = [Complex::new(0.0_f64, 0.0); 4];
/// x[0] = Complex::new(1.0, 0.0);
/// let y = dft(&x);
/// assert!(y.iter().all(|z| (z.re - 0.5).abs() < 1e-15 && z.im.abs() < 1e-15));
/// ```
pub fn dft<T: FloatScalar>(x: &[Complex<T>]) -> DynVector<Complex<T>> {
    transform(x, -T::one())
}

/// Inverse DFT, `ω = exp(+2πi/n)`, same `1/√n` scale as [`dft`].
pub fn idft<T: FloatScalar>(y: &[Complex<T>]) -> DynVector<Complex<T>> {
    transform(y, T::one())
}

/// Forward DFT of a real signal.
pub fn dft_real<T: FloatScalar>(x: &[T]) -> DynVector<Complex<T>> {
    let promoted: Vec<Complex<T>> = x.iter().map(|&v| Complex::new(v, T::zero())).collect();
    dft(&promoted)
}

fn transform<T: FloatScalar>(x: &[Complex<T>], direction: T) -> DynVector<Complex<T>> {
    let n = x.len();
    if n == 0 {
        return DynVector::from_vec(Vec::new());
    }

    let nf = T::from(n).unwrap();
    let step = direction * T::from(core::f64::consts::TAU).unwrap() / nf;
    let scale = T::one() / nf.sqrt();

    let out = (0..n)
        .map(|k| {
            let mut acc = Complex::new(T::zero(), T::zero());
            for (j, &xj) in x.iter().enumerate() {
                // Reduce jk mod n so the angle stays in [0, 2π)
                let e = (j * k) % n;
                let w = Complex::from_polar(T::one(), step * T::from(e).unwrap());
                acc = acc + xj * w;
            }
            acc * scale
        })
        .collect();

    #[cfg(feature = "log")]
    log::trace!("dft: {} points", n);

    DynVector::from_vec(out)
}
