use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

#[cfg(feature = "complex")]
use num_complex::Complex;

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, complex numbers and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point elements.
///
/// Required by the root finders and ODE integrators, which compare values
/// and need ordered arithmetic. Implies `LinalgScalar<Real = Self>` since
/// real floats are their own real type.
pub trait FloatScalar: Scalar + Float + LinalgScalar<Real = Self> {}

impl<T: Scalar + Float + LinalgScalar<Real = T>> FloatScalar for T {}

/// Trait for matrix elements that support the Householder factorization.
///
/// Covers both real floats (`f32`, `f64`) and complex numbers (`Complex<f32>`,
/// `Complex<f64>`). Norms of a `LinalgScalar` container are `Self::Real`.
pub trait LinalgScalar: Scalar {
    /// The real component type (`Self` for reals, `T` for `Complex<T>`).
    type Real: FloatScalar;

    /// Absolute value / modulus: `|z|` for complex, `.abs()` for real.
    fn modulus(self) -> Self::Real;

    /// Complex conjugate (identity for reals).
    fn conj(self) -> Self;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Unit-modulus sign used to orient Householder reflections.
    ///
    /// Reals: `+1` for `x > 0`, `-1` otherwise. Zero (of either sign) maps
    /// to `-1`, never to `0`. Complex: `z / |z|`, and `-1` for `z = 0`.
    fn sign(self) -> Self;

    /// `true` if no component is NaN or infinite.
    fn lis_finite(self) -> bool;

    /// Machine epsilon of the underlying real type.
    fn lepsilon() -> Self::Real;

    /// Promote a real value into `Self`.
    fn from_real(r: Self::Real) -> Self;

    /// Divide every component by a real value.
    ///
    /// Unlike `self / from_real(r)`, never forms `r²`, so tiny divisors
    /// stay exact for complex values.
    fn div_real(self, r: Self::Real) -> Self;
}

macro_rules! impl_linalg_scalar_real {
    ($($t:ty),*) => {
        $(
            impl LinalgScalar for $t {
                type Real = $t;

                #[inline] fn modulus(self) -> $t { Float::abs(self) }
                #[inline] fn conj(self) -> $t { self }
                #[inline] fn re(self) -> $t { self }
                #[inline] fn lis_finite(self) -> bool { Float::is_finite(self) }
                #[inline] fn lepsilon() -> $t { <$t as Float>::epsilon() }
                #[inline] fn from_real(r: $t) -> $t { r }
                #[inline] fn div_real(self, r: $t) -> $t { self / r }

                #[inline]
                fn sign(self) -> $t {
                    if self > 0.0 { 1.0 } else { -1.0 }
                }
            }
        )*
    };
}

impl_linalg_scalar_real!(f32, f64);

#[cfg(feature = "complex")]
impl<T: FloatScalar> LinalgScalar for Complex<T> {
    type Real = T;

    #[inline]
    fn modulus(self) -> T {
        self.norm()
    }

    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }

    #[inline]
    fn re(self) -> T {
        self.re
    }

    #[inline]
    fn sign(self) -> Self {
        let r = self.norm();
        if r == T::zero() {
            Complex::new(-T::one(), T::zero())
        } else {
            self.unscale(r)
        }
    }

    #[inline]
    fn lis_finite(self) -> bool {
        Float::is_finite(self.re) && Float::is_finite(self.im)
    }

    #[inline]
    fn lepsilon() -> T {
        T::epsilon()
    }

    #[inline]
    fn from_real(r: T) -> Self {
        Complex::new(r, T::zero())
    }

    #[inline]
    fn div_real(self, r: T) -> Self {
        self.unscale(r)
    }
}

/// Read-only access to a matrix-like type.
///
/// Lets the factorization operate on any matrix-shaped container.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling
/// in-place algorithms to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_sign_of_zero_is_negative() {
        assert_eq!(0.0_f64.sign(), -1.0);
        assert_eq!((-0.0_f64).sign(), -1.0);
        assert_eq!(0.0_f32.sign(), -1.0);
    }

    #[test]
    fn real_sign() {
        assert_eq!(3.5_f64.sign(), 1.0);
        assert_eq!((-1e-300_f64).sign(), -1.0);
    }

    #[test]
    fn real_lis_finite() {
        assert!(LinalgScalar::lis_finite(1.0_f64));
        assert!(!LinalgScalar::lis_finite(f64::NAN));
        assert!(!LinalgScalar::lis_finite(f64::INFINITY));
    }

    #[cfg(feature = "complex")]
    #[test]
    fn complex_sign_is_unit_phase() {
        let z = Complex::new(3.0_f64, 4.0);
        let s = z.sign();
        assert!((s.re - 0.6).abs() < 1e-15);
        assert!((s.im - 0.8).abs() < 1e-15);
        assert_eq!(Complex::new(0.0_f64, 0.0).sign(), Complex::new(-1.0, 0.0));
    }

    #[cfg(feature = "complex")]
    #[test]
    fn complex_lis_finite() {
        assert!(LinalgScalar::lis_finite(Complex::new(1.0_f64, -2.0)));
        assert!(!LinalgScalar::lis_finite(Complex::new(1.0_f64, f64::NAN)));
    }

    #[cfg(feature = "complex")]
    #[test]
    fn complex_tiny_sign_and_div_real() {
        let z = Complex::new(3e-170_f64, -4e-170);
        let s = z.sign();
        assert!((s.re - 0.6).abs() < 1e-15);
        assert!((s.im + 0.8).abs() < 1e-15);
        let w = z.div_real(1e-170);
        assert!((w.re - 3.0).abs() < 1e-14);
        assert!((w.im + 4.0).abs() < 1e-14);
    }

    #[test]
    fn real_div_real() {
        assert_eq!(LinalgScalar::div_real(6.0_f64, 3.0), 2.0);
    }
}
