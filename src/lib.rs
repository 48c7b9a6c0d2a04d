//! # numlab
//!
//! Householder QR factorization in pure Rust, no-std compatible (needs
//! `alloc`), plus the small numerical toolbox that usually travels with it:
//! scalar root finding, three-step Adams ODE integrators and the discrete
//! Fourier transform.
//!
//! ## Quick start
//!
//! ```
//! use numlab::{householder_qr, DynMatrix};
//!
//! let a = DynMatrix::from_rows(3, 3, &[
//!     12.0_f64, -51.0,   4.0,
//!      6.0,     167.0, -68.0,
//!     -4.0,      24.0, -41.0,
//! ]);
//! let (q, r) = householder_qr(&a).unwrap();
//! assert!((&(&q * &r) - &a).frobenius_norm() < 1e-10);
//! assert!(r.max_abs_below_diagonal() == 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`dynmatrix`] — Heap-allocated `DynMatrix<T>` with runtime dimensions,
//!   column-major `Vec<T>` storage. Implements [`MatrixRef`] / [`MatrixMut`].
//!   [`DynVector<T>`] newtype for single-index vector access. Arithmetic,
//!   transpose / adjoint, norms, `map`, `argmin` / `argmax`.
//!
//! - [`linalg`] — Householder QR: [`householder_qr`] returns `(Q, R)`,
//!   [`linalg::householder_qr_in_place`] works on caller-owned buffers, and
//!   [`QrDecomposition`] adds least-squares `solve()` and `det()`.
//!
//! - [`optim`] — Scalar root finding ([`optim::bisection`],
//!   [`optim::newton_1d`]).
//!
//! - [`ode`] — Fixed-step RK4 and the three-step Adams-Bashforth /
//!   Adams-Moulton integrators on a uniform grid.
//!
//! - [`fourier`] — Unitary DFT and its inverse (requires `complex`).
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), used by root finders and ODEs
//!   - [`LinalgScalar`] — real floats and complex numbers, used by QR and norms
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Complex matrices
//!
//! With the `complex` feature, QR accepts `Complex<f32>` / `Complex<f64>`:
//! reflections use the conjugate transpose, Q is unitary and norms return
//! real values.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` |
//! | `libm`    | baseline | Pure-Rust software float fallback |
//! | `complex` | yes      | `Complex<f32>` / `Complex<f64>` support via `num-complex`, DFT |
//! | `log`     | no       | Diagnostics through the `log` facade |
//! | `all`     | no       | All features: `std` + `complex` + `log` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod dynmatrix;
#[cfg(feature = "complex")]
pub mod fourier;
pub mod linalg;
pub mod ode;
pub mod optim;
pub mod traits;

pub use dynmatrix::{DynMatrix, DynVector};
pub use linalg::{householder_qr, LinalgError, QrDecomposition};
pub use traits::{FloatScalar, LinalgScalar, MatrixMut, MatrixRef, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
