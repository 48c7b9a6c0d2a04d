#![cfg(feature = "complex")]

use approx::assert_abs_diff_eq;
use numlab::fourier::{dft, dft_real, idft};
use numlab::{householder_qr, Complex, DynMatrix, DynVector};

type C = Complex<f64>;

fn c(re: f64, im: f64) -> C {
    Complex::new(re, im)
}

const TOL: f64 = 1e-10;

fn assert_complex_near(a: C, b: C, tol: f64, msg: &str) {
    assert!(
        (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

// ── QR tests ─────────────────────────────────────────────────────────

fn check_unitary_factorization(a: &DynMatrix<C>) {
    let (m, n) = a.shape();
    let (q, r) = householder_qr(a).unwrap();
    assert_eq!(q.shape(), (m, m));
    assert_eq!(r.shape(), (m, n));

    let qr = &q * &r;
    assert_abs_diff_eq!((&qr - a).frobenius_norm(), 0.0, epsilon = TOL);

    let qhq = &q.adjoint() * &q;
    assert_abs_diff_eq!(
        (&qhq - &DynMatrix::identity(m)).frobenius_norm(),
        0.0,
        epsilon = TOL
    );

    assert!(r.max_abs_below_diagonal() < TOL, "R not upper triangular");
}

#[test]
fn complex_qr_factorization() {
    let a = DynMatrix::from_rows(
        3,
        3,
        &[
            c(1.0, 2.0), c(3.0, -1.0), c(0.0, 1.0),
            c(2.0, 0.0), c(1.0, 1.0), c(-1.0, 2.0),
            c(0.5, -0.5), c(2.0, 3.0), c(1.0, 0.0),
        ],
    );
    check_unitary_factorization(&a);
}

#[test]
fn complex_qr_rectangular() {
    let a = DynMatrix::from_fn(4, 2, |i, j| c(i as f64 + 1.0, j as f64 - i as f64));
    check_unitary_factorization(&a);
}

#[test]
fn complex_qr_zero_pivot() {
    // x₀ = 0 takes sign(0) = -1, so R₀₀ = +‖x‖
    let a = DynMatrix::from_rows(2, 2, &[c(0.0, 0.0), c(1.0, 0.0), c(0.0, 3.0), c(2.0, 0.0)]);
    let (q, r) = householder_qr(&a).unwrap();
    assert_complex_near(r[(0, 0)], c(3.0, 0.0), TOL, "R00");
    assert_eq!(r[(1, 0)], c(0.0, 0.0));
    let qr = &q * &r;
    assert_abs_diff_eq!((&qr - &a).frobenius_norm(), 0.0, epsilon = TOL);
}

#[test]
fn complex_qr_diagonal_phase() {
    // x₀ = 3i: w₀ = -(i)·3, the reflection sends the column to -3i·e₀
    let a = DynMatrix::from_rows(2, 1, &[c(0.0, 3.0), c(4.0, 0.0)]);
    let (_, r) = householder_qr(&a).unwrap();
    assert_complex_near(r[(0, 0)], c(0.0, -5.0), TOL, "R00");
}

#[test]
fn complex_qr_solve() {
    let a = DynMatrix::from_rows(2, 2, &[c(2.0, 1.0), c(1.0, -1.0), c(1.0, 0.0), c(3.0, 2.0)]);
    let x_true = DynVector::from_slice(&[c(1.0, 1.0), c(-2.0, 0.5)]);
    let b = DynVector::from_vec(
        (0..2)
            .map(|i| a[(i, 0)] * x_true[0] + a[(i, 1)] * x_true[1])
            .collect(),
    );
    let x = a.solve_qr(&b).unwrap();
    for i in 0..2 {
        assert_complex_near(x[i], x_true[i], TOL, &format!("x[{}]", i));
    }
}

#[test]
fn complex_qr_det() {
    // (1+i)(1-i) - 2i = 2 - 2i
    let a = DynMatrix::from_rows(2, 2, &[c(1.0, 1.0), c(2.0, 0.0), c(0.0, 1.0), c(1.0, -1.0)]);
    let det = a.qr().unwrap().det().unwrap();
    assert_complex_near(det, c(2.0, -2.0), TOL, "det");
}

// ── Norms ────────────────────────────────────────────────────────────

#[test]
fn complex_frobenius_norm() {
    let a = DynMatrix::from_rows(1, 2, &[c(3.0, 4.0), c(0.0, 12.0)]);
    assert_abs_diff_eq!(a.frobenius_norm(), 13.0, epsilon = 1e-12);
}

// ── DFT ──────────────────────────────────────────────────────────────

#[test]
fn dft_matches_matrix_form() {
    // F[k, j] = ω^(jk) / √n applied as a DynMatrix product
    let n = 5;
    let x: Vec<C> = (0..n).map(|j| c(j as f64, 1.0 - j as f64)).collect();
    let f = DynMatrix::from_fn(n, n, |k, j| {
        let angle = -core::f64::consts::TAU * (j * k) as f64 / n as f64;
        Complex::from_polar(1.0 / (n as f64).sqrt(), angle)
    });
    let expected = &f * &DynVector::from_slice(&x).to_column();
    let y = dft(&x);
    for k in 0..n {
        assert_complex_near(y[k], expected[(k, 0)], 1e-12, &format!("bin {}", k));
    }
}

#[test]
fn dft_inverse_of_real_signal() {
    let x = [0.25, -1.0, 3.5, 2.0, 0.0, -0.75];
    let back = idft(dft_real(&x).as_slice());
    for (a, b) in x.iter().zip(back.iter()) {
        assert_complex_near(*b, c(*a, 0.0), 1e-12, "round trip");
    }
}
