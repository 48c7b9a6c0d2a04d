use super::*;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

// ═══════════════════════════════════════════════════════════════════
// Bisection
// ═══════════════════════════════════════════════════════════════════

#[test]
fn bisection_sqrt10() {
    let r = bisection(|x| x * x - 10.0, 0.0, 4.0, &RootSettings::default()).unwrap();
    assert_near(r.x, 10.0_f64.sqrt(), 1e-11, "bisection √10");
    assert_eq!(r.evals, r.iterations + 2);
}

#[test]
fn bisection_reversed_endpoints() {
    let r = bisection(|x| x * x - 10.0, 4.0, 0.0, &RootSettings::default()).unwrap();
    assert_near(r.x, 10.0_f64.sqrt(), 1e-11, "bisection reversed");
}

#[test]
fn bisection_negative_root() {
    let r = bisection(|x| x * x - 10.0, -5.0, -0.5, &RootSettings::default()).unwrap();
    assert_near(r.x, -(10.0_f64.sqrt()), 1e-11, "bisection -√10");
}

#[test]
fn bisection_log10() {
    // log10(x - 9) vanishes at x = 10
    let r = bisection(
        |x: f64| (x - 9.0).log10(),
        9.5,
        15.0,
        &RootSettings::default(),
    )
    .unwrap();
    assert_near(r.x, 10.0, 1e-10, "bisection log10");
}

#[test]
fn bisection_sin() {
    let r = bisection(|x: f64| x.sin(), 3.0, 4.0, &RootSettings::default()).unwrap();
    assert_near(r.x, core::f64::consts::PI, 1e-12, "bisection sin root");
}

#[test]
fn bisection_root_at_endpoint() {
    let r = bisection(|x| x - 1.0, 1.0, 3.0, &RootSettings::default()).unwrap();
    assert_eq!(r.x, 1.0);
    assert_eq!(r.iterations, 0);
}

#[test]
fn bisection_invalid_bracket() {
    // f(4) = 6 and f(-5) = 15 share a sign
    let r = bisection(|x| x * x - 10.0, 4.0, -5.0, &RootSettings::default());
    assert_eq!(r.unwrap_err(), OptimError::BracketInvalid);
}

#[test]
fn bisection_nan_endpoint() {
    // log10 of a negative number
    let r = bisection(
        |x: f64| (x - 9.0).log10(),
        2.0,
        15.0,
        &RootSettings::default(),
    );
    assert_eq!(r.unwrap_err(), OptimError::NotFinite);
}

#[test]
fn bisection_max_iterations() {
    let settings = RootSettings {
        x_tol: 1e-5,
        f_tol: 1e-5,
        max_iter: 15,
    };
    let r = bisection(|x| x * x - 10.0, 0.0, 4.0, &settings);
    assert_eq!(r.unwrap_err(), OptimError::MaxIterations);
}

#[test]
fn bisection_f32() {
    let settings = RootSettings::<f32>::default();
    let r = bisection(|x: f32| x * x - 2.0, 0.0f32, 2.0f32, &settings).unwrap();
    assert!((r.x - core::f32::consts::SQRT_2).abs() < 1e-5, "bisection f32");
}

// ═══════════════════════════════════════════════════════════════════
// Newton
// ═══════════════════════════════════════════════════════════════════

#[test]
fn newton_1d_sqrt2() {
    let r = newton_1d(
        |x| x * x - 2.0,
        |x| 2.0 * x,
        1.0,
        &RootSettings::default(),
    )
    .unwrap();
    assert_near(r.x, core::f64::consts::SQRT_2, 1e-12, "newton √2");
}

#[test]
fn newton_1d_cubic() {
    // f(x) = x^3 - x - 2
    let r = newton_1d(
        |x: f64| x * x * x - x - 2.0,
        |x: f64| 3.0 * x * x - 1.0,
        1.5,
        &RootSettings::default(),
    )
    .unwrap();
    assert!(r.fx.abs() < 1e-10, "newton cubic");
}

#[test]
fn newton_1d_exponential() {
    // f(x) = e^x - 3, root = ln(3)
    let r = newton_1d(
        |x: f64| x.exp() - 3.0,
        |x: f64| x.exp(),
        1.0,
        &RootSettings::default(),
    )
    .unwrap();
    assert_near(r.x, 3.0_f64.ln(), 1e-12, "newton exp root");
}

#[test]
fn newton_1d_starts_on_root() {
    // f(0) = 0 < f_tol even though f'(0) = 0
    let r = newton_1d(|x| x * x, |x| 2.0 * x, 0.0, &RootSettings::default()).unwrap();
    assert_eq!(r.iterations, 0);
}

#[test]
fn newton_1d_singular_derivative() {
    let r = newton_1d(|x| x * x + 1.0, |x| 2.0 * x, 0.0, &RootSettings::default());
    assert_eq!(r.unwrap_err(), OptimError::Singular);
}

#[test]
fn newton_1d_cube_root_diverges() {
    // Each step maps x to -2x for f(x) = cbrt(x)
    let settings = RootSettings {
        x_tol: 1e-5,
        f_tol: 1e-5,
        max_iter: 8,
    };
    let r = newton_1d(
        |x: f64| x.cbrt(),
        |x: f64| 1.0 / (3.0 * x.cbrt() * x.cbrt()),
        0.1,
        &settings,
    );
    assert_eq!(r.unwrap_err(), OptimError::MaxIterations);
}

#[test]
fn newton_1d_not_finite() {
    let r = newton_1d(
        |x: f64| x.ln(),
        |x: f64| 1.0 / x,
        -1.0,
        &RootSettings::default(),
    );
    assert_eq!(r.unwrap_err(), OptimError::NotFinite);
}
