use crate::traits::FloatScalar;

use super::{OptimError, RootResult};

/// Settings for scalar root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct RootSettings<T> {
    /// Convergence tolerance on the step / half bracket width.
    pub x_tol: T,
    /// Convergence tolerance on the function value `|f(x)|`.
    pub f_tol: T,
    /// Maximum number of iterations.
    pub max_iter: usize,
}

impl Default for RootSettings<f64> {
    fn default() -> Self {
        Self {
            x_tol: 1e-12,
            f_tol: 1e-12,
            max_iter: 100,
        }
    }
}

impl Default for RootSettings<f32> {
    fn default() -> Self {
        Self {
            x_tol: 1e-6,
            f_tol: 1e-6,
            max_iter: 100,
        }
    }
}

/// Bisection method for bracketed root finding.
///
/// Halves the bracket `[a, b]` each iteration, keeping the half on which `f`
/// changes sign. The endpoints may be given in either order.
///
/// # Arguments
///
/// * `f` — function whose root is sought
/// * `a`, `b` — bracket endpoints; `f(a)` and `f(b)` must not share a sign
/// * `settings` — convergence tolerances and iteration limit
///
/// Converges when `|f(c)| < f_tol` or half the bracket width drops below
/// `x_tol`. An exact zero at an endpoint is returned without iterating.
///
/// # Errors
///
/// Returns [`OptimError::BracketInvalid`] if `f(a)` and `f(b)` have the same sign.
/// Returns [`OptimError::NotFinite`] if `f` yields NaN or infinity.
/// Returns [`OptimError::MaxIterations`] if convergence is not achieved.
///
/// # Example
///
/// ```
/// use numlab::optim::{bisection, RootSettings};
///
/// // Find √10 as root of x² - 10
/// let r = bisection(|x| x * x - 10.0, 0.0, 4.0, &RootSettings::default()).unwrap();
/// assert!((r.x - 10.0_f64.sqrt()).abs() < 1e-11);
/// ```
pub fn bisection<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    settings: &RootSettings<T>,
) -> Result<RootResult<T>, OptimError> {
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let fb = f(b);
    let mut evals = 2usize;

    if !fa.is_finite() || !fb.is_finite() {
        return Err(OptimError::NotFinite);
    }
    if fa == T::zero() {
        return Ok(RootResult { x: a, fx: fa, iterations: 0, evals });
    }
    if fb == T::zero() {
        return Ok(RootResult { x: b, fx: fb, iterations: 0, evals });
    }
    if (fa > T::zero()) == (fb > T::zero()) {
        return Err(OptimError::BracketInvalid);
    }

    let half = T::from(0.5).unwrap();

    for iter in 0..settings.max_iter {
        let c = a + (b - a) * half;
        let fc = f(c);
        evals += 1;

        if !fc.is_finite() {
            return Err(OptimError::NotFinite);
        }

        if fc.abs() < settings.f_tol || (b - a).abs() * half < settings.x_tol {
            #[cfg(feature = "log")]
            log::debug!("bisection converged after {} iterations", iter + 1);
            return Ok(RootResult {
                x: c,
                fx: fc,
                iterations: iter + 1,
                evals,
            });
        }

        // Keep the half where the sign changes
        if (fa > T::zero()) != (fc > T::zero()) {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
    }

    #[cfg(feature = "log")]
    log::warn!(
        "bisection: maximum number of iterations ({}) reached, approximation may be inaccurate",
        settings.max_iter
    );
    Err(OptimError::MaxIterations)
}

/// Newton's method for scalar root finding.
///
/// Uses `x_{n+1} = x_n - f(x_n) / f'(x_n)` with user-supplied derivative.
///
/// # Arguments
///
/// * `f` — function whose root is sought
/// * `df` — derivative of `f`
/// * `x0` — initial guess
/// * `settings` — convergence tolerances and iteration limit
///
/// # Errors
///
/// Returns [`OptimError::Singular`] if the derivative is near zero.
/// Returns [`OptimError::NotFinite`] if an iterate or `f` becomes NaN / infinite.
/// Returns [`OptimError::MaxIterations`] if convergence is not achieved.
///
/// # Example
///
/// ```
/// use numlab::optim::{newton_1d, RootSettings};
///
/// // Find √2 as root of x² - 2
/// let r = newton_1d(
///     |x| x * x - 2.0,
///     |x| 2.0 * x,
///     1.0,
///     &RootSettings::default(),
/// ).unwrap();
/// assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
pub fn newton_1d<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    mut df: impl FnMut(T) -> T,
    x0: T,
    settings: &RootSettings<T>,
) -> Result<RootResult<T>, OptimError> {
    let mut x = x0;
    let mut fx = f(x);
    let mut evals = 1usize;

    for iter in 0..settings.max_iter {
        if !fx.is_finite() {
            return Err(OptimError::NotFinite);
        }
        if fx.abs() < settings.f_tol {
            return Ok(RootResult {
                x,
                fx,
                iterations: iter,
                evals,
            });
        }

        let dfx = df(x);
        evals += 1;

        if !(dfx.abs() >= T::epsilon()) {
            return Err(OptimError::Singular);
        }

        let x_new = x - fx / dfx;
        if !x_new.is_finite() {
            return Err(OptimError::NotFinite);
        }

        if (x_new - x).abs() < settings.x_tol {
            fx = f(x_new);
            evals += 1;
            #[cfg(feature = "log")]
            log::debug!("newton converged after {} iterations", iter + 1);
            return Ok(RootResult {
                x: x_new,
                fx,
                iterations: iter + 1,
                evals,
            });
        }

        x = x_new;
        fx = f(x);
        evals += 1;
    }

    #[cfg(feature = "log")]
    log::warn!(
        "newton: maximum number of iterations ({}) reached, last iterate {:?}",
        settings.max_iter,
        x
    );
    Err(OptimError::MaxIterations)
}
