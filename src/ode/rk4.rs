use crate::dynmatrix::DynVector;
use crate::traits::FloatScalar;

use super::OdeError;

/// Single step of the classic 4th-order Runge-Kutta method.
///
/// Advances `y` from `t` to `t + h` using `f(t, y) -> dy/dt`. Costs four
/// evaluations of `f`.
///
/// ```
/// use numlab::ode::rk4_step;
/// use numlab::DynVector;
///
/// // dy/dt = -y (exponential decay)
/// let y = DynVector::from_slice(&[1.0_f64]);
/// let y1 = rk4_step(0.0, &y, 0.01, |_t, y| y * (-1.0));
/// assert!((y1[0] - (-0.01_f64).exp()).abs() < 1e-10);
/// ```
pub fn rk4_step<T: FloatScalar>(
    t: T,
    y: &DynVector<T>,
    h: T,
    mut f: impl FnMut(T, &DynVector<T>) -> DynVector<T>,
) -> DynVector<T> {
    let half = T::from(0.5).unwrap();
    let sixth = T::from(1.0 / 6.0).unwrap();
    let third = T::from(1.0 / 3.0).unwrap();

    let k1 = f(t, y);
    let k2 = f(t + h * half, &y.add_scaled(h * half, &k1));
    let k3 = f(t + h * half, &y.add_scaled(h * half, &k2));
    let k4 = f(t + h, &y.add_scaled(h, &k3));

    y.add_scaled(h * sixth, &k1)
        .add_scaled(h * third, &k2)
        .add_scaled(h * third, &k3)
        .add_scaled(h * sixth, &k4)
}

/// Integrate an ODE using fixed-step 4th-order Runge-Kutta.
///
/// Returns the final state at `tf`. The step size `dt` is used directly
/// (its sign is taken from the direction `t0 → tf`) and the last step is
/// clamped to land on `tf`. `t0 == tf` returns `y0` unchanged.
///
/// # Errors
///
/// Returns [`OdeError::InvalidStep`] if `dt` is zero or non-finite, if `t0`
/// or `tf` is non-finite, or if a step is too small to advance `t`.
/// Returns [`OdeError::StepNotFinite`] if the state becomes NaN or infinite.
///
/// ```
/// use numlab::ode::rk4;
/// use numlab::DynVector;
///
/// // Harmonic oscillator: y'' = -y  →  [y, y']
/// let y0 = DynVector::from_slice(&[1.0_f64, 0.0]);
/// let yf = rk4(0.0, std::f64::consts::TAU, 0.001, &y0,
///     |_t, y| DynVector::from_slice(&[y[1], -y[0]]),
/// ).unwrap();
/// assert!((yf[0] - 1.0).abs() < 1e-8);
/// assert!((yf[1]).abs() < 1e-8);
/// ```
pub fn rk4<T: FloatScalar>(
    t0: T,
    tf: T,
    dt: T,
    y0: &DynVector<T>,
    mut f: impl FnMut(T, &DynVector<T>) -> DynVector<T>,
) -> Result<DynVector<T>, OdeError> {
    if !dt.is_finite() || dt == T::zero() || !t0.is_finite() || !tf.is_finite() {
        return Err(OdeError::InvalidStep);
    }
    let mut t = t0;
    let mut y = y0.clone();
    if t0 == tf {
        return Ok(y);
    }
    let tdir = if tf > t0 { T::one() } else { -T::one() };
    let mut h = dt.abs() * tdir;

    loop {
        // Clamp last step
        if (tdir > T::zero() && t + h > tf) || (tdir < T::zero() && t + h < tf) {
            h = tf - t;
        }

        let t_next = t + h;
        if t_next == t {
            return Err(OdeError::InvalidStep);
        }

        y = rk4_step(t, &y, h, &mut f);
        if !y.all_finite() {
            return Err(OdeError::StepNotFinite);
        }
        t = t_next;

        if (tdir > T::zero() && t >= tf) || (tdir < T::zero() && t <= tf) {
            break;
        }
    }

    Ok(y)
}
