use alloc::vec::Vec;

use num_traits::ToPrimitive;

use crate::dynmatrix::DynVector;
use crate::traits::FloatScalar;

use super::rk4::rk4_step;
use super::{MultistepSettings, OdeError, Trajectory};

/// Number of uniform steps and the adjusted step size covering `[t0, tf]`.
fn grid<T: FloatScalar>(t0: T, tf: T, h: T) -> Result<(usize, T), OdeError> {
    let span = tf - t0;
    if !h.is_finite() || !span.is_finite() || h == T::zero() || span == T::zero() {
        return Err(OdeError::InvalidStep);
    }
    if (span > T::zero()) != (h > T::zero()) {
        return Err(OdeError::InvalidStep);
    }
    let steps = (span / h)
        .round()
        .to_usize()
        .ok_or(OdeError::InvalidStep)?
        .max(1);
    Ok((steps, span / T::from(steps).unwrap()))
}

/// Grid, starting states and the derivative window of a multistep run.
struct Start<T> {
    t: Vec<T>,
    y: Vec<DynVector<T>>,
    /// `f` at the three most recent nodes, oldest first.
    window: Vec<DynVector<T>>,
    h: T,
    steps: usize,
    evals: usize,
}

impl<T: FloatScalar> Start<T> {
    /// Lay out the grid and take up to two RK4 steps from `y0`.
    fn new(
        t0: T,
        tf: T,
        h: T,
        y0: &DynVector<T>,
        f: &mut impl FnMut(T, &DynVector<T>) -> DynVector<T>,
    ) -> Result<Self, OdeError> {
        let (steps, h) = grid(t0, tf, h)?;
        let t: Vec<T> = (0..=steps)
            .map(|i| {
                if i == steps {
                    tf
                } else {
                    t0 + h * T::from(i).unwrap()
                }
            })
            .collect();

        let mut y = Vec::with_capacity(steps + 1);
        y.push(y0.clone());
        let mut window = Vec::with_capacity(3);
        window.push(f(t[0], y0));
        let mut evals = 1;

        for i in 0..steps.min(2) {
            let next = rk4_step(t[i], &y[i], h, &mut *f);
            evals += 4;
            if !next.all_finite() {
                return Err(OdeError::StepNotFinite);
            }
            y.push(next);
            if i + 1 < steps {
                window.push(f(t[i + 1], &y[i + 1]));
                evals += 1;
            }
        }

        Ok(Self {
            t,
            y,
            window,
            h,
            steps,
            evals,
        })
    }

    /// Append the state for node `i + 1` and slide the derivative window.
    fn advance(
        &mut self,
        i: usize,
        next: DynVector<T>,
        f: &mut impl FnMut(T, &DynVector<T>) -> DynVector<T>,
    ) -> Result<(), OdeError> {
        if !next.all_finite() {
            return Err(OdeError::StepNotFinite);
        }
        self.y.push(next);
        if i + 1 < self.steps {
            let fi = f(self.t[i + 1], &self.y[i + 1]);
            self.evals += 1;
            self.window.rotate_left(1);
            self.window[2] = fi;
        }
        Ok(())
    }

    fn finish(self) -> Trajectory<T> {
        Trajectory {
            t: self.t,
            y: self.y,
            evals: self.evals,
        }
    }
}

/// Three-step Adams-Bashforth integration on a uniform grid.
///
/// `y[i+1] = y[i] + h (23 f[i] - 16 f[i-1] + 5 f[i-2]) / 12`
///
/// `y[1]` and `y[2]` are produced by [`rk4_step`]; after that each step costs
/// one evaluation of `f`.
///
/// # Errors
///
/// Returns [`OdeError::InvalidStep`] for a zero, non-finite or wrongly signed
/// `h`, or an empty span. Returns [`OdeError::StepNotFinite`] if the state
/// becomes NaN or infinite.
///
/// ```
/// use numlab::ode::adams_bashforth3;
/// use numlab::DynVector;
///
/// // x' = x on [0, 1]
/// let y0 = DynVector::from_slice(&[1.0_f64]);
/// let sol = adams_bashforth3(0.0, 1.0, 0.1, &y0, |_t, y| y.clone()).unwrap();
/// assert_eq!(sol.len(), 11);
/// ```
pub fn adams_bashforth3<T: FloatScalar>(
    t0: T,
    tf: T,
    h: T,
    y0: &DynVector<T>,
    mut f: impl FnMut(T, &DynVector<T>) -> DynVector<T>,
) -> Result<Trajectory<T>, OdeError> {
    let mut run = Start::new(t0, tf, h, y0, &mut f)?;
    let h = run.h;
    let twelfth = T::one() / T::from(12.0).unwrap();
    let b0 = h * T::from(23.0).unwrap() * twelfth;
    let b1 = -h * T::from(16.0).unwrap() * twelfth;
    let b2 = h * T::from(5.0).unwrap() * twelfth;

    for i in 2..run.steps {
        let next = run.y[i]
            .add_scaled(b0, &run.window[2])
            .add_scaled(b1, &run.window[1])
            .add_scaled(b2, &run.window[0]);
        run.advance(i, next, &mut f)?;
    }

    #[cfg(feature = "log")]
    log::trace!("adams_bashforth3: {} steps, {} evals", run.steps, run.evals);

    Ok(run.finish())
}

/// Three-step Adams-Moulton predictor-corrector on a uniform grid.
///
/// An Adams-Bashforth 2 predictor
/// `y* = y[i] + h (3 f[i] - f[i-1]) / 2`
/// is refined by fixed-point sweeps of the implicit corrector
/// `y* = y[i] + h (9 f(t[i+1], y*) + 19 f[i] - 5 f[i-1] + f[i-2]) / 24`
/// until the infinity-norm change is at most
/// [`corrector_tol`](MultistepSettings::corrector_tol) or
/// [`corrector_iterations`](MultistepSettings::corrector_iterations) sweeps
/// have run. Stopping on the sweep limit is not an error.
///
/// # Errors
///
/// Same as [`adams_bashforth3`].
///
/// ```
/// use numlab::ode::{adams_moulton3, MultistepSettings};
/// use numlab::DynVector;
///
/// // x' = (4t² - 2x) / t, x(1) = 2  →  x(t) = t² + t⁻²
/// let y0 = DynVector::from_slice(&[2.0_f64]);
/// let sol = adams_moulton3(
///     1.0, 2.0, 0.01, &y0,
///     |t, y| DynVector::from_slice(&[(4.0 * t * t - 2.0 * y[0]) / t]),
///     &MultistepSettings::default(),
/// ).unwrap();
/// let (_, yf) = sol.last();
/// assert!((yf[0] - 4.25).abs() < 1e-7);
/// ```
pub fn adams_moulton3<T: FloatScalar>(
    t0: T,
    tf: T,
    h: T,
    y0: &DynVector<T>,
    mut f: impl FnMut(T, &DynVector<T>) -> DynVector<T>,
    settings: &MultistepSettings<T>,
) -> Result<Trajectory<T>, OdeError> {
    let mut run = Start::new(t0, tf, h, y0, &mut f)?;
    let h = run.h;
    let half = T::from(0.5).unwrap();
    let p0 = h * T::from(3.0).unwrap() * half;
    let p1 = -h * half;
    let c = h / T::from(24.0).unwrap();
    let m0 = c * T::from(9.0).unwrap();
    let m1 = c * T::from(19.0).unwrap();
    let m2 = -c * T::from(5.0).unwrap();
    let m3 = c;

    for i in 2..run.steps {
        let t_next = run.t[i + 1];
        let mut guess = run.y[i]
            .add_scaled(p0, &run.window[2])
            .add_scaled(p1, &run.window[1]);
        let base = run.y[i]
            .add_scaled(m1, &run.window[2])
            .add_scaled(m2, &run.window[1])
            .add_scaled(m3, &run.window[0]);

        let mut converged = settings.corrector_iterations == 0;
        for _ in 0..settings.corrector_iterations {
            let fg = f(t_next, &guess);
            run.evals += 1;
            let corrected = base.add_scaled(m0, &fg);
            let delta = (&corrected - &guess).norm_inf();
            guess = corrected;
            if !guess.all_finite() {
                return Err(OdeError::StepNotFinite);
            }
            if delta <= settings.corrector_tol {
                converged = true;
                break;
            }
        }

        if !converged {
            #[cfg(feature = "log")]
            log::debug!("adams_moulton3: corrector hit the sweep limit at t = {:?}", t_next);
        }

        run.advance(i, guess, &mut f)?;
    }

    #[cfg(feature = "log")]
    log::trace!("adams_moulton3: {} steps, {} evals", run.steps, run.evals);

    Ok(run.finish())
}
