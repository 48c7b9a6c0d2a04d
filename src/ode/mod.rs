//! ODE integration: fixed-step Runge-Kutta and three-step Adams methods.
//!
//! # Fixed-step
//!
//! [`rk4_step`] and [`rk4`] provide classic 4th-order Runge-Kutta integration.
//!
//! # Linear multistep
//!
//! Both Adams integrators run on a uniform grid of `N = round((tf - t0) / h)`
//! steps whose size is adjusted so the last node lands exactly on `tf`. The
//! two starting values after `y0` come from [`rk4_step`].
//!
//! | Integrator             | Kind                         | Order | Evals / step |
//! |------------------------|------------------------------|-------|--------------|
//! | [`adams_bashforth3`]   | explicit                     | 3     | 1            |
//! | [`adams_moulton3`]     | AB2 predictor, AM3 corrector | 3     | 1 + sweeps   |
//!
//! Every node is returned in a [`Trajectory`].
//!
//! # Example
//!
//! ```
//! use numlab::ode::adams_bashforth3;
//! use numlab::DynVector;
//!
//! // x' = x, x(0) = 1  →  x(t) = eᵗ
//! let y0 = DynVector::from_slice(&[1.0_f64]);
//! let sol = adams_bashforth3(0.0, 1.0, 0.01, &y0, |_t, y| y.clone()).unwrap();
//! let (tf, yf) = sol.last();
//! assert_eq!(tf, 1.0);
//! assert!((yf[0] - 1.0_f64.exp()).abs() < 1e-5);
//! ```

mod multistep;
mod rk4;

use alloc::vec::Vec;

use crate::dynmatrix::DynVector;


pub use multistep::{adams_bashforth3, adams_moulton3};
pub use rk4::{rk4, rk4_step};

/// Errors from ODE integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OdeError {
    /// Step size is zero, non-finite, points away from `tf`, or `t0 == tf`.
    #[error("step size is zero, non-finite, or inconsistent with the time span")]
    InvalidStep,
    /// State became non-finite (NaN / Inf).
    #[error("state is not finite")]
    StepNotFinite,
}

/// Settings for the predictor-corrector integrator.
#[derive(Debug, Clone, Copy)]
pub struct MultistepSettings<T> {
    /// Maximum fixed-point corrector sweeps per step.
    pub corrector_iterations: usize,
    /// Stop correcting once the infinity-norm change falls to this value.
    pub corrector_tol: T,
}

impl Default for MultistepSettings<f64> {
    fn default() -> Self {
        Self {
            corrector_iterations: 5,
            corrector_tol: 1e-12,
        }
    }
}

impl Default for MultistepSettings<f32> {
    fn default() -> Self {
        Self {
            corrector_iterations: 5,
            corrector_tol: 1e-6,
        }
    }
}

/// Grid nodes and states of a fixed-grid integration.
#[derive(Debug, Clone)]
pub struct Trajectory<T> {
    /// Grid nodes, `t[0] = t0` and `t[N] = tf`.
    pub t: Vec<T>,
    /// State at each node.
    pub y: Vec<DynVector<T>>,
    /// Total derivative evaluations.
    pub evals: usize,
}

impl<T: Copy> Trajectory<T> {
    /// Number of nodes (steps + 1).
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Always `false` for a trajectory produced by an integrator.
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Final node and state.
    ///
    /// # Panics
    ///
    /// Panics on an empty trajectory.
    pub fn last(&self) -> (T, &DynVector<T>) {
        let n = self.len();
        assert!(n > 0, "empty trajectory");
        (self.t[n - 1], &self.y[n - 1])
    }
}
