//! General-purpose nonlinear least-squares machinery.
//!
//! Implements the classical Levenberg–Marquardt scheme (Levenberg 1944,
//! Marquardt 1963) with multiplicative damping of the normal equations,
//! following the standard textbook formulation. Kept generic over residual and
//! Jacobian closures so the fit models live next to their domain code.

use nalgebra::{DMatrix, DVector};
use thiserror::Error;

const LAMBDA_INITIAL: f64 = 1e-3;
const LAMBDA_UP: f64 = 10.0;
const LAMBDA_DOWN: f64 = 0.5;
const LAMBDA_MIN: f64 = 1e-12;
const LAMBDA_MAX: f64 = 1e12;
// Floor for the damping diagonal, so a zero curvature direction stays solvable.
const MIN_DIAGONAL: f64 = 1e-12;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("Exceeded the iteration budget of {iterations} without converging")]
    IterationBudget { iterations: usize },
}

#[derive(Debug, Clone)]
pub struct LeastSquaresSolution {
    pub parameters: DVector<f64>,
    /// Iterations consumed, including rejected damping attempts.
    pub iterations: usize,
    /// Euclidean norm of the residual vector at the solution.
    pub residual_norm: f64,
}

/// Minimizes `‖residuals(p)‖²` starting from `initial`.
///
/// `jacobian` must return the matrix of partial derivatives of the residuals
/// with respect to the parameters, one row per residual. Convergence is
/// declared when the gradient, the accepted step, or the relative cost drop
/// falls below `tolerance`; exhausting `max_iterations` is an explicit error,
/// and the last iterate is deliberately not exposed through it.
pub fn levenberg_marquardt<R, J>(
    initial: DVector<f64>,
    residuals: R,
    jacobian: J,
    max_iterations: usize,
    tolerance: f64,
) -> Result<LeastSquaresSolution, SolveError>
where
    R: Fn(&DVector<f64>) -> DVector<f64>,
    J: Fn(&DVector<f64>) -> DMatrix<f64>,
{
    let mut parameters = initial;
    let mut residual = residuals(&parameters);
    let mut cost = residual.norm_squared();
    let mut lambda = LAMBDA_INITIAL;

    for iteration in 1..=max_iterations {
        let jac = jacobian(&parameters);
        let jtj = jac.transpose() * &jac;
        let gradient = jac.transpose() * &residual;

        if gradient.amax() <= tolerance {
            return Ok(LeastSquaresSolution {
                parameters,
                iterations: iteration - 1,
                residual_norm: cost.sqrt(),
            });
        }

        let mut damped = jtj.clone();
        for i in 0..damped.nrows() {
            damped[(i, i)] += lambda * jtj[(i, i)].max(MIN_DIAGONAL);
        }

        let Some(step) = damped.cholesky().map(|c| c.solve(&gradient)) else {
            lambda = (lambda * LAMBDA_UP).min(LAMBDA_MAX);
            continue;
        };

        let candidate = &parameters - &step;
        let candidate_residual = residuals(&candidate);
        let candidate_cost = candidate_residual.norm_squared();

        if candidate_cost <= cost {
            let step_converged = step.norm() <= tolerance * (parameters.norm() + tolerance);
            let cost_converged = (cost - candidate_cost) <= tolerance * cost.max(tolerance);

            parameters = candidate;
            residual = candidate_residual;
            cost = candidate_cost;
            lambda = (lambda * LAMBDA_DOWN).max(LAMBDA_MIN);

            if step_converged || cost_converged {
                return Ok(LeastSquaresSolution {
                    parameters,
                    iterations: iteration,
                    residual_norm: cost.sqrt(),
                });
            }
        } else {
            lambda = (lambda * LAMBDA_UP).min(LAMBDA_MAX);
        }
    }

    Err(SolveError::IterationBudget {
        iterations: max_iterations,
    })
}
