use argmin::core::{
    CostFunction,
    Error,
    Executor,
    State,
    TerminationReason,
    TerminationStatus
};
use argmin::solver::brent::BrentRoot;

use crate::math::numericserror::{
    NumericsError,
    NumericsResult,
    check_tolerance
};
use crate::math::rootfinding::root::{
    Root,
    RootStatus
};

// ─────────────────────────────────────────────────────────────────────────────
// Brent bracketing
// ─────────────────────────────────────────────────────────────────────────────
//
// 以 argmin 的 BrentRoot 在 [lower, upper] 內求 f(x) = 0。
// 兩端點必須異號，否則 argmin 拒絕並回報 `NumericsError::Bracket`。
// 用途：不依賴初始值的交叉驗證（例如檢查不動點迭代的結果）。

struct ScalarProblem<F> {
    function: F,
}

impl<F> CostFunction for ScalarProblem<F>
where
    F: Fn(f64) -> f64,
{
    type Param = f64;
    type Output = f64;

    fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
        Ok((self.function)(*x))
    }
}

pub fn brent_root<F>(
    function: F,
    lower: f64,
    upper: f64,
    tolerance: f64,
    max_iterations: u64,
) -> NumericsResult<Root>
where
    F: Fn(f64) -> f64,
{
    check_tolerance(tolerance)?;
    if !(lower.is_finite() && upper.is_finite() && lower < upper) {
        return Err(NumericsError::InvalidBounds { a: lower, b: upper });
    }

    let solver = BrentRoot::new(lower, upper, tolerance);
    let result = Executor::new(ScalarProblem { function }, solver)
        .configure(|state| state.max_iters(max_iterations))
        .run()
        .map_err(|error| NumericsError::Bracket(error.to_string()))?;

    let state = result.state();
    let x = state
        .get_param()
        .copied()
        .ok_or_else(|| NumericsError::Bracket("solver finished without an estimate".to_string()))?;
    let status = match state.get_termination_status() {
        TerminationStatus::Terminated(TerminationReason::SolverConverged) => RootStatus::Converged,
        _ => RootStatus::IterationLimit,
    };

    Ok(Root::new(x, state.get_iter() as usize, status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn half_height_residual(x: f64) -> f64 {
        let target = FRAC_1_SQRT_2 * (-0.5f64).exp() / 2.0;
        x * (-x * x).exp() - target
    }

    #[test]
    fn brackets_both_half_maximum_points() {
        let left = brent_root(half_height_residual, 0.0, FRAC_1_SQRT_2, 1e-12, 100).unwrap();
        let right = brent_root(half_height_residual, FRAC_1_SQRT_2, 3.0, 1e-12, 100).unwrap();

        assert!(left.converged());
        assert!(right.converged());
        assert!((left.x() - 0.225_641_785_906_491_5).abs() < 1e-9);
        assert!((right.x() - 1.358_792_575_945_588_3).abs() < 1e-9);
    }

    #[test]
    fn interval_without_sign_change_is_rejected() {
        let result = brent_root(half_height_residual, 2.0, 3.0, 1e-12, 100);
        assert!(matches!(result, Err(NumericsError::Bracket(_))));
    }

    #[test]
    fn malformed_interval_is_rejected() {
        assert_eq!(
            brent_root(half_height_residual, 1.0, 0.0, 1e-12, 100),
            Err(NumericsError::InvalidBounds { a: 1.0, b: 0.0 })
        );
        assert!(brent_root(half_height_residual, 0.0, f64::INFINITY, 1e-12, 100).is_err());
    }
}
