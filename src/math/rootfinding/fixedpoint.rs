use crate::math::numericserror::{
    NumericsError,
    NumericsResult,
    check_tolerance
};
use crate::math::rootfinding::root::{
    Root,
    RootStatus
};

pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// 不動點迭代 x ← g(x)，收斂條件 |x_new - x| < tolerance。
///
/// 用完 `max_iterations` 時回傳最後的迭代值並標記 `IterationLimit`；
/// g 回傳 NaN / ∞ 時停止並標記 `OutOfDomain`，回傳最後一個有限的迭代值。
pub fn fixed_point<G>(g: G, x0: f64, tolerance: f64, max_iterations: usize) -> NumericsResult<Root>
where
    G: Fn(f64) -> f64,
{
    check_tolerance(tolerance)?;

    let mut x = x0;
    for iteration in 1..=max_iterations {
        let x_new = g(x);
        if !x_new.is_finite() {
            log::warn!("fixed-point iteration left the domain after {} steps at x = {}", iteration, x);
            return Ok(Root::new(x, iteration, RootStatus::OutOfDomain));
        }
        if (x_new - x).abs() < tolerance {
            return Ok(Root::new(x_new, iteration, RootStatus::Converged));
        }
        x = x_new;
    }

    log::warn!("fixed-point iteration did not converge in {} steps, last x = {}", max_iterations, x);
    Ok(Root::new(x, max_iterations, RootStatus::IterationLimit))
}

// ─────────────────────────────────────────────────────────────────────────────
// HalfMaximumBranch
// ─────────────────────────────────────────────────────────────────────────────
//
// 解 x·exp(-x²) = target 的兩個分支（峰值在 x = 1/√2）：
//
//   Left ：x ← target·exp(x²)
//   Right：x ← sqrt(ln(x / target))，只在 x / target > 1 時有定義
//
// Right 分支一旦 x / target ≤ 1，ln 或 sqrt 產生 NaN，迭代以 OutOfDomain 結束。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfMaximumBranch {
    Left,
    Right
}

impl HalfMaximumBranch {
    pub fn update(&self, x: f64, target: f64) -> f64 {
        match self {
            HalfMaximumBranch::Left => target * (x * x).exp(),
            HalfMaximumBranch::Right => (x / target).ln().sqrt()
        }
    }
}

pub fn fixed_point_half_maximum(
    branch: HalfMaximumBranch,
    target: f64,
    x0: f64,
    tolerance: f64,
    max_iterations: usize,
) -> NumericsResult<Root> {
    if !(target.is_finite() && target > 0.0) {
        return Err(NumericsError::InvalidTarget(target));
    }
    fixed_point(|x| branch.update(x, target), x0, tolerance, max_iterations)
}

pub fn fixed_point_left(target: f64, x0: f64, tolerance: f64) -> NumericsResult<Root> {
    fixed_point_half_maximum(HalfMaximumBranch::Left, target, x0, tolerance, DEFAULT_MAX_ITERATIONS)
}

pub fn fixed_point_right(target: f64, x0: f64, tolerance: f64) -> NumericsResult<Root> {
    fixed_point_half_maximum(HalfMaximumBranch::Right, target, x0, tolerance, DEFAULT_MAX_ITERATIONS)
}
