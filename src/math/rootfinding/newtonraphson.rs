use crate::math::curve::curve::Curve;
use crate::math::numericserror::{
    NumericsError,
    NumericsResult,
    check_tolerance
};
use crate::math::rootfinding::root::{
    Root,
    RootStatus
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonOptions {
    pub tolerance: f64,
    pub max_iterations: usize,
    /// |f'(x)| 低於此值時視為奇異並停止
    pub singular_threshold: f64
}

impl Default for NewtonOptions {
    fn default() -> Self {
        NewtonOptions {
            tolerance: 1e-6,
            max_iterations: 1000,
            singular_threshold: 1e-12
        }
    }
}

/// Newton–Raphson：x ← x - f(x) / f'(x)，收斂條件 |x_new - x| < tolerance。
///
/// 結束狀態：
/// - `Converged`：回傳 x_new
/// - `SingularDerivative`：|f'(x)| < singular_threshold，回傳當下的 x
/// - `OutOfDomain`：f(x) 或 f'(x) 不是有限值
/// - `IterationLimit`：用完迭代次數
pub fn newton_raphson<C>(curve: &C, x0: f64, options: &NewtonOptions) -> NumericsResult<Root>
where
    C: Curve + ?Sized,
{
    check_tolerance(options.tolerance)?;
    if !(options.singular_threshold.is_finite() && options.singular_threshold >= 0.0) {
        return Err(NumericsError::InvalidTolerance(options.singular_threshold));
    }

    let mut x = x0;
    for iteration in 0..options.max_iterations {
        let value = curve.value(x);
        let slope = curve.derivative(x);
        if !value.is_finite() || !slope.is_finite() {
            log::warn!("Newton iteration left the domain at x = {}", x);
            return Ok(Root::new(x, iteration, RootStatus::OutOfDomain));
        }
        if slope.abs() < options.singular_threshold {
            log::warn!("Newton iteration stopped on a singular derivative at x = {}", x);
            return Ok(Root::new(x, iteration, RootStatus::SingularDerivative));
        }

        let x_new = x - value / slope;
        if (x_new - x).abs() < options.tolerance {
            return Ok(Root::new(x_new, iteration + 1, RootStatus::Converged));
        }
        x = x_new;
    }

    log::warn!("Newton iteration did not converge in {} steps, last x = {}", options.max_iterations, x);
    Ok(Root::new(x, options.max_iterations, RootStatus::IterationLimit))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootScanOptions {
    pub newton: NewtonOptions,
    /// 收斂後仍需 |f(x)| < residual_tolerance 才接受
    pub residual_tolerance: f64,
    /// |x_i - x_j| < dedup_radius 視為同一個根，先找到者保留
    pub dedup_radius: f64
}

impl Default for RootScanOptions {
    fn default() -> Self {
        RootScanOptions {
            newton: NewtonOptions::default(),
            residual_tolerance: 1e-6,
            dedup_radius: 0.1
        }
    }
}

/// 從多個初始值各跑一次 Newton 法，收集相異的根（依找到的順序）。
///
/// 未收斂或殘差過大的結果直接略過。
pub fn scan_roots<C>(curve: &C, guesses: &[f64], options: &RootScanOptions) -> NumericsResult<Vec<Root>>
where
    C: Curve + ?Sized,
{
    let mut roots: Vec<Root> = Vec::new();
    for &guess in guesses {
        let root = newton_raphson(curve, guess, &options.newton)?;
        if !root.converged() {
            log::debug!("initial guess {} rejected: {}", guess, root.status());
            continue;
        }
        if curve.value(root.x()).abs() >= options.residual_tolerance {
            log::debug!("initial guess {} rejected: residual too large at x = {}", guess, root.x());
            continue;
        }
        let is_duplicate = roots
            .iter()
            .any(|existing| (existing.x() - root.x()).abs() < options.dedup_radius);
        if !is_duplicate {
            roots.push(root);
        }
    }
    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::math::curve::curve::FnCurve;
    use crate::math::curve::nonparametriccurve::newtonpolynomial::NewtonPolynomial;

    fn circle_tangent() -> FnCurve<impl Fn(f64) -> f64, impl Fn(f64) -> f64> {
        FnCurve::new(
            |x: f64| x * x + x.tan() * x.tan() - 1.0,
            |x: f64| 2.0 * x + 2.0 * x.tan() / (x.cos() * x.cos()),
        )
    }

    #[test]
    fn converges_on_the_circle_tangent_intersection() {
        let curve = circle_tangent();
        let root = newton_raphson(&curve, 0.6, &NewtonOptions::default()).unwrap();

        assert!(root.converged());
        assert_eq!(root.iterations(), 4);
        assert!(curve.value(root.x()).abs() < 1e-6);
        assert_relative_eq!(root.x(), 0.649_888_946_665_696_4, epsilon = 1e-9);
    }

    #[test]
    fn zero_derivative_is_reported_distinctly() {
        let curve = circle_tangent();
        let root = newton_raphson(&curve, 0.0, &NewtonOptions::default()).unwrap();

        assert_eq!(root.status(), RootStatus::SingularDerivative);
        assert_eq!(root.x(), 0.0);
        assert_eq!(root.iterations(), 0);
    }

    #[test]
    fn exhausted_iterations_are_not_reported_as_success() {
        let curve = circle_tangent();
        let options = NewtonOptions { max_iterations: 2, ..NewtonOptions::default() };
        let root = newton_raphson(&curve, 1.2, &options).unwrap();

        assert_eq!(root.status(), RootStatus::IterationLimit);
        assert_eq!(root.iterations(), 2);
    }

    #[test]
    fn scan_keeps_the_first_of_nearby_roots() {
        let curve = circle_tangent();
        let roots = scan_roots(&curve, &[-1.2, -0.6, 0.0, 0.6, 1.2], &RootScanOptions::default()).unwrap();

        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0].x(), -0.649_888_946_665_696_4, epsilon = 1e-9);
        assert_relative_eq!(roots[1].x(), 0.649_888_946_665_696_4, epsilon = 1e-9);
        // -1.2 比 -0.6 先出現，保留的是它的結果
        assert_eq!(roots[0].iterations(), 7);
    }

    #[test]
    fn works_on_an_interpolated_curve() {
        let polynomial = NewtonPolynomial::from_xy(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![-2.0, -1.0, 2.0, 7.0],
        ).unwrap();
        let options = NewtonOptions { tolerance: 1e-12, ..NewtonOptions::default() };
        let root = newton_raphson(&polynomial, 1.0, &options).unwrap();

        assert!(root.converged());
        assert_relative_eq!(root.x(), 2f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let curve = circle_tangent();
        let options = NewtonOptions { tolerance: -1.0, ..NewtonOptions::default() };
        assert!(newton_raphson(&curve, 0.6, &options).is_err());

        let options = NewtonOptions { singular_threshold: f64::NAN, ..NewtonOptions::default() };
        assert!(newton_raphson(&curve, 0.6, &options).is_err());
    }
}
