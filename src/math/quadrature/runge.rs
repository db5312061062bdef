use crate::math::numericserror::{
    NumericsError,
    NumericsResult
};
use crate::math::quadrature::quadraturerule::QuadratureRule;

/// Runge 法則：以 h 與 h/2 兩個估計值估計較細網格的誤差
///
/// E ≈ |I_h - I_{h/2}| / (2^p - 1)，p 為規則的誤差階數。p = 0 時分母為零，回報 `InvalidRuleOrder`。
pub fn runge_error_estimate(i_h: f64, i_h2: f64, order: u32) -> NumericsResult<f64> {
    if order == 0 {
        return Err(NumericsError::InvalidRuleOrder(order));
    }
    Ok((i_h - i_h2).abs() / (2f64.powi(order as i32) - 1.0))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceStep {
    pub intervals: usize,
    pub value: f64,
    /// 第一列沒有前一個估計值，為 None
    pub runge_error: Option<f64>
}

/// 從 `n_start` 開始每次將 n 加倍，直到超過 `n_max`，逐列附上 Runge 誤差估計。
pub fn convergence_study<F>(
    rule: QuadratureRule,
    f: F,
    a: f64,
    b: f64,
    n_start: usize,
    n_max: usize,
) -> NumericsResult<Vec<ConvergenceStep>>
where
    F: Fn(f64) -> f64,
{
    if !rule.is_composite() {
        return Err(NumericsError::NotCompositeRule(rule.name()));
    }
    if n_start == 0 || n_max < n_start {
        return Err(NumericsError::InvalidIntervalCount(n_start));
    }

    let mut steps: Vec<ConvergenceStep> = Vec::new();
    let mut previous: Option<f64> = None;
    let mut n = n_start;
    while n <= n_max {
        let estimate = rule.integrate(&f, a, b, n)?;
        let value = estimate.value();
        let runge_error = match previous {
            Some(coarse) => Some(runge_error_estimate(coarse, value, rule.order())?),
            None => None
        };
        steps.push(ConvergenceStep {
            intervals: estimate.intervals(),
            value,
            runge_error
        });
        previous = Some(value);
        n *= 2;
    }

    log::debug!("{} convergence study: {} refinements", rule, steps.len());
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn estimate_divides_by_two_to_the_order_minus_one() {
        assert_relative_eq!(runge_error_estimate(1.0, 1.3, 2).unwrap(), 0.1, max_relative = 1e-12);
        assert_relative_eq!(runge_error_estimate(2.0, 1.7, 4).unwrap(), 0.02, max_relative = 1e-12);
    }

    #[test]
    fn zero_order_has_no_estimate() {
        assert_eq!(runge_error_estimate(1.0, 2.0, 0), Err(NumericsError::InvalidRuleOrder(0)));
        assert_eq!(runge_error_estimate(1.0, 1.0, 0), Err(NumericsError::InvalidRuleOrder(0)));
        assert_relative_eq!(runge_error_estimate(1.0, 2.0, 1).unwrap(), 1.0, max_relative = 1e-15);
    }

    #[test]
    fn simpson_error_shrinks_by_about_sixteen_per_halving() {
        let steps = convergence_study(QuadratureRule::Simpson, f64::exp, 0.0, 1.0, 4, 32).unwrap();
        let counts: Vec<usize> = steps.iter().map(|step| step.intervals).collect();
        assert_eq!(counts, vec![4, 8, 16, 32]);
        assert!(steps[0].runge_error.is_none());

        let estimates: Vec<f64> = steps.iter().filter_map(|step| step.runge_error).collect();
        for pair in estimates.windows(2) {
            let ratio = pair[0] / pair[1];
            assert!(ratio > 15.0 && ratio < 17.0, "ratio {}", ratio);
        }

        // Runge 估計值接近較細網格的真實誤差
        let exact = 1f64.exp() - 1.0;
        for step in &steps[1..] {
            let actual = (step.value - exact).abs();
            let estimated = step.runge_error.unwrap();
            assert!((estimated - actual).abs() < 0.05 * actual);
        }
    }

    #[test]
    fn trapezoid_error_shrinks_by_about_four_per_halving() {
        let steps = convergence_study(QuadratureRule::Trapezoid, f64::exp, 0.0, 1.0, 10, 80).unwrap();
        let estimates: Vec<f64> = steps.iter().filter_map(|step| step.runge_error).collect();
        assert_eq!(estimates.len(), 3);
        for pair in estimates.windows(2) {
            let ratio = pair[0] / pair[1];
            assert!(ratio > 3.9 && ratio < 4.1);
        }
    }

    #[test]
    fn invalid_studies_are_rejected() {
        assert_eq!(
            convergence_study(QuadratureRule::Simpson, f64::exp, 0.0, 1.0, 0, 10),
            Err(NumericsError::InvalidIntervalCount(0))
        );
        assert_eq!(
            convergence_study(QuadratureRule::Simpson, f64::exp, 0.0, 1.0, 20, 10),
            Err(NumericsError::InvalidIntervalCount(20))
        );
    }

    #[test]
    fn gauss_rules_cannot_be_refined() {
        let gauss = QuadratureRule::GaussLegendre(crate::math::quadrature::gausslegendre::GaussNodes::Two);
        let result = convergence_study(gauss, f64::exp, 0.0, 1.0, 2, 8);
        assert_eq!(result, Err(NumericsError::NotCompositeRule("Gauss-Legendre 2")));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Gauss-Legendre 2 is not a composite rule and cannot be refined"
        );
    }
}
