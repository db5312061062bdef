use crate::math::numericserror::{
    NumericsError,
    NumericsResult
};
use crate::math::quadrature::quadraturerule::QuadratureEstimate;

// ─────────────────────────────────────────────
// 複合 Newton–Cotes 規則（等距 n 個子區間，h = (b-a)/n）
// ─────────────────────────────────────────────
//
//   Midpoint ：h · Σ f(a + (i+½)h)
//   Trapezoid：h · (½f(a) + ½f(b) + Σ_{i=1}^{n-1} f(a + ih))
//   Simpson  ：h/3 · (1, 4, 2, 4, ..., 4, 1)，n 須為偶數
//   3/8      ：3h/8 · (1, 3, 3, 2, ..., 3, 3, 1)，n 須為 3 的倍數
//
// n 不滿足整除條件時向上調整，實際使用的 n 記在 QuadratureEstimate 中。

pub(crate) fn check_bounds(a: f64, b: f64) -> NumericsResult<()> {
    if a.is_finite() && b.is_finite() {
        Ok(())
    } else {
        Err(NumericsError::InvalidBounds { a, b })
    }
}

fn check_intervals(n: usize) -> NumericsResult<()> {
    if n == 0 {
        Err(NumericsError::InvalidIntervalCount(n))
    } else {
        Ok(())
    }
}

pub fn midpoint<F>(f: F, a: f64, b: f64, n: usize) -> NumericsResult<QuadratureEstimate>
where
    F: Fn(f64) -> f64,
{
    check_bounds(a, b)?;
    check_intervals(n)?;

    let h = (b - a) / n as f64;
    let sum: f64 = (0..n).map(|i| f(a + (i as f64 + 0.5) * h)).sum();
    Ok(QuadratureEstimate::new(sum * h, 2, n, n))
}

pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> NumericsResult<QuadratureEstimate>
where
    F: Fn(f64) -> f64,
{
    check_bounds(a, b)?;
    check_intervals(n)?;

    let h = (b - a) / n as f64;
    let interior: f64 = (1..n).map(|i| f(a + i as f64 * h)).sum();
    let sum = 0.5 * f(a) + 0.5 * f(b) + interior;
    Ok(QuadratureEstimate::new(sum * h, 2, n, n))
}

pub fn simpson<F>(f: F, a: f64, b: f64, n: usize) -> NumericsResult<QuadratureEstimate>
where
    F: Fn(f64) -> f64,
{
    check_bounds(a, b)?;
    check_intervals(n)?;

    let used = if n % 2 != 0 { n + 1 } else { n };
    if used != n {
        log::debug!("Simpson rule: {} subintervals adjusted to {}", n, used);
    }

    let h = (b - a) / used as f64;
    let mut sum = f(a) + f(b);
    for i in 1..used {
        let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
        sum += weight * f(a + i as f64 * h);
    }
    Ok(QuadratureEstimate::new(sum * h / 3.0, 4, n, used))
}

pub fn three_eighths<F>(f: F, a: f64, b: f64, n: usize) -> NumericsResult<QuadratureEstimate>
where
    F: Fn(f64) -> f64,
{
    check_bounds(a, b)?;
    check_intervals(n)?;

    let used = n.div_ceil(3) * 3;
    if used != n {
        log::debug!("3/8 rule: {} subintervals adjusted to {}", n, used);
    }

    let h = (b - a) / used as f64;
    let mut sum = f(a) + f(b);
    for i in 1..used {
        let weight = if i % 3 == 0 { 2.0 } else { 3.0 };
        sum += weight * f(a + i as f64 * h);
    }
    Ok(QuadratureEstimate::new(sum * h * 3.0 / 8.0, 4, n, used))
}
