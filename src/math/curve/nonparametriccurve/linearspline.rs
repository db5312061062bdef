use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Sample,
    split_samples,
    validate_samples
};
use crate::math::numericserror::NumericsResult;

// ─────────────────────────────────────────────
// LinearSpline
// ─────────────────────────────────────────────
//
// 區間搜尋採線性掃描：取第一個滿足 x_i ≤ x ≤ x_{i+1} 的區間，
// 因此 x 恰為內部節點時落在左側區間。
//
// 外推：
//   x > x_{n-1}：延續最後一段的斜率
//   x < x_0    ：延續第一段的斜率
//
// 區間內以凸組合求值：
//   S(x) = y_i·(1-w) + y_{i+1}·w,  w = (x-x_i)/(x_{i+1}-x_i)
// w = 0 或 1 時結果恰為節點值（節點處冪等）。

fn find_interval(x: f64, xs: &[f64]) -> usize {
    let last = xs.len() - 2;
    if x > xs[last + 1] {
        return last;
    }
    xs.windows(2)
        .position(|pair| x >= pair[0] && x <= pair[1])
        .unwrap_or(0)
}

fn interpolate_on(i: usize, x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let w = (x - xs[i]) / (xs[i + 1] - xs[i]);
    ys[i] * (1.0 - w) + ys[i + 1] * w
}

/// 分段線性插值（含外推）。至少需要 2 個節點。
pub fn evaluate_linear_spline(x_point: f64, xs: &[f64], ys: &[f64]) -> NumericsResult<f64> {
    validate_samples(xs, ys, 2)?;
    let i = find_interval(x_point, xs);
    Ok(interpolate_on(i, x_point, xs, ys))
}

pub struct LinearSpline {
    x_data: Vec<f64>,
    y_data: Vec<f64>,
}

impl LinearSpline {
    pub fn new(samples: Vec<Sample>) -> NumericsResult<LinearSpline> {
        let (x_data, y_data) = split_samples(&samples);
        Self::from_xy(x_data, y_data)
    }

    pub fn from_xy(x_data: Vec<f64>, y_data: Vec<f64>) -> NumericsResult<LinearSpline> {
        validate_samples(&x_data, &y_data, 2)?;
        Ok(LinearSpline { x_data, y_data })
    }
}

impl NonparametricCurve for LinearSpline {
    fn samples(&self) -> Vec<Sample> {
        self.x_data
            .iter()
            .zip(self.y_data.iter())
            .map(|(&x, &y)| Sample::new(x, y))
            .collect()
    }

    fn min_x(&self) -> f64 {
        self.x_data[0]
    }

    fn max_x(&self) -> f64 {
        self.x_data[self.x_data.len() - 1]
    }
}

impl Curve for LinearSpline {
    fn value(&self, x: f64) -> f64 {
        let i = find_interval(x, &self.x_data);
        interpolate_on(i, x, &self.x_data, &self.y_data)
    }

    fn derivative(&self, x: f64) -> f64 {
        let i = find_interval(x, &self.x_data);
        (self.y_data[i + 1] - self.y_data[i]) / (self.x_data[i + 1] - self.x_data[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::math::numericserror::NumericsError;

    const XS: [f64; 5] = [0.0, 0.3, 1.7, 2.2, 5.0];
    const YS: [f64; 5] = [1.1, -0.7, 3.3, 0.1, 12.9];

    #[test]
    fn spline_is_exact_at_breakpoints() {
        for (&x, &y) in XS.iter().zip(YS.iter()) {
            assert_eq!(evaluate_linear_spline(x, &XS, &YS).unwrap(), y);
        }
    }

    #[test]
    fn spline_interpolates_linearly_inside_an_interval() {
        let value = evaluate_linear_spline(1.0, &XS, &YS).unwrap();
        assert_relative_eq!(value, -0.7 + 4.0 * 0.7 / 1.4, max_relative = 1e-14);
    }

    #[test]
    fn spline_extrapolates_with_the_end_slopes() {
        let spline = LinearSpline::from_xy(XS.to_vec(), YS.to_vec()).unwrap();

        let right_slope = (12.9 - 0.1) / (5.0 - 2.2);
        assert_relative_eq!(spline.value(6.0), 12.9 + right_slope, max_relative = 1e-14);
        assert_relative_eq!(spline.derivative(6.0), right_slope, max_relative = 1e-14);

        let left_slope = (-0.7 - 1.1) / 0.3;
        assert_relative_eq!(spline.value(-1.0), 1.1 - left_slope, max_relative = 1e-14);
    }

    #[test]
    fn breakpoint_derivative_uses_the_first_matching_interval() {
        let spline = LinearSpline::from_xy(XS.to_vec(), YS.to_vec()).unwrap();
        // x = 1.7 同時屬於 [0.3, 1.7] 與 [1.7, 2.2]，取前者
        assert_relative_eq!(spline.derivative(1.7), (3.3 + 0.7) / 1.4, max_relative = 1e-14);
    }

    #[test]
    fn spline_needs_two_samples() {
        assert_eq!(
            evaluate_linear_spline(0.0, &[1.0], &[2.0]),
            Err(NumericsError::InsufficientSamples { required: 2, found: 1 })
        );
        assert!(LinearSpline::new(vec![Sample::new(1.0, 1.0), Sample::new(1.0, 2.0)]).is_err());
    }
}
