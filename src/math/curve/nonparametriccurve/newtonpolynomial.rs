use nalgebra::DMatrix;

use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Sample,
    split_samples,
    validate_samples
};
use crate::math::numericserror::{
    NumericsError,
    NumericsResult
};

// ─────────────────────────────────────────────────────────────────────────────
// NewtonPolynomial - Divided Difference Form
// ─────────────────────────────────────────────────────────────────────────────
//
// 差商遞迴：
//
//   diff[i][0] = y_i
//   diff[i][j] = (diff[i+1][j-1] - diff[i][j-1]) / (x_{i+j} - x_i)
//
// 插值多項式（Newton form）：
//
//   P(x) = Σ_j diff[0][j] · Π_{k<j} (x - x_k)
//
// 求值採巢狀 Horner：
//   P(x) = c_0 + (x-x_0)(c_1 + (x-x_1)(c_2 + ...))
//
// 注意：
//   - 全域多項式，允許外推，但離開 [x_0, x_{n-1}] 後誤差迅速放大，屬預期行為
//   - 差商表只屬於建構它的那次呼叫（或那個 NewtonPolynomial），不做跨呼叫快取

/// 三角形差商表：`(i, j)` 只在 `0 ≤ j < n`、`0 ≤ i < n - j` 時有定義
#[derive(Debug, Clone, PartialEq)]
pub struct DividedDifferenceTable {
    table: DMatrix<f64>,
}

impl DividedDifferenceTable {
    /// 建立差商表。x 必須嚴格遞增，重複的 x 會回報 `DuplicateAbscissa`。
    pub fn build(xs: &[f64], ys: &[f64]) -> NumericsResult<DividedDifferenceTable> {
        validate_samples(xs, ys, 1)?;

        let n = xs.len();
        let mut table = DMatrix::<f64>::zeros(n, n);
        for (i, &y) in ys.iter().enumerate() {
            table[(i, 0)] = y;
        }
        for j in 1..n {
            for i in 0..(n - j) {
                table[(i, j)] = (table[(i + 1, j - 1)] - table[(i, j - 1)]) / (xs[i + j] - xs[i]);
            }
        }

        Ok(DividedDifferenceTable { table })
    }

    pub(crate) fn len(&self) -> usize {
        self.table.nrows()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        let n = self.len();
        if j < n && i < n - j {
            Some(self.table[(i, j)])
        } else {
            None
        }
    }

    /// Newton form 係數 diff[0][0..n]
    pub fn coefficients(&self) -> Vec<f64> {
        (0..self.len()).filter_map(|j| self.get(0, j)).collect()
    }
}

/// 以差商表求 Newton 插值多項式在 `x_point` 的值。
///
/// `xs` 必須是建表時使用的節點；長度不符回報 `LengthMismatch`。
pub fn evaluate_newton(x_point: f64, xs: &[f64], table: &DividedDifferenceTable) -> NumericsResult<f64> {
    if xs.len() != table.len() {
        return Err(NumericsError::LengthMismatch {
            x_len: xs.len(),
            y_len: table.len()
        });
    }
    Ok(horner(x_point, xs, &table.coefficients()))
}

fn horner(x: f64, xs: &[f64], coefs: &[f64]) -> f64 {
    let n = coefs.len();
    let mut result = coefs[n - 1];
    for i in (0..n - 1).rev() {
        result = f64::mul_add(result, x - xs[i], coefs[i]);
    }
    result
}

pub struct NewtonPolynomial {
    x_data: Vec<f64>,
    y_data: Vec<f64>,
    coefs: Vec<f64>,
}

impl NewtonPolynomial {
    pub fn new(samples: Vec<Sample>) -> NumericsResult<NewtonPolynomial> {
        let (x_data, y_data) = split_samples(&samples);
        Self::from_xy(x_data, y_data)
    }

    pub fn from_xy(x_data: Vec<f64>, y_data: Vec<f64>) -> NumericsResult<NewtonPolynomial> {
        let coefs = DividedDifferenceTable::build(&x_data, &y_data)?.coefficients();
        Ok(NewtonPolynomial { x_data, y_data, coefs })
    }

    pub fn degree(&self) -> usize {
        self.coefs.len() - 1
    }
}

impl NonparametricCurve for NewtonPolynomial {
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

impl Curve for NewtonPolynomial {
    fn value(&self, x: f64) -> f64 {
        horner(x, &self.x_data, &self.coefs)
    }

    /// Horner 同步累積 P 與 P'：
    ///   P'_k = P'_{k+1}·(x - x_k) + P_{k+1}
    fn derivative(&self, x: f64) -> f64 {
        let n = self.coefs.len();
        let mut value = self.coefs[n - 1];
        let mut slope = 0.0;
        for i in (0..n - 1).rev() {
            let dx = x - self.x_data[i];
            slope = f64::mul_add(slope, dx, value);
            value = f64::mul_add(value, dx, self.coefs[i]);
        }
        slope
    }
}
