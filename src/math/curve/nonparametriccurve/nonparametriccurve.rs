use crate::math::numericserror::{
    NumericsError,
    NumericsResult
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    x: f64,
    y: f64
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Sample {
        Sample { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn slope(lhs: &Sample, rhs: &Sample) -> f64 {
        (rhs.y - lhs.y) / (rhs.x - lhs.x)
    }
}

pub trait NonparametricCurve {
    fn samples(&self) -> Vec<Sample>;

    fn min_x(&self) -> f64;

    fn max_x(&self) -> f64;
}

/// 將 Sample 序列拆成 (xs, ys)
pub fn split_samples(samples: &[Sample]) -> (Vec<f64>, Vec<f64>) {
    samples.iter().map(|s| (s.x(), s.y())).unzip()
}

/// 檢查節點資料：非空、長度一致、皆為有限值、x 嚴格遞增。
///
/// 重複的 x 以 `DuplicateAbscissa` 回報，與一般的非遞增分開，
/// 因為前者在差商表中會直接造成除以零。
pub fn validate_samples(xs: &[f64], ys: &[f64], required: usize) -> NumericsResult<()> {
    if xs.len() != ys.len() {
        return Err(NumericsError::LengthMismatch { x_len: xs.len(), y_len: ys.len() });
    }
    if xs.is_empty() {
        return Err(NumericsError::EmptyDataset);
    }
    if xs.len() < required {
        return Err(NumericsError::InsufficientSamples { required, found: xs.len() });
    }

    for (index, (&x, &y)) in xs.iter().zip(ys.iter()).enumerate() {
        if !x.is_finite() || !y.is_finite() {
            return Err(NumericsError::NonFiniteSample { index, x, y });
        }
    }

    for (index, pair) in xs.windows(2).enumerate() {
        let (previous, x) = (pair[0], pair[1]);
        if x == previous {
            return Err(NumericsError::DuplicateAbscissa { index: index + 1, x });
        }
        if x < previous {
            return Err(NumericsError::NonIncreasingAbscissa { index: index + 1, x, previous });
        }
    }
    Ok(())
}
