use thiserror::Error;

pub type NumericsResult<T> = Result<T, NumericsError>;

// ─────────────────────────────────────────────────────────────────────────────
// NumericsError
// ─────────────────────────────────────────────────────────────────────────────
//
// 只收錄「輸入不合法」類錯誤，一律立即回報。
// 不收斂（NonConvergence）、導數奇異（SingularDerivative）並非錯誤，
// 由 `Root::status()` 表達；Simpson / 3/8 的 n 調整由 `QuadratureEstimate`
// 表達。

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericsError {
    #[error("dataset is empty")]
    EmptyDataset,

    #[error("x and y lengths differ: {x_len} vs {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("duplicate x value {x} at index {index}")]
    DuplicateAbscissa { index: usize, x: f64 },

    #[error("x values must be strictly increasing: x[{index}] = {x} follows {previous}")]
    NonIncreasingAbscissa { index: usize, x: f64, previous: f64 },

    #[error("sample {index} is not finite: ({x}, {y})")]
    NonFiniteSample { index: usize, x: f64, y: f64 },

    #[error("at least {required} samples required, got {found}")]
    InsufficientSamples { required: usize, found: usize },

    #[error("term count must be at least 1, got {0}")]
    InvalidTermCount(usize),

    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),

    #[error("subinterval count must be at least 1, got {0}")]
    InvalidIntervalCount(usize),

    #[error("{0} is not a composite rule and cannot be refined")]
    NotCompositeRule(&'static str),

    #[error("rule order must be at least 1, got {0}")]
    InvalidRuleOrder(u32),

    #[error("integration bounds must be finite, got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("target value must be positive and finite, got {0}")]
    InvalidTarget(f64),

    #[error("bracketing solver failed: {0}")]
    Bracket(String),
}

pub(crate) fn check_tolerance(tolerance: f64) -> NumericsResult<f64> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(tolerance)
    } else {
        Err(NumericsError::InvalidTolerance(tolerance))
    }
}
