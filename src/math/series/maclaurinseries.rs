use serde::Deserialize;

use crate::math::numericserror::{
    NumericsError,
    NumericsResult,
    check_tolerance
};

// ─────────────────────────────────────────────────────────────────────────────
// Maclaurin series
// ─────────────────────────────────────────────────────────────────────────────
//
//   sin(t) = t - t^3/3! + t^5/5! - ...
//     term_{k+2} = -term_k · t² / ((k+2)(k+1)),  term_1 = t
//
//   exp(t) = 1 + t + t^2/2! + ...
//     term_{k+1} = term_k · t / (k+1),  term_0 = 1
//
// `n_terms` 代表納入的最高次方：sin 累加所有 ≤ n_terms 的奇次項，
// exp 累加 0..=n_terms 次項。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesFunction {
    Sin,
    Exp
}

impl SeriesFunction {
    pub fn name(&self) -> &'static str {
        match self {
            SeriesFunction::Sin => "sin",
            SeriesFunction::Exp => "exp"
        }
    }

    /// 標準函式庫的值，作為誤差比較基準
    pub fn exact(&self, t: f64) -> f64 {
        match self {
            SeriesFunction::Sin => t.sin(),
            SeriesFunction::Exp => t.exp()
        }
    }

    fn first_candidate(&self) -> usize {
        match self {
            SeriesFunction::Sin => 3,
            SeriesFunction::Exp => 1
        }
    }

    fn candidate_step(&self) -> usize {
        match self {
            SeriesFunction::Sin => 2,
            SeriesFunction::Exp => 1
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesResult {
    value: f64,
    terms_used: usize
}

impl SeriesResult {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// 實際相加的項數，恆 ≥ 1
    pub fn terms_used(&self) -> usize {
        self.terms_used
    }
}

/// 搜尋最佳項數時的上限（最高次方）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeriesTermCap {
    pub sin: usize,
    pub exp: usize
}

impl SeriesTermCap {
    pub fn for_function(&self, kind: SeriesFunction) -> usize {
        match kind {
            SeriesFunction::Sin => self.sin,
            SeriesFunction::Exp => self.exp
        }
    }
}

impl Default for SeriesTermCap {
    fn default() -> Self {
        SeriesTermCap { sin: 50, exp: 40 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimalTermCount {
    n_terms: usize,
    abs_error: f64,
    reached_target: bool
}

impl OptimalTermCount {
    pub fn n_terms(&self) -> usize {
        self.n_terms
    }

    pub fn abs_error(&self) -> f64 {
        self.abs_error
    }

    /// false 代表搜尋撞到上限，`n_terms` 為最後嘗試的項數
    pub fn reached_target(&self) -> bool {
        self.reached_target
    }
}

pub(crate) fn series_sum(kind: SeriesFunction, t: f64, n_terms: usize) -> SeriesResult {
    match kind {
        SeriesFunction::Sin => {
            let t_sq = t * t;
            let mut term = t;
            let mut sum = term;
            let mut terms_used = 1;
            let mut k = 3;
            while k <= n_terms {
                term = -term * t_sq / ((k * (k - 1)) as f64);
                sum += term;
                terms_used += 1;
                k += 2;
            }
            SeriesResult { value: sum, terms_used }
        }
        SeriesFunction::Exp => {
            let mut term = 1.0;
            let mut sum = term;
            for k in 1..=n_terms {
                term = term * t / k as f64;
                sum += term;
            }
            SeriesResult { value: sum, terms_used: n_terms + 1 }
        }
    }
}

/// 截斷 Maclaurin 級數。`n_terms == 0` 視為不合法輸入。
pub fn maclaurin_sum(kind: SeriesFunction, t: f64, n_terms: usize) -> NumericsResult<SeriesResult> {
    if n_terms == 0 {
        return Err(NumericsError::InvalidTermCount(n_terms));
    }
    Ok(series_sum(kind, t, n_terms))
}

/// 線性搜尋使 |級數 - 精確值| ≤ target_error 的最小項數。
///
/// 候選值：sin 為 3, 5, 7, ...；exp 為 1, 2, 3, ...，皆不超過 `cap`。
/// 超過上限時回傳最後嘗試的項數，並標記 `reached_target = false`。
/// 這是調參用的啟發式工具，上限之外不保證收斂。
pub fn find_optimal_term_count(
    kind: SeriesFunction,
    t: f64,
    target_error: f64,
    cap: &SeriesTermCap,
) -> NumericsResult<OptimalTermCount> {
    check_tolerance(target_error)?;

    let exact = kind.exact(t);
    let step = kind.candidate_step();
    let last_candidate = cap.for_function(kind).max(kind.first_candidate());

    let mut n_terms = kind.first_candidate();
    loop {
        let abs_error = (exact - series_sum(kind, t, n_terms).value).abs();
        if abs_error <= target_error {
            return Ok(OptimalTermCount { n_terms, abs_error, reached_target: true });
        }
        if n_terms + step > last_candidate {
            log::debug!(
                "{} series at t = {}: term cap {} reached with error {:e}",
                kind.name(), t, last_candidate, abs_error
            );
            return Ok(OptimalTermCount { n_terms, abs_error, reached_target: false });
        }
        n_terms += step;
    }
}
