use std::f64::consts::{
    FRAC_PI_2,
    PI,
    TAU
};

use crate::math::numericserror::{
    NumericsError,
    NumericsResult
};
use crate::math::series::maclaurinseries::{
    SeriesFunction,
    series_sum
};

// ─────────────────────────────────────────────────────────────────────────────
// Range reduction
// ─────────────────────────────────────────────────────────────────────────────
//
// sin：t mod 2π → (-π, π]，再以 sin(π - r) = sin(r) 折到 [-π/2, π/2]。
//   15 次截斷誤差上界 (π/2)^17 / 17! ≈ 6e-12；
//   若只縮到 (-π, π]，上界 π^17 / 17! ≈ 8e-7，不足 1e-10。
//
// exp：反覆減半至 t ≤ 1（共 k 次），exp(t) = exp(t / 2^k)^(2^k)。
//   15 次截斷相對誤差上界 1/16! ≈ 5e-14，平方 k 次後放大約 2^k 倍，
//   t ≤ 50 時 k ≤ 6。
//   負引數：exp(t) = 1 / exp(-t)。

pub const REDUCED_SERIES_TERMS: usize = 15;

/// 將角度縮到 (-π, π]
pub fn reduce_angle(t: f64) -> f64 {
    let mut reduced = t % TAU;
    if reduced > PI {
        reduced -= TAU;
    } else if reduced <= -PI {
        reduced += TAU;
    }
    reduced
}

fn fold_half_period(r: f64) -> f64 {
    if r > FRAC_PI_2 {
        PI - r
    } else if r < -FRAC_PI_2 {
        -PI - r
    } else {
        r
    }
}

fn sin_with_terms(t: f64, n_terms: usize) -> f64 {
    let folded = fold_half_period(reduce_angle(t));
    series_sum(SeriesFunction::Sin, folded, n_terms).value()
}

fn exp_with_terms(t: f64, n_terms: usize) -> f64 {
    if t.is_nan() {
        return t;
    }
    if t.is_infinite() {
        return if t > 0.0 { f64::INFINITY } else { 0.0 };
    }
    if t < 0.0 {
        return 1.0 / exp_with_terms(-t, n_terms);
    }

    let mut reduced = t;
    let mut halvings = 0;
    while reduced > 1.0 {
        reduced /= 2.0;
        halvings += 1;
    }

    let mut result = series_sum(SeriesFunction::Exp, reduced, n_terms).value();
    for _ in 0..halvings {
        result *= result;
    }
    result
}

/// 以 15 次 Maclaurin 級數計算 sin(t)，適用任意大小的引數
pub fn reduced_sin(t: f64) -> f64 {
    sin_with_terms(t, REDUCED_SERIES_TERMS)
}

/// 以 15 次 Maclaurin 級數與反覆平方計算 exp(t)
pub fn reduced_exp(t: f64) -> f64 {
    exp_with_terms(t, REDUCED_SERIES_TERMS)
}

/// 同 `reduced_sin` / `reduced_exp`，但項數可調
pub fn reduced_value(kind: SeriesFunction, t: f64, n_terms: usize) -> NumericsResult<f64> {
    if n_terms == 0 {
        return Err(NumericsError::InvalidTermCount(n_terms));
    }
    Ok(match kind {
        SeriesFunction::Sin => sin_with_terms(t, n_terms),
        SeriesFunction::Exp => exp_with_terms(t, n_terms)
    })
}
