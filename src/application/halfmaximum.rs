use std::f64::consts::FRAC_1_SQRT_2;

use crate::application::applicationerror::ApplicationResult;
use crate::application::sampling::grid;
use crate::configuration::NumericsConfig;
use crate::math::numericserror::NumericsResult;
use crate::math::rootfinding::bracketing::brent_root;
use crate::math::rootfinding::fixedpoint::{
    HalfMaximumBranch,
    fixed_point_half_maximum
};
use crate::math::rootfinding::root::Root;
use crate::report::resultsink::{
    NumberFormat,
    ResultSink
};

// ─────────────────────────────────────────────────────────────────────────────
// 半高寬（FWHM）
// ─────────────────────────────────────────────────────────────────────────────
//
// f(x) = x·exp(-x²), x ≥ 0，峰值在 x_max = 1/√2。
// 以兩個不動點分支分別求 f(x) = f_max / 2 的左右解，FWHM = x_right - x_left。

const OUTPUT_FORMAT: NumberFormat = NumberFormat::Fixed(6);
const LEFT_OFFSET: f64 = -0.2;
const RIGHT_OFFSET: f64 = 0.4;
const BRENT_TOLERANCE: f64 = 1e-12;
const BRENT_MAX_ITERATIONS: u64 = 200;
const BRENT_UPPER_BOUND: f64 = 3.0;
const PLOT_RANGE: (f64, f64) = (0.0, 2.0);
const PLOT_STEPS: usize = 200;

pub fn profile(x: f64) -> f64 {
    x * (-x * x).exp()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HalfMaximumReport {
    pub x_max: f64,
    pub f_max: f64,
    pub half_height: f64,
    pub tolerance: f64,
    pub left: Root,
    pub right: Root,
    /// Brent 法交叉驗證 (左, 右)
    pub bracketed: (Root, Root),
    /// (x, f(x))
    pub plot: Vec<(f64, f64)>
}

impl HalfMaximumReport {
    pub fn fwhm(&self) -> f64 {
        self.right.x() - self.left.x()
    }

    pub fn bracketed_fwhm(&self) -> f64 {
        self.bracketed.1.x() - self.bracketed.0.x()
    }

    pub fn converged(&self) -> bool {
        self.left.converged() && self.right.converged()
    }
}

pub fn run(config: &NumericsConfig) -> NumericsResult<HalfMaximumReport> {
    let x_max = FRAC_1_SQRT_2;
    let f_max = profile(x_max);
    let half_height = f_max / 2.0;
    let tolerance = config.target_error;

    let left = fixed_point_half_maximum(
        HalfMaximumBranch::Left,
        half_height,
        x_max + LEFT_OFFSET,
        tolerance,
        config.max_iterations,
    )?;
    let right = fixed_point_half_maximum(
        HalfMaximumBranch::Right,
        half_height,
        x_max + RIGHT_OFFSET,
        tolerance,
        config.max_iterations,
    )?;
    log::info!(
        "half maximum: x_left = {} ({}), x_right = {} ({})",
        left.x(),
        left.status(),
        right.x(),
        right.status()
    );

    let residual = |x: f64| profile(x) - half_height;
    let bracketed_left = brent_root(residual, 0.0, x_max, BRENT_TOLERANCE, BRENT_MAX_ITERATIONS)?;
    let bracketed_right = brent_root(residual, x_max, BRENT_UPPER_BOUND, BRENT_TOLERANCE, BRENT_MAX_ITERATIONS)?;

    let plot = grid(PLOT_RANGE.0, PLOT_RANGE.1, PLOT_STEPS)
        .into_iter()
        .map(|x| (x, profile(x)))
        .collect();

    Ok(HalfMaximumReport {
        x_max,
        f_max,
        half_height,
        tolerance,
        left,
        right,
        bracketed: (bracketed_left, bracketed_right),
        plot
    })
}

impl HalfMaximumReport {
    pub fn write_to<S: ResultSink + ?Sized>(&self, sink: &mut S) -> ApplicationResult<()> {
        sink.section("Full width at half maximum of f(x) = x * exp(-x^2)")?;
        sink.record("x_max", self.x_max, OUTPUT_FORMAT)?;
        sink.record("f_max", self.f_max, OUTPUT_FORMAT)?;
        sink.record("half_height", self.half_height, OUTPUT_FORMAT)?;
        sink.record("epsilon", self.tolerance, NumberFormat::Scientific(1))?;

        sink.section("Half-maximum points (fixed-point iteration)")?;
        for (name, root) in [("left", &self.left), ("right", &self.right)] {
            sink.record(&format!("x_{}", name), root.x(), OUTPUT_FORMAT)?;
            sink.record(&format!("f(x_{})", name), profile(root.x()), OUTPUT_FORMAT)?;
            sink.record(&format!("iterations_{}", name), root.iterations() as f64, NumberFormat::Fixed(0))?;
            sink.text(&format!("status_{}", name), &root.status().to_string())?;
        }
        sink.record("FWHM", self.fwhm(), OUTPUT_FORMAT)?;

        sink.section("Cross-check (Brent bracketing)")?;
        sink.record("x_left", self.bracketed.0.x(), OUTPUT_FORMAT)?;
        sink.record("x_right", self.bracketed.1.x(), OUTPUT_FORMAT)?;
        sink.record("FWHM", self.bracketed_fwhm(), OUTPUT_FORMAT)?;
        sink.record("difference", (self.fwhm() - self.bracketed_fwhm()).abs(), NumberFormat::Scientific(3))?;

        sink.section("Plot data")?;
        sink.header(&["x", "f(x)"])?;
        for (x, y) in &self.plot {
            sink.row(&[*x, *y], OUTPUT_FORMAT)?;
        }
        Ok(())
    }
}
