use crate::application::applicationerror::ApplicationResult;
use crate::application::sampling::grid;
use crate::configuration::NumericsConfig;
use crate::math::curve::curve::{
    Curve,
    FnCurve
};
use crate::math::numericserror::NumericsResult;
use crate::math::rootfinding::newtonraphson::scan_roots;
use crate::math::rootfinding::root::Root;
use crate::report::resultsink::{
    NumberFormat,
    ResultSink
};

// ─────────────────────────────────────────────────────────────────────────────
// x² + y² = 1 與 y = tan(x) 的交點
// ─────────────────────────────────────────────────────────────────────────────
//
// 代入得 F(x) = x² + tan²(x) - 1 = 0，F'(x) = 2x + 2·tan(x)·sec²(x)。

const OUTPUT_FORMAT: NumberFormat = NumberFormat::Fixed(8);
pub const INITIAL_GUESSES: [f64; 5] = [-1.2, -0.6, 0.0, 0.6, 1.2];
const TOLERANCE: f64 = 1e-6;
const MAX_ITERATIONS: usize = 100;
const PLOT_RANGE: (f64, f64) = (-2.0, 2.0);
const PLOT_STEPS: usize = 1000;
/// |cos x| 小於此值時 tan 視為無定義
const POLE_THRESHOLD: f64 = 1e-10;

pub fn intersection_curve() -> impl Curve {
    FnCurve::new(
        |x: f64| x * x + x.tan() * x.tan() - 1.0,
        |x: f64| {
            let cos = x.cos();
            2.0 * x + 2.0 * x.tan() / (cos * cos)
        },
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRow {
    pub x: f64,
    pub circle_upper: f64,
    pub circle_lower: f64,
    pub tangent: f64
}

impl PlotRow {
    fn at(x: f64) -> PlotRow {
        let (circle_upper, circle_lower) = if x.abs() <= 1.0 {
            let y = (1.0 - x * x).sqrt();
            (y, -y)
        } else {
            (f64::NAN, f64::NAN)
        };
        let tangent = if x.cos().abs() < POLE_THRESHOLD { f64::NAN } else { x.tan() };
        PlotRow { x, circle_upper, circle_lower, tangent }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleTangentReport {
    pub roots: Vec<Root>,
    pub plot: Vec<PlotRow>
}

impl CircleTangentReport {
    /// 每個根對應的 (x, y)，y = tan(x)
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.roots.iter().map(|root| (root.x(), root.x().tan())).collect()
    }
}

pub fn run(config: &NumericsConfig) -> NumericsResult<CircleTangentReport> {
    let curve = intersection_curve();
    let options = config.root_scan_options(TOLERANCE, MAX_ITERATIONS);
    let roots = scan_roots(&curve, &INITIAL_GUESSES, &options)?;
    log::info!("circle/tangent: {} distinct intersections", roots.len());

    let plot = grid(PLOT_RANGE.0, PLOT_RANGE.1, PLOT_STEPS)
        .into_iter()
        .map(PlotRow::at)
        .collect();

    Ok(CircleTangentReport { roots, plot })
}

impl CircleTangentReport {
    pub fn write_to<S: ResultSink + ?Sized>(&self, sink: &mut S) -> ApplicationResult<()> {
        sink.section("Intersections of x^2 + y^2 = 1 and y = tan(x)")?;
        sink.header(&["x", "y", "x^2 + y^2", "iterations"])?;
        for (root, (x, y)) in self.roots.iter().zip(self.points()) {
            sink.mixed_row(
                None,
                &[
                    (x, OUTPUT_FORMAT),
                    (y, OUTPUT_FORMAT),
                    (x * x + y * y, OUTPUT_FORMAT),
                    (root.iterations() as f64, NumberFormat::Fixed(0)),
                ],
            )?;
        }

        sink.section("Plot data")?;
        sink.header(&["x", "circle_upper", "circle_lower", "tan"])?;
        for row in &self.plot {
            sink.row(&[row.x, row.circle_upper, row.circle_lower, row.tangent], OUTPUT_FORMAT)?;
        }
        Ok(())
    }
}
