use crate::application::applicationerror::ApplicationResult;
use crate::application::sampling::grid;
use crate::configuration::NumericsConfig;
use crate::math::numericserror::NumericsResult;
use crate::math::series::maclaurinseries::{
    OptimalTermCount,
    SeriesFunction,
    find_optimal_term_count,
    maclaurin_sum
};
use crate::math::series::rangereduction::reduced_value;
use crate::report::resultsink::{
    NumberFormat,
    ResultSink
};

const OUTPUT_FORMAT: NumberFormat = NumberFormat::Fixed(10);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesInterval {
    pub a: f64,
    pub b: f64,
    pub steps: usize
}

impl SeriesInterval {
    pub fn midpoint(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    pub fn label(&self) -> String {
        format!("[{}, {}]", self.a, self.b)
    }
}

/// [0, 1] 每 0.02 一點，[10, 11] 每 0.05 一點
pub const SERIES_INTERVALS: [SeriesInterval; 2] = [
    SeriesInterval { a: 0.0, b: 1.0, steps: 50 },
    SeriesInterval { a: 10.0, b: 11.0, steps: 20 },
];

pub const ACCURACY_CHECK_POINTS: [f64; 2] = [1.0, 10.5];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSample {
    pub t: f64,
    pub exact: f64,
    pub truncated: f64,
    pub reduced: f64
}

impl SeriesSample {
    pub fn truncated_error(&self) -> f64 {
        (self.truncated - self.exact).abs()
    }

    pub fn reduced_error(&self) -> f64 {
        (self.reduced - self.exact).abs()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntervalAnalysis {
    pub interval: SeriesInterval,
    pub sin_terms: OptimalTermCount,
    pub exp_terms: OptimalTermCount,
    /// (sin, exp)
    pub rows: Vec<(SeriesSample, SeriesSample)>
}

impl IntervalAnalysis {
    pub fn terms(&self, kind: SeriesFunction) -> &OptimalTermCount {
        match kind {
            SeriesFunction::Sin => &self.sin_terms,
            SeriesFunction::Exp => &self.exp_terms
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesReport {
    pub target_error: f64,
    pub intervals: Vec<IntervalAnalysis>,
    /// 依 ACCURACY_CHECK_POINTS 的順序，每點 (sin, exp)
    pub checks: Vec<(SeriesSample, SeriesSample)>
}

fn sample(kind: SeriesFunction, t: f64, n_terms: usize, reduced_terms: usize) -> NumericsResult<SeriesSample> {
    Ok(SeriesSample {
        t,
        exact: kind.exact(t),
        truncated: maclaurin_sum(kind, t, n_terms)?.value(),
        reduced: reduced_value(kind, t, reduced_terms)?
    })
}

pub fn run(config: &NumericsConfig) -> NumericsResult<SeriesReport> {
    let reduced_terms = config.reduced_series_terms;
    let mut intervals: Vec<IntervalAnalysis> = Vec::with_capacity(SERIES_INTERVALS.len());

    for interval in SERIES_INTERVALS {
        let t_mid = interval.midpoint();
        let sin_terms = find_optimal_term_count(SeriesFunction::Sin, t_mid, config.target_error, &config.series_term_cap)?;
        let exp_terms = find_optimal_term_count(SeriesFunction::Exp, t_mid, config.target_error, &config.series_term_cap)?;
        log::info!(
            "{}: sin n = {}, exp n = {}",
            interval.label(),
            sin_terms.n_terms(),
            exp_terms.n_terms()
        );

        let mut rows: Vec<(SeriesSample, SeriesSample)> = Vec::with_capacity(interval.steps + 1);
        for t in grid(interval.a, interval.b, interval.steps) {
            rows.push((
                sample(SeriesFunction::Sin, t, sin_terms.n_terms(), reduced_terms)?,
                sample(SeriesFunction::Exp, t, exp_terms.n_terms(), reduced_terms)?
            ));
        }
        intervals.push(IntervalAnalysis { interval, sin_terms, exp_terms, rows });
    }

    // 每個檢查點使用其所在區間的最佳項數
    let mut checks: Vec<(SeriesSample, SeriesSample)> = Vec::with_capacity(ACCURACY_CHECK_POINTS.len());
    for (t, analysis) in ACCURACY_CHECK_POINTS.iter().zip(intervals.iter()) {
        checks.push((
            sample(SeriesFunction::Sin, *t, analysis.sin_terms.n_terms(), reduced_terms)?,
            sample(SeriesFunction::Exp, *t, analysis.exp_terms.n_terms(), reduced_terms)?
        ));
    }

    Ok(SeriesReport {
        target_error: config.target_error,
        intervals,
        checks
    })
}

impl SeriesReport {
    pub fn write_to<S: ResultSink + ?Sized>(&self, sink: &mut S) -> ApplicationResult<()> {
        sink.section("Optimal Maclaurin term counts")?;
        sink.record("target_error", self.target_error, NumberFormat::Scientific(1))?;
        for analysis in &self.intervals {
            for kind in [SeriesFunction::Sin, SeriesFunction::Exp] {
                let terms = analysis.terms(kind);
                let label = format!("{}(t) on {}: n", kind.name(), analysis.interval.label());
                sink.record(&label, terms.n_terms() as f64, NumberFormat::Fixed(0))?;
                if !terms.reached_target() {
                    sink.text(&label, "term cap reached before the target error")?;
                }
            }
        }

        for analysis in &self.intervals {
            sink.section(&format!("Function values on {}", analysis.interval.label()))?;
            sink.header(&["t", "sin_exact", "sin_approx", "exp_exact", "exp_approx", "sin_improved", "exp_improved"])?;
            for (sin, exp) in &analysis.rows {
                sink.row(
                    &[sin.t, sin.exact, sin.truncated, exp.exact, exp.truncated, sin.reduced, exp.reduced],
                    OUTPUT_FORMAT,
                )?;
            }
        }

        sink.section("Accuracy check")?;
        sink.header(&["t", "function", "exact", "approx", "improved", "approx_error", "improved_error"])?;
        for (sin, exp) in &self.checks {
            for (kind, check) in [(SeriesFunction::Sin, sin), (SeriesFunction::Exp, exp)] {
                sink.labeled_row(
                    kind.name(),
                    &[check.t, check.exact, check.truncated, check.reduced, check.truncated_error(), check.reduced_error()],
                    OUTPUT_FORMAT,
                )?;
            }
        }
        Ok(())
    }
}
