use crate::application::applicationerror::ApplicationResult;
use crate::application::sampling::grid;
use crate::configuration::NumericsConfig;
use crate::math::numericserror::NumericsResult;
use crate::math::quadrature::quadraturerule::{
    QuadratureEstimate,
    QuadratureRule
};
use crate::math::quadrature::runge::{
    ConvergenceStep,
    convergence_study
};
use crate::report::resultsink::{
    NumberFormat,
    ResultSink
};

// ─────────────────────────────────────────────────────────────────────────────
// I = ∫_0^3 sin(100x)·exp(-x²)·cos(2x) dx
// ─────────────────────────────────────────────────────────────────────────────
//
// sin(100x) 在 [0, 3] 上約有 48 個週期，複合規則需要足夠細的網格；
// 固定節點的 Gauss 規則（單一區間）無法解析這種振盪，結果僅供比較。

const LOWER: f64 = 0.0;
const UPPER: f64 = 3.0;
const BASE_INTERVALS: usize = 100_000;
const STUDY_START: usize = 1_000;
const STUDY_MAX: usize = 100_000;
const PLOT_STEPS: usize = 1_000;
const OUTPUT_FORMAT: NumberFormat = NumberFormat::Scientific(12);
const COUNT_FORMAT: NumberFormat = NumberFormat::Fixed(0);

pub fn integrand(x: f64) -> f64 {
    (100.0 * x).sin() * (-x * x).exp() * (2.0 * x).cos()
}

#[derive(Debug, Clone, PartialEq)]
pub struct OscillatoryIntegralReport {
    pub estimates: Vec<(QuadratureRule, QuadratureEstimate)>,
    pub simpson_study: Vec<ConvergenceStep>,
    /// (x, f(x))
    pub plot: Vec<(f64, f64)>
}

impl OscillatoryIntegralReport {
    pub fn estimate(&self, rule: QuadratureRule) -> Option<&QuadratureEstimate> {
        self.estimates
            .iter()
            .find(|(candidate, _)| *candidate == rule)
            .map(|(_, estimate)| estimate)
    }
}

pub fn run(_config: &NumericsConfig) -> NumericsResult<OscillatoryIntegralReport> {
    let mut estimates: Vec<(QuadratureRule, QuadratureEstimate)> = Vec::with_capacity(QuadratureRule::ALL.len());
    for rule in QuadratureRule::ALL {
        let estimate = rule.integrate(integrand, LOWER, UPPER, BASE_INTERVALS)?;
        log::info!("{}: {:e}", rule, estimate.value());
        estimates.push((rule, estimate));
    }

    let simpson_study = convergence_study(QuadratureRule::Simpson, integrand, LOWER, UPPER, STUDY_START, STUDY_MAX)?;

    let plot = grid(LOWER, UPPER, PLOT_STEPS)
        .into_iter()
        .map(|x| (x, integrand(x)))
        .collect();

    Ok(OscillatoryIntegralReport {
        estimates,
        simpson_study,
        plot
    })
}

impl OscillatoryIntegralReport {
    pub fn write_to<S: ResultSink + ?Sized>(&self, sink: &mut S) -> ApplicationResult<()> {
        sink.section("I = int_0^3 sin(100x) * exp(-x^2) * cos(2x) dx")?;
        sink.header(&["method", "value", "intervals"])?;
        for (rule, estimate) in &self.estimates {
            sink.mixed_row(
                Some(rule.name()),
                &[(estimate.value(), OUTPUT_FORMAT), (estimate.intervals() as f64, COUNT_FORMAT)],
            )?;
        }

        sink.section("Simpson convergence (Runge rule)")?;
        sink.header(&["N", "I_h", "runge_error"])?;
        for step in &self.simpson_study {
            sink.mixed_row(
                None,
                &[
                    (step.intervals as f64, COUNT_FORMAT),
                    (step.value, OUTPUT_FORMAT),
                    (step.runge_error.unwrap_or(f64::NAN), OUTPUT_FORMAT),
                ],
            )?;
        }

        sink.section("Plot data")?;
        sink.header(&["x", "f(x)"])?;
        for (x, y) in &self.plot {
            sink.row(&[*x, *y], OUTPUT_FORMAT)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::quadrature::gausslegendre::GaussNodes;
    use crate::report::resultsink::TextResultSink;

    const REFERENCE: f64 = 0.010_006_097_860_332_044;

    #[test]
    fn composite_rules_resolve_the_integral() {
        let report = run(&NumericsConfig::default()).unwrap();
        assert_eq!(report.estimates.len(), 7);

        for rule in [QuadratureRule::Simpson, QuadratureRule::ThreeEighths] {
            let estimate = report.estimate(rule).unwrap();
            assert!((estimate.value() - REFERENCE).abs() < 1e-12);
        }
        for rule in [QuadratureRule::Midpoint, QuadratureRule::Trapezoid] {
            let estimate = report.estimate(rule).unwrap();
            assert!((estimate.value() - REFERENCE).abs() < 1e-7);
        }
        assert_eq!(report.estimate(QuadratureRule::ThreeEighths).unwrap().intervals(), 100_002);
    }

    #[test]
    fn single_interval_gauss_rules_miss_the_oscillation() {
        let report = run(&NumericsConfig::default()).unwrap();
        let gauss = report.estimate(QuadratureRule::GaussLegendre(GaussNodes::Four)).unwrap();
        assert_eq!(gauss.intervals(), 4);
        assert!(gauss.value().is_finite());
    }

    #[test]
    fn simpson_study_doubles_from_one_thousand() {
        let report = run(&NumericsConfig::default()).unwrap();
        let counts: Vec<usize> = report.simpson_study.iter().map(|step| step.intervals).collect();
        assert_eq!(counts, vec![1_000, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000]);
        assert!(report.simpson_study[0].runge_error.is_none());

        let last = report.simpson_study.last().unwrap();
        assert!(last.runge_error.unwrap() < 1e-10);
        assert!((last.value - REFERENCE).abs() < 1e-10);
    }

    #[test]
    fn interval_counts_are_written_as_integers() {
        let report = run(&NumericsConfig::default()).unwrap();
        let mut sink = TextResultSink::new(Vec::new());
        report.write_to(&mut sink).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        let three_eighths = text.lines().find(|line| line.starts_with("Simpson 3/8\t")).unwrap();
        assert!(three_eighths.ends_with("\t100002"));
        let gauss = text.lines().find(|line| line.starts_with("Gauss-Legendre 4\t")).unwrap();
        assert!(gauss.ends_with("\t4"));

        let study: Vec<&str> = text
            .lines()
            .skip_while(|line| *line != "N\tI_h\trunge_error")
            .skip(1)
            .take_while(|line| !line.is_empty())
            .collect();
        assert_eq!(study.len(), 7);
        assert!(study[0].starts_with("1000\t") && study[0].ends_with("\tNaN"));
        assert!(study[6].starts_with("64000\t"));
        assert!(!text.contains("1.000020000000e5"));
    }

    #[test]
    fn plot_has_one_thousand_steps() {
        let report = run(&NumericsConfig::default()).unwrap();
        assert_eq!(report.plot.len(), 1_001);
        assert_eq!(report.plot[0], (0.0, 0.0));
    }
}
