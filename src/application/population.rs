use crate::application::applicationerror::ApplicationResult;
use crate::configuration::NumericsConfig;
use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::linearspline::LinearSpline;
use crate::math::curve::nonparametriccurve::newtonpolynomial::NewtonPolynomial;
use crate::math::curve::nonparametriccurve::nonparametriccurve::Sample;
use crate::math::numericserror::NumericsResult;
use crate::report::resultsink::{
    NumberFormat,
    ResultSink
};

/// 美國人口普查 1910–2000
pub const CENSUS: [(f64, f64); 10] = [
    (1910.0, 92_228_496.0),
    (1920.0, 106_021_537.0),
    (1930.0, 123_202_624.0),
    (1940.0, 132_164_569.0),
    (1950.0, 151_325_798.0),
    (1960.0, 179_323_175.0),
    (1970.0, 203_211_926.0),
    (1980.0, 226_545_805.0),
    (1990.0, 248_709_873.0),
    (2000.0, 281_421_906.0),
];

pub const TARGET_YEAR: f64 = 2010.0;
pub const ACTUAL_2010: f64 = 308_745_538.0;

const COUNT_FORMAT: NumberFormat = NumberFormat::Fixed(0);
const PERCENT_FORMAT: NumberFormat = NumberFormat::Fixed(2);
const FIRST_YEAR: i32 = 1910;
const LAST_YEAR: i32 = 2010;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtrapolationMethod {
    NewtonPolynomial,
    LinearSpline
}

impl ExtrapolationMethod {
    pub fn name(&self) -> &'static str {
        match self {
            ExtrapolationMethod::NewtonPolynomial => "Newton polynomial",
            ExtrapolationMethod::LinearSpline => "linear spline"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrapolation {
    pub method: ExtrapolationMethod,
    pub value: f64,
    pub actual: f64
}

impl Extrapolation {
    pub fn abs_error(&self) -> f64 {
        (self.value - self.actual).abs()
    }

    /// 百分比
    pub fn relative_error(&self) -> f64 {
        self.abs_error() / self.actual * 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopulationReport {
    pub newton: Extrapolation,
    pub spline: Extrapolation,
    /// 每年一點
    pub newton_plot: Vec<(f64, f64)>,
    /// 每五年一點
    pub spline_plot: Vec<(f64, f64)>
}

impl PopulationReport {
    pub fn more_accurate(&self) -> ExtrapolationMethod {
        if self.newton.abs_error() < self.spline.abs_error() {
            ExtrapolationMethod::NewtonPolynomial
        } else {
            ExtrapolationMethod::LinearSpline
        }
    }
}

pub fn census_samples() -> Vec<Sample> {
    CENSUS.iter().map(|&(year, population)| Sample::new(year, population)).collect()
}

fn sample_curve<C: Curve>(curve: &C, step: usize) -> Vec<(f64, f64)> {
    (FIRST_YEAR..=LAST_YEAR)
        .step_by(step)
        .map(|year| {
            let year = year as f64;
            (year, curve.value(year))
        })
        .collect()
}

pub fn run(_config: &NumericsConfig) -> NumericsResult<PopulationReport> {
    let newton_polynomial = NewtonPolynomial::new(census_samples())?;
    let linear_spline = LinearSpline::new(census_samples())?;

    let newton = Extrapolation {
        method: ExtrapolationMethod::NewtonPolynomial,
        value: newton_polynomial.value(TARGET_YEAR),
        actual: ACTUAL_2010
    };
    let spline = Extrapolation {
        method: ExtrapolationMethod::LinearSpline,
        value: linear_spline.value(TARGET_YEAR),
        actual: ACTUAL_2010
    };
    log::info!(
        "population 2010: Newton {:.0} (error {:.2}%), spline {:.0} (error {:.2}%)",
        newton.value,
        newton.relative_error(),
        spline.value,
        spline.relative_error()
    );

    Ok(PopulationReport {
        newton,
        spline,
        newton_plot: sample_curve(&newton_polynomial, 1),
        spline_plot: sample_curve(&linear_spline, 5)
    })
}

impl PopulationReport {
    pub fn write_to<S: ResultSink + ?Sized>(&self, sink: &mut S) -> ApplicationResult<()> {
        sink.section("Census data")?;
        sink.header(&["year", "population"])?;
        for (year, population) in CENSUS {
            sink.row(&[year, population], COUNT_FORMAT)?;
        }

        sink.section("Extrapolation to 2010")?;
        sink.record("actual_2010", ACTUAL_2010, COUNT_FORMAT)?;
        for (key, extrapolation) in [("newton", &self.newton), ("spline", &self.spline)] {
            sink.record(&format!("{}_2010", key), extrapolation.value, COUNT_FORMAT)?;
            sink.record(&format!("{}_error", key), extrapolation.abs_error(), COUNT_FORMAT)?;
            sink.record(&format!("{}_relative_error_percent", key), extrapolation.relative_error(), PERCENT_FORMAT)?;
        }
        sink.text("more accurate method", self.more_accurate().name())?;

        sink.section("Plot data: Newton polynomial")?;
        sink.header(&["year", "population"])?;
        for (year, value) in &self.newton_plot {
            sink.row(&[*year, *value], COUNT_FORMAT)?;
        }

        sink.section("Plot data: linear spline")?;
        sink.header(&["year", "population"])?;
        for (year, value) in &self.spline_plot {
            sink.row(&[*year, *value], COUNT_FORMAT)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spline_extrapolates_the_last_decade_trend() {
        let report = run(&NumericsConfig::default()).unwrap();
        // 281421906 + (281421906 - 248709873)
        assert!((report.spline.value - 314_133_939.0).abs() < 1e-3);
        assert!((report.spline.abs_error() - 5_388_401.0).abs() < 1e-3);
    }

    #[test]
    fn degree_nine_polynomial_overshoots() {
        let report = run(&NumericsConfig::default()).unwrap();
        assert!((report.newton.value - 827_906_509.0).abs() < 10.0);
        assert!(report.newton.relative_error() > 100.0);
        assert_eq!(report.more_accurate(), ExtrapolationMethod::LinearSpline);
    }

    #[test]
    fn plots_reproduce_the_census_at_the_nodes() {
        let report = run(&NumericsConfig::default()).unwrap();
        assert_eq!(report.newton_plot.len(), 101);
        assert_eq!(report.spline_plot.len(), 21);

        for (year, population) in CENSUS {
            let newton = report.newton_plot.iter().find(|(x, _)| *x == year).unwrap();
            let spline = report.spline_plot.iter().find(|(x, _)| *x == year).unwrap();
            assert!((newton.1 - population).abs() < 1e-6 * population);
            assert_eq!(spline.1, population);
        }
    }
}
