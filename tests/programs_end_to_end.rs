//! 五個數值程式從設定到結果輸出的整合測試。
use approx::assert_relative_eq;

use compnum::application::population::{
    self,
    ACTUAL_2010,
    ExtrapolationMethod
};
use compnum::application::program::Program;
use compnum::configuration::NumericsConfig;
use compnum::math::curve::curve::Curve;
use compnum::math::curve::nonparametriccurve::linearspline::evaluate_linear_spline;
use compnum::math::curve::nonparametriccurve::newtonpolynomial::{
    DividedDifferenceTable,
    evaluate_newton
};
use compnum::report::resultsink::TextResultSink;

fn render(program: Program, config: &NumericsConfig) -> String {
    let mut sink = TextResultSink::new(Vec::new());
    program.execute(config, &mut sink).unwrap();
    String::from_utf8(sink.into_inner()).unwrap()
}

#[test]
fn population_extrapolations_are_finite_and_different() {
    let (years, counts): (Vec<f64>, Vec<f64>) = population::CENSUS.iter().copied().unzip();

    let table = DividedDifferenceTable::build(&years, &counts).unwrap();
    let newton = evaluate_newton(2010.0, &years, &table).unwrap();
    let spline = evaluate_linear_spline(2010.0, &years, &counts).unwrap();

    assert!(newton.is_finite() && spline.is_finite());
    assert!((newton - spline).abs() > 1.0);

    let report = population::run(&NumericsConfig::default()).unwrap();
    assert_relative_eq!(report.newton.value, newton, max_relative = 1e-12);
    assert_relative_eq!(report.spline.value, spline, max_relative = 1e-15);
    assert_eq!(report.newton.actual, ACTUAL_2010);
    assert_eq!(report.more_accurate(), ExtrapolationMethod::LinearSpline);

    let text = render(Program::Population, &NumericsConfig::default());
    assert!(text.contains("actual_2010 = 308745538\n"));
    assert!(text.contains("spline_2010 = 314133939\n"));
    assert!(text.contains("spline_error = 5388401\n"));
    assert!(text.contains("more accurate method: linear spline\n"));
}

#[test]
fn newton_table_matches_the_polynomial_curve() {
    let samples = population::census_samples();
    let polynomial = compnum::math::curve::nonparametriccurve::newtonpolynomial::NewtonPolynomial::new(samples).unwrap();
    let (years, counts): (Vec<f64>, Vec<f64>) = population::CENSUS.iter().copied().unzip();
    let table = DividedDifferenceTable::build(&years, &counts).unwrap();

    for year in [1915.0, 1955.0, 1995.0] {
        assert_relative_eq!(polynomial.value(year), evaluate_newton(year, &years, &table).unwrap(), max_relative = 1e-12);
    }
}

#[test]
fn every_program_writes_its_sections() {
    let config = NumericsConfig::default();
    for program in Program::ALL {
        let text = render(program, &config);
        assert!(!text.is_empty(), "{} produced no output", program);
        assert!(text.contains("\n=") , "{} has no section", program);
    }
}

#[test]
fn output_formats_follow_the_program() {
    let config = NumericsConfig::default();

    let series = render(Program::Series, &config);
    assert!(series.contains("sin(t) on [10, 11]: n = 31\n"));

    let half_maximum = render(Program::HalfMaximum, &config);
    assert!(half_maximum.contains("x_max = 0.707107\n"));
    assert!(half_maximum.contains("status_left: converged"));

    let circle = render(Program::CircleTangent, &config);
    assert!(circle.contains("-0.64988895\t"));
    assert!(circle.contains("0.64988895\t"));

    let integral = render(Program::OscillatoryIntegral, &config);
    let simpson: Vec<&str> = integral
        .lines()
        .find(|line| line.starts_with("Simpson\t"))
        .unwrap()
        .split('\t')
        .collect();
    assert_eq!(simpson.len(), 3);
    assert!(simpson[1].ends_with("e-2"));
    assert_eq!(simpson[1].split('e').next().unwrap().len(), "1.".len() + 12);
    assert_relative_eq!(simpson[1].parse::<f64>().unwrap(), 0.010_006_097_860_332_044, max_relative = 1e-10);
    assert_eq!(simpson[2], "100000");

    let three_eighths = integral.lines().find(|line| line.starts_with("Simpson 3/8\t")).unwrap();
    assert!(three_eighths.ends_with("\t100002"));
    assert!(integral.contains("\n1000\t"));
    assert!(integral.contains("\n64000\t"));
}

#[test]
fn configuration_changes_reach_the_programs() {
    let config = NumericsConfig::from_json_str(r#"{ "target_error": 1e-8 }"#).unwrap();
    let report = compnum::application::seriesanalysis::run(&config).unwrap();
    let loose = compnum::application::seriesanalysis::run(&NumericsConfig::default()).unwrap();

    for (tight, default) in report.intervals.iter().zip(loose.intervals.iter()) {
        assert!(tight.sin_terms.n_terms() > default.sin_terms.n_terms());
        assert!(tight.exp_terms.n_terms() > default.exp_terms.n_terms());
    }
}
