use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::configurationerror::ConfigurationError;
use crate::math::rootfinding::fixedpoint::DEFAULT_MAX_ITERATIONS;
use crate::math::rootfinding::newtonraphson::{
    NewtonOptions,
    RootScanOptions
};
use crate::math::series::maclaurinseries::SeriesTermCap;
use crate::math::series::rangereduction::REDUCED_SERIES_TERMS;

/// 數值程式共用的參數。JSON 中缺少的欄位沿用預設值：
///
/// ```json
/// {
///     "target_error": 1e-3,
///     "max_iterations": 1000,
///     "series_term_cap": { "sin": 50, "exp": 40 },
///     "reduced_series_terms": 15,
///     "singular_derivative_threshold": 1e-12,
///     "root_dedup_radius": 0.1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumericsConfig {
    pub target_error: f64,
    pub max_iterations: usize,
    pub series_term_cap: SeriesTermCap,
    pub reduced_series_terms: usize,
    pub singular_derivative_threshold: f64,
    pub root_dedup_radius: f64
}

impl Default for NumericsConfig {
    fn default() -> Self {
        NumericsConfig {
            target_error: 1e-3,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            series_term_cap: SeriesTermCap::default(),
            reduced_series_terms: REDUCED_SERIES_TERMS,
            singular_derivative_threshold: 1e-12,
            root_dedup_radius: 0.1
        }
    }
}

impl NumericsConfig {
    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<NumericsConfig, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let config: NumericsConfig = serde_json::from_reader(reader)?;
        config.validate()
    }

    pub fn from_json_str(json: &str) -> Result<NumericsConfig, ConfigurationError> {
        let config: NumericsConfig = serde_json::from_str(json)?;
        config.validate()
    }

    fn validate(self) -> Result<NumericsConfig, ConfigurationError> {
        if !(self.target_error.is_finite() && self.target_error > 0.0) {
            return Err(ConfigurationError::invalid_value("target_error", "must be positive and finite"));
        }
        if self.max_iterations == 0 {
            return Err(ConfigurationError::invalid_value("max_iterations", "must be at least 1"));
        }
        if self.reduced_series_terms == 0 {
            return Err(ConfigurationError::invalid_value("reduced_series_terms", "must be at least 1"));
        }
        if !(self.singular_derivative_threshold.is_finite() && self.singular_derivative_threshold >= 0.0) {
            return Err(ConfigurationError::invalid_value(
                "singular_derivative_threshold",
                "must be non-negative and finite",
            ));
        }
        if !(self.root_dedup_radius.is_finite() && self.root_dedup_radius > 0.0) {
            return Err(ConfigurationError::invalid_value("root_dedup_radius", "must be positive and finite"));
        }
        Ok(self)
    }

    /// Newton 法選項；`tolerance` 由各程式指定
    pub fn newton_options(&self, tolerance: f64) -> NewtonOptions {
        NewtonOptions {
            tolerance,
            max_iterations: self.max_iterations,
            singular_threshold: self.singular_derivative_threshold
        }
    }

    pub fn root_scan_options(&self, tolerance: f64, max_iterations: usize) -> RootScanOptions {
        RootScanOptions {
            newton: NewtonOptions { max_iterations, ..self.newton_options(tolerance) },
            residual_tolerance: tolerance,
            dedup_radius: self.root_dedup_radius
        }
    }
}
