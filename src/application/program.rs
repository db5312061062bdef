use std::fmt;

use crate::application::applicationerror::ApplicationResult;
use crate::application::{
    circletangent,
    halfmaximum,
    oscillatoryintegral,
    population,
    seriesanalysis
};
use crate::configuration::NumericsConfig;
use crate::report::resultsink::ResultSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    Series,
    HalfMaximum,
    CircleTangent,
    Population,
    OscillatoryIntegral
}

impl Program {
    pub const ALL: [Program; 5] = [
        Program::Series,
        Program::HalfMaximum,
        Program::CircleTangent,
        Program::Population,
        Program::OscillatoryIntegral,
    ];

    /// 命令列名稱，同時作為輸出檔名
    pub fn name(&self) -> &'static str {
        match self {
            Program::Series => "series",
            Program::HalfMaximum => "half-maximum",
            Program::CircleTangent => "circle-tangent",
            Program::Population => "population",
            Program::OscillatoryIntegral => "oscillatory-integral"
        }
    }

    pub fn output_file_name(&self) -> String {
        format!("{}.txt", self.name())
    }

    pub fn execute<S: ResultSink + ?Sized>(&self, config: &NumericsConfig, sink: &mut S) -> ApplicationResult<()> {
        log::info!("running {}", self.name());
        match self {
            Program::Series => seriesanalysis::run(config)?.write_to(sink),
            Program::HalfMaximum => halfmaximum::run(config)?.write_to(sink),
            Program::CircleTangent => circletangent::run(config)?.write_to(sink),
            Program::Population => population::run(config)?.write_to(sink),
            Program::OscillatoryIntegral => oscillatoryintegral::run(config)?.write_to(sink)
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
