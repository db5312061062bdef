use std::fs::{
    self,
    File
};
use std::io::{
    BufWriter,
    Write
};
use std::path::PathBuf;

use anyhow::Context;
use clap::{
    Parser,
    ValueEnum
};

use compnum::application::program::Program;
use compnum::configuration::NumericsConfig;
use compnum::report::resultsink::TextResultSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProgramArg {
    Series,
    HalfMaximum,
    CircleTangent,
    Population,
    OscillatoryIntegral,
    All
}

impl ProgramArg {
    fn programs(&self) -> Vec<Program> {
        match self {
            ProgramArg::Series => vec![Program::Series],
            ProgramArg::HalfMaximum => vec![Program::HalfMaximum],
            ProgramArg::CircleTangent => vec![Program::CircleTangent],
            ProgramArg::Population => vec![Program::Population],
            ProgramArg::OscillatoryIntegral => vec![Program::OscillatoryIntegral],
            ProgramArg::All => Program::ALL.to_vec()
        }
    }
}

/// 數值分析程式：級數、求根、插值與數值積分
#[derive(Debug, Parser)]
#[command(name = "compnum", version)]
struct Cli {
    /// JSON 設定檔，缺少的欄位使用預設值
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// 結果檔輸出目錄
    #[arg(long, value_name = "DIR", default_value = "data")]
    output_dir: PathBuf,

    #[arg(value_enum)]
    program: ProgramArg
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => NumericsConfig::from_reader(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => NumericsConfig::default()
    };

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("failed to create {}", cli.output_dir.display()))?;

    for program in cli.program.programs() {
        let path = cli.output_dir.join(program.output_file_name());
        let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        let mut sink = TextResultSink::new(BufWriter::new(file));
        program
            .execute(&config, &mut sink)
            .with_context(|| format!("{} failed", program))?;
        sink.into_inner()
            .flush()
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("{}: results written to {}", program, path.display());
    }
    Ok(())
}
