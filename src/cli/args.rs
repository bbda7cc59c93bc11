use crate::core::types::Platform;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// YAML config to read (default: stdin)
    #[arg(long, value_name = "FILE")]
    pub in_file: Option<PathBuf>,

    /// Fail when the report contains warnings, not only errors
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TranspileArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Where to write the machine config (default: stdout)
    #[arg(long, value_name = "FILE")]
    pub out_file: Option<PathBuf>,

    /// Platform the machine config targets
    #[arg(long, value_enum, value_name = "NAME")]
    pub platform: Option<Platform>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Platform the machine config targets
    #[arg(long, value_enum, value_name = "NAME")]
    pub platform: Option<Platform>,

    /// How to print the report
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}
