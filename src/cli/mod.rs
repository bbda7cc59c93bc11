pub mod args;
pub mod commands;

pub use args::{CheckArgs, InputArgs, ReportFormat, TranspileArgs};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

#[derive(Parser)]
#[command(name = "unitforge")]
#[command(version = crate::VERSION)]
#[command(about = "Transpile human-authored unit configs into machine configs")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: check a config while editing it, then transpile it for provisioning."
)]
pub struct Args {
    /// Tracing filter for diagnostics on stderr (overrides UNITFORGE_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Render a config into machine config JSON",
        long_about = "Transpile decodes the YAML config, runs every transform, prints the report to stderr and writes the machine config. Nothing is written when the report contains errors.",
        after_help = "Example:\n    unitforge transpile --in-file config.yaml --out-file machine.json --pretty"
    )]
    Transpile(TranspileArgs),
    #[command(
        about = "Validate a config and print the report",
        long_about = "Check runs the same transforms as transpile but only prints the report, as text or JSON.",
        after_help = "Example:\n    unitforge check --in-file config.yaml --strict"
    )]
    Check(CheckArgs),
}

pub fn run(args: Args) -> crate::Result<ExitCode> {
    match args.command {
        Command::Transpile(transpile_args) => commands::transpile(transpile_args),
        Command::Check(check_args) => commands::check(check_args),
    }
}
