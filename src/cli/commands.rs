use crate::cli::args::{CheckArgs, InputArgs, ReportFormat, TranspileArgs};
use crate::core::config::{Config, ConfigLoader};
use crate::core::report::Report;
use crate::core::transform::{self, TransformContext};
use crate::utils::{FileSerializer, FileUtils, JsonSerializer};
use crate::Result;
use std::io;
use std::process::ExitCode;

pub fn transpile(args: TranspileArgs) -> Result<ExitCode> {
    let config = load_input(&args.input)?;
    let context = TransformContext {
        platform: args.platform,
    };
    let (machine, report) = transform::transpile(&config, &context);
    eprint!("{}", report);

    if rejects(&report, args.input.strict) {
        tracing::info!("machine config not written");
        return Ok(ExitCode::FAILURE);
    }

    let serializer = JsonSerializer {
        pretty: args.pretty,
    };
    match &args.out_file {
        Some(path) => {
            FileUtils.save_to_file(path, &machine, &serializer)?;
            tracing::info!(path = %path.display(), "wrote machine config");
        }
        None => FileUtils.write_to(io::stdout().lock(), &machine, &serializer)?,
    }
    Ok(ExitCode::SUCCESS)
}

pub fn check(args: CheckArgs) -> Result<ExitCode> {
    let config = load_input(&args.input)?;
    let context = TransformContext {
        platform: args.platform,
    };
    let (_, report) = transform::transpile(&config, &context);

    match args.format {
        ReportFormat::Text => print!("{}", report),
        ReportFormat::Json => {
            FileUtils.write_to(io::stdout().lock(), &report, &JsonSerializer::pretty())?
        }
    }

    if rejects(&report, args.input.strict) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn load_input(input: &InputArgs) -> Result<Config> {
    let config = match &input.in_file {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load_from_reader(io::stdin().lock())?,
    };
    Ok(config)
}

/// Errors always reject the run; warnings only under `--strict`.
fn rejects(report: &Report, strict: bool) -> bool {
    report.is_fatal() || (strict && report.has_warnings())
}
