use clap::Parser;
use std::process::ExitCode;
use unitforge::cli::{self, Args};

fn main() -> ExitCode {
    let args = Args::parse();

    let cwd = std::env::current_dir().ok();
    if let Err(err) = unitforge::logging::init(cwd.as_deref(), args.log_level.as_deref()) {
        eprintln!("warning: logging disabled: {:#}", err);
    }

    match cli::run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
