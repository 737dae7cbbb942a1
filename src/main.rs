use std::process::ExitCode;

use clap::{error::ErrorKind, Parser};
use log::{debug, error};
use mandelbrot_png::{cli, render};

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .parse_default_env()
        .init();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(error) => {
            error!("{:#}", error);
            return ExitCode::FAILURE;
        }
    };

    let mut driver = render::Driver::new(&config);
    let result = driver.run();
    debug!("driver finished in {:?}", driver.state());

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}
