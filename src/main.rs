use crate::cli::Cli;
use crate::errors::AppResult;
use crate::models::params::ComparisonParams;
use crate::services::report::{run_comparison, write_csv_report, write_plain_report};
use clap::Parser;
use log::info;
use std::io;

mod cli;
mod consts;
mod errors;
mod models;
mod services;

fn main() -> AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Application started");

    let args = Cli::parse();
    let params = ComparisonParams::from(&args);
    params.validate()?;

    let report = run_comparison(&params)?;

    let out = io::stdout();
    let handle = out.lock();
    if args.csv {
        write_csv_report(handle, &report)?;
    } else {
        write_plain_report(handle, &report)?;
    }
    Ok(())
}
