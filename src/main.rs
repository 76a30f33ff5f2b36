#![forbid(unsafe_code)]

use std::{env, io};

use anyhow::Result;
use env_logger::Env;
use sales_cost_calculator::{output_report, run, RESULTS_FILE_NAME};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: sales-cost-calculator <catalogue> <sales>");
        return Ok(());
    }
    let report = run(&args[1], &args[2], RESULTS_FILE_NAME)?;
    output_report(&mut io::stdout(), &report)?;
    Ok(())
}
