use std::process::ExitCode;

use clap::Parser;

use heatmap_service::cli::{self, Args};

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = Args::parse();
    ExitCode::from(cli::run(&args).exit_code())
}
