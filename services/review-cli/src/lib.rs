mod cli;
mod commands;
mod output;

use qc_engine::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
