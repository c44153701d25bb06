//! Точка входа `token-parse`.
//!
//! Жизненный цикл:
//! - парсинг CLI и выбор источника строк (аргументы, файл или встроенные примеры)
//! - разбор каждой строки через `token_core`
//! - вывод `OK/ERR` в stdout, итог в лог

mod cli;
mod config;
mod input;
mod report;

use std::io;

use clap::Parser;
use log::info;

fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/debug
    env_logger::init();

    let args = cli::Args::parse();
    args.validate()?;

    let inputs = input::load_inputs(&args)?;

    info!(
        "Starting token-parse: inputs={}, strict={}",
        inputs.len(),
        args.strict
    );

    let mut out = io::stdout().lock();
    let summary = report::write_report(&mut out, &inputs, args.strict)?;

    info!("done: {summary}");
    Ok(())
}
