use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

/// token-parse - разбор токенов вида NUMBER_REMAINDER.
///
/// Без TOKEN и без --file разбирает встроенный набор примеров.
#[derive(Parser, Debug, Clone)]
#[command(name = "token-parse", version, about)]
pub(crate) struct Args {
    /// Токены, например 1511443755_2 151144375_id
    /// (отрицательные числа после `--`: `-- -7_x`)
    #[arg(conflicts_with = "file")]
    pub(crate) tokens: Vec<String>,

    /// Файл токенов (по одному на строку, поддержка # комментариев)
    #[arg(long, conflicts_with = "tokens")]
    pub(crate) file: Option<PathBuf>,

    /// Остановиться на первом некорректном токене с ненулевым кодом выхода
    #[arg(long)]
    pub(crate) strict: bool,
}

impl Args {
    /// Валидация аргументов, которую не покрывает clap
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(path) = &self.file {
            let md = std::fs::metadata(path)
                .with_context(|| format!("tokens file not found: {:?}", path))?;
            if !md.is_file() {
                bail!("--file must point to a file: {:?}", path);
            }
        }

        // clap уже запрещает одновременно TOKEN и --file
        if self.file.is_some() && !self.tokens.is_empty() {
            bail!("TOKEN arguments and --file are mutually exclusive");
        }

        Ok(())
    }
}
