use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cli::Args;
use crate::config;

#[derive(Debug, Error)]
pub(crate) enum InputError {
    #[error("tokens file is empty (file: {path:?})")]
    EmptyFile { path: PathBuf },

    #[error("failed to read tokens file: {path:?}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read built-in samples")]
    Samples(#[source] std::io::Error),
}

pub(crate) type Result<T> = std::result::Result<T, InputError>;

/// Откуда брать строки для разбора:
/// - `--file`  -> token_core::lines::read_token_lines_from_path
/// - `TOKEN..` -> как есть
/// - ничего    -> встроенные примеры
pub(crate) fn load_inputs(args: &Args) -> Result<Vec<String>> {
    if let Some(path) = &args.file {
        load_from_file(path)
    } else if !args.tokens.is_empty() {
        Ok(args.tokens.clone())
    } else {
        config::load_default_samples().map_err(InputError::Samples)
    }
}

fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref().to_path_buf();

    let lines = token_core::lines::read_token_lines_from_path(&path).map_err(|e| {
        InputError::ReadFile {
            path: path.clone(),
            source: e,
        }
    })?;

    if lines.is_empty() {
        return Err(InputError::EmptyFile { path });
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(tokens: &[&str], file: Option<PathBuf>) -> Args {
        Args {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            file,
            strict: false,
        }
    }

    #[test]
    fn positional_tokens_are_used_verbatim() {
        let got = load_inputs(&args(&[" 1_a", "2_b"], None)).unwrap();
        assert_eq!(got, vec![" 1_a", "2_b"]);
    }

    #[test]
    fn falls_back_to_samples() {
        let got = load_inputs(&args(&[], None)).unwrap();
        assert_eq!(got.first().map(String::as_str), Some("1511443755_2"));
    }

    #[test]
    fn reads_file_and_rejects_empty_one() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "151175_13521 # comment").unwrap();
        let got = load_inputs(&args(&[], Some(file.path().to_path_buf()))).unwrap();
        assert_eq!(got, vec!["151175_13521"]);

        let mut empty = tempfile::NamedTempFile::new().unwrap();
        writeln!(empty, "# only comments").unwrap();
        let err = load_inputs(&args(&[], Some(empty.path().to_path_buf()))).unwrap_err();
        assert!(matches!(err, InputError::EmptyFile { .. }));
    }

    #[test]
    fn missing_file_keeps_io_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_inputs(&args(&[], Some(dir.path().join("nope.txt")))).unwrap_err();
        match err {
            InputError::ReadFile { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
