use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::constants::COMMENT_MARKER;

/// Чтение строк-токенов. Порядок и дубликаты сохраняются.
pub fn read_token_lines<R: io::Read>(reader: R) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    let buf = BufReader::new(reader);

    for line in buf.lines() {
        let line = line?;
        if let Some(t) = normalize_line(&line) {
            out.push(t);
        }
    }

    Ok(out)
}

/// Чтение строк-токенов из файла
pub fn read_token_lines_from_path(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let f = File::open(path)?;
    read_token_lines(f)
}

fn normalize_line(line: &str) -> Option<String> {
    let s = line.trim();
    if s.is_empty() || s.starts_with(COMMENT_MARKER) {
        return None;
    }

    // inline-комментарии: "151175_13521 # comment"
    let s = s.split(COMMENT_MARKER).next().unwrap_or("").trim();
    if s.is_empty() {
        return None;
    }

    Some(s.to_string())
}
