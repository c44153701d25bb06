use std::io;
use std::io::Cursor;

const DEFAULT_SAMPLES: &str = include_str!("../assets/samples.txt");

pub(crate) const OK_PREFIX: &str = "OK";
pub(crate) const ERR_PREFIX: &str = "ERR";

pub(crate) fn load_default_samples() -> io::Result<Vec<String>> {
    token_core::lines::read_token_lines(Cursor::new(DEFAULT_SAMPLES))
}
