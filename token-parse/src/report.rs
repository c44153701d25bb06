use std::fmt;
use std::io::Write;

use anyhow::Context;
use log::{debug, warn};
use token_core::parse_all;

use crate::config::{ERR_PREFIX, OK_PREFIX};

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) parsed: usize,
    pub(crate) rejected: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parsed={} rejected={}", self.parsed, self.rejected)
    }
}

/// Пишет по строке на каждый вход:
/// - `OK <number> <remainder>`
/// - `ERR <reason>`
///
/// В strict-режиме первый отказ прерывает разбор ошибкой.
pub(crate) fn write_report<W: Write>(
    out: &mut W,
    inputs: &[String],
    strict: bool,
) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    for (idx, (input, res)) in parse_all(inputs).into_iter().enumerate() {
        match res {
            Ok(t) => {
                debug!("{input:?} -> {t:?}");
                writeln!(out, "{OK_PREFIX} {} {}", t.number(), t.remainder())?;
                summary.parsed += 1;
            }
            Err(e) if strict => {
                out.flush()?;
                return Err(e).with_context(|| format!("strict mode: input #{} rejected", idx + 1));
            }
            Err(e) => {
                warn!("{e}");
                writeln!(out, "{ERR_PREFIX} {e}")?;
                summary.rejected += 1;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}
