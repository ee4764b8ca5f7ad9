use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::csv::fmt_row;
use crate::encode::{encode, EncodeError};
use crate::parse::{parse, ParseError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenConfig {
    /// Maximum number of records consumed from the input.
    pub limit: usize,
    pub on_error: OnError,
}

/// What to do with a record that fails to parse or encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnError {
    /// Drop the record, count it, keep going.
    Skip,
    /// Stop the run at the first bad record.
    Halt,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            // Size of the shipped test-vector set
            limit: 153,
            on_error: OnError::Skip,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub emitted: usize,
    pub skipped: usize,
}

/// Failure of a single record; never fatal by itself.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

#[derive(Error, Debug)]
pub enum GenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Record { line: usize, source: RecordError },
}

/// Convert a console log to CSV rows: parse each line, encode its expected
/// instruction word, write `mnemonic,0xHEX[,name=value]*`. Blank lines are
/// ignored and do not count toward the limit. Record-level failures follow
/// `cfg.on_error`; I/O failures always abort.
pub fn generate<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    cfg: &GenConfig,
) -> Result<RunSummary, GenError> {
    let mut summary = RunSummary::default();
    let mut consumed = 0usize;

    for (idx, line) in input.lines().enumerate() {
        if consumed >= cfg.limit {
            break;
        }
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        consumed += 1;

        match convert(line) {
            Ok(row) => {
                writeln!(output, "{row}")?;
                summary.emitted += 1;
            }
            Err(source) => match cfg.on_error {
                OnError::Skip => {
                    warn!(line = idx + 1, error = %source, "skipping record");
                    summary.skipped += 1;
                }
                OnError::Halt => return Err(GenError::Record { line: idx + 1, source }),
            },
        }
    }

    Ok(summary)
}

fn convert(line: &str) -> Result<String, RecordError> {
    let rec = parse(line)?;
    let word = encode(&rec.mnemonic, rec.imm)?;
    Ok(fmt_row(&rec.mnemonic, word, &rec.operands))
}
