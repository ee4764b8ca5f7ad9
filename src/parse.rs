use serde::Serialize;
use thiserror::Error;

/// Column where the tagged operand fields begin.
const FIELDS_START: usize = 12;
/// Every value token in the log is exactly ten characters wide.
const VALUE_LEN: usize = 10;
/// Tags are matched against a four-character window at the cursor.
const TAG_LEN: usize = 4;

/// One fixed-width field kind in the console log. `width` is the cursor
/// advance, `value_at` the offset of the value token within the field.
#[derive(Debug, Clone, Copy)]
struct FieldSpec {
    tag: &'static str,
    /// Name emitted into the operand list; `None` for the immediate field,
    /// which feeds the encoder instead of the CSV row.
    name: Option<&'static str>,
    width: usize,
    value_at: usize,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { tag: "rD", name: Some("rD"), width: 16, value_at: 3 },
    FieldSpec { tag: "rA", name: Some("rA"), width: 16, value_at: 3 },
    FieldSpec { tag: "rB", name: Some("rB"), width: 16, value_at: 3 },
    FieldSpec { tag: "XER:", name: Some("XER"), width: 18, value_at: 5 },
    FieldSpec { tag: "CR:", name: Some("CR"), width: 17, value_at: 4 },
    FieldSpec { tag: "imm", name: None, width: 17, value_at: 4 },
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Operand {
    pub name: &'static str,
    /// Value token copied verbatim from the log, never interpreted here.
    pub value: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ParsedRecord {
    pub mnemonic: String,
    /// Immediate from an `imm` field, 0 when the line has none.
    pub imm: u32,
    pub operands: Vec<Operand>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognized field tag {tag:?} at column {offset}")]
    Malformed { offset: usize, tag: String },
    #[error("bad immediate value {value:?} at column {offset}")]
    Immediate { offset: usize, value: String },
}

/// Tokenize one log line: mnemonic in columns [0,8), then fixed-width
/// tagged fields from column 12 to end of line.
pub fn parse(line: &str) -> Result<ParsedRecord, ParseError> {
    let mnemonic = slice(line, 0, 8).trim_end().to_string();
    let mut operands = Vec::new();
    let mut imm = 0u32;

    let mut pos = FIELDS_START;
    while pos < line.len() {
        let window = slice(line, pos, TAG_LEN);
        let Some(spec) = FIELDS.iter().find(|f| window.starts_with(f.tag)) else {
            return Err(ParseError::Malformed { offset: pos, tag: window.to_string() });
        };
        let value = slice(line, pos + spec.value_at, VALUE_LEN);
        match spec.name {
            Some(name) => operands.push(Operand { name, value: value.to_string() }),
            None => {
                imm = parse_hex(value).ok_or_else(|| ParseError::Immediate {
                    offset: pos,
                    value: value.to_string(),
                })?;
            }
        }
        pos += spec.width;
    }

    Ok(ParsedRecord { mnemonic, imm, operands })
}

/// Substring clamped at end of line; the log writer pads most fields, but
/// the final field on a line may come up short.
fn slice(line: &str, at: usize, len: usize) -> &str {
    let start = at.min(line.len());
    let end = (at + len).min(line.len());
    line.get(start..end).unwrap_or("")
}

fn parse_hex(s: &str) -> Option<u32> {
    let s = s.trim();
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    u32::from_str_radix(digits, 16).ok()
}
