use ppcvec_rs::parse::{parse, Operand, ParseError};
use pretty_assertions::assert_eq;

// Builders for the fixed-column log layout: mnemonic in [0,8), fields from
// column 12, value tokens always ten characters.

fn reg(name: &str, value: &str) -> String {
    assert_eq!(value.len(), 10);
    format!("{name}={value}   ") // 16 columns
}

fn xer(value: &str) -> String {
    assert_eq!(value.len(), 10);
    format!("XER: {value}   ") // 18 columns
}

fn cr(value: &str) -> String {
    assert_eq!(value.len(), 10);
    format!("CR: {value}   ") // 17 columns
}

fn imm(value: &str) -> String {
    assert_eq!(value.len(), 10);
    format!("imm={value}   ") // 17 columns
}

fn log_line(mnemonic: &str, fields: &[String]) -> String {
    format!("{mnemonic:<8}    {}", fields.concat())
}

fn op(name: &'static str, value: &str) -> Operand {
    Operand { name, value: value.to_string() }
}

#[test]
fn register_fields_extract_verbatim() {
    let line = log_line(
        "ADD",
        &[reg("rD", "0000000003"), reg("rA", "0000000003"), reg("rB", "0000000004")],
    );
    let rec = parse(&line).unwrap();
    assert_eq!(rec.mnemonic, "ADD");
    assert_eq!(rec.imm, 0);
    assert_eq!(
        rec.operands,
        vec![op("rD", "0000000003"), op("rA", "0000000003"), op("rB", "0000000004")]
    );
}

#[test]
fn value_token_is_opaque() {
    // Exact substring at [15,25) regardless of content
    let line = log_line("ADD", &[reg("rD", "ab 12_xyz!")]);
    let rec = parse(&line).unwrap();
    assert_eq!(rec.operands, vec![op("rD", "ab 12_xyz!")]);
}

#[test]
fn status_registers_and_field_order() {
    let line = log_line(
        "ADDC.",
        &[reg("rA", "0000000001"), xer("0x20000000"), cr("0x00000002"), reg("rD", "0000000007")],
    );
    let rec = parse(&line).unwrap();
    assert_eq!(rec.mnemonic, "ADDC.");
    assert_eq!(
        rec.operands,
        vec![
            op("rA", "0000000001"),
            op("XER", "0x20000000"),
            op("CR", "0x00000002"),
            op("rD", "0000000007"),
        ]
    );
}

#[test]
fn imm_field_feeds_immediate_not_operands() {
    let line = log_line("ADDI", &[reg("rD", "0000001234"), imm("0x00001234")]);
    let rec = parse(&line).unwrap();
    assert_eq!(rec.imm, 0x1234);
    assert_eq!(rec.operands, vec![op("rD", "0000001234")]);
}

#[test]
fn imm_accepts_bare_hex_digits() {
    let line = log_line("ADDIS", &[imm("0000ABCD12")]);
    assert_eq!(parse(&line).unwrap().imm, 0x00AB_CD12);
}

#[test]
fn missing_imm_defaults_to_zero() {
    let line = log_line("ADDI", &[reg("rD", "0000000003")]);
    assert_eq!(parse(&line).unwrap().imm, 0);
}

#[test]
fn unparsable_imm_is_an_error() {
    let line = log_line("ADDI", &[imm("not-hex-!!")]);
    assert_eq!(
        parse(&line),
        Err(ParseError::Immediate { offset: 12, value: "not-hex-!!".to_string() })
    );
}

#[test]
fn unknown_tag_reports_offset_and_tag() {
    let line = log_line("ADD", &[reg("rD", "0000000003"), "bogus stuff".to_string()]);
    assert_eq!(
        parse(&line),
        Err(ParseError::Malformed { offset: 28, tag: "bogu".to_string() })
    );
}

#[test]
fn unknown_tag_at_first_field() {
    let line = log_line("ADD", &["foo=0000000000".to_string()]);
    assert_eq!(
        parse(&line),
        Err(ParseError::Malformed { offset: 12, tag: "foo=".to_string() })
    );
}

#[test]
fn mnemonic_right_trimmed() {
    let line = log_line("ADDZE.", &[reg("rD", "0000000003")]);
    assert_eq!(parse(&line).unwrap().mnemonic, "ADDZE.");
}

#[test]
fn short_line_has_no_fields() {
    let rec = parse("ADD").unwrap();
    assert_eq!(rec.mnemonic, "ADD");
    assert!(rec.operands.is_empty());
    assert_eq!(rec.imm, 0);
}

#[test]
fn truncated_final_field_clamps() {
    // Last field cut short of its full width: value token comes up short
    // rather than out of bounds.
    let mut line = log_line("ADD", &[reg("rD", "0000000003")]);
    line.push_str("rA=0000");
    let rec = parse(&line).unwrap();
    assert_eq!(rec.operands.len(), 2);
    assert_eq!(rec.operands[1], op("rA", "0000"));
}
