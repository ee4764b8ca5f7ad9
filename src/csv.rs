use crate::parse::Operand;

/// Format one output row: `mnemonic,0xHEX[,name=value]*` with operand
/// fields in log order. Hex is uppercase and unpadded.
pub fn fmt_row(mnemonic: &str, word: u32, operands: &[Operand]) -> String {
    use std::fmt::Write as _;
    let mut row = format!("{mnemonic},0x{word:X}");
    for op in operands {
        let _ = write!(row, ",{}={}", op.name, op.value);
    }
    row
}
