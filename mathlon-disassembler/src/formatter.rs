//! Instruction formatting to assembly text for Mathlon
//!
//! Output is tab separated: the mnemonic and every register operand are
//! each followed by a tab, and the address-or-constant (when the opcode
//! uses one) comes last with no trailing tab.
//!
//! ```text
//! add\tR2\tR3\tR4\t
//! li\tR5\t100
//! load\tR2\t0040
//! halt\t
//! ```

use std::fmt::{self, Write};

use mathlon_spec::{Fields, Opcode, OperandKind, Word};

use crate::decoder::decode;

/// Mnemonic printed for the undefined opcode.
///
/// Opcode 0xF has no mnemonic of its own. The line still starts with a
/// placeholder and a tab so every rendered instruction keeps the same
/// `<mnemonic>\t<operands>` column layout.
pub const UNKNOWN_MNEMONIC: &str = "???";

/// Decode a word and render it as assembly text. Never validates.
pub fn decode_text(word: Word) -> String {
    format(&decode(word))
}

/// Format fields as assembly text
pub fn format(fields: &Fields) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_instruction(&mut out, fields);
    out
}

/// Render fields into any formatter sink.
///
/// Operand selection comes from the opcode's shape. The undefined opcode
/// prints all three registers and no address-or-constant.
pub fn write_instruction<W: Write>(out: &mut W, fields: &Fields) -> fmt::Result {
    let opcode = fields.opcode();
    let mnemonic = opcode.map_or(UNKNOWN_MNEMONIC, Opcode::mnemonic);
    write!(out, "{}\t", mnemonic)?;

    let (registers, operand) = match opcode {
        Some(opcode) => {
            let shape = opcode.shape();
            (shape.registers.map(|role| role.is_some()), shape.operand)
        }
        None => ([true; 3], None),
    };

    for (printed, value) in registers.iter().zip(fields.registers()) {
        if *printed {
            write!(out, "{}\t", format_reg(value))?;
        }
    }

    match operand {
        Some(OperandKind::Constant) => write!(out, "{}", fields.addr_or_const),
        Some(OperandKind::Address) => write!(out, "{:04}", fields.addr_or_const),
        None => Ok(()),
    }
}

/// Format a register index (e.g., "R5")
fn format_reg(index: u32) -> String {
    format!("R{}", index)
}
