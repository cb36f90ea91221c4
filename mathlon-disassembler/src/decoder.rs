//! Instruction decoder

use mathlon_spec::{validate, Fields, Opcode, Word};

use crate::error::{DisassemblerError, Result};

/// Split a word into its raw fields. Never fails.
#[inline]
pub fn decode(word: Word) -> Fields {
    Fields::from_word(word)
}

/// Decode a word and check it against its opcode's shape.
///
/// `offset` is the byte offset reported if the word is rejected.
pub fn decode_instruction(word: Word, offset: u32) -> Result<(Opcode, Fields)> {
    let fields = decode(word);
    let opcode = validate(&fields).map_err(|source| DisassemblerError::InvalidInstruction {
        offset,
        word,
        source,
    })?;
    Ok((opcode, fields))
}
