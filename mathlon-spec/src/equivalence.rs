//! Semantic comparison of instruction words
//!
//! Two words are equivalent when they carry the same opcode and agree on
//! every field that opcode uses. Don't-care fields are ignored, so this is
//! weaker than bitwise equality. No validation is done.

use crate::{Fields, Word};

/// Compare two words by the fields their opcode uses
#[inline]
pub fn equivalent(a: Word, b: Word) -> bool {
    Fields::from_word(a).equivalent(&Fields::from_word(b))
}

impl Fields {
    /// Compare by the fields this opcode uses.
    ///
    /// The undefined opcode has no shape, so none of its bits are
    /// don't-care: two such words are equivalent only when identical.
    pub fn equivalent(&self, other: &Fields) -> bool {
        if self.opcode != other.opcode {
            return false;
        }
        let Some(opcode) = self.opcode() else {
            return self == other;
        };
        let shape = opcode.shape();

        let registers_match = shape
            .registers
            .iter()
            .zip(self.registers().iter().zip(other.registers()))
            .all(|(role, (a, b))| role.is_none() || *a == b);

        registers_match && (!shape.uses_operand() || self.addr_or_const == other.addr_or_const)
    }
}
