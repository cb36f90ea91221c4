//! Raw instruction fields

use serde::{Deserialize, Serialize};

use crate::encoding::{
    extract_addr_or_const, extract_opcode, extract_reg1, extract_reg2, extract_reg3, pack,
};
use crate::{Opcode, Word};

/// The five fields of an instruction word, as raw unsigned values.
///
/// Nothing here is checked: a `Fields` may hold an undefined opcode or
/// out-of-range registers. Use [`crate::validate`] or [`Fields::encode`]
/// when legality matters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fields {
    pub opcode: u32,
    pub reg1: u32,
    pub reg2: u32,
    pub reg3: u32,
    pub addr_or_const: u32,
}

impl Fields {
    #[inline]
    pub const fn new(opcode: u32, reg1: u32, reg2: u32, reg3: u32, addr_or_const: u32) -> Self {
        Self {
            opcode,
            reg1,
            reg2,
            reg3,
            addr_or_const,
        }
    }

    /// Split a word into its fields. Never fails.
    #[inline]
    pub const fn from_word(word: Word) -> Self {
        Self {
            opcode: extract_opcode(word),
            reg1: extract_reg1(word),
            reg2: extract_reg2(word),
            reg3: extract_reg3(word),
            addr_or_const: extract_addr_or_const(word),
        }
    }

    /// Pack without validation (fields are masked to their widths)
    #[inline]
    pub const fn to_word(&self) -> Word {
        pack(self.opcode, self.reg1, self.reg2, self.reg3, self.addr_or_const)
    }

    /// Defined opcode, if the opcode field holds one
    #[inline]
    pub fn opcode(&self) -> Option<Opcode> {
        Opcode::from_u32(self.opcode)
    }

    /// Register fields as an array, indexed by slot
    #[inline]
    pub const fn registers(&self) -> [u32; 3] {
        [self.reg1, self.reg2, self.reg3]
    }
}

impl From<Word> for Fields {
    fn from(word: Word) -> Self {
        Self::from_word(word)
    }
}

impl From<Fields> for Word {
    fn from(fields: Fields) -> Self {
        fields.to_word()
    }
}
