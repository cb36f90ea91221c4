//! # Instruction Encoding Constants and Helpers
//!
//! This module provides centralized constants and helper functions for
//! Mathlon instruction encoding/decoding.
//!
//! ## Instruction Format (32-bit)
//!
//! Every opcode uses the same layout; fields an opcode does not use are
//! still present in the word and are don't-care.
//!
//! ```text
//! [opcode:4][reg1:5][reg2:5][reg3:5][addr_or_const:13]
//!  31    28  27  23  22  18  17  13  12             0
//! ```

use crate::validation::{validate, ValidationError};
use crate::{Fields, Opcode, Word};

// ============================================================================
// Bit Position Constants
// ============================================================================

/// Opcode field: bits 28-31 (4 bits)
pub const OPCODE_SHIFT: u32 = 28;

/// Register field 1: bits 23-27 (5 bits)
pub const REG1_SHIFT: u32 = 23;

/// Register field 2: bits 18-22 (5 bits)
pub const REG2_SHIFT: u32 = 18;

/// Register field 3: bits 13-17 (5 bits)
pub const REG3_SHIFT: u32 = 13;

/// Address-or-constant field: bits 0-12 (13 bits)
pub const ADDR_SHIFT: u32 = 0;

// ============================================================================
// Field Masks
// ============================================================================

/// Opcode mask (4 bits)
pub const OPCODE_MASK: u32 = Opcode::MASK;

/// Register field mask (5 bits)
pub const REGISTER_MASK: u32 = 0x1F;

/// Address-or-constant mask (13 bits)
pub const ADDR_MASK: u32 = 0x1FFF;

// ============================================================================
// Field Extraction Functions
// ============================================================================

/// Extract opcode from instruction (bits 28-31)
#[inline]
pub const fn extract_opcode(word: Word) -> u32 {
    (word >> OPCODE_SHIFT) & OPCODE_MASK
}

/// Extract register field 1 (bits 23-27)
#[inline]
pub const fn extract_reg1(word: Word) -> u32 {
    (word >> REG1_SHIFT) & REGISTER_MASK
}

/// Extract register field 2 (bits 18-22)
#[inline]
pub const fn extract_reg2(word: Word) -> u32 {
    (word >> REG2_SHIFT) & REGISTER_MASK
}

/// Extract register field 3 (bits 13-17)
#[inline]
pub const fn extract_reg3(word: Word) -> u32 {
    (word >> REG3_SHIFT) & REGISTER_MASK
}

/// Extract address-or-constant (bits 0-12)
#[inline]
pub const fn extract_addr_or_const(word: Word) -> u32 {
    (word >> ADDR_SHIFT) & ADDR_MASK
}

// ============================================================================
// Instruction Encoding Functions
// ============================================================================

/// Pack raw fields into a word without validation.
///
/// Each field is masked to its width, so an oversized value never bleeds
/// into a neighbouring field.
#[inline]
pub const fn pack(opcode: u32, reg1: u32, reg2: u32, reg3: u32, addr_or_const: u32) -> Word {
    ((opcode & OPCODE_MASK) << OPCODE_SHIFT)
        | ((reg1 & REGISTER_MASK) << REG1_SHIFT)
        | ((reg2 & REGISTER_MASK) << REG2_SHIFT)
        | ((reg3 & REGISTER_MASK) << REG3_SHIFT)
        | ((addr_or_const & ADDR_MASK) << ADDR_SHIFT)
}

/// Validate the fields against the opcode's shape and pack them.
///
/// Fields the opcode does not use are not checked; pass 0 for them to get
/// a canonical word.
pub fn encode(
    opcode: u32,
    reg1: u32,
    reg2: u32,
    reg3: u32,
    addr_or_const: u32,
) -> Result<Word, ValidationError> {
    Fields::new(opcode, reg1, reg2, reg3, addr_or_const).encode()
}

impl Fields {
    /// Validate and pack these fields
    pub fn encode(&self) -> Result<Word, ValidationError> {
        let opcode = validate(self)?;
        let word = self.to_word();
        tracing::trace!(%opcode, word, "encoded instruction");
        Ok(word)
    }
}
