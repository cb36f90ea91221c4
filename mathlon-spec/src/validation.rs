//! Instruction validation for Mathlon
//!
//! Checks raw fields against the shape of their opcode before a word is
//! built or a memory image is disassembled. Catches:
//! - Undefined opcodes (0xF)
//! - Writes to the reserved registers R0 and R1
//! - Register indices past R19
//! - Constants wider than 13 bits
//! - Addresses outside memory or not word-aligned
//!
//! Fields the opcode does not use are never checked.

use thiserror::Error;

use crate::opcode::{OperandKind, RegisterRole};
use crate::{Fields, Opcode, Word};

/// Validation error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid opcode: {0:#x}")]
    InvalidOpcode(u32),

    #[error("Register field {slot} of {opcode} is R{value}, expected R{min}-R{max}")]
    RegisterOutOfRange {
        opcode: Opcode,
        /// 1-based register field number
        slot: u8,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("Constant {value} out of range [0, {max}] for {opcode}")]
    ConstantOutOfRange { opcode: Opcode, value: u32, max: u32 },

    #[error("Address {value} out of range [0, {max}] for {opcode}")]
    AddressOutOfRange { opcode: Opcode, value: u32, max: u32 },

    #[error("Address {value} for {opcode} is not aligned to {alignment} bytes")]
    MisalignedAddress {
        opcode: Opcode,
        value: u32,
        alignment: u32,
    },
}

impl ValidationError {
    /// Opcode the failing fields belong to, when it is a defined one
    pub fn opcode(&self) -> Option<Opcode> {
        match self {
            ValidationError::InvalidOpcode(_) => None,
            ValidationError::RegisterOutOfRange { opcode, .. }
            | ValidationError::ConstantOutOfRange { opcode, .. }
            | ValidationError::AddressOutOfRange { opcode, .. }
            | ValidationError::MisalignedAddress { opcode, .. } => Some(*opcode),
        }
    }
}

/// Validate fields against their opcode's shape.
///
/// Returns the decoded opcode, or the first rule broken in the order
/// opcode, reg1, reg2, reg3, address-or-constant.
pub fn validate(fields: &Fields) -> Result<Opcode, ValidationError> {
    let opcode = fields
        .opcode()
        .ok_or(ValidationError::InvalidOpcode(fields.opcode))?;
    let shape = opcode.shape();

    for (slot, (role, value)) in shape.registers.iter().zip(fields.registers()).enumerate() {
        if let Some(role) = role {
            check_register(opcode, slot, *role, value)?;
        }
    }

    if let Some(kind) = shape.operand {
        check_operand(opcode, kind, fields.addr_or_const)?;
    }

    Ok(opcode)
}

/// Boolean form of [`validate`]
#[inline]
pub fn is_valid(fields: &Fields) -> bool {
    validate(fields).is_ok()
}

/// Validate the fields held in a raw word
#[inline]
pub fn validate_word(word: Word) -> Result<Opcode, ValidationError> {
    validate(&Fields::from_word(word))
}

// Helper functions

fn check_register(
    opcode: Opcode,
    slot: usize,
    role: RegisterRole,
    value: u32,
) -> Result<(), ValidationError> {
    if role.accepts(value) {
        return Ok(());
    }
    Err(ValidationError::RegisterOutOfRange {
        opcode,
        slot: slot as u8 + 1,
        value,
        min: role.min(),
        max: role.max(),
    })
}

fn check_operand(opcode: Opcode, kind: OperandKind, value: u32) -> Result<(), ValidationError> {
    let max = kind.max();
    if value > max {
        return Err(match kind {
            OperandKind::Constant => ValidationError::ConstantOutOfRange { opcode, value, max },
            OperandKind::Address => ValidationError::AddressOutOfRange { opcode, value, max },
        });
    }

    let alignment = kind.alignment();
    if value % alignment != 0 {
        return Err(ValidationError::MisalignedAddress {
            opcode,
            value,
            alignment,
        });
    }

    Ok(())
}
