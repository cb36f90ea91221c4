//! # Mathlon Opcode Definitions
//!
//! This module defines the opcode values for all Mathlon instructions and the
//! shape table that says which operand fields each opcode uses.
//! Opcodes are 4 bits (0x0-0xE); 0xF is undefined.
//!
//! ## Shape Classes
//!
//! - Halt: HALT (no operands)
//! - R3: ADD, SUB, MUL, DIV, REM, AND, OR (reg1, reg2, reg3)
//! - R2: INV, NOT, MV (reg1, reg2)
//! - RI: LI (reg1, constant)
//! - Branch: CMP (reg1, reg2, reg3, address)
//! - Mem: LOAD, STORE (reg1, address)

use serde::{Deserialize, Serialize};

/// Instruction opcode (4 bits, values 0x0-0xE)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// HALT: stop the machine
    Halt = 0x0,
    /// ADD: reg1 = reg2 + reg3
    Add = 0x1,
    /// SUB: reg1 = reg2 - reg3
    Sub = 0x2,
    /// MUL: reg1 = reg2 * reg3
    Mul = 0x3,
    /// DIV: reg1 = reg2 / reg3
    Div = 0x4,
    /// REM: reg1 = reg2 % reg3
    Rem = 0x5,
    /// INV: reg1 = -reg2
    Inv = 0x6,
    /// AND: reg1 = reg2 && reg3
    And = 0x7,
    /// OR: reg1 = reg2 || reg3
    Or = 0x8,
    /// NOT: reg1 = !reg2
    Not = 0x9,
    /// CMP: if (reg1 == reg2 && reg2 == reg3) jump to address
    Cmp = 0xA,
    /// MV: reg1 = reg2
    Mv = 0xB,
    /// LI: reg1 = constant
    Li = 0xC,
    /// LOAD: reg1 = mem[address]
    Load = 0xD,
    /// STORE: mem[address] = reg1
    Store = 0xE,
}

impl Opcode {
    /// Opcode width in bits
    pub const BITS: usize = 4;

    /// Opcode mask (0xF for 4 bits)
    pub const MASK: u32 = 0xF;

    /// Number of defined opcodes
    pub const COUNT: usize = 15;

    /// Every defined opcode, in numeric order
    pub const ALL: [Opcode; Self::COUNT] = [
        Opcode::Halt,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::Rem,
        Opcode::Inv,
        Opcode::And,
        Opcode::Or,
        Opcode::Not,
        Opcode::Cmp,
        Opcode::Mv,
        Opcode::Li,
        Opcode::Load,
        Opcode::Store,
    ];

    /// Try to convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Try to convert from a raw opcode field value
    #[inline]
    pub fn from_u32(value: u32) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::from_u8)
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Extract opcode from 32-bit instruction word
    #[inline]
    pub fn from_word(word: u32) -> Option<Self> {
        Self::from_u32(crate::encoding::extract_opcode(word))
    }

    /// Assembly mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Halt => "halt",
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Mul => "mul",
            Opcode::Div => "div",
            Opcode::Rem => "rem",
            Opcode::Inv => "inv",
            Opcode::And => "and",
            Opcode::Or => "or",
            Opcode::Not => "not",
            Opcode::Cmp => "cmp",
            Opcode::Mv => "mv",
            Opcode::Li => "li",
            Opcode::Load => "load",
            Opcode::Store => "store",
        }
    }

    /// Shape class this opcode belongs to
    #[inline]
    pub const fn class(self) -> ShapeClass {
        self.shape().class
    }

    /// Operand layout for this opcode.
    ///
    /// Validation, rendering and equivalence all read this table, so it is
    /// the only place that knows which fields an opcode uses.
    pub const fn shape(self) -> Shape {
        use OperandKind::*;
        use RegisterRole::*;

        match self {
            Opcode::Halt => Shape::new(ShapeClass::Halt, [None, None, None], None),
            Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Div
            | Opcode::Rem
            | Opcode::And
            | Opcode::Or => Shape::new(
                ShapeClass::R3,
                [Some(Destination), Some(Source), Some(Source)],
                None,
            ),
            Opcode::Inv | Opcode::Not | Opcode::Mv => Shape::new(
                ShapeClass::R2,
                [Some(Destination), Some(Source), None],
                None,
            ),
            Opcode::Li => Shape::new(
                ShapeClass::RI,
                [Some(Destination), None, None],
                Some(Constant),
            ),
            Opcode::Cmp => Shape::new(
                ShapeClass::Branch,
                [Some(Source), Some(Source), Some(Source)],
                Some(Address),
            ),
            // load writes reg1, store reads it
            Opcode::Load => Shape::new(
                ShapeClass::Mem,
                [Some(Destination), None, None],
                Some(Address),
            ),
            Opcode::Store => Shape::new(
                ShapeClass::Mem,
                [Some(Source), None, None],
                Some(Address),
            ),
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

/// Shape class: the operand family an opcode belongs to
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeClass {
    /// No operands: HALT
    Halt = 0,
    /// Three registers: ADD, SUB, MUL, DIV, REM, AND, OR
    R3 = 1,
    /// Two registers: INV, NOT, MV
    R2 = 2,
    /// Register and constant: LI
    RI = 3,
    /// Three registers and an address: CMP
    Branch = 4,
    /// Register and an address: LOAD, STORE
    Mem = 5,
}

impl ShapeClass {
    /// Total number of shape classes
    pub const COUNT: usize = 6;
}

impl std::fmt::Display for ShapeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShapeClass::Halt => "halt",
            ShapeClass::R3 => "r3",
            ShapeClass::R2 => "r2",
            ShapeClass::RI => "ri",
            ShapeClass::Branch => "branch",
            ShapeClass::Mem => "mem",
        };
        write!(f, "{}", name)
    }
}

/// How an opcode uses one of its register fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegisterRole {
    /// Written by the instruction; reserved registers are excluded
    Destination,
    /// Read by the instruction; any register is allowed
    Source,
}

impl RegisterRole {
    /// Lowest legal register index for this role
    #[inline]
    pub const fn min(self) -> u32 {
        match self {
            RegisterRole::Destination => crate::FIRST_WRITABLE_REGISTER,
            RegisterRole::Source => 0,
        }
    }

    /// Highest legal register index for this role
    #[inline]
    pub const fn max(self) -> u32 {
        crate::NUM_REGISTERS - 1
    }

    /// Check a register index against this role's range
    #[inline]
    pub const fn accepts(self, reg: u32) -> bool {
        reg >= self.min() && reg <= self.max()
    }
}

/// How an opcode uses the address-or-constant field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperandKind {
    /// Unsigned 13-bit constant, any value
    Constant,
    /// Word-aligned byte address inside machine memory
    Address,
}

impl OperandKind {
    /// Highest legal value for this operand
    #[inline]
    pub const fn max(self) -> u32 {
        match self {
            OperandKind::Constant => crate::MAX_CONSTANT,
            OperandKind::Address => crate::MEMORY_BYTES - 1,
        }
    }

    /// Required alignment in bytes (1 = none)
    #[inline]
    pub const fn alignment(self) -> u32 {
        match self {
            OperandKind::Constant => 1,
            OperandKind::Address => crate::WORD_BYTES,
        }
    }
}

/// Operand layout of one opcode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub class: ShapeClass,
    /// Roles of reg1, reg2, reg3; `None` marks a don't-care field
    pub registers: [Option<RegisterRole>; 3],
    /// Role of the address-or-constant field; `None` marks a don't-care field
    pub operand: Option<OperandKind>,
}

impl Shape {
    const fn new(
        class: ShapeClass,
        registers: [Option<RegisterRole>; 3],
        operand: Option<OperandKind>,
    ) -> Self {
        Self { class, registers, operand }
    }

    /// Number of register fields the opcode uses
    pub fn register_count(&self) -> usize {
        self.registers.iter().filter(|r| r.is_some()).count()
    }

    /// Whether the address-or-constant field is meaningful
    #[inline]
    pub const fn uses_operand(&self) -> bool {
        self.operand.is_some()
    }

    /// Role of register slot `slot` (0-based)
    #[inline]
    pub fn register_role(&self, slot: usize) -> Option<RegisterRole> {
        self.registers.get(slot).copied().flatten()
    }
}
