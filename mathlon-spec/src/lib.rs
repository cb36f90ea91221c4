//! # Mathlon ISA
//!
//! Fixed-width binary encoding for the 15-opcode Mathlon toy machine.
//!
//! ## Key Features
//! - 32-bit instruction words with one layout for every opcode
//! - 4-bit opcode, three 5-bit register fields, 13-bit address-or-constant
//! - 20 registers; R0 and R1 are reserved and never written
//! - 2048 bytes of word-addressed memory (512 words)
//! - Per-opcode shape table driving validation, rendering and comparison
//!
//! ## Example
//!
//! ```rust
//! use mathlon_spec::{encode, equivalent, Opcode};
//!
//! let word = encode(Opcode::Add.to_u8() as u32, 2, 3, 4, 0).unwrap();
//! assert_eq!(word, 0x110C_8000);
//!
//! // reg3 is don't-care for mv
//! let a = encode(Opcode::Mv.to_u8() as u32, 2, 3, 0, 0).unwrap();
//! let b = encode(Opcode::Mv.to_u8() as u32, 2, 3, 9, 0).unwrap();
//! assert!(equivalent(a, b));
//! ```

pub mod config;
pub mod encoding;
pub mod equivalence;
pub mod fields;
pub mod opcode;
pub mod validation;

pub use config::{Config, ConfigError};
pub use encoding::{encode, pack};
pub use equivalence::equivalent;
pub use fields::Fields;
pub use opcode::{Opcode, OperandKind, RegisterRole, Shape, ShapeClass};
pub use validation::{is_valid, validate, validate_word, ValidationError};

/// Instruction word
pub type Word = u32;

/// Number of addressable registers (R0-R19)
pub const NUM_REGISTERS: u32 = 20;

/// R0 and R1 are reserved; destinations start here
pub const FIRST_WRITABLE_REGISTER: u32 = 2;

/// Largest value of the 13-bit constant field
pub const MAX_CONSTANT: u32 = (1 << 13) - 1;

/// Machine memory size in bytes
pub const MEMORY_BYTES: u32 = 2048;

/// Word size in addressable bytes
pub const WORD_BYTES: u32 = 4;

/// Words in machine memory, and the largest block the disassembler accepts
pub const MAX_BLOCK_WORDS: usize = (MEMORY_BYTES / WORD_BYTES) as usize;
