//! Disassembler errors

use mathlon_spec::{ConfigError, ValidationError, Word};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisassemblerError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Empty memory block")]
    EmptyBlock,

    #[error("Memory block of {size} words exceeds the {max}-word limit")]
    BlockTooLarge { size: usize, max: usize },

    #[error("Instruction count {count} out of range [1, {size}]")]
    InstructionCountOutOfRange { count: usize, size: usize },

    #[error("Invalid instruction 0x{word:08x} at offset 0x{offset:03x}: {source}")]
    InvalidInstruction {
        offset: u32,
        word: Word,
        #[source]
        source: ValidationError,
    },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
