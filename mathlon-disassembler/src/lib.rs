//! # Mathlon Disassembler
//!
//! Render Mathlon instruction words and memory images as assembly text.
//!
//! Single words are rendered with [`decode_text`], which never fails and
//! never validates, so it is safe on arbitrary or corrupted memory. Whole
//! images go through [`disassemble_block`], which validates every word in
//! the instruction region and prints the rest as raw data.
//!
//! ## Example
//!
//! ```rust
//! use mathlon_disassembler::{decode_text, disassemble_block};
//!
//! assert_eq!(decode_text(0xC280_0064), "li\tR5\t100");
//!
//! let memory = [0xC280_0064, 0x0000_0000, 0xDEAD_BEEF];
//! let asm = disassemble_block(&memory, 2).unwrap();
//! assert_eq!(asm, "000: li\tR5\t100\n004: halt\t\n008: deadbeef\n");
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::{disassemble_block, disassemble_block_to, disassemble_block_with};
pub use decoder::{decode, decode_instruction};
pub use formatter::{decode_text, format, write_instruction};
