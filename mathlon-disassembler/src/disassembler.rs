//! Block disassembly of a memory image
//!
//! Code and data share one linear memory. The caller says how many leading
//! words are instructions; the rest are printed as raw hex.

use std::fmt::Write as _;
use std::io;

use mathlon_spec::{Config, Word};

use crate::decoder::decode_instruction;
use crate::error::{DisassemblerError, Result};
use crate::formatter::write_instruction;

/// Disassemble a block with the default 512-word limit.
///
/// Each line is `<offset>: <text>\n` with a 3-digit hex byte offset. The
/// first `num_instrs` words must all validate; if any does not, nothing is
/// returned.
pub fn disassemble_block(memory: &[Word], num_instrs: usize) -> Result<String> {
    disassemble_block_with(&Config::DEFAULT, memory, num_instrs)
}

/// Disassemble a block under a custom configuration.
///
/// The configuration is re-checked first, so a struct literal with a limit
/// above the 512-word memory is rejected.
pub fn disassemble_block_with(
    config: &Config,
    memory: &[Word],
    num_instrs: usize,
) -> Result<String> {
    config.validate()?;
    check_block(config, memory, num_instrs)?;
    tracing::debug!(words = memory.len(), instructions = num_instrs, "disassembling block");

    let mut output = String::new();

    for (index, &word) in memory.iter().enumerate() {
        let offset = config.offset_of(index);
        let line_start = output.len();

        // Address label
        let _ = write!(output, "{:03x}: ", offset);

        if index < num_instrs {
            let (_, fields) = decode_instruction(word, offset).map_err(|e| {
                tracing::debug!(offset, word, error = %e, "rejected instruction word");
                e
            })?;
            let _ = write_instruction(&mut output, &fields);
        } else {
            let _ = write!(output, "{:08x}", word);
        }

        tracing::trace!(line = &output[line_start..], "disassembled word");
        output.push('\n');
    }

    Ok(output)
}

/// Disassemble a block into a writer.
///
/// The block is rendered in full before anything is written, so an invalid
/// block leaves the writer untouched.
pub fn disassemble_block_to<W: io::Write>(
    writer: &mut W,
    memory: &[Word],
    num_instrs: usize,
) -> Result<()> {
    let text = disassemble_block(memory, num_instrs)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

fn check_block(config: &Config, memory: &[Word], num_instrs: usize) -> Result<()> {
    let size = memory.len();
    if size == 0 {
        return Err(DisassemblerError::EmptyBlock);
    }
    if size > config.max_block_words {
        return Err(DisassemblerError::BlockTooLarge {
            size,
            max: config.max_block_words,
        });
    }
    if num_instrs == 0 || num_instrs > size {
        return Err(DisassemblerError::InstructionCountOutOfRange {
            count: num_instrs,
            size,
        });
    }
    Ok(())
}
