//! # Configuration for Mathlon memory images
//!
//! Bounds applied when a caller hands the codec a block of memory words.
//! The defaults describe the full machine: 2048 bytes of memory holding
//! 512 four-byte words.

use std::fmt;

use crate::{MAX_BLOCK_WORDS, WORD_BYTES};

/// Limits for block disassembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    /// Largest accepted block, in words (1-512)
    pub max_block_words: usize,
}

impl Config {
    /// Default configuration: the whole 512-word memory
    pub const DEFAULT: Self = Self {
        max_block_words: MAX_BLOCK_WORDS,
    };

    /// Create a new configuration with validation
    pub const fn new(max_block_words: usize) -> Result<Self, ConfigError> {
        let config = Self { max_block_words };

        if max_block_words == 0 {
            return Err(ConfigError::ZeroBlockWords);
        }
        if max_block_words > MAX_BLOCK_WORDS {
            return Err(ConfigError::BlockExceedsMemory(max_block_words));
        }

        Ok(config)
    }

    /// Re-check a configuration built with struct literal syntax
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::new(self.max_block_words).map(|_| ())
    }

    /// Byte offset of the word at `index`
    #[inline]
    pub const fn offset_of(&self, index: usize) -> u32 {
        index as u32 * WORD_BYTES
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Block limit must be at least one word
    ZeroBlockWords,
    /// Block limit may not exceed the 512 words of machine memory
    BlockExceedsMemory(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBlockWords => {
                write!(f, "max_block_words must be at least 1")
            }
            ConfigError::BlockExceedsMemory(words) => {
                write!(f, "max_block_words {} exceeds memory size of {} words", words, MAX_BLOCK_WORDS)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
