//! Error types for Huffman code construction and the command-line driver.

use std::path::PathBuf;

use thiserror::Error;

use crate::huffman::Symbol;

#[derive(Debug, Error)]
pub enum HuffmanError {
    /// Tree construction was requested for a table with no symbols.
    #[error("cannot build a Huffman tree from an empty frequency table")]
    EmptyInput,

    /// A symbol has a code but no frequency. The code table and the
    /// frequency table were not built from the same input.
    #[error("symbol {0:#04x} has a code but no frequency entry")]
    LookupInconsistency(Symbol),

    #[error("cannot read {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("usage: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
