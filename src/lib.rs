//! # huffman_bits
//!
//! Builds a Huffman code for the symbols of a text and reports how many
//! bits the encoded text would take.
//!
//! ```rust
//! use huffman_bits::huffman::analyze;
//!
//! let analysis = analyze(b"aaab")?;
//! assert_eq!(analysis.total_bits, 4);
//! # Ok::<(), huffman_bits::HuffmanError>(())
//! ```

pub mod error;
pub mod huffman;
pub mod options;
pub mod source;

pub use error::{HuffmanError, Result};
pub use huffman::{
    Analysis, CodeTable, FreqTable, HuffmanTree, Node, Symbol, analyze, build_codes,
    estimate_cost,
};
