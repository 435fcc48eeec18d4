use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::{HuffmanError, Result};
use crate::options::Ingest;

/// Reads the symbols to analyze from `path`.
pub fn read_symbols(path: &Path, ingest: Ingest) -> Result<Vec<u8>> {
    info!("Reading input file: {}", path.display());
    let content = fs::read(path).map_err(|source| HuffmanError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Total file size: {} bytes", content.len());

    let symbols = match ingest {
        Ingest::WholeFile => content,
        Ingest::FirstLine => first_line(&content).to_vec(),
    };
    debug!("Ingested {} symbols ({:?})", symbols.len(), ingest);
    Ok(symbols)
}

fn first_line(content: &[u8]) -> &[u8] {
    let line = match content.iter().position(|&b| b == b'\n') {
        Some(end) => &content[..end],
        None => content,
    };
    line.strip_suffix(b"\r").unwrap_or(line)
}
