use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::{debug, error, info};

use huffman_bits::HuffmanError;
use huffman_bits::huffman::{analyze, display_symbol, entropy_from_freq, render_tree};
use huffman_bits::options::Options;
use huffman_bits::source::read_symbols;

fn prompt_for_filename() -> huffman_bits::Result<PathBuf> {
    print!("Enter filename (.txt): ");
    let unavailable = |source| HuffmanError::SourceUnavailable {
        path: PathBuf::from("<stdin>"),
        source,
    };
    io::stdout().flush().map_err(unavailable)?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).map_err(unavailable)?;
    println!();

    line.split_whitespace()
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| HuffmanError::Usage("no filename given".to_string()))
}

fn run(options: Options) -> huffman_bits::Result<()> {
    let input = match options.input {
        Some(path) => path,
        None => prompt_for_filename()?,
    };

    let symbols = read_symbols(&input, options.ingest)?;
    let analysis = analyze(&symbols)?;
    debug!(
        "Tree has {} leaves, depth {}",
        analysis.tree.leaf_count(),
        analysis.tree.depth()
    );

    println!("Total bits : {}", analysis.total_bits);
    println!(
        "Entropy    : {:.4} bits/symbol",
        entropy_from_freq(&analysis.frequencies)
    );

    if options.show_codes {
        let mut codes: Vec<_> = analysis.codes.iter().collect();
        codes.sort_by_key(|(byte, _)| **byte);
        println!();
        for (&byte, code) in codes {
            let freq = analysis.frequencies.get(&byte).copied().unwrap_or(0);
            println!("'{}' x{} => {}", display_symbol(byte), freq, code);
        }
    }

    if options.show_tree {
        println!();
        print!("{}", render_tree(&analysis.tree));
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let options = match Options::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            error!("{}", e);
            eprintln!("Usage: huffbits [input_file] [--whole-file] [--codes] [--tree]");
            std::process::exit(1);
        }
    };

    info!("--- Start ---");
    if let Err(e) = run(options) {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("--- End ---");
}
