use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::{debug, error, trace};

use crate::error::{HuffmanError, Result};

pub type Symbol = u8;
pub type FreqTable = HashMap<Symbol, u64>;
pub type CodeTable = HashMap<Symbol, String>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node {
    Leaf {
        byte: Symbol,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Node::Leaf { byte, .. } => Some(*byte),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Left child frequency minus right child frequency. Always 0 for a leaf.
    pub fn balance(&self) -> i64 {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => left.freq() as i64 - right.freq() as i64,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path; a lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Leaves as `(symbol, freq)` pairs, left to right.
    pub fn leaves(&self) -> Vec<(Symbol, u64)> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<(Symbol, u64)>) {
        match self {
            Node::Leaf { byte, freq } => out.push((*byte, *freq)),
            Node::Internal { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }
}

pub type HuffmanTree = Node;

/// Frontier entry. `seq` is the creation order of the node and makes the
/// ordering total: leaves are numbered by ascending symbol, internal nodes
/// after them in merge order.
#[derive(Debug)]
pub struct HeapNode {
    seq: usize,
    node: Box<Node>,
}

impl HeapNode {
    pub fn new(seq: usize, node: Box<Node>) -> Self {
        Self { seq, node }
    }
}

impl Ord for HeapNode {
    // BinaryHeap pops the greatest entry, so "greater" means "extracted first":
    // lower frequency, then larger balance factor, then lower sequence number.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .freq()
            .cmp(&self.node.freq())
            .then_with(|| self.node.balance().cmp(&other.node.balance()))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapNode {}

pub fn count_frequencies(data: &[Symbol]) -> FreqTable {
    let mut freq = FreqTable::new();
    for &byte in data {
        *freq.entry(byte).or_insert(0) += 1;
    }
    debug!(
        "Counted {} unique symbols over {} input symbols",
        freq.len(),
        data.len()
    );
    freq
}

pub fn build_huffman_tree(frequencies: &FreqTable) -> Result<Box<HuffmanTree>> {
    debug!(
        "Building Huffman tree from {} unique symbols",
        frequencies.len()
    );

    let mut freq_vec: Vec<_> = frequencies.iter().collect();
    freq_vec.sort_by_key(|(byte, _)| **byte);

    let mut heap = BinaryHeap::with_capacity(freq_vec.len());
    for (seq, (&byte, &freq)) in freq_vec.into_iter().enumerate() {
        heap.push(HeapNode::new(seq, Box::new(Node::Leaf { byte, freq })));
    }
    debug!("Initial frontier size: {}", heap.len());

    let mut next_seq = heap.len();
    while heap.len() > 1 {
        let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
            break;
        };

        let freq = left.node.freq() + right.node.freq();
        trace!(
            "Merging #{} (freq {}) with #{} (freq {}) into #{} (freq {})",
            left.seq,
            left.node.freq(),
            right.seq,
            right.node.freq(),
            next_seq,
            freq
        );

        let merged = Node::Internal {
            freq,
            left: left.node,
            right: right.node,
        };
        heap.push(HeapNode::new(next_seq, Box::new(merged)));
        next_seq += 1;
    }

    let root = heap.pop().map(|n| n.node).ok_or(HuffmanError::EmptyInput)?;
    debug!(
        "Tree construction complete: root freq {}, depth {}",
        root.freq(),
        root.depth()
    );
    Ok(root)
}

pub fn build_code_table(node: &Node, prefix: String, table: &mut CodeTable) {
    match node {
        Node::Leaf { byte, .. } => {
            trace!(
                "Assigning code to byte {:#04x} ('{}') : '{}'",
                byte,
                display_symbol(*byte),
                prefix
            );
            table.insert(*byte, prefix);
        }
        Node::Internal { left, right, .. } => {
            build_code_table(left, format!("{}0", prefix), table);
            build_code_table(right, format!("{}1", prefix), table);
        }
    }
}

/// Codes for every leaf under `root`. A lone leaf gets the empty code.
pub fn assign_codes(root: Option<&Node>) -> CodeTable {
    let mut table = CodeTable::new();
    if let Some(root) = root {
        build_code_table(root, String::new(), &mut table);
    }
    table
}

pub fn build_codes(frequencies: &FreqTable) -> Result<(Box<HuffmanTree>, CodeTable)> {
    let tree = build_huffman_tree(frequencies)?;
    let codes = assign_codes(Some(&tree));
    Ok((tree, codes))
}

/// Total encoded size in bits: the sum of `freq * code length` over the code table.
pub fn estimate_cost(codes: &CodeTable, frequencies: &FreqTable) -> Result<u64> {
    let mut total_bits = 0u64;
    for (&byte, code) in codes {
        let Some(&freq) = frequencies.get(&byte) else {
            error!(
                "Symbol {:#04x} has code '{}' but no frequency entry",
                byte, code
            );
            return Err(HuffmanError::LookupInconsistency(byte));
        };
        total_bits += freq * code.len() as u64;
    }
    debug!("Estimated cost: {} bits", total_bits);
    Ok(total_bits)
}

pub fn entropy_from_freq(freq: &FreqTable) -> f64 {
    let total: u64 = freq.values().sum();
    if total == 0 {
        return 0.0;
    }
    let total_f = total as f64;

    let entropy: f64 = freq
        .values()
        .map(|&count| {
            let p = count as f64 / total_f;
            -p * p.log2()
        })
        .sum();

    debug!(
        "Calculated entropy: {:.4} bits/symbol (Total samples: {})",
        entropy, total
    );
    entropy
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub frequencies: FreqTable,
    pub tree: Box<HuffmanTree>,
    pub codes: CodeTable,
    pub total_bits: u64,
}

/// Runs the whole pipeline over one symbol sequence.
pub fn analyze(data: &[Symbol]) -> Result<Analysis> {
    let frequencies = count_frequencies(data);
    let (tree, codes) = build_codes(&frequencies)?;
    let total_bits = estimate_cost(&codes, &frequencies)?;
    Ok(Analysis {
        frequencies,
        tree,
        codes,
        total_bits,
    })
}

/// Printable form of a symbol, escaping control and non-ASCII bytes.
pub fn display_symbol(byte: Symbol) -> String {
    byte.escape_ascii().to_string()
}

/// Sideways diagram of the tree: right subtree above, left subtree below,
/// four spaces of indent per level.
pub fn render_tree(root: &Node) -> String {
    let mut out = String::new();
    render_node(root, 0, &mut out);
    out
}

fn render_node(node: &Node, depth: usize, out: &mut String) {
    match node {
        Node::Leaf { byte, freq } => {
            out.push_str(&"    ".repeat(depth));
            out.push_str(&format!("Leaf: {} ({})\n", display_symbol(*byte), freq));
        }
        Node::Internal { freq, left, right } => {
            render_node(right, depth + 1, out);
            out.push_str(&"    ".repeat(depth));
            out.push_str(&format!("Internal: {}\n", freq));
            render_node(left, depth + 1, out);
        }
    }
}
