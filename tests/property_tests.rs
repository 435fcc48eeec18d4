use huffman_bits::huffman::{Node, analyze, assign_codes, build_huffman_tree, count_frequencies};
use proptest::prelude::*;

fn leaf_depths(node: &Node, depth: usize, out: &mut Vec<(u8, u64, usize)>) {
    match node {
        Node::Leaf { byte, freq } => out.push((*byte, *freq, depth)),
        Node::Internal { left, right, .. } => {
            leaf_depths(left, depth + 1, out);
            leaf_depths(right, depth + 1, out);
        }
    }
}

proptest! {
    #[test]
    fn test_tree_preserves_symbols_and_weights(
        input in prop::collection::vec(any::<u8>(), 1..300),
    ) {
        let freq = count_frequencies(&input);
        let tree = build_huffman_tree(&freq).unwrap();

        prop_assert_eq!(tree.leaf_count(), freq.len());
        let leaf_sum: u64 = tree.leaves().iter().map(|(_, f)| f).sum();
        let table_sum: u64 = freq.values().sum();
        prop_assert_eq!(leaf_sum, table_sum);
        prop_assert_eq!(tree.freq(), table_sum);
        prop_assert_eq!(table_sum, input.len() as u64);
    }

    #[test]
    fn test_codes_are_prefix_free(
        input in prop::collection::vec(0..12u8, 1..200),
    ) {
        let analysis = analyze(&input).unwrap();
        prop_assert_eq!(analysis.codes.len(), analysis.frequencies.len());

        if analysis.frequencies.len() >= 2 {
            for (a, code_a) in &analysis.codes {
                prop_assert!(!code_a.is_empty());
                for (b, code_b) in &analysis.codes {
                    if a != b {
                        prop_assert!(!code_b.starts_with(code_a.as_str()));
                    }
                }
            }
        }
    }

    #[test]
    fn test_pipeline_is_deterministic(
        input in prop::collection::vec(0..6u8, 1..200),
    ) {
        let first = analyze(&input).unwrap();
        let second = analyze(&input).unwrap();
        prop_assert_eq!(first.codes, second.codes);
        prop_assert_eq!(first.total_bits, second.total_bits);
    }

    #[test]
    fn test_cost_matches_weighted_depth(
        input in prop::collection::vec(any::<u8>(), 1..300),
    ) {
        let analysis = analyze(&input).unwrap();

        let mut leaves = Vec::new();
        leaf_depths(&analysis.tree, 0, &mut leaves);
        let weighted: u64 = leaves.iter().map(|&(_, f, d)| f * d as u64).sum();
        prop_assert_eq!(analysis.total_bits, weighted);

        for (byte, _, depth) in leaves {
            prop_assert_eq!(analysis.codes[&byte].len(), depth);
        }
        prop_assert_eq!(assign_codes(Some(&analysis.tree)), analysis.codes);
    }

    #[test]
    fn test_single_symbol_costs_nothing(
        byte in any::<u8>(),
        len in 1..100usize,
    ) {
        let input = vec![byte; len];
        let analysis = analyze(&input).unwrap();
        prop_assert_eq!(analysis.codes[&byte].as_str(), "");
        prop_assert_eq!(analysis.total_bits, 0);
    }
}
