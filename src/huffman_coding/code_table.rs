use rustc_hash::FxHashMap;

use super::huffman::Node;

/// Map every symbol in the tree to its code path ('0' = left, '1' = right).
pub fn code_table(root: &Node) -> FxHashMap<u8, String> {
    let mut table = FxHashMap::default();
    root.for_each_leaf(|sym, _, path| {
        table.insert(sym, path.to_string());
    });
    table
}

/// Summary numbers for a built tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeStats {
    /// Sum of all leaf counts, i.e. input length in bytes.
    pub total: u64,
    /// Distinct symbols (leaves).
    pub symbols: usize,
    /// Longest code length.
    pub depth: usize,
    /// Sum of count * code length over all leaves: the size of the coded data in bits.
    pub weighted_bits: u64,
}

impl TreeStats {
    pub fn from_tree(root: &Node) -> Self {
        let mut weighted_bits: u64 = 0;
        let mut symbols: usize = 0;
        root.for_each_leaf(|_, count, path| {
            weighted_bits += count * path.len() as u64;
            symbols += 1;
        });
        Self {
            total: root.count,
            symbols,
            depth: root.depth(),
            weighted_bits,
        }
    }

    /// Average code length per input byte.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.weighted_bits as f64 / self.total as f64
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::huffman::build_tree;
    use crate::tools::freq_count::freqs;

    #[test]
    fn code_table_test() {
        let root = build_tree(&freqs(b"abracadabra")).unwrap();
        let table = code_table(&root);
        assert_eq!(table.len(), 5);
        assert_eq!(table[&b'a'], "0");
        assert_eq!(table[&b'r'], "111");
        assert!(!table.contains_key(&b'z'));
    }

    #[test]
    fn stats_test() {
        // a:5*1 + c:1*3 + d:1*3 + b:2*3 + r:2*3 = 23 bits
        let root = build_tree(&freqs(b"abracadabra")).unwrap();
        let stats = TreeStats::from_tree(&root);
        assert_eq!(
            stats,
            TreeStats {
                total: 11,
                symbols: 5,
                depth: 3,
                weighted_bits: 23,
            }
        );
        assert!((stats.bits_per_symbol() - 23.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn stats_single_leaf_test() {
        let root = build_tree(&freqs(b"zzzz")).unwrap();
        let stats = TreeStats::from_tree(&root);
        assert_eq!(stats.symbols, 1);
        assert_eq!(stats.depth, 0);
        assert_eq!(stats.weighted_bits, 0);
        assert_eq!(stats.bits_per_symbol(), 0.0);
        assert_eq!(code_table(&root)[&b'z'], "");
    }
}
