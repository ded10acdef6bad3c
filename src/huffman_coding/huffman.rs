use log::{debug, trace};

use crate::tools::freq_count::FreqTable;

/// What a node holds: either two children, or the symbol of a leaf.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

/// One vertex of the Huffman tree. A parent owns its children, so dropping the root
/// releases the whole tree.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    /// Sum of the counts of every leaf below (or at) this node.
    pub count: u64,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new leaf
    pub fn leaf(symbol: u8, count: u64) -> Node {
        Node {
            count,
            node_data: NodeData::Leaf(symbol),
        }
    }

    /// Merge two nodes into a new internal node. Left is the lighter (first popped) node.
    pub fn merge(left: Node, right: Node) -> Node {
        Node {
            count: left.count + right.count,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// The symbol of a leaf, None for an internal node.
    pub fn symbol(&self) -> Option<u8> {
        match self.node_data {
            NodeData::Leaf(sym) => Some(sym),
            NodeData::Kids(..) => None,
        }
    }

    pub fn left(&self) -> Option<&Node> {
        match &self.node_data {
            NodeData::Kids(left, _) => Some(left),
            NodeData::Leaf(_) => None,
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match &self.node_data {
            NodeData::Kids(_, right) => Some(right),
            NodeData::Leaf(_) => None,
        }
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => left.leaf_count() + right.leaf_count(),
            NodeData::Leaf(_) => 1,
        }
    }

    /// Length of the longest path from this node down to a leaf. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => 1 + left.depth().max(right.depth()),
            NodeData::Leaf(_) => 0,
        }
    }

    /// Walk the tree depth first, left before right, calling f with the symbol, count and
    /// code path ('0' for left, '1' for right) of every leaf.
    pub fn for_each_leaf<F: FnMut(u8, u64, &str)>(&self, mut f: F) {
        let mut path = String::new();
        self.walk_leaves(&mut path, &mut f);
    }

    fn walk_leaves<F: FnMut(u8, u64, &str)>(&self, path: &mut String, f: &mut F) {
        match &self.node_data {
            NodeData::Kids(left, right) => {
                path.push('0');
                left.walk_leaves(path, f);
                path.pop();
                path.push('1');
                right.walk_leaves(path, f);
                path.pop();
            }
            NodeData::Leaf(sym) => f(*sym, self.count, path),
        }
    }
}

/// Remove and return the node with the lowest count. On a tie the node nearest the front
/// of the list (the one inserted first) wins. Remaining nodes keep their order.
pub fn pop_min(nodes: &mut Vec<Node>) -> Option<Node> {
    if nodes.is_empty() {
        return None;
    }
    let mut argmin = 0;
    for (idx, node) in nodes.iter().enumerate() {
        // Strictly less, so the earliest of equal counts is kept
        if node.count < nodes[argmin].count {
            argmin = idx;
        }
    }
    Some(nodes.remove(argmin))
}

/// Build the Huffman tree from a frequency table. Returns None when no symbol occurred.
///
/// Leaves are created in ascending symbol order, and every merged node is appended to the
/// end of the working list, so list order is insertion order for the tie-break in pop_min.
pub fn build_tree(freqs: &FreqTable) -> Option<Node> {
    let mut nodes: Vec<Node> = freqs.iter().map(|(sym, c)| Node::leaf(sym, c)).collect();
    debug!("Building tree from {} leaves", nodes.len());

    loop {
        let left = pop_min(&mut nodes)?;
        let right = match pop_min(&mut nodes) {
            Some(right) => right,
            // Only one node left: it is the root
            None => return Some(left),
        };
        trace!("Merging counts {} + {}", left.count, right.count);
        nodes.push(Node::merge(left, right));
    }
}
