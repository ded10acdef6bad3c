//! Text rendering of a finished Huffman tree.
//!
//! Two layouts are available. The list layout prints one `symbol: code` line per leaf. The
//! diagram layout draws the tree itself: an internal node puts a branch marker in its column
//! and its left child continues on the same row, while its right child is hung two rows below
//! everything drawn so far, joined to the parent by a vertical line.
//!
//! ```text
//! +-+-c: 00
//! | |
//! | +-b: 01
//! |
//! +-a: 1
//! ```
//!
//! Both layouts visit leaves in the same order (depth first, left before right) and pair
//! each leaf with the same code path.

use std::fmt::{Display, Formatter};

use super::huffman::{Node, NodeData};

/// Which layout to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    List,
    Diagram,
}

/// Glyphs used to draw the diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Style {
    /// Plain ASCII: +- and |
    Ascii,
    /// Box drawing characters
    Unicode,
}

impl Style {
    /// Marker drawn where an internal node sits.
    fn branch(self) -> &'static str {
        match self {
            Style::Ascii => "+-",
            Style::Unicode => "┬─",
        }
    }

    /// Line from a parent down to its right child.
    fn vertical(self) -> &'static str {
        match self {
            Style::Ascii => "|",
            Style::Unicode => "│",
        }
    }

    /// Corner leading into the right child.
    fn corner(self) -> &'static str {
        match self {
            Style::Ascii => "+-",
            Style::Unicode => "└─",
        }
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Style::Ascii => write!(f, "ascii"),
            Style::Unicode => write!(f, "unicode"),
        }
    }
}

/// Printable form of a symbol that always fits on one line.
pub fn display_symbol(sym: u8) -> String {
    match sym {
        b'\n' => "\\n".to_string(),
        b'\t' => "\\t".to_string(),
        b'\r' => "\\r".to_string(),
        b'\\' => "\\\\".to_string(),
        0x20..=0x7e => (sym as char).to_string(),
        _ => format!("\\x{:02x}", sym),
    }
}

/// Render the tree in the requested layout.
pub fn render(root: &Node, layout: Layout, style: Style) -> String {
    match layout {
        Layout::List => render_list(root),
        Layout::Diagram => render_diagram(root, style),
    }
}

/// One `symbol: code` line per leaf. A root that is itself a leaf gets an empty code.
pub fn render_list(root: &Node) -> String {
    let mut out = String::new();
    root.for_each_leaf(|sym, _, path| {
        out.push_str(&display_symbol(sym));
        out.push_str(": ");
        out.push_str(path);
        out.push('\n');
    });
    out
}

/// Draw the tree as a diagram.
pub fn render_diagram(root: &Node, style: Style) -> String {
    let mut canvas = Canvas::default();
    let mut path = String::new();
    draw(root, 0, 0, &mut path, style, &mut canvas);
    canvas.finish()
}

/// Rows of characters, grown on demand.
#[derive(Default)]
struct Canvas {
    rows: Vec<Vec<char>>,
}

impl Canvas {
    /// Write text starting at (row, col), padding with spaces as needed.
    fn put(&mut self, row: usize, col: usize, text: &str) {
        if self.rows.len() <= row {
            self.rows.resize(row + 1, Vec::new());
        }
        let line = &mut self.rows[row];
        if line.len() < col {
            line.resize(col, ' ');
        }
        for (i, ch) in text.chars().enumerate() {
            match line.get_mut(col + i) {
                Some(slot) => *slot = ch,
                None => line.push(ch),
            }
        }
    }

    fn last_row(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    fn finish(self) -> String {
        let mut out = String::new();
        for row in self.rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

fn draw(
    node: &Node,
    row: usize,
    col: usize,
    path: &mut String,
    style: Style,
    canvas: &mut Canvas,
) {
    match &node.node_data {
        NodeData::Leaf(sym) => {
            canvas.put(row, col, &format!("{}: {}", display_symbol(*sym), path));
        }
        NodeData::Kids(left, right) => {
            canvas.put(row, col, style.branch());

            path.push('0');
            draw(left, row, col + 2, path, style, canvas);
            path.pop();

            // Leave one row between the lowest thing drawn so far and the right child
            let right_row = canvas.last_row() + 2;
            for r in row + 1..right_row {
                canvas.put(r, col, style.vertical());
            }
            canvas.put(right_row, col, style.corner());

            path.push('1');
            draw(right, right_row, col + 2, path, style, canvas);
            path.pop();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::huffman::build_tree;
    use crate::tools::freq_count::freqs;

    fn tree(data: &[u8]) -> Node {
        build_tree(&freqs(data)).unwrap()
    }

    #[test]
    fn display_symbol_test() {
        assert_eq!(display_symbol(b'a'), "a");
        assert_eq!(display_symbol(b' '), " ");
        assert_eq!(display_symbol(b'\n'), "\\n");
        assert_eq!(display_symbol(b'\t'), "\\t");
        assert_eq!(display_symbol(b'\\'), "\\\\");
        assert_eq!(display_symbol(0), "\\x00");
        assert_eq!(display_symbol(0xe9), "\\xe9");
    }

    #[test]
    fn list_test() {
        assert_eq!(render_list(&tree(b"aaab")), "b: 0\na: 1\n");
    }

    #[test]
    fn list_single_leaf_test() {
        assert_eq!(render_list(&tree(b"aaaa")), "a: \n");
    }

    #[test]
    fn list_newline_test() {
        let out = render_list(&tree(b"a\na\na"));
        assert_eq!(out, "\\n: 0\na: 1\n");
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn list_siblings_do_not_share_paths_test() {
        assert_eq!(
            render_list(&tree(b"abracadabra")),
            "a: 0\nc: 100\nd: 101\nb: 110\nr: 111\n"
        );
    }

    #[test]
    fn diagram_test() {
        let expected = "\
+-b: 0
|
+-a: 1
";
        assert_eq!(render_diagram(&tree(b"aaab"), Style::Ascii), expected);
    }

    #[test]
    fn diagram_nested_test() {
        // c:1 b:2 a:4 -> ((c, b), a)
        let expected = "\
+-+-c: 00
| |
| +-b: 01
|
+-a: 1
";
        assert_eq!(render_diagram(&tree(b"aaaabbc"), Style::Ascii), expected);
    }

    #[test]
    fn diagram_right_heavy_test() {
        let expected = "\
+-a: 0
|
+-+-c: 10
  |
  +-b: 11
";
        // Built by hand so the right child is itself a subtree
        let root = Node::merge(
            Node::leaf(b'a', 2),
            Node::merge(Node::leaf(b'c', 1), Node::leaf(b'b', 1)),
        );
        assert_eq!(render_diagram(&root, Style::Ascii), expected);
    }

    #[test]
    fn diagram_unicode_test() {
        let expected = "\
┬─┬─c: 00
│ │
│ └─b: 01
│
└─a: 1
";
        assert_eq!(render_diagram(&tree(b"aaaabbc"), Style::Unicode), expected);
    }

    #[test]
    fn diagram_single_leaf_test() {
        assert_eq!(render_diagram(&tree(b"aaaa"), Style::Ascii), "a: \n");
    }

    #[test]
    fn layouts_agree_test() {
        // Every list line shows up, in order, somewhere in the diagram
        let data = b"a baba da babble da dabble babble doo bee babble dabble dooble dee boo\n";
        let root = tree(data);
        let diagram = render(&root, Layout::Diagram, Style::Ascii);
        let mut rest = diagram.as_str();
        for line in render(&root, Layout::List, Style::Ascii).lines() {
            let at = rest.find(line).unwrap();
            rest = &rest[at + line.len()..];
        }
    }
}
