//! Huffman tree builder and inspector.
//!
//! Version 0.1.0
//!
//! Counts how often each byte value occurs in a file, builds a Huffman tree from those counts
//! and prints the tree so the derived codes can be inspected. No data is actually encoded.
//!
//! Basic usage is as follows:
//!
//! `$> hufftree test.txt`
//!
//! This prints a diagram of the tree built from test.txt. Use `--list` to get one
//! `symbol: code` line per byte value instead.
//!
pub mod huffman_coding;
pub mod tools;
