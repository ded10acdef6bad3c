//! The tools module provides the helper functions around the Huffman tree builder.
//!
//! The tools are:
//! - cli: Command line interface for hufftree.
//! - freq_count: Frequency count of the byte values in the input.
//!
pub mod cli;
pub mod freq_count;
