//! The huffman_coding module builds a Huffman tree from byte frequencies and renders it.
//!
//! The tree is built the classic way: every symbol that occurs becomes a leaf, then the two
//! lightest nodes are repeatedly merged under a new parent until one node is left. The working
//! list is scanned linearly for each pick. With at most 256 leaves that is cheap, and it keeps
//! the tie-break simple: among equal counts the node inserted first wins, so the same input
//! always gives the same tree shape.
//!
//! The lighter of each merged pair goes on the left ('0'), the other on the right ('1').
//!
pub mod code_table;
pub mod huffman;
pub mod render;
