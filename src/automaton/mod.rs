//! Aho-Corasick automaton over a 256-value byte alphabet.
//!
//! The key components are:
//!
//! - `NodeArena`: index-addressed storage for the trie nodes and their links
//! - `build_automaton`: trie construction, failure/output links, goto tables
//! - `traverse`: the single-pass scan shared by both matching paths
//!
//! # Module Organization
//!
//! - `arena`: Core data structures (Node, NodeId, NodeArena)
//! - `builder`: Construction of a closed automaton from a dictionary
//! - `traverse`: Scan loop and the `ScanDedup` seam
//! - `mutable_matcher`: Per-node generation stamps (single caller)
//! - `thread_safe`: Pooled per-call scan tables (concurrent callers)

mod arena;
mod builder;
mod mutable_matcher;
mod thread_safe;
mod traverse;

/// Position of a pattern in the dictionary supplied at construction.
pub type PatternId = usize;

pub use arena::{Node, NodeArena, NodeId, ALPHABET_SIZE};

pub use builder::build_automaton;

pub use traverse::{any_match, traverse, ScanDedup};

pub use mutable_matcher::{NodeStamps, StampScan};

pub use thread_safe::{PooledScan, ScanTablePool, MAX_POOLED_TABLES};

#[cfg(test)]
mod tests;
