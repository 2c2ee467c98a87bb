//! Automaton construction.
//!
//! Building happens in three passes over a node arena:
//! 1. Insert every pattern into a plain trie, marking terminal nodes.
//! 2. Walk the trie breadth-first to set failure and output links.
//! 3. Close the automaton by filling in every node's goto table, so that
//!    matching never has to chase failure links.

use std::collections::VecDeque;

use super::arena::{NodeArena, NodeId, ALPHABET_SIZE};
use crate::Error;

/// Build the automaton for `patterns`, in dictionary order.
///
/// Empty patterns are rejected. Duplicate patterns collapse onto one node
/// which keeps the index of the first occurrence.
pub fn build_automaton<P: AsRef<[u8]>>(patterns: &[P]) -> Result<NodeArena, Error> {
    // Every byte may need its own node in the worst case, plus the root.
    let capacity = 1 + patterns.iter().map(|p| p.as_ref().len()).sum::<usize>();
    let mut arena = NodeArena::with_capacity(capacity);
    // Path bytes per node, needed only while links are computed
    let mut paths: Vec<Vec<u8>> = Vec::with_capacity(capacity);
    paths.push(Vec::new());

    insert_patterns(&mut arena, &mut paths, patterns)?;
    compute_links(&mut arena, &paths);
    compute_transitions(&mut arena);

    tracing::debug!(
        patterns = patterns.len(),
        nodes = arena.len(),
        "built aho-corasick automaton"
    );

    Ok(arena)
}

fn insert_patterns<P: AsRef<[u8]>>(
    arena: &mut NodeArena,
    paths: &mut Vec<Vec<u8>>,
    patterns: &[P],
) -> Result<(), Error> {
    for (index, pattern) in patterns.iter().enumerate() {
        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            return Err(Error::EmptyPattern { index });
        }

        let mut node = NodeId::ROOT;
        for (depth, &byte) in pattern.iter().enumerate() {
            let before = arena.len();
            node = arena
                .get_or_create_child(node, byte)
                .ok_or(Error::TooManyStates { limit: u32::MAX as usize })?;
            if arena.len() > before {
                // New node: fail and suffix both default to the root, which is
                // already final for nodes directly under it.
                paths.push(pattern[..=depth].to_vec());
            }
        }

        let existing = arena[node].output;
        match existing {
            Some(kept) => {
                tracing::warn!(pattern = index, kept, "duplicate pattern ignored");
            }
            None => arena[node].output = Some(index),
        }
    }
    Ok(())
}

/// Set `fail` and `suffix` for every non-root node, breadth-first.
fn compute_links(arena: &mut NodeArena, paths: &[Vec<u8>]) {
    let mut queue = VecDeque::with_capacity(arena.len());
    queue.push_back(NodeId::ROOT);

    while let Some(node) = queue.pop_front() {
        let children: Vec<NodeId> = arena[node].children.iter().map(|&(_, c)| c).collect();
        for child in children {
            queue.push_back(child);

            let path = &paths[child.index()];
            let mut fail = None;
            let mut suffix = None;
            for start in 1..path.len() {
                let Some(found) = arena.find(&path[start..]) else {
                    continue;
                };
                if fail.is_none() {
                    fail = Some(found);
                }
                if arena[found].is_output() {
                    suffix = Some(found);
                    break;
                }
            }

            arena[child].fail = fail.unwrap_or(NodeId::ROOT);
            arena[child].suffix = suffix.unwrap_or(NodeId::ROOT);
        }
    }
}

/// Fill in the full goto table for every node.
fn compute_transitions(arena: &mut NodeArena) {
    let ids: Vec<NodeId> = arena.ids().collect();
    for id in ids {
        let mut table = Box::new([NodeId::ROOT; ALPHABET_SIZE]);
        for (byte, slot) in (0..=u8::MAX).zip(table.iter_mut()) {
            let mut cursor = id;
            *slot = loop {
                if let Some(child) = arena[cursor].child(byte) {
                    break child;
                }
                if cursor.is_root() {
                    break NodeId::ROOT;
                }
                cursor = arena[cursor].fail;
            };
        }
        arena[id].transitions = table;
    }
}
