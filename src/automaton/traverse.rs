//! Automaton traversal shared by both matching paths.

use super::arena::{NodeArena, NodeId};
use super::PatternId;

/// Decides whether a pattern reached during a scan is reported.
///
/// Implementations remember what they have already seen during the current
/// scan; `first_seen` returns true exactly once per pattern per scan.
pub trait ScanDedup {
    fn first_seen(&mut self, node: NodeId, pattern: PatternId) -> bool;
}

/// Walk `input` through the automaton and collect pattern ids as they end.
///
/// At each position the node reached is reported first, then the patterns on
/// its output-link chain. Walking the chain stops at the first pattern that
/// was already reported in this scan, since everything past it was reported
/// along with it.
pub fn traverse<D: ScanDedup>(arena: &NodeArena, input: &[u8], dedup: &mut D) -> Vec<PatternId> {
    let mut hits = Vec::new();
    let mut state = NodeId::ROOT;

    for &byte in input {
        state = arena[state].next(byte);
        if state.is_root() {
            continue;
        }

        let node = &arena[state];
        if let Some(pattern) = node.output {
            if dedup.first_seen(state, pattern) {
                hits.push(pattern);
            }
        }

        let mut link = node.suffix;
        while !link.is_root() {
            match arena[link].output {
                Some(pattern) if dedup.first_seen(link, pattern) => hits.push(pattern),
                _ => break,
            }
            link = arena[link].suffix;
        }
    }

    hits
}

/// True as soon as any pattern ends at the current position.
#[inline]
pub fn any_match(arena: &NodeArena, input: &[u8]) -> bool {
    let mut state = NodeId::ROOT;
    for &byte in input {
        state = arena[state].next(byte);
        let node = &arena[state];
        if node.is_output() || !node.suffix.is_root() {
            return true;
        }
    }
    false
}
