//! Single-caller deduplication using per-node generation stamps.

use super::arena::NodeId;
use super::traverse::ScanDedup;
use super::PatternId;

/// Generation stamps, one per node of the automaton.
///
/// A node's pattern has been reported in the current scan iff its stamp
/// equals the current generation. Bumping the generation invalidates every
/// stamp at once, so nothing is cleared between scans. Writing the stamps
/// requires exclusive access, which is what limits this path to one caller.
#[derive(Clone, Debug)]
pub struct NodeStamps {
    stamps: Vec<u64>,
}

impl NodeStamps {
    pub fn new(nodes: usize) -> Self {
        Self {
            stamps: vec![0; nodes],
        }
    }

    /// Borrow the stamps for one scan identified by `generation`.
    ///
    /// `generation` must differ from every earlier one and from zero.
    pub fn scan(&mut self, generation: u64) -> StampScan<'_> {
        StampScan {
            stamps: &mut self.stamps,
            generation,
        }
    }
}

pub struct StampScan<'a> {
    stamps: &'a mut [u64],
    generation: u64,
}

impl ScanDedup for StampScan<'_> {
    #[inline]
    fn first_seen(&mut self, node: NodeId, _pattern: PatternId) -> bool {
        let stamp = &mut self.stamps[node.index()];
        if *stamp == self.generation {
            return false;
        }
        *stamp = self.generation;
        true
    }
}
