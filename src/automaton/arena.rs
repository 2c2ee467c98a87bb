//! Arena-based node storage for the Aho-Corasick automaton.
//!
//! Failure and output links point back toward the root, so the automaton is a
//! cyclic graph. Keeping every node in one `Vec` and linking by `NodeId`
//! (a plain `u32` index) lets nodes reference each other freely without
//! ownership issues, and the whole automaton is a single contiguous block.

use smallvec::SmallVec;

use super::PatternId;

/// Size of the byte alphabet.
pub const ALPHABET_SIZE: usize = 256;

/// A node identifier - just an index into the arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct NodeId(u32);

impl NodeId {
    /// The root always lives in the first slot.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A vertex of the trie, augmented with the automaton links.
#[derive(Clone, Debug)]
pub struct Node {
    /// Trie edges as (byte, child) pairs, kept sorted by byte
    pub children: SmallVec<[(u8, NodeId); 4]>,
    /// Pattern whose bytes spell the path to this node, if any
    pub output: Option<PatternId>,
    /// Longest proper suffix of this node's path that is also a trie path
    pub fail: NodeId,
    /// Nearest strict suffix of this node's path that is a pattern, or root
    pub suffix: NodeId,
    /// Length of the path from the root
    pub depth: usize,
    /// Full goto table, one entry per byte value
    pub transitions: Box<[NodeId; ALPHABET_SIZE]>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            children: SmallVec::new(),
            output: None,
            fail: NodeId::ROOT,
            suffix: NodeId::ROOT,
            depth: 0,
            transitions: Box::new([NodeId::ROOT; ALPHABET_SIZE]),
        }
    }
}

impl Node {
    /// Look up the trie child for `byte`.
    #[inline]
    pub fn child(&self, byte: u8) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|pos| self.children[pos].1)
    }

    /// Next automaton state on `byte`. Never fails once the table is built.
    #[inline]
    pub fn next(&self, byte: u8) -> NodeId {
        self.transitions[byte as usize]
    }

    #[inline]
    pub fn is_output(&self) -> bool {
        self.output.is_some()
    }
}

/// Arena owning every node of one automaton.
///
/// Nodes are handed out in order and never individually freed.
#[derive(Clone, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl std::fmt::Debug for NodeArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeArena")
            .field("nodes_count", &self.nodes.len())
            .finish()
    }
}

impl NodeArena {
    /// Create an arena holding only the root, with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::default());
        Self { nodes }
    }

    /// Allocate a new node at `depth`, returning its ID.
    ///
    /// Returns `None` once the `u32` id space is exhausted.
    pub fn alloc(&mut self, depth: usize) -> Option<NodeId> {
        let id = u32::try_from(self.nodes.len()).ok().filter(|&id| id != u32::MAX)?;
        self.nodes.push(Node {
            depth,
            ..Node::default()
        });
        Some(NodeId(id))
    }

    /// Return the child of `parent` on `byte`, creating it if needed.
    pub fn get_or_create_child(&mut self, parent: NodeId, byte: u8) -> Option<NodeId> {
        let children = &self.nodes[parent.index()].children;
        match children.binary_search_by_key(&byte, |&(b, _)| b) {
            Ok(pos) => Some(children[pos].1),
            Err(pos) => {
                let depth = self.nodes[parent.index()].depth + 1;
                let child = self.alloc(depth)?;
                self.nodes[parent.index()]
                    .children
                    .insert(pos, (byte, child));
                Some(child)
            }
        }
    }

    /// Follow trie edges from the root along `path`.
    pub fn find(&self, path: &[u8]) -> Option<NodeId> {
        path.iter()
            .try_fold(NodeId::ROOT, |node, &byte| self[node].child(byte))
    }

    /// Number of nodes in the arena, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// An arena is never empty: the root is allocated up front.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

impl std::ops::IndexMut<NodeId> for NodeArena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.index()]
    }
}
