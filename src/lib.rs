//! ahocorasick: multi-pattern exact byte string matching
//!
//! A [`Matcher`] is built once from a dictionary of byte strings and then
//! finds every dictionary entry occurring in an input in one linear pass,
//! including overlapping and nested occurrences:
//!
//! ```
//! # use ahocorasick::Matcher;
//! let mut m = Matcher::from_strings(["The", "Th", "he"]).unwrap();
//! assert_eq!(m.find_all(b"The Man Of Steel"), vec![1, 0, 2]);
//! ```
//!
//! Results are indices into the dictionary. Each index is reported at most
//! once per call, at the first position where its pattern ends.
//!
//! For shared concurrent access, wrap in Arc and use
//! [`Matcher::find_all_concurrent`]:
//! ```
//! # use ahocorasick::Matcher;
//! use std::sync::Arc;
//!
//! let m = Arc::new(Matcher::from_strings(["Mozilla", "Safari"]).unwrap());
//! let m2 = Arc::clone(&m);
//! let hits = std::thread::spawn(move || m2.find_all_concurrent(b"Mozilla/5.0 Safari"))
//!     .join()
//!     .unwrap();
//! assert_eq!(hits, vec![0, 1]);
//! ```

pub mod automaton;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use automaton::{any_match, build_automaton, traverse, NodeArena, NodeStamps, ScanTablePool};

pub use automaton::PatternId;

/// Errors that can occur while building a matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The pattern at `index` has no bytes
    EmptyPattern { index: usize },
    /// The automaton would need more nodes than node ids can address
    TooManyStates { limit: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyPattern { index } => write!(f, "pattern {} is empty", index),
            Error::TooManyStates { limit } => {
                write!(f, "automaton exceeds the limit of {} states", limit)
            }
        }
    }
}

impl std::error::Error for Error {}

/// An immutable Aho-Corasick automaton plus the scratch state for matching.
///
/// Two matching paths share one automaton:
/// - [`find_all`](Matcher::find_all) takes `&mut self` and deduplicates with
///   stamps kept per node. Fastest, one caller at a time.
/// - [`find_all_concurrent`](Matcher::find_all_concurrent) takes `&self` and
///   deduplicates with a table borrowed from an internal pool, so any number
///   of threads can scan at once.
///
/// Both return identical results for the same input.
pub struct Matcher {
    arena: NodeArena,
    patterns: usize,
    /// Scan counter shared by both paths; every scan takes a fresh value
    generation: AtomicU64,
    stamps: NodeStamps,
    pool: ScanTablePool,
}

impl Matcher {
    /// Build a matcher from byte string patterns.
    ///
    /// Returns `Error::EmptyPattern` if any pattern is empty. Duplicate
    /// patterns are accepted; only the first index is ever reported.
    pub fn new<I, P>(patterns: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let patterns: Vec<P> = patterns.into_iter().collect();
        let arena = build_automaton(&patterns)?;
        let stamps = NodeStamps::new(arena.len());
        Ok(Self {
            patterns: patterns.len(),
            generation: AtomicU64::new(0),
            stamps,
            pool: ScanTablePool::new(patterns.len()),
            arena,
        })
    }

    /// Build a matcher from string patterns, matching their UTF-8 bytes.
    pub fn from_strings<I, S>(patterns: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<S> = patterns.into_iter().collect();
        Self::new(patterns.iter().map(|s| s.as_ref().as_bytes()))
    }

    /// Find every pattern occurring in `input`, as dictionary indices.
    ///
    /// Patterns are reported in the order they are first found while
    /// scanning left to right. Where several end at the same position, the
    /// longest one actually reached comes first, followed by its suffixes.
    pub fn find_all(&mut self, input: &[u8]) -> Vec<PatternId> {
        let generation = self.generation.get_mut();
        *generation += 1;
        let mut scan = self.stamps.scan(*generation);
        traverse(&self.arena, input, &mut scan)
    }

    /// Same as [`find_all`](Matcher::find_all), callable concurrently.
    pub fn find_all_concurrent(&self, input: &[u8]) -> Vec<PatternId> {
        let scan_id = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let mut scan = self.pool.checkout(scan_id);
        traverse(&self.arena, input, &mut scan)
    }

    /// Returns true if any pattern occurs in `input`.
    ///
    /// Stops at the first match, so this can be faster than `find_all`
    /// when the identities of the matches are not needed.
    pub fn contains(&self, input: &[u8]) -> bool {
        any_match(&self.arena, input)
    }

    /// Number of patterns supplied at construction, duplicates included.
    pub fn pattern_count(&self) -> usize {
        self.patterns
    }

    /// Number of automaton states, root included.
    pub fn state_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if the matcher was built from no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns == 0
    }

    /// The underlying automaton, for inspection.
    pub fn automaton(&self) -> &NodeArena {
        &self.arena
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("patterns", &self.patterns)
            .field("states", &self.arena.len())
            .finish()
    }
}

impl Clone for Matcher {
    /// The clone shares no scan state with the original.
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            patterns: self.patterns,
            generation: AtomicU64::new(self.generation.load(Ordering::Relaxed)),
            stamps: self.stamps.clone(),
            pool: self.pool.clone(),
        }
    }
}
