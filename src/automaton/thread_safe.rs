//! Thread-safe deduplication using pooled per-call scan tables.
//!
//! The automaton itself is never written during a concurrent scan. Instead
//! each call borrows a table mapping pattern id -> last scan id that
//! reported it, keyed by a unique id from a shared atomic counter. Tables go
//! back to a pool afterwards, so steady-state matching does not allocate
//! dedup state.

use parking_lot::Mutex;

use super::arena::NodeId;
use super::traverse::ScanDedup;
use super::PatternId;

/// Upper bound on idle tables kept in a pool.
pub const MAX_POOLED_TABLES: usize = 64;

/// Pool of scan tables, each sized to the number of patterns.
#[derive(Debug)]
pub struct ScanTablePool {
    tables: Mutex<Vec<Vec<u64>>>,
    width: usize,
}

impl ScanTablePool {
    pub fn new(width: usize) -> Self {
        Self {
            tables: Mutex::new(Vec::new()),
            width,
        }
    }

    /// Take a table for the scan identified by `scan_id`.
    ///
    /// `scan_id` must be unique among all scans using this pool and nonzero.
    pub fn checkout(&self, scan_id: u64) -> PooledScan<'_> {
        let table = self.tables.lock().pop().unwrap_or_else(|| {
            tracing::trace!(width = self.width, "allocating scan table");
            vec![0; self.width]
        });
        PooledScan {
            pool: self,
            table,
            scan_id,
        }
    }

    /// Number of idle tables currently held.
    pub fn idle(&self) -> usize {
        self.tables.lock().len()
    }

    fn checkin(&self, table: Vec<u64>) {
        let mut tables = self.tables.lock();
        if tables.len() < MAX_POOLED_TABLES {
            tables.push(table);
        }
    }
}

impl Clone for ScanTablePool {
    /// Clones start with an empty pool.
    fn clone(&self) -> Self {
        Self::new(self.width)
    }
}

/// A table checked out for one scan; returned to its pool on drop.
pub struct PooledScan<'a> {
    pool: &'a ScanTablePool,
    table: Vec<u64>,
    scan_id: u64,
}

impl ScanDedup for PooledScan<'_> {
    #[inline]
    fn first_seen(&mut self, _node: NodeId, pattern: PatternId) -> bool {
        let seen = &mut self.table[pattern];
        if *seen == self.scan_id {
            return false;
        }
        *seen = self.scan_id;
        true
    }
}

impl Drop for PooledScan<'_> {
    fn drop(&mut self) {
        let table = std::mem::take(&mut self.table);
        self.pool.checkin(table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_returns_to_pool() {
        let pool = ScanTablePool::new(3);
        assert_eq!(pool.idle(), 0);

        {
            let mut scan = pool.checkout(1);
            assert!(scan.first_seen(NodeId::ROOT, 2));
            assert!(!scan.first_seen(NodeId::ROOT, 2));
        }
        assert_eq!(pool.idle(), 1);

        // A reused table with a fresh scan id reports again
        let mut scan = pool.checkout(2);
        assert_eq!(pool.idle(), 0);
        assert!(scan.first_seen(NodeId::ROOT, 2));
    }

    #[test]
    fn test_pool_is_bounded() {
        let pool = ScanTablePool::new(1);
        let scans: Vec<_> = (1..=MAX_POOLED_TABLES as u64 + 5)
            .map(|id| pool.checkout(id))
            .collect();
        drop(scans);
        assert_eq!(pool.idle(), MAX_POOLED_TABLES);
    }

    #[test]
    fn test_clone_starts_empty() {
        let pool = ScanTablePool::new(4);
        drop(pool.checkout(1));
        assert_eq!(pool.idle(), 1);
        assert_eq!(pool.clone().idle(), 0);
    }
}
