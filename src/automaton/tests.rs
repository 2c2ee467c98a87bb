use super::*;

/// Reports everything, so the raw walk order is visible.
struct ReportAll;

impl ScanDedup for ReportAll {
    fn first_seen(&mut self, _node: NodeId, _pattern: PatternId) -> bool {
        true
    }
}

fn build(patterns: &[&str]) -> NodeArena {
    build_automaton(patterns).unwrap()
}

#[test]
fn test_traverse_reports_every_end_without_dedup() {
    let arena = build(&["an"]);
    let hits = traverse(&arena, b"banana", &mut ReportAll);
    assert_eq!(hits, vec![0, 0]);
}

#[test]
fn test_traverse_with_stamps_reports_once() {
    let arena = build(&["an"]);
    let mut stamps = NodeStamps::new(arena.len());
    let hits = traverse(&arena, b"banana", &mut stamps.scan(1));
    assert_eq!(hits, vec![0]);

    // A new generation starts from scratch
    let hits = traverse(&arena, b"banana", &mut stamps.scan(2));
    assert_eq!(hits, vec![0]);
}

#[test]
fn test_traverse_follows_output_chain() {
    let arena = build(&["she", "he", "e"]);
    let hits = traverse(&arena, b"ushe", &mut ReportAll);
    assert_eq!(hits, vec![0, 1, 2]);
}

#[test]
fn test_traverse_chain_from_non_output_node() {
    // "xab" is never completed, but "ab" still ends inside it
    let arena = build(&["xabc", "ab"]);
    let hits = traverse(&arena, b"xab", &mut ReportAll);
    assert_eq!(hits, vec![1]);
}

#[test]
fn test_chain_walk_stops_at_reported_pattern() {
    // Second "she" only reports "she"; "he" and "e" were reported with it
    let arena = build(&["she", "he", "e"]);
    let mut stamps = NodeStamps::new(arena.len());
    let hits = traverse(&arena, b"she she", &mut stamps.scan(1));
    assert_eq!(hits, vec![0, 1, 2]);
}

#[test]
fn test_pooled_scan_matches_stamps() {
    let patterns = ["a", "ab", "bc", "bca", "c", "caa"];
    let arena = build(&patterns);
    let pool = ScanTablePool::new(patterns.len());
    let mut stamps = NodeStamps::new(arena.len());

    for (generation, input) in [&b"abccab"[..], &b"bccab"[..], &b"bccb"[..], &b"caab"[..]]
        .into_iter()
        .enumerate()
    {
        let id = generation as u64 + 1;
        let pooled = traverse(&arena, input, &mut pool.checkout(id));
        let stamped = traverse(&arena, input, &mut stamps.scan(id));
        assert_eq!(pooled, stamped);
    }
    assert_eq!(pool.idle(), 1);
}

#[test]
fn test_any_match() {
    let arena = build(&["SupermanX", "per"]);
    assert!(any_match(&arena, b"Superman"));
    assert!(any_match(&arena, b"xxper"));
    assert!(!any_match(&arena, b"Supe"));
    assert!(!any_match(&arena, b""));
}

#[test]
fn test_any_match_empty_dictionary() {
    let arena = build(&[]);
    assert!(!any_match(&arena, b"anything at all"));
    assert!(traverse(&arena, b"anything at all", &mut ReportAll).is_empty());
}

#[test]
fn test_every_byte_value_has_a_transition() {
    let arena = build(&["\u{7f}", "ab"]);
    for id in arena.ids() {
        for byte in 0..=u8::MAX {
            let next = arena[id].next(byte);
            assert!(next.index() < arena.len());
        }
    }
}
