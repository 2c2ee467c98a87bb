//! Smoke test for ahocorasick

use ahocorasick::Matcher;

fn main() {
    println!("Running ahocorasick smoke tests...\n");

    test_nested_suffixes();
    test_output_link_order();
    test_concurrent_matching();
    test_empty_pattern();

    println!("\nAll smoke tests passed!");
}

fn test_nested_suffixes() {
    let mut m = Matcher::from_strings(["Superman", "uperman", "perman", "erman"]).unwrap();
    let hits = m.find_all(b"The Man Of Steel: Superman");
    assert_eq!(hits, vec![0, 1, 2, 3]);
    println!("  nested suffixes: {:?}", hits);
}

fn test_output_link_order() {
    let mut m = Matcher::from_strings(["a", "ab", "bc", "bca", "c", "caa"]).unwrap();
    let hits = m.find_all(b"bccab");
    assert_eq!(hits, vec![2, 4, 0, 1]);
    println!("  output link order: {:?}", hits);
}

fn test_concurrent_matching() {
    let m = Matcher::from_strings(["Mozilla", "Mac", "Macintosh", "Safari", "Sausage"]).unwrap();
    let inputs: [&[u8]; 2] = [
        b"Mozilla/5.0 (Macintosh; Intel Mac OS X 10_7_5) Safari/537.36",
        b"Mozilla/5.0 (Mac; Intel Mac OS X 10_7_5) Safari/537.36",
    ];

    std::thread::scope(|s| {
        for input in inputs {
            let m = &m;
            s.spawn(move || {
                let hits = m.find_all_concurrent(input);
                println!("  concurrent: {:?}", hits);
            });
        }
    });
}

fn test_empty_pattern() {
    let err = Matcher::from_strings(["ok", ""]).unwrap_err();
    println!("  empty pattern rejected: {}", err);
}
