//! Fixtures for candidate/reference streams.

use anyhow::Context;
use fake::{faker::lorem::en::Word, Fake};
use std::fs;
use std::path::{Path, PathBuf};

/// Interval used by [`interval_streams`].
pub const FIXTURE_INTERVAL: (f64, f64) = (0.0, 10.0);

/// Value inside [`FIXTURE_INTERVAL`].
pub const FIXTURE_HIT: f64 = 5.0;

/// Value outside [`FIXTURE_INTERVAL`].
pub const FIXTURE_MISS: f64 = 11.0;

/// One interval case as `(candidate line, reference line)`, newline terminated.
pub fn interval_case(value: f64, lower: f64, upper: f64) -> (String, String) {
    (format!("{}\n", value), format!("{} {}\n", lower, upper))
}

/// `trials` interval cases against [`FIXTURE_INTERVAL`] of which exactly
/// `successes` fall inside; misses are spread evenly over the stream.
pub fn interval_streams(successes: u64, trials: u64) -> (String, String) {
    assert!(successes <= trials, "successes must not exceed trials");

    let (lower, upper) = FIXTURE_INTERVAL;
    let failures = trials - successes;
    let mut candidate = String::new();
    let mut reference = String::new();

    for i in 0..trials {
        // Bresenham-style spacing of the misses
        let miss = (i + 1) * failures / trials.max(1) > i * failures / trials.max(1);
        let value = if miss { FIXTURE_MISS } else { FIXTURE_HIT };
        let (c, r) = interval_case(value, lower, upper);
        candidate.push_str(&c);
        reference.push_str(&r);
    }

    (candidate, reference)
}

/// Random lines of lorem words, identical on both sides when used twice.
pub fn text_stream(lines: usize, words_per_line: usize) -> String {
    let mut out = String::new();
    for _ in 0..lines {
        let words: Vec<String> = (0..words_per_line).map(|_| Word().fake()).collect();
        out.push_str(&words.join(" "));
        out.push('\n');
    }
    out
}

/// Write `contents` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> anyhow::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("writing fixture {}", path.display()))?;
    Ok(path)
}
