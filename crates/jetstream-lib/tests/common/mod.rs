//! Common test utilities and fixture helpers.
//!
//! Shared by the integration tests: fixture paths, a segment shorthand, and a
//! small deterministic generator for randomised segment sets.

use std::path::PathBuf;

use jetstream_lib::Segment;

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Shorthand for `Segment::new`.
#[allow(dead_code)]
pub fn seg(start: i64, end: i64, cost: i64) -> Segment {
    Segment::new(start, end, cost)
}

/// Deterministic linear congruential generator so randomised tests are reproducible.
#[allow(dead_code)]
pub struct Lcg(u64);

#[allow(dead_code)]
impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Uniform-ish value in `0..=max`.
    pub fn below(&mut self, max: i64) -> i64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) % (max as u64 + 1)) as i64
    }

    /// `count` segments with starts in `0..=30`, lengths in `0..=15`, costs in `0..=20`.
    pub fn segments(&mut self, count: usize) -> Vec<Segment> {
        (0..count)
            .map(|_| {
                let start = self.below(30);
                let end = start + self.below(15);
                Segment::new(start, end, self.below(20))
            })
            .collect()
    }
}
