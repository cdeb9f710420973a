//! Synthetic-data benchmark: tree search versus linear scan.
//!
//! Generates N random entries, times bulk insert into the catalog, then
//! races `Catalog::get` against a full scan of the unsorted dataset for
//! the last generated id and reports the speed ratio. The tree's
//! O(height) lookup against the scan's O(n) is the system's core
//! performance argument.

use std::fmt;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use cinetree_core::{Catalog, Entry};

/// Ids land in a narrow range on purpose so duplicate keys occur and the
/// merge path gets exercised.
const ID_RANGE: std::ops::RangeInclusive<u64> = 100_000..=999_999;

const CATEGORIES: [&str; 7] = [
    "Action",
    "Drama",
    "Comedy",
    "Horror",
    "Sci-Fi",
    "Animation",
    "Fantasy",
];

/// Timings and counters from one benchmark run.
pub struct BenchReport {
    pub generated: usize,
    pub unique: usize,
    pub generate: Duration,
    pub insert: Duration,
    pub linear_scan: Duration,
    pub tree_search: Duration,
}

impl BenchReport {
    /// How many times faster the tree answered than the scan.
    pub fn speedup(&self) -> f64 {
        let tree = self.tree_search.as_secs_f64();
        if tree > 0.0 {
            self.linear_scan.as_secs_f64() / tree
        } else {
            f64::INFINITY
        }
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "generated {} entries ({} unique keys) in {:?}",
            self.generated, self.unique, self.generate
        )?;
        writeln!(f, "tree insert:  {:?}", self.insert)?;
        writeln!(f, "linear scan:  {:?}", self.linear_scan)?;
        writeln!(f, "tree search:  {:?}", self.tree_search)?;
        write!(f, "the tree was {:.2}x faster than the scan", self.speedup())
    }
}

/// Generate `n` pseudo-random entries from a fixed seed.
///
/// The 1-decimal rating rounding here is a property of the synthetic
/// data, not of the engine (merges always round to 2 decimals).
pub fn generate_entries(n: usize, seed: u64) -> Vec<Entry> {
    fn letters(rng: &mut SmallRng, count: usize) -> String {
        (0..count).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect()
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Entry {
            id: rng.gen_range(ID_RANGE),
            title: format!("FILM-{}", letters(&mut rng, 6)),
            director: format!("DIR-{}", letters(&mut rng, 8)),
            year: rng.gen_range(1970..=2025),
            category: CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_string(),
            rating: (rng.gen_range(1.0..=10.0_f64) * 10.0).round() / 10.0,
            votes: rng.gen_range(100..=5_000_000),
        })
        .collect()
}

/// Linear scan over the unsorted dataset, the baseline the tree races.
pub fn linear_scan(entries: &[Entry], id: u64) -> Option<&Entry> {
    entries.iter().find(|e| e.id == id)
}

/// Run the full benchmark: generate, bulk insert, race the lookups.
pub fn run(n: usize, seed: u64) -> BenchReport {
    info!(n, "generating synthetic entries");
    let start = Instant::now();
    let dataset = generate_entries(n, seed);
    let generate = start.elapsed();

    // The last generated id is the search target: worst case for the
    // scan, an ordinary probe for the tree.
    let target = dataset.last().map(|e| e.id).unwrap_or(0);

    let mut catalog = Catalog::new();
    let start = Instant::now();
    for entry in dataset.iter().cloned() {
        catalog.insert(entry);
    }
    let insert = start.elapsed();
    info!(unique = catalog.len(), "catalog populated");

    let start = Instant::now();
    let scan_hit = linear_scan(&dataset, target).is_some();
    let linear_scan_time = start.elapsed();

    let start = Instant::now();
    let tree_hit = catalog.get(target).is_some();
    let tree_search = start.elapsed();

    debug_assert_eq!(scan_hit, tree_hit);

    BenchReport {
        generated: n,
        unique: catalog.len(),
        generate,
        insert,
        linear_scan: linear_scan_time,
        tree_search,
    }
}
