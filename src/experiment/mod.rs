//! The experiment: insert every record of a partially randomized sequence into a tree, then
//! search every key, and collect the comparison counts of both phases.

pub mod dataset;
pub mod shuffle;
pub mod stats;

use crate::{
    avltree::AVLTree,
    error::Result,
    map::{CountingTree, Counters},
    record::Record,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub use dataset::{Vaccination, VaccinationKey};
pub use shuffle::randomize;
pub use stats::OpStats;

/// Configuration of one experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// CSV file with `country,date,vaccinations` lines.
    pub dataset: PathBuf,
    /// Number of records moved to the front in random order.
    pub degree: usize,
    /// Seed of the random order. Taken from the OS when absent.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("data/vaccinations.csv"),
            degree: 0,
            seed: None,
        }
    }
}

/// Comparison counts of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub degree: usize,
    pub records: usize,
    /// height of the tree after all inserts
    pub height: isize,
    pub insert: OpStats,
    pub find: OpStats,
    /// keys inserted but not found again; 0 for a correct tree
    pub missing: usize,
}

/// Randomize `records` to `degree`, then measure them on a new tree of type `M`.
pub fn run<M, R, G>(records: Vec<R>, degree: usize, rng: &mut G) -> Result<Report>
where
    M: CountingTree<R>,
    R: Record,
    R::Key: Clone,
    G: Rng + ?Sized,
{
    let records = randomize(records, degree, rng)?;
    debug!(degree, records = records.len(), "randomized input");

    Ok(measure::<M, R>(records, degree))
}

/// Load the dataset of the config and run it on an `AVLTree`.
pub fn run_with_config(config: &ExperimentConfig) -> Result<Report> {
    let records = dataset::load(&config.dataset)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = run::<AVLTree<_>, _, _>(records, config.degree, &mut rng)?;
    info!(
        degree = report.degree,
        records = report.records,
        insert_min = ?report.insert.min(),
        insert_max = ?report.insert.max(),
        insert_avg = ?report.insert.floor_average(),
        find_min = ?report.find.min(),
        find_max = ?report.find.max(),
        find_avg = ?report.find.floor_average(),
        "experiment finished"
    );

    Ok(report)
}

fn measure<M, R>(records: Vec<R>, degree: usize) -> Report
where
    M: CountingTree<R>,
    R: Record,
    R::Key: Clone,
{
    let keys: Vec<R::Key> = records.iter().map(|record| record.key().clone()).collect();

    let mut tree = M::new();
    let mut counters = Counters::new();
    let mut insert = OpStats::new();
    let mut find = OpStats::new();
    let mut missing = 0;

    for record in records {
        counters.insert += tree.insert(record);
        insert.record(counters.insert);
        counters.reset();
    }

    for key in &keys {
        let lookup = tree.find(key);
        if !lookup.found {
            missing += 1;
        }

        counters.find += lookup.comparisons;
        find.record(counters.find);
        counters.reset();
    }

    if missing > 0 {
        warn!(missing, "inserted keys were not found");
    }

    Report {
        degree,
        records: keys.len(),
        height: tree.height(),
        insert,
        find,
        missing,
    }
}
