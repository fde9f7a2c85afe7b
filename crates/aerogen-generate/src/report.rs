use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::generator::Dataset;

/// Machine-readable summary of one generation run, written next to the
/// CSV output as `generation_report.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub seed: u64,
    pub counts: BTreeMap<String, u64>,
    pub total_instances: u64,
    pub total_entities: u64,
    pub duration_ms: u64,
    pub bytes_written: u64,
}

impl GenerationReport {
    pub fn new(seed: u64, dataset: &Dataset) -> Self {
        let counts = dataset
            .counts()
            .into_iter()
            .map(|(kind, len)| (kind.to_string(), len as u64))
            .collect();
        Self {
            seed,
            counts,
            total_instances: dataset.total_instances() as u64,
            total_entities: dataset.total_entities() as u64,
            duration_ms: 0,
            bytes_written: 0,
        }
    }
}
