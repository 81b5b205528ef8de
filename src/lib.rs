// src/lib.rs
pub mod types;
pub mod error;
pub mod blocks;
pub mod adapters;
pub mod aggregate;
pub mod logfile;
pub mod report;

use std::io::Write;
use std::path::Path;

pub use crate::error::StatsError;
pub use crate::types::{AdapterAggregate, AdapterRecord, OutputRow, WhichRead, TOTAL_LABEL};

use crate::adapters::extract_adapter_records;
use crate::aggregate::{aggregate_records, sample_rows};
use crate::blocks::split_sample_blocks;
use crate::logfile::read_log_text;

/// Adapter trimming statistics for every sample found in a log.
/// Rows are kept structured and rendered to CSV on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdapterReport {
    /// Per-adapter rows followed by a `TOTAL` row, sample by sample in log order
    pub rows: Vec<OutputRow>,
}

impl AdapterReport {
    pub fn from_log_text(log_text: &str) -> Self {
        AdapterReport {
            rows: parse_adapter_stats(log_text),
        }
    }

    /// Names of samples that produced rows, in log order.
    pub fn sample_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for row in &self.rows {
            if names.last() != Some(&row.sample_name.as_str()) {
                names.push(&row.sample_name);
            }
        }
        names
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), StatsError> {
        report::write_csv(writer, &self.rows)
    }

    pub fn to_csv(&self) -> Result<String, StatsError> {
        report::to_csv_string(&self.rows)
    }
}

/// Extract per-sample, per-adapter trim counts from a multi-sample cutadapt log.
///
/// Never fails: blocks without a sample name and adapter sections missing any
/// field are skipped silently.
pub fn parse_adapter_stats(log_text: &str) -> Vec<OutputRow> {
    let mut rows = Vec::new();

    for block in split_sample_blocks(log_text) {
        let Some(sample_name) = block.sample_name() else {
            continue;
        };

        let records = extract_adapter_records(block.text);
        log::debug!(
            "Sample {}: {} adapter section(s) in {} bytes",
            sample_name,
            records.len(),
            block.text.len()
        );

        let counts = aggregate_records(records);
        rows.extend(sample_rows(sample_name, &counts));
    }

    rows
}

/// Read a log file (plain or `.gz`) and summarize it.
pub fn summarize_log_file<P: AsRef<Path>>(path: P) -> Result<AdapterReport, StatsError> {
    let log_text = read_log_text(path)?;
    Ok(AdapterReport::from_log_text(&log_text))
}
