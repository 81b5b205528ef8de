//src/types.rs

use serde::Serialize;

/// Literal written in the `Adapter Sequence` column of a per-sample summary row.
pub const TOTAL_LABEL: &str = "TOTAL";

/// Which mate of a paired-end read an adapter section reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhichRead {
    First,
    Second,
}

impl WhichRead {
    /// "First" in any letter case is read 1; anything else counts as read 2.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("first") {
            WhichRead::First
        } else {
            WhichRead::Second
        }
    }
}

/// One `=== First read: Adapter N ===` section pulled out of a sample block.
/// The adapter number is not kept; the sequence identifies the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterRecord {
    pub which_read: WhichRead,
    pub adapter_sequence: String,
    pub trimmed_count: u128,
}

/// Running read 1 / read 2 totals for one adapter sequence within a sample.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AdapterAggregate {
    pub read1_total: u128,
    pub read2_total: u128,
}

impl AdapterAggregate {
    pub fn add(&mut self, which_read: WhichRead, count: u128) {
        match which_read {
            WhichRead::First => self.read1_total = self.read1_total.saturating_add(count),
            WhichRead::Second => self.read2_total = self.read2_total.saturating_add(count),
        }
    }

    /// Fold another sequence's totals into this one.
    pub fn merge(&mut self, other: &AdapterAggregate) {
        self.add(WhichRead::First, other.read1_total);
        self.add(WhichRead::Second, other.read2_total);
    }

    pub fn total(&self) -> u128 {
        self.read1_total.saturating_add(self.read2_total)
    }
}

/// A structured representation of one row in the output table.
/// For example:
///  Sample Name  Adapter Sequence  Trimmed (Read 1)  Trimmed (Read 2)  Total Trimmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    #[serde(rename = "Sample Name")]
    pub sample_name: String,
    #[serde(rename = "Adapter Sequence")]
    pub adapter_sequence: String,
    #[serde(rename = "Trimmed (Read 1)")]
    pub trimmed_read1: u128,
    #[serde(rename = "Trimmed (Read 2)")]
    pub trimmed_read2: u128,
    #[serde(rename = "Total Trimmed")]
    pub total_trimmed: u128,
}

impl OutputRow {
    /// Column names, in output order.
    pub const HEADERS: [&'static str; 5] = [
        "Sample Name",
        "Adapter Sequence",
        "Trimmed (Read 1)",
        "Trimmed (Read 2)",
        "Total Trimmed",
    ];

    pub fn new(sample_name: &str, adapter_sequence: &str, counts: AdapterAggregate) -> Self {
        OutputRow {
            sample_name: sample_name.to_string(),
            adapter_sequence: adapter_sequence.to_string(),
            trimmed_read1: counts.read1_total,
            trimmed_read2: counts.read2_total,
            total_trimmed: counts.total(),
        }
    }

    pub fn is_total(&self) -> bool {
        self.adapter_sequence == TOTAL_LABEL
    }
}
