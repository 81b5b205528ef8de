//src/aggregate.rs

use std::collections::BTreeMap;

use crate::types::{AdapterAggregate, AdapterRecord, OutputRow, TOTAL_LABEL};

/// Read 1 / read 2 totals per adapter sequence, iterated in sequence order.
pub type AdapterCounts = BTreeMap<String, AdapterAggregate>;

/// Merge one block's records by adapter sequence.
pub fn aggregate_records(records: impl IntoIterator<Item = AdapterRecord>) -> AdapterCounts {
    let mut counts = AdapterCounts::new();
    for record in records {
        counts
            .entry(record.adapter_sequence)
            .or_default()
            .add(record.which_read, record.trimmed_count);
    }
    counts
}

/// Build the rows for one sample: one per sequence in ascending order, then a
/// `TOTAL` row. A sample with no sequences yields no rows at all.
pub fn sample_rows(sample_name: &str, counts: &AdapterCounts) -> Vec<OutputRow> {
    if counts.is_empty() {
        return Vec::new();
    }

    let mut rows = Vec::with_capacity(counts.len() + 1);
    let mut total = AdapterAggregate::default();

    for (sequence, agg) in counts {
        rows.push(OutputRow::new(sample_name, sequence, *agg));
        total.merge(agg);
    }

    rows.push(OutputRow::new(sample_name, TOTAL_LABEL, total));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WhichRead;

    fn record(which_read: WhichRead, seq: &str, n: u128) -> AdapterRecord {
        AdapterRecord {
            which_read,
            adapter_sequence: seq.to_string(),
            trimmed_count: n,
        }
    }

    #[test]
    fn test_rows_sorted_with_total_last() {
        let counts = aggregate_records(vec![
            record(WhichRead::First, "TTTT", 5),
            record(WhichRead::Second, "AAAA", 2),
            record(WhichRead::First, "AAAA", 3),
            record(WhichRead::Second, "CCCC", 9),
        ]);
        let rows = sample_rows("RAT4", &counts);

        let seqs: Vec<&str> = rows.iter().map(|r| r.adapter_sequence.as_str()).collect();
        assert_eq!(seqs, vec!["AAAA", "CCCC", "TTTT", "TOTAL"]);

        let total = rows.last().unwrap();
        assert!(total.is_total());
        assert_eq!(total.trimmed_read1, 8);
        assert_eq!(total.trimmed_read2, 11);
        assert_eq!(total.total_trimmed, 19);
        assert!(rows.iter().all(|r| r.sample_name == "RAT4"));
    }

    #[test]
    fn test_empty_counts_give_no_rows() {
        assert!(sample_rows("RAT1", &AdapterCounts::new()).is_empty());
    }

    #[test]
    fn test_accumulation_order_does_not_matter() {
        let forward = vec![
            record(WhichRead::First, "GG", 1),
            record(WhichRead::Second, "GG", 2),
            record(WhichRead::First, "GG", 3),
        ];
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(aggregate_records(forward), aggregate_records(backward));
    }
}
