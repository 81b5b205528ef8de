//src/report.rs

use std::io::Write;

use crate::error::StatsError;
use crate::types::OutputRow;

/// Write rows as CSV. The header row is always written, so an empty table
/// still produces a valid one-line file.
pub fn write_csv<W: Write>(writer: W, rows: &[OutputRow]) -> Result<(), StatsError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(OutputRow::HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render rows as a CSV string.
pub fn to_csv_string(rows: &[OutputRow]) -> Result<String, StatsError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, rows)?;
    String::from_utf8(buf)
        .map_err(|e| StatsError::Output(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AdapterAggregate;
    use std::io;

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_header_only_for_empty_table() {
        let out = to_csv_string(&[]).unwrap();
        assert_eq!(
            out,
            "Sample Name,Adapter Sequence,Trimmed (Read 1),Trimmed (Read 2),Total Trimmed\n"
        );
    }

    #[test]
    fn test_rows_and_quoting() {
        let counts = AdapterAggregate {
            read1_total: 3,
            read2_total: 4,
        };
        let rows = vec![
            OutputRow::new("RAT1", "AAAA", counts),
            OutputRow::new("RAT1", "A,\"B\"", counts),
        ];
        let out = to_csv_string(&rows).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "RAT1,AAAA,3,4,7");
        assert_eq!(lines[2], "RAT1,\"A,\"\"B\"\"\",3,4,7");
    }

    #[test]
    fn test_write_failure_is_output_error() {
        let err = write_csv(FullDisk, &[]).unwrap_err();
        assert!(matches!(err, StatsError::Output(_)));
        assert!(err.to_string().contains("no space left"));
    }
}
