//src/error.rs

use thiserror::Error;

/// Everything that can go wrong around the aggregator. Parsing itself never
/// fails; only reading the log and writing the table can.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the table to its destination failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl StatsError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        StatsError::Io {
            path: path.into(),
            source,
        }
    }
}
