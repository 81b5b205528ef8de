//src/logfile.rs

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::StatsError;

/// Read a whole cutadapt log into memory. Files ending in `.gz` are
/// decompressed on the fly.
pub fn read_log_text<P: AsRef<Path>>(path: P) -> Result<String, StatsError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let f = File::open(path).map_err(|e| StatsError::io(&display, e))?;

    let is_gz = path
        .extension()
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let mut reader: Box<dyn Read> = if is_gz {
        Box::new(BufReader::new(MultiGzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };

    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| StatsError::io(&display, e))?;

    log::debug!("Read {} bytes of log text from {}", text.len(), display);
    Ok(text)
}
