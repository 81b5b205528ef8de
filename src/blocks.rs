//src/blocks.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker that opens every cutadapt run in a concatenated log.
pub const RUN_HEADER: &str = "Command line parameters:";

/// Sample name token, e.g. `RAT10`.
static SAMPLE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"RAT\d+").unwrap());

/// One sample's slice of the log, borrowed from the full text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleBlock<'a> {
    pub text: &'a str,
}

impl<'a> SampleBlock<'a> {
    /// First `RAT<digits>` token anywhere in the block, header line included.
    pub fn sample_name(&self) -> Option<&'a str> {
        SAMPLE_TOKEN.find(self.text).map(|m| m.as_str())
    }
}

/// Splits a multi-sample log into per-sample blocks, in text order.
///
/// A block starts at a run header that is followed somewhere by a sample token
/// and ends at the first run header after that token (or end of text). A run
/// header with no sample token anywhere after it ends the scan.
pub fn split_sample_blocks(log_text: &str) -> Vec<SampleBlock<'_>> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = log_text[cursor..].find(RUN_HEADER) {
        let start = cursor + offset;
        let Some(token) = SAMPLE_TOKEN.find_at(log_text, start + RUN_HEADER.len()) else {
            break;
        };

        let end = match log_text[token.end()..].find(RUN_HEADER) {
            Some(next) => token.end() + next,
            // The last block stops short of a single trailing newline.
            None if log_text.ends_with('\n') => log_text.len() - 1,
            None => log_text.len(),
        };

        blocks.push(SampleBlock {
            text: &log_text[start..end],
        });
        cursor = end;
    }

    blocks
}
