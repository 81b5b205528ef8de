//src/adapters.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{AdapterRecord, WhichRead};

/// Header, sequence and trimmed count of one adapter section. Each anchor is
/// the first one following the previous, across any intervening lines.
static ADAPTER_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)===\s+(?P<read>First|Second)\s+read:\s+Adapter\s+(?P<number>\d+)\s+===.*?Sequence:\s*(?P<sequence>[^;]+);.*?Trimmed:\s+(?P<count>\d+)\s+times",
    )
    .unwrap()
});

/// Any single Unicode decimal digit, as `\d` matches it in the section pattern.
static DECIMAL_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d$").unwrap());

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Value of a decimal digit in any script. Unicode lays every digit set out
/// as ten consecutive code points from zero, and adjacent sets (the
/// mathematical digits) start on a multiple of ten from the run's start.
fn decimal_digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut offset = 0;
    let mut cp = c as u32;
    while let Some(prev) = cp.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        cp -= 1;
    }
    Some(offset % 10)
}

/// Parse a run of decimal digits from any script. `None` if a character is
/// not a digit or the value does not fit in `u128`.
pub fn parse_decimal(digits: &str) -> Option<u128> {
    digits.chars().try_fold(0u128, |acc, c| {
        let d = decimal_digit_value(c)?;
        acc.checked_mul(10)?.checked_add(u128::from(d))
    })
}

/// Pulls every complete adapter section out of a sample block.
///
/// Sections missing any of the three anchors do not match and produce nothing.
pub fn extract_adapter_records(block: &str) -> Vec<AdapterRecord> {
    let mut records = Vec::new();

    for caps in ADAPTER_SECTION.captures_iter(block) {
        let count_str = &caps["count"];
        let Some(trimmed_count) = parse_decimal(count_str) else {
            log::warn!("Skipping adapter section with count {count_str:?} out of range");
            continue;
        };

        records.push(AdapterRecord {
            which_read: WhichRead::from_label(&caps["read"]),
            adapter_sequence: caps["sequence"].trim().to_string(),
            trimmed_count,
        });
    }

    records
}
