//! Per read metrics.

/* project use */
use crate::error;

/// Offset of Phred+33 quality encoding
pub const PHRED_OFFSET: u8 = 33;

/// Percentage of G and C (case insensitive) in sequence, 0.0 for an empty sequence
pub fn gc_content(sequence: &str) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }

    let gc = sequence
        .bytes()
        .filter(|nuc| matches!(nuc, b'G' | b'g' | b'C' | b'c'))
        .count();

    gc as f64 / sequence.len() as f64 * 100.0
}

/// Mean Phred+33 score of quality
pub fn average_quality(quality: &str) -> error::Result<f64> {
    if quality.is_empty() {
        return Err(error::Error::EmptyInput);
    }

    let sum: i64 = quality
        .bytes()
        .map(|qual| qual as i64 - PHRED_OFFSET as i64)
        .sum();

    Ok(sum as f64 / quality.len() as f64)
}
