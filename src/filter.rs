//! Accept or reject reads on length, GC content and average quality.

/* project use */
use crate::bounds::{self, Bounds};
use crate::error;
use crate::fastq;
use crate::metrics;

/// Filter criteria, all criteria must be satisfied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    pub gc_bounds: Bounds,
    pub length_bounds: Bounds,
    pub quality_threshold: f64,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            gc_bounds: bounds::GC_DEFAULT.into(),
            length_bounds: bounds::LENGTH_DEFAULT.into(),
            quality_threshold: 0.0,
        }
    }
}

impl FilterParams {
    /// Apply [passes] on a record
    pub fn accept(&self, record: &fastq::Record) -> bool {
        passes(
            &record.sequence,
            &record.quality,
            self.gc_bounds,
            self.length_bounds,
            self.quality_threshold,
        )
    }
}

/// Return true if read pass all filter
///
/// Sequence and quality of different length never pass. Criteria are check in order length, GC
/// content, average quality.
pub fn passes(
    sequence: &str,
    quality: &str,
    gc_bounds: Bounds,
    length_bounds: Bounds,
    quality_threshold: f64,
) -> bool {
    if sequence.len() != quality.len() {
        return false;
    }

    let length = length_bounds.normalize(bounds::LENGTH_DEFAULT.low, bounds::LENGTH_DEFAULT.high);
    if !length.contains(sequence.len() as f64) {
        return false;
    }

    let gc = gc_bounds.normalize(bounds::GC_DEFAULT.low, bounds::GC_DEFAULT.high);
    if !gc.contains(metrics::gc_content(sequence)) {
        return false;
    }

    match metrics::average_quality(quality) {
        Ok(average) => average >= quality_threshold,
        Err(e) => {
            log::debug!("reject read: {}", e);
            false
        }
    }
}

/// Read input, keep records that pass filter, write them in output and return them
pub fn filter_fastq<P, Q>(input: P, output: Q, params: &FilterParams) -> error::Result<fastq::Collection>
where
    P: AsRef<std::path::Path>,
    Q: AsRef<std::path::Path>,
{
    filter_fastq_with_mode(input, output, params, fastq::ReadMode::Lenient)
}

/// Same as [filter_fastq] with selected read mode
pub fn filter_fastq_with_mode<P, Q>(
    input: P,
    output: Q,
    params: &FilterParams,
    mode: fastq::ReadMode,
) -> error::Result<fastq::Collection>
where
    P: AsRef<std::path::Path>,
    Q: AsRef<std::path::Path>,
{
    let records = fastq::read_with_mode(input, mode)?;
    let total = records.len();

    let kept: fastq::Collection = records
        .into_iter()
        .filter(|record| params.accept(record))
        .collect();

    log::info!("{} records on {} pass filter", kept.len(), total);

    fastq::write(&kept, output)?;

    Ok(kept)
}
