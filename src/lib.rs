//! Small bioinformatics text utilities.
//!
//! - [filter]: keep FASTQ reads on length, GC content and average quality
//! - [blast]: extract best hit description of each query from a BLAST text report, [report]
//!   write them sorted
//! - [fasta]: rewrite a multi line FASTA with one sequence line by record
//! - [nucleotide]: transcription, reversal and complementation of DNA and RNA

pub mod blast;
pub mod bounds;
pub mod error;
pub mod fasta;
pub mod fastq;
pub mod filter;
pub mod input;
pub mod metrics;
pub mod nucleotide;
pub mod output;
pub mod report;

pub use bounds::{Bounds, Interval};
pub use filter::{filter_fastq, passes, FilterParams};
pub use report::parse_blast_output;
