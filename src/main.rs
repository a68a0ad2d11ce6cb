/* crate use */
use clap::Parser;

/* project use */
use bio_files_tools::{blast, bounds, error, fasta, fastq, filter, nucleotide, report};

#[derive(clap::Parser, Debug)]
#[command(
    name = "bio_files_tools",
    version,
    about = "Filter FASTQ, extract BLAST best hits, normalize FASTA and transform DNA/RNA"
)]
struct Command {
    #[command(subcommand)]
    pub subcommand: SubCommand,

    /// Increase log verbosity, repeat for more
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Rewrite a FASTA file with one sequence line by record
    FastaOneline {
        /// FASTA input
        input: std::path::PathBuf,

        /// Output path, default replace input extension by _oneline.fasta
        #[arg(short = 'o', long = "output")]
        output: Option<std::path::PathBuf>,
    },

    /// Write best hit description of each query of a BLAST text report
    BlastBestHits {
        /// BLAST report input
        input: std::path::PathBuf,

        /// Output path, default replace input extension by _oneline.txt
        #[arg(short = 'o', long = "output")]
        output: Option<std::path::PathBuf>,

        /// Print descriptions in file order instead of writing them
        #[arg(long = "stdout")]
        stdout: bool,
    },

    /// Keep FASTQ reads that pass all filters
    FilterFastq {
        /// FASTQ input
        input: std::path::PathBuf,

        /// FASTQ output
        output: std::path::PathBuf,

        /// GC content bounds in percent, 'max' or 'low,high'
        #[arg(short = 'g', long = "gc-bounds", default_value = "0,100")]
        gc_bounds: bounds::Bounds,

        /// Length bounds, 'max' or 'low,high'
        #[arg(short = 'l', long = "length-bounds", default_value = "0,4294967296")]
        length_bounds: bounds::Bounds,

        /// Minimal average quality
        #[arg(short = 't', long = "quality-threshold", default_value = "0")]
        quality_threshold: f64,

        /// Fail on a trailing partial record instead of ignoring it
        #[arg(short = 's', long = "strict")]
        strict: bool,
    },

    /// Apply an operation on each sequence (is_dna, is_rna, is_nucleic_acid, transcribe, reverse, complement, reverse_complement)
    DnaRna {
        /// Operation name
        operation: nucleotide::Operation,

        /// Sequences
        #[arg(required = true)]
        sequences: Vec<String>,
    },
}

fn main() -> error::Result<()> {
    let params = Command::parse();

    let level = if params.quiet {
        log::LevelFilter::Error
    } else {
        match params.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match params.subcommand {
        SubCommand::FastaOneline { input, output } => {
            let path = fasta::convert_multiline_fasta_to_oneline(input, output)?;
            println!("{}", path.display());
        }
        SubCommand::BlastBestHits {
            input,
            output,
            stdout,
        } => {
            if stdout {
                for hit in blast::parse(input)? {
                    println!("{}", hit);
                }
            } else {
                let path = report::parse_blast_output(input, output)?;
                println!("{}", path.display());
            }
        }
        SubCommand::FilterFastq {
            input,
            output,
            gc_bounds,
            length_bounds,
            quality_threshold,
            strict,
        } => {
            let params = filter::FilterParams {
                gc_bounds,
                length_bounds,
                quality_threshold,
            };
            let mode = if strict {
                fastq::ReadMode::Strict
            } else {
                fastq::ReadMode::Lenient
            };

            let kept = filter::filter_fastq_with_mode(input, &output, &params, mode)?;
            println!("{}\t{}", kept.len(), output.display());
        }
        SubCommand::DnaRna {
            operation,
            sequences,
        } => {
            for result in nucleotide::run_dna_rna_tools(&sequences, operation)? {
                println!("{}", result);
            }
        }
    }

    Ok(())
}
