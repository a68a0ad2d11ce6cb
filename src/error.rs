#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("bio_files_tools failled to read file metadata {source}")]
    MetaDataFile { source: std::io::Error },

    #[error("bio_files_tools can't open file {source}")]
    OpenFile { source: std::io::Error },

    #[error("bio_files_tools can't map file on memory {source}")]
    MapFile { source: std::io::Error },

    #[error("bio_files_tools can't create output directory {source}")]
    CreateDir { source: std::io::Error },

    #[error("bio_files_tools can't create output file {source}")]
    CreateFile { source: std::io::Error },

    #[error("bio_files_tools failled to write output {source}")]
    WriteFile { source: std::io::Error },

    #[error("Average quality of an empty quality string is undefined")]
    EmptyInput,

    #[error("Sequence length {sequence} differs from quality length {quality}")]
    LengthMismatch { sequence: usize, quality: usize },

    #[error("Input file contains a partial fastq record starting at line {line}")]
    MalformedRecord { line: usize },

    #[error("Sequence {sequence} isn't a valid nucleic acid for this operation")]
    InvalidNucleotide { sequence: String },

    #[error("Unknown operation {name}")]
    UnknownOperation { name: String },

    #[error("Can't parse bounds {value}, expect 'max' or 'low,high'")]
    InvalidBounds { value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
