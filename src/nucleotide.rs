//! DNA and RNA sequence transformation.
//!
//! Every transformation check the alphabet first and return
//! [Error::InvalidNucleotide](crate::error::Error::InvalidNucleotide) on a sequence that isn't a
//! nucleic acid. Case of each base is preserved.

/* project use */
use crate::error;

/// Valid DNA bases
pub static DNA_ALPHABET: [u8; 8] = *b"ATGCatgc";

/// Valid RNA bases
pub static RNA_ALPHABET: [u8; 8] = *b"AUGCaugc";

/// DNA complement as (base, complement)
pub static DNA_COMPLEMENT: [(u8, u8); 8] = [
    (b'A', b'T'),
    (b'T', b'A'),
    (b'C', b'G'),
    (b'G', b'C'),
    (b'a', b't'),
    (b't', b'a'),
    (b'c', b'g'),
    (b'g', b'c'),
];

/// RNA complement as (base, complement)
pub static RNA_COMPLEMENT: [(u8, u8); 8] = [
    (b'A', b'U'),
    (b'U', b'A'),
    (b'C', b'G'),
    (b'G', b'C'),
    (b'a', b'u'),
    (b'u', b'a'),
    (b'c', b'g'),
    (b'g', b'c'),
];

/// Nucleic acid type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    Dna,
    Rna,
}

impl Alphabet {
    /// Detect alphabet of sequence, DNA is prefer when sequence is valid for both
    pub fn detect(sequence: &str) -> Option<Self> {
        if is_dna(sequence) {
            Some(Alphabet::Dna)
        } else if is_rna(sequence) {
            Some(Alphabet::Rna)
        } else {
            None
        }
    }

    fn complement_table(&self) -> &'static [(u8, u8); 8] {
        match self {
            Alphabet::Dna => &DNA_COMPLEMENT,
            Alphabet::Rna => &RNA_COMPLEMENT,
        }
    }
}

fn invalid(sequence: &str) -> error::Error {
    error::Error::InvalidNucleotide {
        sequence: sequence.to_string(),
    }
}

/// All bases are in DNA alphabet
pub fn is_dna(sequence: &str) -> bool {
    sequence.bytes().all(|nuc| DNA_ALPHABET.contains(&nuc))
}

/// All bases are in RNA alphabet
pub fn is_rna(sequence: &str) -> bool {
    sequence.bytes().all(|nuc| RNA_ALPHABET.contains(&nuc))
}

/// Sequence is DNA or RNA, a mix of T and U isn't valid
pub fn is_nucleic_acid(sequence: &str) -> bool {
    Alphabet::detect(sequence).is_some()
}

/// Replace T by U in a DNA sequence
pub fn transcribe(sequence: &str) -> error::Result<String> {
    if !is_dna(sequence) {
        return Err(invalid(sequence));
    }

    Ok(sequence
        .chars()
        .map(|nuc| match nuc {
            'T' => 'U',
            't' => 'u',
            _ => nuc,
        })
        .collect())
}

/// Reverse a nucleic acid sequence
pub fn reverse(sequence: &str) -> error::Result<String> {
    if !is_nucleic_acid(sequence) {
        return Err(invalid(sequence));
    }

    Ok(sequence.chars().rev().collect())
}

/// Complement a nucleic acid sequence
pub fn complement(sequence: &str) -> error::Result<String> {
    let table = Alphabet::detect(sequence)
        .ok_or_else(|| invalid(sequence))?
        .complement_table();

    sequence
        .bytes()
        .map(|nuc| {
            table
                .iter()
                .find(|(base, _)| *base == nuc)
                .map(|(_, comp)| *comp as char)
                .ok_or_else(|| invalid(sequence))
        })
        .collect()
}

/// Reverse complement of a nucleic acid sequence
pub fn reverse_complement(sequence: &str) -> error::Result<String> {
    Ok(complement(sequence)?.chars().rev().collect())
}

/// Operation available in [run_dna_rna_tools]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    IsDna,
    IsRna,
    IsNucleicAcid,
    Transcribe,
    Reverse,
    Complement,
    ReverseComplement,
}

impl Operation {
    /// Apply operation on one sequence
    pub fn apply(&self, sequence: &str) -> error::Result<ToolOutput> {
        Ok(match self {
            Operation::IsDna => ToolOutput::Valid(is_dna(sequence)),
            Operation::IsRna => ToolOutput::Valid(is_rna(sequence)),
            Operation::IsNucleicAcid => ToolOutput::Valid(is_nucleic_acid(sequence)),
            Operation::Transcribe => ToolOutput::Sequence(transcribe(sequence)?),
            Operation::Reverse => ToolOutput::Sequence(reverse(sequence)?),
            Operation::Complement => ToolOutput::Sequence(complement(sequence)?),
            Operation::ReverseComplement => ToolOutput::Sequence(reverse_complement(sequence)?),
        })
    }
}

impl std::str::FromStr for Operation {
    type Err = error::Error;

    fn from_str(name: &str) -> error::Result<Self> {
        match name {
            "is_dna" => Ok(Operation::IsDna),
            "is_rna" => Ok(Operation::IsRna),
            "is_nucleic_acid" => Ok(Operation::IsNucleicAcid),
            "transcribe" => Ok(Operation::Transcribe),
            "reverse" => Ok(Operation::Reverse),
            "complement" => Ok(Operation::Complement),
            "reverse_complement" => Ok(Operation::ReverseComplement),
            _ => Err(error::Error::UnknownOperation {
                name: name.to_string(),
            }),
        }
    }
}

/// Result of an operation on one sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutput {
    Valid(bool),
    Sequence(String),
}

impl std::fmt::Display for ToolOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolOutput::Valid(valid) => write!(f, "{}", valid),
            ToolOutput::Sequence(seq) => write!(f, "{}", seq),
        }
    }
}

/// Apply operation on each sequence, stop on first invalid sequence
pub fn run_dna_rna_tools<S>(sequences: &[S], operation: Operation) -> error::Result<Vec<ToolOutput>>
where
    S: AsRef<str>,
{
    sequences
        .iter()
        .map(|seq| operation.apply(seq.as_ref()))
        .collect()
}
