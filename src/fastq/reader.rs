/* crate use */
use bstr::ByteSlice;

/* project use */
use crate::error;
use crate::input;

use super::{Collection, Record};

/// How a trailing partial record is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Partial record is drop
    #[default]
    Lenient,
    /// Partial record is an error
    Strict,
}

/// Read fastq file indicate by path, a trailing partial record is ignored
pub fn read<P>(path: P) -> error::Result<Collection>
where
    P: AsRef<std::path::Path>,
{
    read_with_mode(path, ReadMode::Lenient)
}

/// Read fastq file indicate by path with selected mode
pub fn read_with_mode<P>(path: P, mode: ReadMode) -> error::Result<Collection>
where
    P: AsRef<std::path::Path>,
{
    let input = input::Input::open(path.as_ref())?;

    let collection = parse(input.data(), mode)?;

    log::info!(
        "read {} records from {}",
        collection.len(),
        path.as_ref().display()
    );

    Ok(collection)
}

/// Parse fastq content, record is read four line by four line
pub fn parse(data: &[u8], mode: ReadMode) -> error::Result<Collection> {
    let mut collection = Collection::new();
    let mut lines = data.lines().map(|line| line.to_str_lossy().into_owned());
    let mut line_number = 0;

    while let Some(header) = lines.next() {
        let (sequence, _, quality) = match (lines.next(), lines.next(), lines.next()) {
            (Some(sequence), Some(separator), Some(quality)) => (sequence, separator, quality),
            _ => match mode {
                ReadMode::Lenient => {
                    log::warn!("drop partial record at line {}", line_number + 1);
                    break;
                }
                ReadMode::Strict => {
                    return Err(error::Error::MalformedRecord {
                        line: line_number + 1,
                    })
                }
            },
        };
        line_number += 4;

        if let Some(previous) = collection.insert(Record::new(header, sequence, quality)) {
            log::debug!("header {} is present twice", previous.header);
        }
    }

    Ok(collection)
}
