//! Rewrite a fasta file with sequence on one line.

/* std use */
use std::io::Write;

/* project use */
use crate::error;
use crate::input;
use crate::output;

/// Record store a fasta record all field is public
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub header: String,
    pub sequence: String,
}

/// Group lines in records, sequence lines are concatenated and lines before first header are ignored
pub fn records<I, S>(lines: I) -> Vec<Record>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    let mut current: Option<Record> = None;

    for line in lines {
        let line = line.as_ref().trim();

        if line.starts_with('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }
            current = Some(Record {
                header: line.to_string(),
                sequence: String::new(),
            });
        } else if let Some(record) = current.as_mut() {
            record.sequence.push_str(line);
        } else if !line.is_empty() {
            log::warn!("ignore sequence line before first header");
        }
    }

    if let Some(record) = current {
        records.push(record);
    }

    records
}

/// Write records, each record take exactly two lines
pub fn write_records<W>(out: &mut W, records: &[Record]) -> std::io::Result<()>
where
    W: std::io::Write,
{
    for record in records {
        writeln!(out, "{}\n{}", record.header, record.sequence)?;
    }

    Ok(())
}

/// Convert a multi line fasta in a two line by record fasta, default output is next to input
pub fn convert_multiline_fasta_to_oneline<P>(
    input: P,
    output: Option<std::path::PathBuf>,
) -> error::Result<std::path::PathBuf>
where
    P: AsRef<std::path::Path>,
{
    let output =
        output.unwrap_or_else(|| output::default_output(input.as_ref(), output::FASTA_SUFFIX));

    let data = input::Input::open(input.as_ref())?;
    let records = records(data.lines());

    let mut out = output::create(&output)?;
    write_records(&mut out, &records).map_err(|source| error::Error::WriteFile { source })?;
    out.flush()
        .map_err(|source| error::Error::WriteFile { source })?;

    log::info!(
        "write {} records in {}",
        records.len(),
        output.display()
    );

    Ok(output)
}
