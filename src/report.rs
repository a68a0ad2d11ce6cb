//! Write best hit descriptions, one by line.

/* std use */
use std::io::Write;

/* project use */
use crate::blast;
use crate::error;
use crate::output;

/// Sort descriptions without case, blank descriptions are removed
pub fn prepare<S>(descriptions: &[S]) -> Vec<&str>
where
    S: AsRef<str>,
{
    let mut lines: Vec<&str> = descriptions
        .iter()
        .map(|desc| desc.as_ref())
        .filter(|desc| !desc.trim().is_empty())
        .collect();

    lines.sort_by_cached_key(|desc| desc.to_ascii_lowercase());

    lines
}

/// Write sorted descriptions in path and return it
pub fn write<S, P>(descriptions: &[S], path: P) -> error::Result<std::path::PathBuf>
where
    S: AsRef<str>,
    P: AsRef<std::path::Path>,
{
    let mut out = output::create(path.as_ref())?;

    for line in prepare(descriptions) {
        writeln!(out, "{}", line).map_err(|source| error::Error::WriteFile { source })?;
    }
    out.flush()
        .map_err(|source| error::Error::WriteFile { source })?;

    Ok(path.as_ref().to_path_buf())
}

/// Extract best hits of a BLAST report and write them, default output is next to input
pub fn parse_blast_output<P>(
    input: P,
    output: Option<std::path::PathBuf>,
) -> error::Result<std::path::PathBuf>
where
    P: AsRef<std::path::Path>,
{
    let output =
        output.unwrap_or_else(|| output::default_output(input.as_ref(), output::BLAST_SUFFIX));

    let hits = blast::parse(input)?;

    write(&hits, output)
}
