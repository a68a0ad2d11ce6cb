/* std use */
use std::io::Write;

/* project use */
use crate::error;
use crate::output;

use super::Record;

/// Write records in fastq format, separator line is a lone '+'
pub fn write_records<'a, W, I>(out: &mut W, records: I) -> std::io::Result<()>
where
    W: std::io::Write,
    I: IntoIterator<Item = &'a Record>,
{
    for record in records {
        writeln!(out, "{}\n{}\n+\n{}", record.header, record.sequence, record.quality)?;
    }

    Ok(())
}

/// Write collection at destination, parent directories are created and an existing file is overwrite
pub fn write<'a, P, I>(records: I, destination: P) -> error::Result<std::path::PathBuf>
where
    P: AsRef<std::path::Path>,
    I: IntoIterator<Item = &'a Record>,
{
    let mut out = output::create(destination.as_ref())?;

    write_records(&mut out, records).map_err(|source| error::Error::WriteFile { source })?;
    out.flush()
        .map_err(|source| error::Error::WriteFile { source })?;

    Ok(destination.as_ref().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format() {
        let records = vec![
            Record::new("@r1".to_string(), "ACGT".to_string(), "IIII".to_string()),
            Record::new("@r2".to_string(), "GG".to_string(), "!!".to_string()),
        ];

        let mut out = Vec::new();
        write_records(&mut out, &records).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "@r1\nACGT\n+\nIIII\n@r2\nGG\n+\n!!\n"
        );
    }

    #[test]
    fn round_trip() {
        let collection = crate::fastq::read(crate::tests::generate_fastq(42, 100, 50)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("out.fastq");

        assert_eq!(write(&collection, &path).unwrap(), path);

        let reread = crate::fastq::read(&path).unwrap();
        assert_eq!(reread, collection);
        assert!(reread.headers().eq(collection.headers()));
    }

    #[test]
    fn overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.fastq");
        std::fs::write(&path, "previous content which is longer than the new one\n").unwrap();

        let record = Record::new("@r".to_string(), "A".to_string(), "I".to_string());
        write(std::iter::once(&record), &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "@r\nA\n+\nI\n");
    }
}
