//! Output path helpers.

/* project use */
use crate::error;

/// Suffix of converted fasta file
pub const FASTA_SUFFIX: &str = "_oneline.fasta";

/// Suffix of blast best hit report
pub const BLAST_SUFFIX: &str = "_oneline.txt";

/// Build an output path next to input, extension of input is replaced by suffix
pub fn default_output<P>(input: P, suffix: &str) -> std::path::PathBuf
where
    P: AsRef<std::path::Path>,
{
    let input = input.as_ref();

    let mut name = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    name.push(suffix);

    input.with_file_name(name)
}

/// Create all missing parent directory of path
pub fn create_parent<P>(path: P) -> error::Result<()>
where
    P: AsRef<std::path::Path>,
{
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| error::Error::CreateDir { source })
        }
        _ => Ok(()),
    }
}

/// Create file at path, parent directories included, and wrap it in a buffer
pub fn create<P>(path: P) -> error::Result<std::io::BufWriter<std::fs::File>>
where
    P: AsRef<std::path::Path>,
{
    create_parent(path.as_ref())?;

    let file =
        std::fs::File::create(path.as_ref()).map_err(|source| error::Error::CreateFile { source })?;

    Ok(std::io::BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_extension() {
        assert_eq!(
            default_output("data/reads.fasta", FASTA_SUFFIX),
            std::path::PathBuf::from("data/reads_oneline.fasta")
        );
        assert_eq!(
            default_output("report.blast.txt", BLAST_SUFFIX),
            std::path::PathBuf::from("report.blast_oneline.txt")
        );
        assert_eq!(
            default_output("no_extension", FASTA_SUFFIX),
            std::path::PathBuf::from("no_extension_oneline.fasta")
        );
    }

    #[test]
    fn create_nested() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("out.txt");

        create(&path).unwrap();

        assert!(path.exists());
    }
}
