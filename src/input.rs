//! Whole file input, memory mapped and read line by line.

/* crate use */
use bstr::ByteSlice;

/* project use */
use crate::error;

/// Input represent a file memory mapped in read only mode
#[derive(Debug)]
pub struct Input {
    mem: Option<memmap2::Mmap>,
}

impl Input {
    /// Map the file indicate by path
    pub fn open<P>(path: P) -> error::Result<Self>
    where
        P: AsRef<std::path::Path>,
    {
        let file_length = path
            .as_ref()
            .metadata()
            .map_err(|source| error::Error::MetaDataFile { source })?
            .len();

        let file =
            std::fs::File::open(path.as_ref()).map_err(|source| error::Error::OpenFile { source })?;

        // an empty file can't be mapped
        if file_length == 0 {
            return Ok(Self { mem: None });
        }

        let mem = unsafe {
            memmap2::MmapOptions::new()
                .len(file_length as usize)
                .map(&file)
                .map_err(|source| error::Error::MapFile { source })?
        };

        log::debug!(
            "map {} bytes of {}",
            file_length,
            path.as_ref().display()
        );

        Ok(Self { mem: Some(mem) })
    }

    /// Acces to data owned by input
    pub fn data(&self) -> &[u8] {
        match &self.mem {
            Some(mem) => &mem[..],
            None => &[],
        }
    }

    /// Get length of input
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// Return true if the input is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over lines, line terminator (`\n` or `\r\n`) is removed
    pub fn lines(&self) -> impl Iterator<Item = std::borrow::Cow<'_, str>> {
        self.data().lines().map(|line| line.to_str_lossy())
    }
}
