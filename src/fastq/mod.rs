/* mod declaration */
pub mod reader;
pub mod writer;

pub use reader::*;
pub use writer::*;

/* crate use */
use rustc_hash::FxHashMap;

/* project use */
use crate::error;

/* type declaration */
/// Record store a fastq record all field is public, separator line isn't keep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub header: String,
    pub sequence: String,
    pub quality: String,
}

impl Record {
    pub fn new(header: String, sequence: String, quality: String) -> Self {
        Self {
            header,
            sequence,
            quality,
        }
    }

    /// Check sequence and quality have same length
    pub fn check(&self) -> error::Result<()> {
        if self.sequence.len() != self.quality.len() {
            Err(error::Error::LengthMismatch {
                sequence: self.sequence.len(),
                quality: self.quality.len(),
            })
        } else {
            Ok(())
        }
    }
}

/// Ordered collection of record indexed by header
///
/// Records are keep in insertion order. Insert a record with an header already present replace
/// previous record but keep its position.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    records: Vec<Record>,
    index: FxHashMap<String, usize>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert record, return the replaced record if header was already present
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        match self.index.get(&record.header) {
            Some(&pos) => Some(std::mem::replace(&mut self.records[pos], record)),
            None => {
                self.index.insert(record.header.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    /// Get record associate to header
    pub fn get(&self, header: &str) -> Option<&Record> {
        self.index.get(header).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, header: &str) -> bool {
        self.index.contains_key(header)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over record in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Iterate over header in insertion order
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.header.as_str())
    }
}

impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for Collection {}

impl FromIterator<Record> for Collection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for record in iter {
            collection.insert(record);
        }
        collection
    }
}

impl IntoIterator for Collection {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
