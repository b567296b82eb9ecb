//! One persisted replication and its readers

use crate::error::StoreError;
use rep_core::{Codec, CoreError, Reader, Transport, TransportIn};
use std::path::{Path, PathBuf};

/// The reader surface the statistics layer needs from a channel reader.
pub trait ChannelReader {
    /// Load the whole channel file into the reader's buffer.
    fn load(&mut self) -> Result<(), CoreError>;

    /// The buffered scalar sequence, in file order.
    fn values(&self) -> &[f64];

    /// Drop the buffered sequence.
    fn flush(&mut self);
}

impl<C, T> ChannelReader for Reader<C, T>
where
    C: Codec<Value = f64>,
    T: TransportIn<Unit = C::Unit> + Transport,
{
    fn load(&mut self) -> Result<(), CoreError> {
        Reader::load(self)
    }

    fn values(&self) -> &[f64] {
        self.data()
    }

    fn flush(&mut self) {
        Reader::flush(self)
    }
}

/// Builds the reader set for one replication directory.
pub trait ReaderInit {
    type Reader;

    fn init(&self, dir: &Path) -> Result<Vec<Self::Reader>, StoreError>;
}

/// A named, directory-scoped bag of readers for one persisted run.
///
/// Readers are registered once during discovery and addressed by their fixed
/// channel position afterwards.
#[derive(Debug)]
pub struct Replication<R> {
    name: String,
    base_path: PathBuf,
    readers: Vec<R>,
}

impl<R> Replication<R> {
    pub fn new(name: impl Into<String>, base_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            base_path: base_path.into(),
            readers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Append a reader; channel order follows registration order.
    pub fn register_reader(&mut self, reader: R) {
        self.readers.push(reader);
    }

    pub fn reader_count(&self) -> usize {
        self.readers.len()
    }

    pub fn reader(&self, index: usize) -> Result<&R, StoreError> {
        let count = self.readers.len();
        self.readers
            .get(index)
            .ok_or(StoreError::IndexOutOfRange { index, count })
    }

    pub fn reader_mut(&mut self, index: usize) -> Result<&mut R, StoreError> {
        let count = self.readers.len();
        self.readers
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, count })
    }
}
