//! Input manager: replication discovery
//!
//! An [`InputManager`] scans a base path for replication subdirectories,
//! instantiates a [`Replication`] per directory via its [`ReaderInit`], and
//! keeps the collection in the natural name order defined by
//! [`crate::naming`]. Replications are owned by the manager and referenced
//! externally by index or name only, so clearing the collection can never
//! leave a dangling handle behind.

use crate::error::StoreError;
use crate::naming::{natural_cmp, trailing_number};
use crate::replication::{ReaderInit, Replication};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Discovers and owns the replication collection under one base path.
#[derive(Debug)]
pub struct InputManager<F: ReaderInit> {
    init: F,
    base_path: PathBuf,
    replications: Vec<Replication<F::Reader>>,
}

impl<F: ReaderInit> InputManager<F> {
    pub fn new(base_path: impl Into<PathBuf>, init: F) -> Self {
        Self {
            init,
            base_path: base_path.into(),
            replications: Vec::new(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn set_base_path(&mut self, path: impl Into<PathBuf>) {
        self.base_path = path.into();
    }

    pub fn len(&self) -> usize {
        self.replications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replications.is_empty()
    }

    fn build_replication(&self, name: &str) -> Result<Replication<F::Reader>, StoreError> {
        let dir = self.base_path.join(name);
        let mut replication = Replication::new(name, &dir);
        for reader in self.init.init(&dir)? {
            replication.register_reader(reader);
        }
        debug!(
            replication = %name,
            channels = replication.reader_count(),
            "initialized replication"
        );
        Ok(replication)
    }

    /// Names of the immediate subdirectories of the base path, unsorted.
    fn subdirectories(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    /// Discover every replication subdirectory, then sort the collection
    /// into natural name order.
    pub fn load_replications(&mut self) -> Result<(), StoreError> {
        for name in self.subdirectories()? {
            let replication = self.build_replication(&name)?;
            self.replications.push(replication);
        }
        self.sort_replications();
        info!(
            base_path = %self.base_path.display(),
            replications = self.replications.len(),
            "discovered replications"
        );
        Ok(())
    }

    /// Load one named replication subdirectory.
    pub fn load_replication(&mut self, name: &str) -> Result<(), StoreError> {
        let dir = self.base_path.join(name);
        if !dir.is_dir() {
            return Err(StoreError::ReplicationNotFound(name.to_string()));
        }
        let replication = self.build_replication(name)?;
        self.replications.push(replication);
        Ok(())
    }

    /// Load every replication whose trailing number lies in `[start, end]`.
    ///
    /// A subdirectory without a trailing number aborts the whole batch: the
    /// base path is then not a pure replication set and silently skipping
    /// entries would make the loaded range unpredictable.
    pub fn load_batch(&mut self, start: u64, end: u64) -> Result<(), StoreError> {
        if end < start {
            return Err(StoreError::InvalidRange { start, end });
        }
        for name in self.subdirectories()? {
            let number =
                trailing_number(&name).ok_or_else(|| StoreError::Discovery(name.clone()))?;
            if (start..=end).contains(&number) {
                let replication = self.build_replication(&name)?;
                self.replications.push(replication);
            }
        }
        Ok(())
    }

    /// Load exactly the named replications, in the given order.
    pub fn load_named(&mut self, names: &[String]) -> Result<(), StoreError> {
        for name in names {
            self.load_replication(name)?;
        }
        Ok(())
    }

    /// Re-sort the collection into natural name order.
    pub fn sort_replications(&mut self) {
        self.replications
            .sort_by(|a, b| natural_cmp(a.name(), b.name()));
    }

    pub fn replications(&self) -> &[Replication<F::Reader>] {
        &self.replications
    }

    pub fn replication(&self, index: usize) -> Result<&Replication<F::Reader>, StoreError> {
        let count = self.replications.len();
        self.replications
            .get(index)
            .ok_or(StoreError::IndexOutOfRange { index, count })
    }

    pub fn replication_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut Replication<F::Reader>, StoreError> {
        let count = self.replications.len();
        self.replications
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, count })
    }

    pub fn replication_by_name(&self, name: &str) -> Result<&Replication<F::Reader>, StoreError> {
        self.replications
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| StoreError::ReplicationNotFound(name.to_string()))
    }

    /// Drop the whole collection, and with it every registered reader.
    pub fn clear_replications(&mut self) {
        self.replications.clear();
    }
}
