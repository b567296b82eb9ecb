//! Output manager: numbered write sessions
//!
//! An [`OutputManager`] drives the write phase of a batch of replications.
//! Each call to [`OutputManager::new_replication`] tears down the active
//! writer set, creates the next numbered subdirectory under the base path,
//! and asks the [`WriterInit`] to build one writer per channel bound into
//! that directory. The replication counter only ever moves forward: names
//! are never reused, even when an earlier directory disappears externally.

use crate::error::StoreError;
use rep_core::{Codec, Transport, TransportOut, Writer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The writer surface the output manager needs from a channel writer.
pub trait ChannelWriter {
    /// Close the writer's transport; must be safe to call repeatedly.
    fn close(&mut self);
}

impl<C, T> ChannelWriter for Writer<C, T>
where
    C: Codec,
    T: TransportOut<Unit = C::Unit> + Transport,
{
    fn close(&mut self) {
        Writer::close(self)
    }
}

/// Builds the writer set for one replication directory.
///
/// The returned writers define the channel count and positional order of the
/// replication on disk; the reading side's [`crate::ReaderInit`] must agree
/// with it.
pub trait WriterInit {
    type Writer: ChannelWriter;

    fn init(&self, dir: &Path) -> Result<Vec<Self::Writer>, StoreError>;
}

/// Orchestrates writer sets across successive numbered replications.
#[derive(Debug)]
pub struct OutputManager<F: WriterInit> {
    init: F,
    writers: Vec<F::Writer>,
    base_path: PathBuf,
    prefix: String,
    counter: u64,
    current_name: Option<String>,
    current_path: Option<PathBuf>,
}

impl<F: WriterInit> OutputManager<F> {
    pub fn new(base_path: impl Into<PathBuf>, init: F) -> Self {
        Self {
            init,
            writers: Vec::new(),
            base_path: base_path.into(),
            prefix: String::from("Replication"),
            counter: 1,
            current_name: None,
            current_path: None,
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn set_base_path(&mut self, path: impl Into<PathBuf>) {
        self.base_path = path.into();
    }

    /// Replication name prefix; directories become `<prefix><counter>`.
    pub fn name(&self) -> &str {
        &self.prefix
    }

    pub fn set_name(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Name of the active replication, if one has been started.
    pub fn current_replication_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    /// Directory of the active replication, if one has been started.
    pub fn current_replication_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Start the next replication.
    ///
    /// Closes and discards the active writer set, creates the numbered
    /// subdirectory (an already-existing directory is reused; only a failed
    /// creation is an error), and installs the writer set built by the
    /// initializer. The counter advances on every call and is never reused.
    pub fn new_replication(&mut self) -> Result<(), StoreError> {
        self.close_all_writers();
        self.writers.clear();

        let name = format!("{}{}", self.prefix, self.counter);
        self.counter += 1;

        let dir = self.base_path.join(&name);
        if !dir.is_dir() {
            fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }

        self.writers = self.init.init(&dir)?;
        info!(
            replication = %name,
            channels = self.writers.len(),
            "started replication"
        );
        self.current_name = Some(name);
        self.current_path = Some(dir);
        Ok(())
    }

    /// Append a writer to the active set.
    pub fn register_writer(&mut self, writer: F::Writer) {
        self.writers.push(writer);
    }

    pub fn writer_count(&self) -> usize {
        self.writers.len()
    }

    /// The writer at `index`, in channel order.
    pub fn writer_mut(&mut self, index: usize) -> Result<&mut F::Writer, StoreError> {
        let count = self.writers.len();
        self.writers
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, count })
    }

    /// Close every registered writer. Never fails.
    pub fn close_all_writers(&mut self) {
        if !self.writers.is_empty() {
            debug!(writers = self.writers.len(), "closing writer set");
        }
        for writer in &mut self.writers {
            writer.close();
        }
    }
}
