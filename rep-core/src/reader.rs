//! Typed channel reader
//!
//! A [`Reader`] mirrors the writer: one codec, one input transport, one
//! channel file. `load` pulls the whole sequence into an in-memory buffer and
//! is deliberately forgiving — a damaged tail keeps whatever was read before
//! the damage, so one truncated file never discards an entire replication.

use crate::codec::Codec;
use crate::error::CoreError;
use crate::transport::{Transport, TransportIn};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Loads a typed value sequence through a codec from a transport.
pub struct Reader<C: Codec, T: Transport> {
    codec: C,
    transport: T,
    path: Option<PathBuf>,
    data: Vec<<C as Codec>::Value>,
}

impl<C, T> Reader<C, T>
where
    C: Codec,
    T: TransportIn<Unit = C::Unit>,
{
    pub fn new(codec: C, transport: T) -> Self {
        Self {
            codec,
            transport,
            path: None,
            data: Vec::new(),
        }
    }

    pub fn with_path(codec: C, transport: T, path: impl Into<PathBuf>) -> Self {
        Self {
            codec,
            transport,
            path: Some(path.into()),
            data: Vec::new(),
        }
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn ensure_open(&mut self) -> Result<(), CoreError> {
        if self.transport.is_open() {
            return Ok(());
        }
        let path = self.path.as_deref().ok_or(CoreError::PathUnset)?;
        self.transport.open(path)
    }

    /// Read one value, opening the bound path on first use.
    /// `Ok(None)` signals end-of-stream; decode failures are format errors.
    pub fn read_one(&mut self) -> Result<Option<C::Value>, CoreError> {
        self.ensure_open()?;
        match self.transport.read()? {
            Some(unit) => Ok(Some(self.codec.decode(&unit)?)),
            None => Ok(None),
        }
    }

    /// Load the entire sequence into the buffer, replacing any prior content.
    ///
    /// Fails if no path is configured or the file cannot be opened. Errors
    /// mid-stream (truncated frame, malformed unit) are logged and end the
    /// load early with the values read so far retained. The transport is
    /// closed on every exit path.
    pub fn load(&mut self) -> Result<(), CoreError> {
        self.ensure_open()?;
        self.flush();

        loop {
            match self.read_one() {
                Ok(Some(value)) => self.data.push(value),
                Ok(None) => break,
                Err(e) => {
                    warn!(
                        path = ?self.path,
                        loaded = self.data.len(),
                        error = %e,
                        "load ended early, keeping partial data"
                    );
                    break;
                }
            }
        }

        debug!(path = ?self.path, loaded = self.data.len(), "channel loaded");
        self.transport.close();
        Ok(())
    }

    /// The buffered sequence, in file order.
    pub fn data(&self) -> &[C::Value] {
        &self.data
    }

    /// Drop the buffered sequence.
    pub fn flush(&mut self) {
        self.data.clear();
    }

    /// Close the underlying transport. Safe to call repeatedly.
    pub fn close(&mut self) {
        self.transport.close();
    }
}

impl<C, T> std::fmt::Debug for Reader<C, T>
where
    C: Codec + std::fmt::Debug,
    T: Transport + std::fmt::Debug,
    C::Value: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader")
            .field("codec", &self.codec)
            .field("transport", &self.transport)
            .field("path", &self.path)
            .field("data", &self.data)
            .finish()
    }
}

impl<C: Codec, T: Transport> Drop for Reader<C, T> {
    fn drop(&mut self) {
        self.transport.close();
    }
}
