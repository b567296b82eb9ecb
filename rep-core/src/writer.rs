//! Typed channel writer
//!
//! A [`Writer`] binds one codec to one output transport and persists a typed
//! value sequence to a single channel file. The target is opened lazily on
//! the first write so a writer set can be constructed up front and only touch
//! the file system for channels that actually receive data.

use crate::codec::Codec;
use crate::error::CoreError;
use crate::transport::{Transport, TransportOut};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persists a typed value sequence through a codec onto a transport.
#[derive(Debug)]
pub struct Writer<C, T: Transport> {
    codec: C,
    transport: T,
    path: Option<PathBuf>,
}

impl<C, T> Writer<C, T>
where
    C: Codec,
    T: TransportOut<Unit = C::Unit>,
{
    pub fn new(codec: C, transport: T) -> Self {
        Self {
            codec,
            transport,
            path: None,
        }
    }

    pub fn with_path(codec: C, transport: T, path: impl Into<PathBuf>) -> Self {
        Self {
            codec,
            transport,
            path: Some(path.into()),
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

    /// Write one value, opening the bound path on first use.
    pub fn write(&mut self, value: &C::Value) -> Result<(), CoreError> {
        self.ensure_open()?;
        let unit = self.codec.encode(value)?;
        self.transport.write(&unit)
    }

    /// Write every value in order, opening the bound path once.
    pub fn write_all<'a, I>(&mut self, values: I) -> Result<(), CoreError>
    where
        I: IntoIterator<Item = &'a C::Value>,
        C::Value: 'a,
    {
        self.ensure_open()?;
        for value in values {
            let unit = self.codec.encode(value)?;
            self.transport.write(&unit)?;
        }
        Ok(())
    }

    /// Close the underlying transport. Safe to call repeatedly; flush
    /// problems are logged by the transport, never propagated.
    pub fn close(&mut self) {
        if self.transport.is_open() {
            debug!(path = ?self.path, "closing channel writer");
        }
        self.transport.close();
    }
}

impl<C, T: Transport> Drop for Writer<C, T> {
    fn drop(&mut self) {
        self.transport.close();
    }
}
