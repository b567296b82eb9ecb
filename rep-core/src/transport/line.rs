//! Line-oriented text file transport
//!
//! Unit of exchange: one line (a `String` without the terminator). Writing
//! appends `line + '\n'`; reading returns the next line or `Ok(None)` at EOF.

use crate::error::CoreError;
use crate::transport::{Transport, TransportIn, TransportOut};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Reads a text file one line at a time.
#[derive(Debug, Default)]
pub struct LineFileIn {
    inner: Option<BufReader<File>>,
}

impl LineFileIn {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for LineFileIn {
    fn open(&mut self, path: &Path) -> Result<(), CoreError> {
        self.close();
        let file = File::open(path).map_err(|source| CoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened text file for reading");
        self.inner = Some(BufReader::new(file));
        Ok(())
    }

    fn close(&mut self) {
        self.inner = None;
    }

    fn is_open(&self) -> bool {
        self.inner.is_some()
    }
}

impl TransportIn for LineFileIn {
    type Unit = String;

    fn read(&mut self) -> Result<Option<String>, CoreError> {
        let reader = self
            .inner
            .as_mut()
            .ok_or_else(|| CoreError::Io(std::io::Error::other("no file opened for reading")))?;

        let mut line = String::new();
        let n = reader.read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Writes a text file one line at a time, appending the terminator itself.
#[derive(Debug, Default)]
pub struct LineFileOut {
    inner: Option<BufWriter<File>>,
}

impl LineFileOut {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for LineFileOut {
    fn open(&mut self, path: &Path) -> Result<(), CoreError> {
        self.close();
        let file = File::create(path).map_err(|source| CoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened text file for writing");
        self.inner = Some(BufWriter::new(file));
        Ok(())
    }

    fn close(&mut self) {
        if let Some(mut writer) = self.inner.take() {
            if let Err(e) = writer.flush() {
                warn!(error = %e, "failed to flush text file on close");
            }
        }
    }

    fn is_open(&self) -> bool {
        self.inner.is_some()
    }
}

impl TransportOut for LineFileOut {
    type Unit = String;

    fn write(&mut self, unit: &String) -> Result<(), CoreError> {
        let writer = self
            .inner
            .as_mut()
            .ok_or_else(|| CoreError::Io(std::io::Error::other("no file opened for writing")))?;
        writer.write_all(unit.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
