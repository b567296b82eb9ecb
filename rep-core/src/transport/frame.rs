//! Length-prefixed binary frame transport
//!
//! Unit of exchange: one frame payload (`Vec<u8>`). On disk every frame is
//! `[u32 little-endian payload length][payload bytes]`. A clean EOF (zero
//! bytes left where the length field should start) reads as `Ok(None)`; a
//! partial length field or a short payload is a format error, never silently
//! coerced into end-of-stream.

use crate::error::CoreError;
use crate::transport::{Transport, TransportIn, TransportOut};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;
use tracing::{debug, warn};

const LEN_FIELD: usize = 4;

/// Reads length-prefixed frames from a binary file.
#[derive(Debug, Default)]
pub struct FrameFileIn {
    inner: Option<BufReader<File>>,
}

impl FrameFileIn {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for FrameFileIn {
    fn open(&mut self, path: &Path) -> Result<(), CoreError> {
        self.close();
        let file = File::open(path).map_err(|source| CoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened frame file for reading");
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

impl TransportIn for FrameFileIn {
    type Unit = Vec<u8>;

    fn read(&mut self) -> Result<Option<Vec<u8>>, CoreError> {
        let reader = self
            .inner
            .as_mut()
            .ok_or_else(|| CoreError::Io(std::io::Error::other("no file opened for reading")))?;

        // The length field must be read whole or not at all.
        let mut len_buf = [0u8; LEN_FIELD];
        let mut filled = 0;
        while filled < LEN_FIELD {
            let n = reader.read(&mut len_buf[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        if filled == 0 {
            return Ok(None);
        }
        if filled < LEN_FIELD {
            return Err(CoreError::Format(format!(
                "truncated frame length: got {filled} of {LEN_FIELD} bytes"
            )));
        }

        let len = u32::from_le_bytes(len_buf) as usize;
        let mut payload = vec![0u8; len];
        reader.read_exact(&mut payload).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                CoreError::Format(format!("truncated frame payload: expected {len} bytes"))
            } else {
                CoreError::Io(e)
            }
        })?;
        Ok(Some(payload))
    }
}

/// Writes length-prefixed frames to a binary file.
#[derive(Debug, Default)]
pub struct FrameFileOut {
    inner: Option<BufWriter<File>>,
}

impl FrameFileOut {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for FrameFileOut {
    fn open(&mut self, path: &Path) -> Result<(), CoreError> {
        self.close();
        let file = File::create(path).map_err(|source| CoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened frame file for writing");
        self.inner = Some(BufWriter::new(file));
        Ok(())
    }

    fn close(&mut self) {
        if let Some(mut writer) = self.inner.take() {
            if let Err(e) = writer.flush() {
                warn!(error = %e, "failed to flush frame file on close");
            }
        }
    }

    fn is_open(&self) -> bool {
        self.inner.is_some()
    }
}

impl TransportOut for FrameFileOut {
    type Unit = Vec<u8>;

    fn write(&mut self, unit: &Vec<u8>) -> Result<(), CoreError> {
        let writer = self
            .inner
            .as_mut()
            .ok_or_else(|| CoreError::Io(std::io::Error::other("no file opened for writing")))?;
        let len = unit.len() as u32;
        writer.write_all(&len.to_le_bytes())?;
        writer.write_all(unit)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, bytes: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        (dir, path)
    }

    #[test]
    fn frames_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frames.bin");

        let mut out = FrameFileOut::new();
        out.open(&path).unwrap();
        out.write(&vec![1, 2, 3]).unwrap();
        out.write(&vec![]).unwrap();
        out.write(&vec![0xff; 12]).unwrap();
        out.close();

        let mut input = FrameFileIn::new();
        input.open(&path).unwrap();
        assert_eq!(input.read().unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(input.read().unwrap(), Some(vec![]));
        assert_eq!(input.read().unwrap(), Some(vec![0xff; 12]));
        assert_eq!(input.read().unwrap(), None);
    }

    #[test]
    fn empty_file_is_end_of_stream() {
        let (_dir, path) = scratch_file("empty.bin", &[]);
        let mut input = FrameFileIn::new();
        input.open(&path).unwrap();
        assert_eq!(input.read().unwrap(), None);
    }

    #[test]
    fn partial_length_field_is_a_format_error() {
        let (_dir, path) = scratch_file("short.bin", &[0x03, 0x00]);
        let mut input = FrameFileIn::new();
        input.open(&path).unwrap();
        let err = input.read().unwrap_err();
        assert!(matches!(err, CoreError::Format(_)), "got {err:?}");
    }

    #[test]
    fn short_payload_is_a_format_error() {
        // Length says 8 bytes, only 3 present.
        let mut bytes = 8u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[1, 2, 3]);
        let (_dir, path) = scratch_file("truncated.bin", &bytes);

        let mut input = FrameFileIn::new();
        input.open(&path).unwrap();
        let err = input.read().unwrap_err();
        assert!(matches!(err, CoreError::Format(_)), "got {err:?}");
    }

    #[test]
    fn read_after_close_is_an_io_error() {
        let (_dir, path) = scratch_file("closed.bin", &[]);
        let mut input = FrameFileIn::new();
        input.open(&path).unwrap();
        input.close();
        assert!(matches!(input.read().unwrap_err(), CoreError::Io(_)));
    }
}
