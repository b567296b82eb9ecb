//! Typed per-channel persistence for simulation replications.
//!
//! This crate provides the serialization layer of the replication store:
//!
//! - [`transport`]: raw open/close/read/write against one storage medium —
//!   line-oriented text files or length-prefixed binary frame files.
//! - [`codec`]: the bidirectional mapping between a domain value and a
//!   transport's unit of exchange.
//! - [`Writer`] / [`Reader`]: engines binding one codec to one transport to
//!   persist and reload a typed value sequence for a single channel file.
//!
//! The pairing of value, codec, and transport is static (generic
//! parameters); the writing side and reading side of a channel must agree on
//! the codec type. End-of-stream is modeled as `Ok(None)`, never as an error.
//!
//! # Example
//!
//! ```no_run
//! use rep_core::{Reader, ScalarFrameCodec, Writer};
//! use rep_core::transport::frame::{FrameFileIn, FrameFileOut};
//!
//! let mut writer = Writer::with_path(ScalarFrameCodec, FrameFileOut::new(), "wins.bin");
//! writer.write(&0.52)?;
//! writer.close();
//!
//! let mut reader = Reader::with_path(ScalarFrameCodec, FrameFileIn::new(), "wins.bin");
//! reader.load()?;
//! assert_eq!(reader.data(), &[0.52]);
//! # Ok::<(), rep_core::CoreError>(())
//! ```

pub mod codec;
pub mod error;
pub mod logging;
pub mod reader;
pub mod transport;
pub mod writer;

pub use codec::{Codec, ScalarFrameCodec, ScalarLineCodec};
pub use error::CoreError;
pub use logging::{init_logging, init_logging_with_level};
pub use reader::Reader;
pub use transport::{Transport, TransportIn, TransportOut};
pub use writer::Writer;

use transport::frame::{FrameFileIn, FrameFileOut};
use transport::line::{LineFileIn, LineFileOut};

/// Binary scalar channel writer (16-byte frames on disk).
pub type ScalarFrameWriter = Writer<ScalarFrameCodec, FrameFileOut>;
/// Binary scalar channel reader.
pub type ScalarFrameReader = Reader<ScalarFrameCodec, FrameFileIn>;
/// Text scalar channel writer (one two-decimal value per line).
pub type ScalarLineWriter = Writer<ScalarLineCodec, LineFileOut>;
/// Text scalar channel reader.
pub type ScalarLineReader = Reader<ScalarLineCodec, LineFileIn>;

impl ScalarFrameWriter {
    pub fn frame(path: impl Into<std::path::PathBuf>) -> Self {
        Writer::with_path(ScalarFrameCodec, FrameFileOut::new(), path)
    }
}

impl ScalarFrameReader {
    pub fn frame(path: impl Into<std::path::PathBuf>) -> Self {
        Reader::with_path(ScalarFrameCodec, FrameFileIn::new(), path)
    }
}

impl ScalarLineWriter {
    pub fn line(path: impl Into<std::path::PathBuf>) -> Self {
        Writer::with_path(ScalarLineCodec, LineFileOut::new(), path)
    }
}

impl ScalarLineReader {
    pub fn line(path: impl Into<std::path::PathBuf>) -> Self {
        Reader::with_path(ScalarLineCodec, LineFileIn::new(), path)
    }
}
