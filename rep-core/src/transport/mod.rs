//! Raw storage transports
//!
//! A transport performs open/close/read/write against one storage medium and
//! knows nothing about the values travelling through it. Two media are
//! provided: line-oriented text files ([`line`]) and length-prefixed binary
//! frame files ([`frame`]). Codecs sit on top and map domain values onto the
//! transport's unit of exchange.

pub mod frame;
pub mod line;

use crate::error::CoreError;
use std::path::Path;

/// Common open/close surface shared by every transport.
///
/// `open` fails with an I/O error when the target cannot be opened for the
/// requested mode. `close` is idempotent and never fails; problems while
/// flushing are logged and swallowed.
pub trait Transport {
    fn open(&mut self, path: &Path) -> Result<(), CoreError>;

    fn close(&mut self);

    fn is_open(&self) -> bool;
}

/// A transport that produces units of exchange.
pub trait TransportIn: Transport {
    type Unit;

    /// Read the next unit. `Ok(None)` signals a clean end of stream.
    fn read(&mut self) -> Result<Option<Self::Unit>, CoreError>;
}

/// A transport that consumes units of exchange.
pub trait TransportOut: Transport {
    type Unit;

    fn write(&mut self, unit: &Self::Unit) -> Result<(), CoreError>;
}
