//! Replication directory management.
//!
//! This crate owns the folder-based layout of a replication set:
//!
//! - [`OutputManager`] drives write sessions into numbered subdirectories
//!   (`<base>/<prefix><N>/`, `N` strictly increasing from 1), rebuilding its
//!   writer set for every replication.
//! - [`Replication`] is a named bag of per-channel readers for one persisted
//!   run; [`InputManager`] discovers replication subdirectories and keeps the
//!   collection in a reproducible natural name order.
//!
//! The write phase and the read phase share nothing but the file system: an
//! `OutputManager` and an `InputManager` over the same base path are wired
//! independently, and their channel layouts must agree in count and order
//! (one [`WriterInit`] / [`ReaderInit`] pair per on-disk format).

pub mod error;
pub mod input;
pub mod naming;
pub mod output;
pub mod replication;

pub use error::StoreError;
pub use input::InputManager;
pub use naming::{natural_cmp, trailing_number};
pub use output::{ChannelWriter, OutputManager, WriterInit};
pub use replication::{ChannelReader, ReaderInit, Replication};
