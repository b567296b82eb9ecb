//! # repsim - Batched Replication Framework
//!
//! A framework for persisting and analyzing batched stochastic simulation
//! runs: typed channel files, append-only replication folders, ordered
//! discovery, and per-channel statistics decoupled from presentation.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! repsim = "0.1"
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Includes `store` and `stats`
//! - `full`: All features enabled
//! - `store`: Replication folder management and discovery
//! - `stats`: Statistics aggregation and presentation hooks
//! - `viz`: Buffered presenters and chart export
//! - `casino`: The casino simulation example domain

// Re-export core (always available)
pub use rep_core as core;

#[cfg(feature = "store")]
pub use rep_store as store;

#[cfg(feature = "stats")]
pub use rep_stats as stats;

#[cfg(feature = "viz")]
pub use rep_viz as viz;

#[cfg(feature = "casino")]
pub use rep_casino as casino;

// Convenience re-exports of commonly used items
pub mod prelude {
    //! Commonly used types and traits

    pub use rep_core::{
        Codec, CoreError, Reader, ScalarFrameReader, ScalarFrameWriter, ScalarLineReader,
        ScalarLineWriter, Transport, TransportIn, TransportOut, Writer,
    };

    #[cfg(feature = "store")]
    pub use rep_store::{
        ChannelReader, ChannelWriter, InputManager, OutputManager, ReaderInit, Replication,
        StoreError, WriterInit,
    };

    #[cfg(feature = "stats")]
    pub use rep_stats::{
        ChannelStatistics, FolderStatistics, PresenterManager, Statistics, StatisticsManager,
        StatsError,
    };

    #[cfg(feature = "viz")]
    pub use rep_viz::{BufferPresenters, VizError};
}
