//! Statistics aggregation over replication sets.
//!
//! This crate sits on top of `rep-store` discovery and folds loaded
//! replications into running per-channel aggregates:
//!
//! - [`Statistics`]: the processing contract (load folders, process
//!   replications, clear, present).
//! - [`ChannelStatistics`]: the per-channel mean aggregator; generic over a
//!   [`rep_store::ReaderInit`], so the same statistic works over binary and
//!   text replication sets.
//! - [`StatisticsManager`]: a name-keyed registry; failures in one statistic
//!   never abort its siblings.
//! - [`presenter`]: the capability traits a front end implements to receive
//!   text, table, and bar-chart output. Presentation is injected explicitly,
//!   never resolved through a global.
//! - [`summary`]: serializable snapshots and JSON export.

pub mod error;
pub mod folder;
pub mod manager;
pub mod presenter;
pub mod statistics;
pub mod summary;

pub use error::StatsError;
pub use folder::FolderStatistics;
pub use manager::StatisticsManager;
pub use presenter::{ChartView, PresenterManager, TableView, TextView};
pub use statistics::{ChannelStatistics, Statistics};
pub use summary::{export_summary_json, ChannelSummary, StatisticsSummary};
