//! Presentation back ends for aggregated statistics
//!
//! This crate implements the presentation side of the statistics layer:
//!
//! - [`presenters::BufferPresenters`]: an in-memory `PresenterManager` whose
//!   text, table, and chart views are plain inspectable buffers.
//! - [`charts`]: static bar-chart export for filled chart buffers, using the
//!   plotters library.
//!
//! # Example
//!
//! ```no_run
//! use rep_viz::charts::create_bar_chart;
//! use rep_viz::presenters::BufferPresenters;
//!
//! let mut presenters = BufferPresenters::new();
//! // ... have a statistic populate the views ...
//! for chart in &presenters.charts {
//!     create_bar_chart(chart, "win_rates.png").unwrap();
//! }
//! ```

pub mod charts;
pub mod error;
pub mod presenters;

pub use charts::{create_bar_chart, create_bar_chart_with_config, ChartConfig};
pub use error::VizError;
pub use presenters::{BufferPresenters, ChartBuffer, TableBuffer, TextBuffer};
