//! Summary snapshots and JSON export
//!
//! A summary is a plain serializable snapshot of one statistic's aggregate
//! state, decoupled from any presentation concern. The JSON form is meant for
//! notebooks and external tooling.

use crate::error::StatsError;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Aggregate state of one channel.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelSummary {
    pub label: String,
    pub samples: usize,
    pub mean: f64,
}

/// Aggregate state of one statistic across all its channels.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsSummary {
    pub title: String,
    pub channels: Vec<ChannelSummary>,
}

/// Export a summary as JSON.
///
/// # Example
/// ```no_run
/// # use rep_stats::summary::{export_summary_json, StatisticsSummary};
/// # let summary = StatisticsSummary { title: String::new(), channels: vec![] };
/// export_summary_json(&summary, "results/summary.json", true)?;
/// # Ok::<(), rep_stats::StatsError>(())
/// ```
pub fn export_summary_json(
    summary: &StatisticsSummary,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), StatsError> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(writer, summary)?;
    } else {
        serde_json::to_writer(writer, summary)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_exports_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");

        let summary = StatisticsSummary {
            title: "Win Rates".to_string(),
            channels: vec![ChannelSummary {
                label: "Slots".to_string(),
                samples: 3,
                mean: 0.21,
            }],
        };
        export_summary_json(&summary, &path, true).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["title"], "Win Rates");
        assert_eq!(value["channels"][0]["samples"], 3);
        assert_eq!(value["channels"][0]["mean"], 0.21);
    }
}
