//! The statistics contract and the per-channel mean aggregator

use crate::error::StatsError;
use crate::presenter::PresenterManager;
use crate::summary::{ChannelSummary, StatisticsSummary};
use rep_store::{ChannelReader, InputManager, ReaderInit};
use std::path::Path;
use tracing::debug;

/// One statistic over a replication set.
///
/// Implementations own their input manager and their aggregate state; the
/// [`crate::StatisticsManager`] drives them uniformly through this trait.
pub trait Statistics {
    /// Point the statistic (and its input manager) at a results directory.
    fn set_base_path(&mut self, path: &Path);

    /// Load exactly the named replication folders, in the given order.
    fn load_folders(&mut self, names: &[String]) -> Result<(), StatsError>;

    /// Process every currently loaded replication, by position.
    fn process_all_replications(&mut self) -> Result<(), StatsError>;

    /// Fold one loaded replication into the aggregates.
    fn process_replication(&mut self, index: usize) -> Result<(), StatsError>;

    /// Empty the aggregates and drop the loaded replication collection.
    /// This is the only way aggregates ever shrink.
    fn clear_data(&mut self);

    /// Populate presentation views from the aggregate state.
    fn setup_presenters(&self, presenters: &mut dyn PresenterManager) -> Result<(), StatsError>;

    /// Snapshot of the aggregate state for reporting and export.
    fn summary(&self) -> StatisticsSummary;
}

/// Per-channel mean statistics over scalar replication data.
///
/// Owns one [`InputManager`] and one aggregate vector per channel. Processing
/// a replication loads each channel file, appends its values to the matching
/// aggregate, and flushes the reader again, so peak memory stays bounded to
/// one replication while the aggregates persist for the instance's lifetime.
pub struct ChannelStatistics<F: ReaderInit> {
    input: InputManager<F>,
    labels: Vec<String>,
    aggregates: Vec<Vec<f64>>,
    title: String,
    scale: (f32, f32),
    display_factor: f64,
    display_suffix: &'static str,
}

impl<F> ChannelStatistics<F>
where
    F: ReaderInit,
    F::Reader: ChannelReader,
{
    pub fn new(init: F, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let aggregates = vec![Vec::new(); labels.len()];
        Self {
            input: InputManager::new("", init),
            labels,
            aggregates,
            title: String::new(),
            scale: (0.0, 1.0),
            display_factor: 1.0,
            display_suffix: "",
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_scale(mut self, min: f32, max: f32) -> Self {
        self.scale = (min, max);
        self
    }

    /// Display means as percentages (factor 100, `%` suffix).
    pub fn as_percentages(mut self) -> Self {
        self.display_factor = 100.0;
        self.display_suffix = "%";
        self
    }

    pub fn channel_count(&self) -> usize {
        self.labels.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Arithmetic mean of one channel's aggregate vector.
    /// Returns 0.0 for an out-of-range index or an empty vector; never fails.
    pub fn mean(&self, channel: usize) -> f64 {
        match self.aggregates.get(channel) {
            Some(values) if !values.is_empty() => {
                values.iter().sum::<f64>() / values.len() as f64
            }
            _ => 0.0,
        }
    }

    /// Number of aggregated samples for one channel (0 if out of range).
    pub fn sample_count(&self, channel: usize) -> usize {
        self.aggregates.get(channel).map_or(0, Vec::len)
    }

    /// Direct access to the discovery layer, e.g. for `load_batch`.
    pub fn input_manager_mut(&mut self) -> &mut InputManager<F> {
        &mut self.input
    }

    fn display_value(&self, channel: usize) -> String {
        format!(
            "{:.2}{}",
            self.mean(channel) * self.display_factor,
            self.display_suffix
        )
    }
}

impl<F> Statistics for ChannelStatistics<F>
where
    F: ReaderInit,
    F::Reader: ChannelReader,
{
    fn set_base_path(&mut self, path: &Path) {
        self.input.set_base_path(path);
    }

    fn load_folders(&mut self, names: &[String]) -> Result<(), StatsError> {
        self.input.load_named(names)?;
        Ok(())
    }

    fn process_all_replications(&mut self) -> Result<(), StatsError> {
        for index in 0..self.input.len() {
            self.process_replication(index)?;
        }
        Ok(())
    }

    fn process_replication(&mut self, index: usize) -> Result<(), StatsError> {
        let replication = self.input.replication_mut(index)?;
        let channels = replication.reader_count();
        for i in 0..channels {
            let reader = replication.reader_mut(i)?;
            reader.load()?;
            if let Some(aggregate) = self.aggregates.get_mut(i) {
                aggregate.extend_from_slice(reader.values());
            }
            reader.flush();
        }
        debug!(replication = index, channels, "folded replication into aggregates");
        Ok(())
    }

    fn clear_data(&mut self) {
        for aggregate in &mut self.aggregates {
            aggregate.clear();
        }
        self.input.clear_replications();
    }

    fn setup_presenters(&self, presenters: &mut dyn PresenterManager) -> Result<(), StatsError> {
        let text = presenters.create_text_view();
        let lines: Vec<String> = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| format!("{label}: {}", self.display_value(i)))
            .collect();
        text.set_text(&lines.join("\n"));

        let table = presenters.create_table_view();
        table.add_row(vec!["Channel".to_string(), "Mean".to_string()]);
        for (i, label) in self.labels.iter().enumerate() {
            table.add_row(vec![label.clone(), self.display_value(i)]);
        }

        let chart = presenters.create_chart_view();
        chart.set_data(
            (0..self.labels.len())
                .map(|i| (self.mean(i) * self.display_factor) as f32)
                .collect(),
        );
        chart.set_labels(self.labels.clone());
        chart.set_title(&self.title);
        chart.set_scale(self.scale.0, self.scale.1);
        Ok(())
    }

    fn summary(&self) -> StatisticsSummary {
        StatisticsSummary {
            title: self.title.clone(),
            channels: self
                .labels
                .iter()
                .enumerate()
                .map(|(i, label)| ChannelSummary {
                    label: label.clone(),
                    samples: self.sample_count(i),
                    mean: self.mean(i),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rep_store::StoreError;

    struct NoChannels;

    impl ReaderInit for NoChannels {
        type Reader = rep_core::ScalarFrameReader;

        fn init(&self, _dir: &Path) -> Result<Vec<Self::Reader>, StoreError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn fresh_statistics_mean_is_zero_everywhere() {
        let stats = ChannelStatistics::new(NoChannels, ["a", "b", "c"]);
        for channel in 0..3 {
            assert_eq!(stats.mean(channel), 0.0);
        }
        // Invalid indices answer 0.0 too, never an error.
        assert_eq!(stats.mean(3), 0.0);
        assert_eq!(stats.mean(usize::MAX), 0.0);
    }
}
