//! End-to-end aggregation tests: write replications, discover, fold, present.

use rep_core::{ScalarFrameReader, ScalarFrameWriter};
use rep_stats::presenter::{ChartView, PresenterManager, TableView, TextView};
use rep_stats::{ChannelStatistics, StatisticsManager, Statistics, StatsError};
use rep_store::{OutputManager, ReaderInit, StoreError, WriterInit};
use std::path::Path;

const CHANNEL_FILES: [&str; 2] = ["win_rate.bin", "loss_rate.bin"];

struct RateLayout;

impl WriterInit for RateLayout {
    type Writer = ScalarFrameWriter;

    fn init(&self, dir: &Path) -> Result<Vec<Self::Writer>, StoreError> {
        Ok(CHANNEL_FILES
            .iter()
            .map(|file| ScalarFrameWriter::frame(dir.join(file)))
            .collect())
    }
}

impl ReaderInit for RateLayout {
    type Reader = ScalarFrameReader;

    fn init(&self, dir: &Path) -> Result<Vec<Self::Reader>, StoreError> {
        Ok(CHANNEL_FILES
            .iter()
            .map(|file| ScalarFrameReader::frame(dir.join(file)))
            .collect())
    }
}

/// Writes `values[i] = (win, loss)` as replication `Rep<i+1>`.
fn write_replications(base: &Path, values: &[(f64, f64)]) {
    let mut output = OutputManager::new(base, RateLayout);
    output.set_name("Rep");
    for (win, loss) in values {
        output.new_replication().unwrap();
        output.writer_mut(0).unwrap().write(win).unwrap();
        output.writer_mut(1).unwrap().write(loss).unwrap();
    }
    output.close_all_writers();
}

fn rate_statistics() -> ChannelStatistics<RateLayout> {
    ChannelStatistics::new(RateLayout, ["wins", "losses"])
}

fn rep_names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Rep{i}")).collect()
}

#[test]
fn aggregates_concatenate_across_replications() {
    let dir = tempfile::tempdir().unwrap();
    write_replications(dir.path(), &[(0.5, 0.5), (0.7, 0.3), (0.6, 0.4)]);

    let mut stats = rate_statistics();
    stats.set_base_path(dir.path());
    stats.load_folders(&rep_names(3)).unwrap();
    stats.process_all_replications().unwrap();

    assert!((stats.mean(0) - 0.6).abs() < 1e-12);
    assert!((stats.mean(1) - 0.4).abs() < 1e-12);
    assert_eq!(stats.sample_count(0), 3);
    assert_eq!(stats.mean(2), 0.0, "invalid channel index answers 0.0");
}

#[test]
fn clear_data_is_the_only_way_aggregates_shrink() {
    let dir = tempfile::tempdir().unwrap();
    write_replications(dir.path(), &[(0.5, 0.5), (0.9, 0.1)]);

    let mut stats = rate_statistics();
    stats.set_base_path(dir.path());
    stats.load_folders(&rep_names(2)).unwrap();
    stats.process_all_replications().unwrap();
    let first_mean = stats.mean(0);

    stats.clear_data();
    assert_eq!(stats.mean(0), 0.0);
    assert_eq!(stats.sample_count(0), 0);

    // The same load + process sequence reproduces the fresh-instance result.
    stats.load_folders(&rep_names(2)).unwrap();
    stats.process_all_replications().unwrap();
    assert_eq!(stats.mean(0), first_mean);
    assert_eq!(stats.sample_count(0), 2);
}

#[test]
fn processing_without_clear_keeps_growing_the_aggregate() {
    let dir = tempfile::tempdir().unwrap();
    write_replications(dir.path(), &[(1.0, 0.0)]);

    let mut stats = rate_statistics();
    stats.set_base_path(dir.path());
    stats.load_folders(&rep_names(1)).unwrap();
    stats.process_all_replications().unwrap();
    stats.process_all_replications().unwrap();
    assert_eq!(stats.sample_count(0), 2, "aggregates never shrink implicitly");
}

// ── Presenter stub ──────────────────────────────────────────────────

#[derive(Default)]
struct StubViews {
    text: String,
    rows: Vec<Vec<String>>,
    data: Vec<f32>,
    labels: Vec<String>,
    title: String,
    scale: (f32, f32),
}

impl TextView for StubViews {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl TableView for StubViews {
    fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

impl ChartView for StubViews {
    fn set_data(&mut self, data: Vec<f32>) {
        self.data = data;
    }
    fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = labels;
    }
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
    fn set_scale(&mut self, min: f32, max: f32) {
        self.scale = (min, max);
    }
}

impl PresenterManager for StubViews {
    fn create_text_view(&mut self) -> &mut dyn TextView {
        self
    }
    fn create_table_view(&mut self) -> &mut dyn TableView {
        self
    }
    fn create_chart_view(&mut self) -> &mut dyn ChartView {
        self
    }
}

#[test]
fn presenters_receive_means_labels_and_scale() {
    let dir = tempfile::tempdir().unwrap();
    write_replications(dir.path(), &[(0.25, 0.75)]);

    let mut stats = rate_statistics()
        .with_title("Rates")
        .with_scale(0.0, 100.0)
        .as_percentages();
    stats.set_base_path(dir.path());
    stats.load_folders(&rep_names(1)).unwrap();
    stats.process_all_replications().unwrap();

    let mut views = StubViews::default();
    stats.setup_presenters(&mut views).unwrap();

    assert_eq!(views.text, "wins: 25.00%\nlosses: 75.00%");
    assert_eq!(views.rows.len(), 3, "header plus one row per channel");
    assert_eq!(views.rows[1], vec!["wins".to_string(), "25.00%".to_string()]);
    assert_eq!(views.data, vec![25.0, 75.0]);
    assert_eq!(views.labels, vec!["wins".to_string(), "losses".to_string()]);
    assert_eq!(views.title, "Rates");
    assert_eq!(views.scale, (0.0, 100.0));
}

#[test]
fn manager_registry_enforces_unique_names() {
    let mut manager = StatisticsManager::new();
    manager.add("rates", Box::new(rate_statistics())).unwrap();

    assert!(matches!(
        manager.add("rates", Box::new(rate_statistics())),
        Err(StatsError::DuplicateName(_))
    ));
    assert!(matches!(
        manager.get("missing"),
        Err(StatsError::NotFound(_))
    ));
    assert!(matches!(
        manager.process("missing"),
        Err(StatsError::NotFound(_))
    ));

    manager.remove("rates").unwrap();
    assert!(manager.is_empty());
    assert!(matches!(
        manager.remove("rates"),
        Err(StatsError::NotFound(_))
    ));
}

#[test]
fn one_broken_statistic_does_not_abort_its_siblings() {
    let dir = tempfile::tempdir().unwrap();
    write_replications(dir.path(), &[(0.5, 0.5)]);

    // "good" points at the real data; "broken" points at a directory whose
    // channel files do not exist, so its readers fail to open.
    let mut good = rate_statistics();
    good.set_base_path(dir.path());
    good.load_folders(&rep_names(1)).unwrap();

    let missing = dir.path().join("elsewhere");
    std::fs::create_dir_all(missing.join("Rep1")).unwrap();
    let mut broken = rate_statistics();
    broken.set_base_path(&missing);
    broken.load_folders(&rep_names(1)).unwrap();

    let mut manager = StatisticsManager::new();
    manager.add("broken", Box::new(broken)).unwrap();
    manager.add("good", Box::new(good)).unwrap();

    let failed = manager.process_all();
    assert_eq!(failed, vec!["broken".to_string()]);
}

#[test]
fn absent_presenter_manager_is_a_configuration_error() {
    let mut manager = StatisticsManager::new();
    manager.add("rates", Box::new(rate_statistics())).unwrap();
    assert!(matches!(
        manager.setup_presenters("rates", None),
        Err(StatsError::MissingPresenter)
    ));
}
