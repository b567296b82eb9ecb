//! Bar-chart export for aggregated channel data
//!
//! Renders a filled [`ChartBuffer`] to a static image with the plotters
//! library. The buffer already carries display-scaled values, per-bar labels,
//! a title, and the y-axis range the statistic asked for.

use crate::error::VizError;
use crate::presenters::ChartBuffer;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Common chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Chart width in pixels
    pub width: u32,
    /// Chart height in pixels
    pub height: u32,
    /// Y-axis label
    pub y_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            y_label: String::new(),
        }
    }
}

impl ChartConfig {
    /// Set the chart dimensions
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the y-axis label
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }
}

/// Create a bar chart of the buffered channel values
///
/// One bar per channel, labeled along the x axis; the y axis spans the
/// buffer's scale (falling back to the data range when the scale is
/// degenerate).
pub fn create_bar_chart(
    chart: &ChartBuffer,
    output_path: impl AsRef<Path>,
) -> Result<(), VizError> {
    create_bar_chart_with_config(chart, output_path, ChartConfig::default())
}

/// Create a bar chart with custom configuration
pub fn create_bar_chart_with_config(
    chart: &ChartBuffer,
    output_path: impl AsRef<Path>,
    config: ChartConfig,
) -> Result<(), VizError> {
    if chart.data.is_empty() {
        return Err(VizError::InvalidConfiguration(
            "No data available for bar chart".to_string(),
        ));
    }
    if chart.labels.len() != chart.data.len() {
        return Err(VizError::InvalidConfiguration(format!(
            "Label count {} does not match data count {}",
            chart.labels.len(),
            chart.data.len()
        )));
    }

    let output_path = output_path.as_ref();
    let root = BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();

    root.fill(&WHITE)
        .map_err(|e| VizError::RenderingError(format!("Failed to fill background: {e}")))?;

    let (y_min, y_max) = y_range(chart);
    let bars = chart.data.len();

    let mut builder = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..bars as f64, y_min..y_max)
        .map_err(|e| VizError::RenderingError(format!("Failed to build chart: {e}")))?;

    builder
        .configure_mesh()
        .y_desc(&config.y_label)
        .x_labels(bars)
        .x_label_formatter(&|x| {
            chart
                .labels
                .get(x.floor() as usize)
                .cloned()
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| VizError::RenderingError(format!("Failed to configure mesh: {e}")))?;

    builder
        .draw_series(chart.data.iter().enumerate().map(|(idx, value)| {
            let x = idx as f64;
            Rectangle::new([(x + 0.15, y_min), (x + 0.85, *value)], BLUE.filled())
        }))
        .map_err(|e| VizError::RenderingError(format!("Failed to draw bars: {e}")))?;

    root.present()
        .map_err(|e| VizError::ExportFailed(format!("Failed to save chart: {e}")))?;

    info!(path = %output_path.display(), bars, "exported bar chart");
    Ok(())
}

/// Y range from the buffer scale, widened to cover the data and never empty.
fn y_range(chart: &ChartBuffer) -> (f32, f32) {
    let data_max = chart.data.iter().copied().fold(f32::MIN, f32::max);
    let data_min = chart.data.iter().copied().fold(f32::MAX, f32::min);

    let (mut min, mut max) = chart.scale;
    if max <= min {
        min = data_min.min(0.0);
        max = data_max * 1.1;
    } else {
        min = min.min(data_min);
        max = max.max(data_max);
    }
    if max <= min {
        max = min + 1.0;
    }
    (min, max)
}
