//! In-memory presentation buffers
//!
//! [`BufferPresenters`] is the reference [`PresenterManager`] implementation:
//! every view a statistic creates is backed by a plain struct the caller can
//! inspect afterwards or render to the terminal. It is the back end the
//! examples and integration tests use, and the bridge to chart export via
//! [`crate::charts`].

use rep_stats::presenter::{ChartView, PresenterManager, TableView, TextView};

/// A filled-in free-text view.
#[derive(Debug, Default, Clone)]
pub struct TextBuffer {
    pub text: String,
}

impl TextView for TextBuffer {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// A filled-in tabular view.
#[derive(Debug, Default, Clone)]
pub struct TableBuffer {
    pub rows: Vec<Vec<String>>,
}

impl TableView for TableBuffer {
    fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

impl TableBuffer {
    /// Render the rows as space-padded columns, one row per line.
    pub fn render(&self) -> String {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
                    .collect::<Vec<_>>()
                    .join("  ")
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A filled-in bar-chart view: scaled values, one label per bar, and the
/// display range the statistic asked for.
#[derive(Debug, Default, Clone)]
pub struct ChartBuffer {
    pub data: Vec<f32>,
    pub labels: Vec<String>,
    pub title: String,
    pub scale: (f32, f32),
}

impl ChartView for ChartBuffer {
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

/// Collects every view created during a presentation pass.
///
/// `create_*` appends a fresh buffer and hands back a borrow of it, so one
/// manager can serve several statistics in a row and keep the views of each
/// in creation order.
#[derive(Debug, Default)]
pub struct BufferPresenters {
    pub texts: Vec<TextBuffer>,
    pub tables: Vec<TableBuffer>,
    pub charts: Vec<ChartBuffer>,
}

impl BufferPresenters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every collected view.
    pub fn clear(&mut self) {
        self.texts.clear();
        self.tables.clear();
        self.charts.clear();
    }
}

impl PresenterManager for BufferPresenters {
    fn create_text_view(&mut self) -> &mut dyn TextView {
        self.texts.push(TextBuffer::default());
        self.texts.last_mut().unwrap()
    }

    fn create_table_view(&mut self) -> &mut dyn TableView {
        self.tables.push(TableBuffer::default());
        self.tables.last_mut().unwrap()
    }

    fn create_chart_view(&mut self) -> &mut dyn ChartView {
        self.charts.push(ChartBuffer::default());
        self.charts.last_mut().unwrap()
    }
}
