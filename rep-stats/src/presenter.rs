//! Presentation capability traits
//!
//! The statistics layer never talks to a concrete front end. It receives a
//! [`PresenterManager`] by explicit injection and populates whatever views it
//! creates: free text, tabular rows, and labeled bar-chart data. Front ends
//! (terminal buffers, static chart renderers, a GUI) implement these traits;
//! `rep-viz` ships an in-memory implementation.

/// A free-text view.
pub trait TextView {
    fn set_text(&mut self, text: &str);
}

/// A tabular view fed one row at a time.
pub trait TableView {
    fn add_row(&mut self, row: Vec<String>);
}

/// A labeled bar-chart view.
pub trait ChartView {
    fn set_data(&mut self, data: Vec<f32>);
    fn set_labels(&mut self, labels: Vec<String>);
    fn set_title(&mut self, title: &str);
    fn set_scale(&mut self, min: f32, max: f32);
}

/// Factory for the three view kinds a statistic can populate.
///
/// Each `create_*` call produces a fresh view owned by the manager; the
/// returned borrow is only used to fill it in.
pub trait PresenterManager {
    fn create_text_view(&mut self) -> &mut dyn TextView;
    fn create_table_view(&mut self) -> &mut dyn TableView;
    fn create_chart_view(&mut self) -> &mut dyn ChartView;
}
