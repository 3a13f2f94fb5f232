//! Console table formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::report::InventoryReport;

/// Cloud type breakdown row for table display
#[derive(Debug, Tabled)]
pub struct CloudTypeRow {
    #[tabled(rename = "CLOUD TYPE")]
    pub cloud_type: String,
    #[tabled(rename = "COUNT")]
    pub count: usize,
}

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Breakdown table of the report, in first-seen cloud type order.
pub fn format_breakdown(report: &InventoryReport<'_>) -> String {
    let rows: Vec<CloudTypeRow> = report
        .by_cloud_type()
        .iter()
        .map(|(cloud_type, count)| CloudTypeRow {
            cloud_type: cloud_type.clone(),
            count: *count,
        })
        .collect();

    format_table(&rows)
}
