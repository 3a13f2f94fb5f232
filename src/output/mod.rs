//! Report aggregation and output formatting

pub mod report;
pub mod table;
pub mod writer;

pub use report::InventoryReport;
