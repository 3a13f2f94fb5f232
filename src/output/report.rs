//! Inventory aggregation

use crate::inventory::AccountRecord;

/// Label counted for records without a cloud type
pub const UNKNOWN_CLOUD_TYPE: &str = "Unknown";

/// Totals and breakdown derived from the discovered records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryReport<'a> {
    records: &'a [AccountRecord],
    by_cloud_type: Vec<(String, usize)>,
}

impl<'a> InventoryReport<'a> {
    /// Aggregate records; the breakdown keeps first-seen order of cloud types.
    pub fn new(records: &'a [AccountRecord]) -> Self {
        let mut by_cloud_type: Vec<(String, usize)> = Vec::new();
        for record in records {
            let cloud_type = record.cloud_type.as_deref().unwrap_or(UNKNOWN_CLOUD_TYPE);
            match by_cloud_type.iter_mut().find(|(t, _)| t == cloud_type) {
                Some((_, count)) => *count += 1,
                None => by_cloud_type.push((cloud_type.to_string(), 1)),
            }
        }

        Self {
            records,
            by_cloud_type,
        }
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// `(cloud type, count)` pairs in first-seen order
    pub fn by_cloud_type(&self) -> &[(String, usize)] {
        &self.by_cloud_type
    }

    pub fn records(&self) -> &'a [AccountRecord] {
        self.records
    }

    /// Number of organizations whose members could not be listed
    pub fn failed_listings(&self) -> usize {
        self.records.iter().filter(|r| r.is_error()).count()
    }
}
