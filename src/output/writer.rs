//! CSV report writer
//!
//! The report stacks three sections separated by blank lines: the total, the
//! per-cloud-type breakdown, and the full account list.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use super::report::InventoryReport;
use crate::error::ReportError;

const ACCOUNT_LIST_HEADER: [&str; 4] = ["AccountID", "AccountName", "CloudType", "ParentAccountName"];

const BLANK_LINE: &[u8] = b"\r\n";

/// Serialize the report as CSV into `out`, returning the writer.
pub fn write_csv<W: Write>(report: &InventoryReport<'_>, mut out: W) -> csv::Result<W> {
    write_total(&mut out, report)?;
    out.write_all(BLANK_LINE)?;
    write_breakdown(&mut out, report)?;
    out.write_all(BLANK_LINE)?;
    write_account_list(&mut out, report)?;
    out.flush()?;
    Ok(out)
}

/// Write the report to `path`, replacing any existing file.
pub fn write_to_path(report: &InventoryReport<'_>, path: &Path) -> Result<(), ReportError> {
    let io_error = |source: std::io::Error| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    write_csv(report, BufWriter::new(file)).map_err(|e| io_error(e.into()))?;

    Ok(())
}

/// Each section gets its own encoder so blank separator lines can be written
/// raw; the encoder would emit `""` for an empty record.
fn section<W: Write>(out: &mut W) -> csv::Writer<&mut W> {
    WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_writer(out)
}

fn write_total<W: Write>(out: &mut W, report: &InventoryReport<'_>) -> csv::Result<()> {
    let mut writer = section(out);
    writer.write_record(["Total Account Count"])?;
    writer.write_record([report.total().to_string()])?;
    writer.flush()?;
    Ok(())
}

fn write_breakdown<W: Write>(out: &mut W, report: &InventoryReport<'_>) -> csv::Result<()> {
    let mut writer = section(out);
    writer.write_record(["Account Count by Cloud Type"])?;
    writer.write_record(["Cloud Type", "Count"])?;
    for (cloud_type, count) in report.by_cloud_type() {
        writer.write_record([cloud_type.clone(), count.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_account_list<W: Write>(out: &mut W, report: &InventoryReport<'_>) -> csv::Result<()> {
    let mut writer = section(out);
    writer.write_record(["Full Account List"])?;
    writer.write_record(ACCOUNT_LIST_HEADER)?;
    for record in report.records() {
        writer.write_record([
            record.account_id.as_deref().unwrap_or_default(),
            record.account_name.as_deref().unwrap_or_default(),
            record.cloud_type.as_deref().unwrap_or_default(),
            record.parent_account_name.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
