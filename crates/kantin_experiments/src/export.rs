//! Replication export to CSV and JSON.
//!
//! Both formats keep every record of every replication, in replication order
//! and then emission order. Exporting an empty slice is an error.

use std::path::Path;

use crate::runner::Replication;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export replications to CSV with columns `seed,stage,time_secs,job_id`.
///
/// # Errors
///
/// Returns an error if `replications` is empty, or if file creation or writing fails.
pub fn export_to_csv(
    replications: &[Replication],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = writer_utils::open_export_target(replications, path)?;
    csv::export_to_csv_impl(replications, target)
}

/// Export replications to pretty-printed JSON: an array of `{seed, records}`.
///
/// # Errors
///
/// Returns an error if `replications` is empty, or if file creation or writing fails.
pub fn export_to_json(
    replications: &[Replication],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = writer_utils::open_export_target(replications, path)?;
    json::export_to_json_impl(replications, target)
}
