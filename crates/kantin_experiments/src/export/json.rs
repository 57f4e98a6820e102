use std::io::Write;

use crate::runner::Replication;

pub(crate) fn export_to_json_impl(
    replications: &[Replication],
    mut target: impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(&mut target, replications)?;
    target.flush()?;
    Ok(())
}
