use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::runner::Replication;

/// Open a buffered export target once there is at least one replication to write.
pub(crate) fn open_export_target(
    replications: &[Replication],
    path: impl AsRef<Path>,
) -> Result<BufWriter<File>, Box<dyn std::error::Error>> {
    if replications.is_empty() {
        return Err("no replications to export".into());
    }
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|error| format!("cannot create {}: {error}", path.display()))?;
    Ok(BufWriter::new(file))
}
