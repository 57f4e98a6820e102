use std::io::Write;

use crate::runner::Replication;

pub(crate) fn export_to_csv_impl(
    replications: &[Replication],
    target: impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(target);

    wtr.write_record(["seed", "stage", "time_secs", "job_id"])?;

    for replication in replications {
        let seed = replication.seed.to_string();
        for record in &replication.records {
            wtr.write_record([
                seed.as_str(),
                record.stage.as_str(),
                record.time.to_string().as_str(),
                record.job_id.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
