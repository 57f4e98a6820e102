use std::error::Error;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use crate::event_log::EventRecord;

/// Write an event log as Parquet with columns `stage`, `time_secs`, `job_id`,
/// one row per record in emission order.
pub fn write_event_log_parquet<P: AsRef<Path>>(
    path: P,
    records: &[EventRecord],
) -> Result<(), Box<dyn Error>> {
    let mut stages = Vec::with_capacity(records.len());
    let mut times = Vec::with_capacity(records.len());
    let mut job_ids = Vec::with_capacity(records.len());

    for record in records {
        stages.push(record.stage.as_str());
        times.push(record.time);
        job_ids.push(record.job_id.as_str());
    }

    let schema = Schema::new(vec![
        Field::new("stage", DataType::Utf8, false),
        Field::new("time_secs", DataType::Float64, false),
        Field::new("job_id", DataType::Utf8, false),
    ]);

    let arrays: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(stages)),
        Arc::new(Float64Array::from(times)),
        Arc::new(StringArray::from(job_ids)),
    ];

    write_record_batch(path, schema, arrays)
}

fn write_record_batch<P: AsRef<Path>>(
    path: P,
    schema: Schema,
    arrays: Vec<ArrayRef>,
) -> Result<(), Box<dyn Error>> {
    let schema = Arc::new(schema);
    let batch = RecordBatch::try_new(schema.clone(), arrays)?;
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}
