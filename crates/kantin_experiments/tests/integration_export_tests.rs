use kantin_core::event_log::{EventRecord, StageLabel};
use kantin_core::CanteenConfig;
use kantin_experiments::{export_to_csv, export_to_json, run_replications, Replication};
use tempfile::tempdir;

fn replications() -> Vec<Replication> {
    let config = CanteenConfig::default().with_tables(2, 2).with_workers(1);
    run_replications(&config, &[10, 20], Some(2), false).expect("runs")
}

#[test]
fn csv_export_has_one_row_per_record() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("replications.csv");
    let replications = replications();
    export_to_csv(&replications, &path).expect("export");

    let mut reader = csv::Reader::from_path(&path).expect("reader");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["seed", "stage", "time_secs", "job_id"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 2 * 20);
    assert_eq!(&rows[0][0], "10");
    assert_eq!(&rows[0][1], "Started");
    assert_eq!(&rows[20][0], "20");
    assert!(rows.iter().any(|row| &row[1] == "Angkat Selesai"));
}

#[test]
fn json_export_round_trips_with_dashboard_labels() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("replications.json");
    let replications = replications();
    export_to_json(&replications, &path).expect("export");

    let text = std::fs::read_to_string(&path).expect("read");
    assert!(text.contains("\"Lauk Selesai\""));
    assert!(text.contains("\"AllStagesComplete\""));

    let parsed: Vec<Replication> = serde_json::from_str(&text).expect("parse");
    assert_eq!(parsed.len(), replications.len());
    for (read, written) in parsed.iter().zip(&replications) {
        assert_eq!(read.seed, written.seed);
        assert_eq!(read.records.len(), written.records.len());
        for (a, b) in read.records.iter().zip(&written.records) {
            assert_eq!((a.stage, a.job_id.as_str()), (b.stage, b.job_id.as_str()));
            assert!((a.time - b.time).abs() < 1e-9);
        }
    }
}

#[test]
fn record_serializes_to_flat_object() {
    let record = EventRecord {
        stage: StageLabel::NasiSelesai,
        time: 80.0,
        job_id: "Ompreng-1".to_string(),
    };
    let value = serde_json::to_value(&record).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({"stage": "Nasi Selesai", "time": 80.0, "job_id": "Ompreng-1"})
    );
}

#[test]
fn empty_export_is_rejected() {
    let dir = tempdir().expect("temp dir");
    assert!(export_to_csv(&[], dir.path().join("empty.csv")).is_err());
    assert!(export_to_json(&[], dir.path().join("empty.json")).is_err());
    assert!(!dir.path().join("empty.csv").exists());
    assert!(!dir.path().join("empty.json").exists());
}

#[test]
fn unwritable_path_names_the_target() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("out.csv");
    let error = export_to_csv(&replications(), &path).expect_err("parent dir is missing");
    assert!(error.to_string().contains("out.csv"));
}
