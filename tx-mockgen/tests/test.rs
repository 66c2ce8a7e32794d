use csv::ReaderBuilder;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tx_mockgen::generator::Generator;
use tx_mockgen::record::TransactionRecord;
use tx_mockgen::writer::write_csv;

#[test]
fn test_output_file_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mock_transactions.csv");
    let mut generator = Generator::with_rng(StdRng::seed_from_u64(5));
    write_csv(&path, &generator.batch(5)).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Id,Client ID,Transaction,Amount,Date,Status");
    for line in &lines[1..] {
        assert_eq!(line.split(',').count(), 6);
    }
}

#[test]
fn test_written_rows_deserialize_to_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mock_transactions.csv");
    let mut generator = Generator::with_rng(StdRng::seed_from_u64(9));
    let records = generator.batch(20);
    write_csv(&path, &records).unwrap();

    let mut reader = ReaderBuilder::new().from_path(&path).unwrap();
    let read_back: Vec<TransactionRecord> = reader
        .deserialize()
        .collect::<Result<_, csv::Error>>()
        .unwrap();
    assert_eq!(read_back, records);
}

#[test]
fn test_empty_batch_still_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mock_transactions.csv");
    write_csv(&path, &[]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, vec!["Id,Client ID,Transaction,Amount,Date,Status"]);
}

#[test]
fn test_rerun_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mock_transactions.csv");
    let mut generator = Generator::with_rng(StdRng::seed_from_u64(3));
    write_csv(&path, &generator.batch(10)).unwrap();
    write_csv(&path, &generator.batch(5)).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 6);
}

#[test]
fn test_write_to_unwritable_path_errors() {
    let mut generator = Generator::with_rng(StdRng::seed_from_u64(1));
    let records = generator.batch(1);
    let result = write_csv("no-such-dir/mock_transactions.csv", &records);
    assert!(result.is_err());
}
