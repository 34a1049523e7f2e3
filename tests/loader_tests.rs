use mst_plot::{PlotError, ResultTable};
use rstest::rstest;
use std::io::Write;
use tempfile::NamedTempFile;

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_load_preserves_rows_and_types() {
    let file = csv_file("algo;n;ms\nA;10;5.0\nB;20;7.5\n");
    let table = ResultTable::from_csv(file.path()).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0].algorithm, "A");
    assert_eq!(table.rows[0].input_size, 10u64);
    assert_eq!(table.rows[0].elapsed_ms, 5.0f64);
    assert_eq!(table.rows[1].algorithm, "B");
    assert_eq!(table.rows[1].input_size, 20u64);
    assert_eq!(table.rows[1].elapsed_ms, 7.5f64);
}

#[test]
fn test_filter_by_algorithm() {
    let file = csv_file("algo;n;ms\nA;10;5.0\nB;20;7.5\n");
    let table = ResultTable::from_csv(file.path()).unwrap();

    assert_eq!(table.series("A").points, vec![(10, 5.0)]);
    assert!(table.series("Z").points.is_empty());
}

#[test]
fn test_load_is_idempotent() {
    let file = csv_file("algo;n;ms\nPrim;100;1.5\nKruskal;100;2.25\nPrim;200;3.0\n");
    let first = ResultTable::from_csv(file.path()).unwrap();
    let second = ResultTable::from_csv(file.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_columns_matched_by_name() {
    // reordered columns, an extra column and padded fields
    let file = csv_file("ms;seed;algo;n\n 4.5 ;7; Boruvka ;300\n");
    let table = ResultTable::from_csv(file.path()).unwrap();
    assert_eq!(table.rows[0].algorithm, "Boruvka");
    assert_eq!(table.rows[0].input_size, 300);
    assert_eq!(table.rows[0].elapsed_ms, 4.5);
}

#[test]
fn test_header_only_gives_empty_table() {
    let file = csv_file("algo;n;ms\n");
    let table = ResultTable::from_csv(file.path()).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_missing_file_is_data_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let r = ResultTable::from_csv(dir.path().join("benchDense.csv"));
    assert!(matches!(r, Err(PlotError::DataFormat { .. })));
}

#[rstest]
#[case("")] // no header at all
#[case("algo;n\nA;10\n")] // missing ms column
#[case("algo,n,ms\nA,10,5.0\n")] // wrong delimiter
#[case("algo;n;ms\nA;10;fast\n")] // non numeric ms
#[case("algo;n;ms\nA;ten;5.0\n")] // non numeric n
#[case("algo;n;ms\nA;-10;5.0\n")] // negative n
#[case("algo;n;ms\nA;10;-5.0\n")] // negative ms
#[case("algo;n;ms\nA;10;NaN\n")] // not finite ms
#[case("algo;n;ms\nA;10;5.0\nB;20;oops\n")] // late failure, no partial table
fn test_malformed_input_rejected(#[case] content: &str) {
    let file = csv_file(content);
    match ResultTable::from_csv(file.path()) {
        Err(PlotError::DataFormat { path, .. }) => assert_eq!(path, file.path()),
        other => panic!("expected a data format error, got {:?}", other),
    }
}

#[test]
fn test_error_names_the_row() {
    let file = csv_file("algo;n;ms\nA;10;5.0\nB;20;oops\n");
    let err = ResultTable::from_csv(file.path()).unwrap_err();
    assert!(err.to_string().contains("data row 2"), "{}", err);
}
