// Unit tests for the CSV loader.
//
// In-memory readers for parsing behavior, plus a few on-disk files in a
// temporary directory for the path-based entry point.

use std::io::Write;

use dispersion::aggregate::summarize;
use dispersion::dispersion::row_dispersion;
use dispersion::loader::{load_model_columns, read_model_columns, ModelTable};
use dispersion::sources::MODEL_COLUMNS;

fn reader(data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(data.as_bytes())
}

fn header() -> String {
    MODEL_COLUMNS.join(",")
}

#[test]
fn reads_the_four_model_columns() {
    let data = format!("{}\n0.1,0.2,0.3,0.4\n0.5,0.6,0.7,0.8\n", header());
    let table = read_model_columns(reader(&data)).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0], [Some(0.1), Some(0.2), Some(0.3), Some(0.4)]);
    assert_eq!(table.rows[1], [Some(0.5), Some(0.6), Some(0.7), Some(0.8)]);
}

#[test]
fn ignores_extra_columns_and_column_order() {
    // line text first, models in reverse order, a trailing extra column
    let data = format!(
        "line,{},{},{},{},note\n\"first, line\",4,3,2,1,x\n",
        MODEL_COLUMNS[3], MODEL_COLUMNS[2], MODEL_COLUMNS[1], MODEL_COLUMNS[0]
    );
    let table = read_model_columns(reader(&data)).unwrap();
    assert_eq!(table.rows, vec![[Some(1.0), Some(2.0), Some(3.0), Some(4.0)]]);
}

#[test]
fn missing_column_is_an_error_naming_it() {
    let data = format!(
        "{},{},{}\n0.1,0.2,0.3\n",
        MODEL_COLUMNS[0], MODEL_COLUMNS[1], MODEL_COLUMNS[2]
    );
    let err = read_model_columns(reader(&data)).unwrap_err();
    assert!(
        err.to_string().contains(MODEL_COLUMNS[3]),
        "error should name the missing column, got: {err}"
    );
}

#[test]
fn non_numeric_cells_become_missing() {
    let data = format!("{}\n0.1,abc,,0.4\nNaN,0.2,0.3, 0.5 \n", header());
    let table = read_model_columns(reader(&data)).unwrap();
    assert_eq!(table.rows[0], [Some(0.1), None, None, Some(0.4)]);
    assert_eq!(table.rows[1], [None, Some(0.2), Some(0.3), Some(0.5)]);
    assert_eq!(table.missing_cells(), 3);
}

#[test]
fn short_rows_are_padded_with_missing() {
    let data = format!("{}\n0.1,0.2\n", header());
    let table = read_model_columns(reader(&data)).unwrap();
    assert_eq!(table.rows[0], [Some(0.1), Some(0.2), None, None]);
}

#[test]
fn header_only_file_is_empty() {
    let table = read_model_columns(reader(&format!("{}\n", header()))).unwrap();
    assert!(table.is_empty());
    assert_eq!(table, ModelTable::default());
}

// ============================================================
// Non-finite cells through dispersion and aggregation
// ============================================================

#[test]
fn infinite_cell_counts_as_a_missing_line() {
    let data = format!("{}
2,4,4,4
inf,1,1,4
", header());
    let table = read_model_columns(reader(&data)).unwrap();
    assert_eq!(table.rows[1][0], Some(f64::INFINITY));

    let sigma = row_dispersion(&table);
    assert_eq!(sigma, vec![Some(1.0), None]);

    let summary = summarize("poem", &sigma).unwrap();
    assert_eq!(summary.lines, 2);
    assert_eq!(summary.missing_lines, 1);
    assert!((summary.e_prime - 0.5).abs() < 1e-12);
    assert!((summary.rho_prime - 2.0).abs() < 1e-12);
}

#[test]
fn negative_infinity_and_nan_cells_keep_summary_finite() {
    let data = format!("{}
-inf,0,0,0
1,1,1,4
NaN,1,1,1
", header());
    let table = read_model_columns(reader(&data)).unwrap();
    let summary = summarize("poem", &row_dispersion(&table)).unwrap();
    assert_eq!(summary.missing_lines, 2);
    assert!(summary.e_prime.is_finite() && summary.rho_prime.is_finite());
    assert!((summary.e_prime - 0.5).abs() < 1e-12);
}

// ============================================================
// On-disk files
// ============================================================

#[test]
fn loads_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poem.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", header()).unwrap();
    writeln!(file, "2,4,4,4").unwrap();
    drop(file);

    let table = load_model_columns(&path).unwrap();
    assert_eq!(table.rows, vec![[Some(2.0), Some(4.0), Some(4.0), Some(4.0)]]);
}

#[test]
fn missing_file_error_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent_4wavesData.csv");
    let err = load_model_columns(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent_4wavesData.csv"));
}

#[test]
fn missing_column_error_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.csv");
    std::fs::write(&path, "a,b,c,d\n1,2,3,4\n").unwrap();
    let err = load_model_columns(&path).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("broken.csv"), "got: {chain}");
    assert!(chain.contains(MODEL_COLUMNS[0]), "got: {chain}");
}
