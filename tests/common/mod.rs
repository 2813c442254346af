//! Shared helpers for integration tests.

use std::path::PathBuf;

/// Load a numeric CSV training set from `tests/data/`.
///
/// The last column is the target, the remaining columns are features.
pub fn load_training_set(name: &str) -> (Vec<Vec<f64>>, Vec<f64>) {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .expect("cannot open test data");
    let mut x = Vec::new();
    let mut y = Vec::new();
    for record in reader.records() {
        let record = record.expect("cannot read record");
        let values: Vec<f64> = record
            .iter()
            .map(|field| field.parse().expect("non-numeric field"))
            .collect();
        let (target, features) = values.split_last().expect("empty row");
        x.push(features.to_vec());
        y.push(*target);
    }
    (x, y)
}
