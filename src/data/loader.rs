use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::DashboardError;

use super::model::{CellValue, ColumnSpec, ColumnType, Dataset, Record, Schema};

/// Column that is coerced from `"1,000,000+"` style strings to integers.
pub const INSTALLS_COLUMN: &str = "Installs";

/// Cell texts treated as missing values (the dataframe reader's defaults).
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and normalize a CSV file with a header row.
pub fn load_csv(path: &Path) -> Result<Dataset, DashboardError> {
    let file = File::open(path).map_err(|e| resource_error(path, e.into()))?;
    let dataset = load_csv_from_reader(file, path)?;
    log::info!(
        "Loaded {} rows x {} columns from {}",
        dataset.len(),
        dataset.column_count(),
        path.display()
    );
    Ok(dataset)
}

/// Same as [`load_csv`] for an already opened source. `origin` is only used
/// in error messages.
pub fn load_csv_from_reader<R: Read>(source: R, origin: &Path) -> Result<Dataset, DashboardError> {
    // Short rows are padded with missing cells; long rows are rejected below.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| resource_error(origin, e))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| resource_error(origin, e))?;
        if record.len() > headers.len() {
            let msg = format!(
                "row {}: expected {} fields, saw {}",
                row_no + 1,
                headers.len(),
                record.len()
            );
            let io = std::io::Error::new(std::io::ErrorKind::InvalidData, msg);
            return Err(resource_error(origin, io.into()));
        }
        rows.push(record);
    }

    // Build column by column so each type is decided once over all its cells.
    let mut columns = Vec::with_capacity(headers.len());
    let mut column_cells = Vec::with_capacity(headers.len());
    for (col_idx, name) in headers.iter().enumerate() {
        let raw: Vec<&str> = rows.iter().map(|r| r.get(col_idx).unwrap_or("")).collect();
        let (ty, cells) = if name == INSTALLS_COLUMN {
            (ColumnType::Integer, normalize_installs(&raw)?)
        } else {
            infer_column(&raw)
        };
        columns.push(ColumnSpec {
            name: name.clone(),
            ty,
        });
        column_cells.push(cells.into_iter());
    }

    let records = (0..rows.len())
        .map(|_| Record {
            cells: column_cells
                .iter_mut()
                .map(|col| col.next().unwrap_or(CellValue::Null))
                .collect(),
        })
        .collect();

    Ok(Dataset {
        schema: Schema { columns },
        records,
    })
}

/// Strip thousands separators and `+` signs, then parse as an integer.
pub fn normalize_installs_value(raw: &str) -> Option<i64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '+').collect();
    cleaned.trim().parse::<i64>().ok()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn resource_error(path: &Path, source: csv::Error) -> DashboardError {
    DashboardError::Resource {
        path: path.to_path_buf(),
        source,
    }
}

fn normalize_installs(raw: &[&str]) -> Result<Vec<CellValue>, DashboardError> {
    raw.iter()
        .enumerate()
        .map(|(i, value)| {
            normalize_installs_value(value)
                .map(CellValue::Integer)
                .ok_or_else(|| DashboardError::Parse {
                    row: i + 1,
                    value: value.to_string(),
                })
        })
        .collect()
}

/// Any spelling `f64::from_str` reads as NaN (`NAN`, `+nan`, ...) is missing too.
fn is_missing(s: &str) -> bool {
    let s = s.trim();
    MISSING_MARKERS.contains(&s) || s.parse::<f64>().is_ok_and(f64::is_nan)
}

/// Decide the column type from every cell, then coerce the cells to it.
///
/// Integers need a gap-free column; an integer column with gaps, or one that
/// is entirely missing, becomes float.
fn infer_column(raw: &[&str]) -> (ColumnType, Vec<CellValue>) {
    if raw.is_empty() {
        return (ColumnType::String, Vec::new());
    }

    let present: Vec<&str> = raw.iter().copied().filter(|s| !is_missing(s)).collect();
    let has_missing = present.len() < raw.len();

    let ty = if !has_missing && present.iter().all(|s| s.trim().parse::<i64>().is_ok()) {
        ColumnType::Integer
    } else if present.iter().all(|s| s.trim().parse::<f64>().is_ok()) {
        ColumnType::Float
    } else {
        ColumnType::String
    };

    let cells = raw.iter().map(|s| coerce(s, ty)).collect();
    (ty, cells)
}

fn coerce(s: &str, ty: ColumnType) -> CellValue {
    if is_missing(s) {
        return CellValue::Null;
    }
    match ty {
        ColumnType::Integer => s
            .trim()
            .parse::<i64>()
            .map(CellValue::Integer)
            .unwrap_or(CellValue::Null),
        ColumnType::Float => s
            .trim()
            .parse::<f64>()
            .map(CellValue::Float)
            .unwrap_or(CellValue::Null),
        ColumnType::String => CellValue::String(s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn load_str(text: &str) -> Result<Dataset, DashboardError> {
        load_csv_from_reader(text.as_bytes(), Path::new("inline.csv"))
    }

    #[test]
    fn test_installs_normalization() {
        assert_eq!(normalize_installs_value("1,000,000+"), Some(1_000_000));
        assert_eq!(normalize_installs_value("500+"), Some(500));
        assert_eq!(normalize_installs_value("42"), Some(42));
        assert_eq!(normalize_installs_value("many"), None);
        assert_eq!(normalize_installs_value(""), None);
    }

    #[test]
    fn test_installs_column_becomes_integer() {
        let ds = load_str("Title,Installs,Rating\nA,\"500+\",4.5\nB,\"10,000+\",4.9\nC,100+,4.9\n")
            .unwrap();
        let idx = ds.schema.index_of(INSTALLS_COLUMN).unwrap();
        assert_eq!(ds.schema.columns[idx].ty, ColumnType::Integer);
        let installs: Vec<i64> = ds.column_values(idx).filter_map(CellValue::as_i64).collect();
        assert_eq!(installs, vec![500, 10_000, 100]);
    }

    #[test]
    fn test_no_installs_column_loads_without_coercion() {
        let ds = load_str("Title,Downloads\nA,\"1,000+\"\nB,20\n").unwrap();
        assert_eq!(ds.len(), 2);
        let idx = ds.schema.index_of("Downloads").unwrap();
        assert_eq!(ds.schema.columns[idx].ty, ColumnType::String);
        assert_eq!(ds.cell(0, idx), &CellValue::String("1,000+".into()));
    }

    #[test]
    fn test_bad_installs_is_parse_error() {
        let err = load_str("Installs\n100+\nlots\n").unwrap_err();
        match err {
            DashboardError::Parse { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_installs_is_parse_error() {
        let err = load_str("Installs,Rating\n100+,4.0\n,3.0\n").unwrap_err();
        assert!(matches!(err, DashboardError::Parse { row: 2, .. }));
    }

    #[test]
    fn test_type_inference() {
        let ds = load_str(
            "name,count,score,gappy,empty,flag\n\
             a,1,1.5,3,,True\n\
             b,2,2,,,False\n",
        )
        .unwrap();
        let types: Vec<ColumnType> = ds.schema.columns.iter().map(|c| c.ty).collect();
        assert_eq!(
            types,
            vec![
                ColumnType::String,
                ColumnType::Integer,
                ColumnType::Float,
                ColumnType::Float,
                ColumnType::Float,
                ColumnType::String,
            ]
        );
        assert_eq!(ds.cell(1, 2), &CellValue::Float(2.0));
        assert_eq!(ds.cell(1, 3), &CellValue::Null);
        assert_eq!(ds.numeric_columns(), vec!["count", "score", "gappy", "empty"]);
    }

    #[test]
    fn test_header_only_file() {
        let ds = load_str("Title,Installs,Rating\n").unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.column_count(), 3);
        assert_eq!(ds.numeric_columns(), vec!["Installs"]);
    }

    #[test]
    fn test_short_row_is_padded_with_missing() {
        let ds = load_str("Title,Installs,Rating,Genre\nA,10+,4.0,Puzzle\nB,20+\n").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.cell(1, 2), &CellValue::Null);
        assert_eq!(ds.cell(1, 3), &CellValue::Null);
        assert_eq!(ds.schema.columns[2].ty, ColumnType::Float);
    }

    #[test]
    fn test_short_row_missing_installs_is_parse_error() {
        let err = load_str("Title,Rating,Installs\nA,4.0,10+\nB,3.0\n").unwrap_err();
        assert!(matches!(err, DashboardError::Parse { row: 2, .. }));
    }

    #[test]
    fn test_long_row_is_resource_error() {
        let err = load_str("a,b\n1,2\n3,4,5\n").unwrap_err();
        match err {
            DashboardError::Resource { source, .. } => {
                assert!(source.to_string().contains("expected 2 fields"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_nan_spellings_are_missing() {
        let mut text = String::from("Installs,Rating\n");
        for i in 0..40 {
            let rating = match i % 6 {
                0 => "NAN".to_string(),
                3 => "-nan".to_string(),
                _ => format!("{}", (i % 5) as f64),
            };
            text.push_str(&format!("{}+,{rating}\n", i * 10));
        }
        let ds = load_str(&text).unwrap();
        let idx = ds.schema.index_of("Rating").unwrap();
        assert_eq!(ds.schema.columns[idx].ty, ColumnType::Float);
        assert_eq!(ds.cell(0, idx), &CellValue::Null);
        assert!(ds
            .column_values(idx)
            .all(|c| c.as_f64().map_or(true, |v| !v.is_nan())));
    }

    #[test]
    fn test_dataframe_missing_markers() {
        let ds = load_str("v\n1.5\nn/a\n<NA>\n#N/A\n-NaN\n1.#QNAN\n").unwrap();
        assert_eq!(ds.schema.columns[0].ty, ColumnType::Float);
        assert_eq!(ds.column_values(0).filter(|c| c.is_null()).count(), 5);
    }

    #[test]
    fn test_missing_file_is_resource_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, DashboardError::Resource { .. }));
    }

    #[test]
    fn test_loading_twice_is_identical() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Title,Installs,Rating\nA,\"5,000+\",4.1\nB,50+,").unwrap();
        let first = load_csv(file.path()).unwrap();
        let second = load_csv(file.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
