use std::cmp::Ordering;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Sorted projections
// ---------------------------------------------------------------------------

/// Row indices ordered by column `col` descending, truncated to `limit`.
///
/// The sort is stable, so equal values keep their input order. Missing values
/// sort after every present value.
pub fn top_rows_by(dataset: &Dataset, col: usize, limit: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..dataset.len()).collect();
    indices.sort_by(|&a, &b| {
        match (dataset.cell(a, col).as_f64(), dataset.cell(b, col).as_f64()) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    indices.truncate(limit);
    indices
}

// ---------------------------------------------------------------------------
// Column aggregates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    pub max: f64,
    pub min: f64,
    pub mean: f64,
}

/// Max, min and mean over the present values of column `col`.
/// `None` when the column has no present values.
pub fn summarize_column(dataset: &Dataset, col: usize) -> Option<ColumnSummary> {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;

    for v in dataset
        .column_values(col)
        .filter_map(|c| c.as_f64())
        .filter(|v| !v.is_nan())
    {
        count += 1;
        sum += v;
        max = max.max(v);
        min = min.min(v);
    }

    if count == 0 {
        return None;
    }
    // Summation error can push the mean just outside [min, max].
    let mean = (sum / count as f64).clamp(min, max);
    Some(ColumnSummary { max, min, mean })
}

/// Whether any cell in the dataset is missing.
pub fn has_missing_values(dataset: &Dataset) -> bool {
    dataset
        .records
        .iter()
        .any(|r| r.cells.iter().any(|c| c.is_null()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, ColumnSpec, ColumnType, Record, Schema};

    fn float_dataset(values: &[Option<f64>]) -> Dataset {
        Dataset {
            schema: Schema {
                columns: vec![ColumnSpec {
                    name: "v".into(),
                    ty: ColumnType::Float,
                }],
            },
            records: values
                .iter()
                .map(|v| Record {
                    cells: vec![v.map(CellValue::Float).unwrap_or(CellValue::Null)],
                })
                .collect(),
        }
    }

    #[test]
    fn test_sort_is_stable_and_descending() {
        let ds = float_dataset(&[Some(4.5), Some(4.9), Some(4.9), Some(1.0), Some(4.5)]);
        assert_eq!(top_rows_by(&ds, 0, 50), vec![1, 2, 0, 4, 3]);
    }

    #[test]
    fn test_missing_values_sort_last() {
        let ds = float_dataset(&[None, Some(1.0), None, Some(2.0)]);
        assert_eq!(top_rows_by(&ds, 0, 10), vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_limits_and_prefix() {
        for n in [0usize, 3, 10, 11, 49, 50, 120] {
            let values: Vec<Option<f64>> = (0..n).map(|i| Some((i % 7) as f64)).collect();
            let ds = float_dataset(&values);
            let top50 = top_rows_by(&ds, 0, 50);
            let top10 = top_rows_by(&ds, 0, 10);
            assert_eq!(top50.len(), n.min(50));
            assert_eq!(top10.len(), n.min(10));
            assert_eq!(&top50[..top10.len()], top10.as_slice());
        }
    }

    #[test]
    fn test_summary_bounds() {
        let ds = float_dataset(&[Some(0.1), Some(0.1), Some(0.1)]);
        let s = summarize_column(&ds, 0).unwrap();
        assert!(s.min <= s.mean && s.mean <= s.max);

        let ds = float_dataset(&[Some(-3.0), None, Some(9.0), Some(1.5)]);
        let s = summarize_column(&ds, 0).unwrap();
        assert_eq!(s.max, 9.0);
        assert_eq!(s.min, -3.0);
        assert!((s.mean - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_nan_cells_neither_panic_nor_poison_the_mean() {
        let values: Vec<Option<f64>> = (0..40)
            .map(|i| Some(if i % 3 == 0 { f64::NAN } else { (i % 6) as f64 }))
            .collect();
        let ds = float_dataset(&values);
        let top = top_rows_by(&ds, 0, 50);
        assert_eq!(top.len(), 40);
        let s = summarize_column(&ds, 0).unwrap();
        assert!(s.min <= s.mean && s.mean <= s.max);
    }

    #[test]
    fn test_all_missing_column_has_no_summary() {
        let ds = float_dataset(&[None, None]);
        assert_eq!(summarize_column(&ds, 0), None);
        assert!(has_missing_values(&ds));
        assert!(!has_missing_values(&float_dataset(&[Some(1.0)])));
    }
}
