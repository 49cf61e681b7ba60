//! Pure projection of a [`Dataset`] and the user's selection into everything
//! the three tabs draw. The UI calls [`render`] every frame; nothing here
//! touches egui widgets.

use eframe::egui::Color32;

use crate::color::SequentialScale;
use crate::data::loader::INSTALLS_COLUMN;
use crate::data::model::{CellValue, Dataset};
use crate::data::stats::{has_missing_values, summarize_column, top_rows_by, ColumnSummary};
use crate::error::ConfigurationError;

/// Rows in the main bar series.
pub const TOP_N: usize = 50;
/// Rows in the highlighted series and the companion table.
pub const HIGHLIGHT_N: usize = 10;
/// Rows shown in the data preview.
pub const PREVIEW_ROWS: usize = 5;
/// Preferred Y-axis column.
pub const DEFAULT_Y_COLUMN: &str = "Rating";

pub const GUIDANCE: &str = "\
Summary
- Games with the most downloads also tend to score high on rating and review count.
- The top-ranked rows show which kinds of games are trending right now.
- The bar chart with the neon Top 10 highlight makes per-game comparison easy.

Tips
- X axis: installs; Y axis: rating or review count to find the popular titles.
- Use the Top 10 highlight to compare trends across genres.
- Useful for recommendations, marketing and planning new games.";

/// What the user picked. `None` means "use the default column".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub y_column: Option<String>,
}

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub summary: SummaryView,
    pub visualization: Result<VisualizationView, ConfigurationError>,
    pub insights: InsightsView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub row_count: usize,
    pub column_count: usize,
    pub has_missing: bool,
    pub headers: Vec<String>,
    pub preview: Vec<Vec<CellValue>>,
}

/// One row of the sorted projection.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    /// Index into `Dataset::records`.
    pub row: usize,
    pub installs: i64,
    /// `None` when the Y cell is missing; such rows get no bar.
    pub value: Option<f64>,
    pub color: Color32,
}

impl BarPoint {
    /// Text drawn above the bar: the Y value as it appears in the data.
    pub fn value_label(&self) -> String {
        self.value.map(|v| v.to_string()).unwrap_or_else(|| "n/a".into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualizationView {
    pub x_column: String,
    pub y_column: String,
    /// Top rows by `y_column`, descending.
    pub top: Vec<BarPoint>,
    /// How many leading entries of `top` are highlighted.
    pub highlight_len: usize,
}

impl VisualizationView {
    pub fn highlighted(&self) -> &[BarPoint] {
        &self.top[..self.highlight_len]
    }

    pub fn title(&self) -> String {
        format!("Bar chart: {} vs {}", self.x_column, self.y_column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInsight {
    pub column: String,
    pub summary: Option<ColumnSummary>,
}

impl ColumnInsight {
    pub fn describe(&self) -> String {
        match &self.summary {
            Some(s) => format!(
                "{}: max {:.2}, min {:.2}, mean {:.2}",
                self.column, s.max, s.min, s.mean
            ),
            None => format!("{}: max nan, min nan, mean nan", self.column),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightsView {
    pub columns: Vec<ColumnInsight>,
    pub show_guidance: bool,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn render(dataset: &Dataset, selection: &Selection) -> ViewModel {
    ViewModel {
        summary: summary_view(dataset),
        visualization: visualization_view(dataset, selection),
        insights: insights_view(dataset),
    }
}

pub fn summary_view(dataset: &Dataset) -> SummaryView {
    SummaryView {
        row_count: dataset.len(),
        column_count: dataset.column_count(),
        has_missing: has_missing_values(dataset),
        headers: dataset.schema.names().map(str::to_string).collect(),
        preview: dataset
            .records
            .iter()
            .take(PREVIEW_ROWS)
            .map(|r| r.cells.clone())
            .collect(),
    }
}

/// `Rating` if it is numeric, otherwise the first numeric column.
pub fn default_y_column(dataset: &Dataset) -> Option<&str> {
    let numeric = dataset.numeric_columns();
    numeric
        .iter()
        .find(|c| *c == &DEFAULT_Y_COLUMN)
        .or_else(|| numeric.first())
        .copied()
}

pub fn visualization_view(
    dataset: &Dataset,
    selection: &Selection,
) -> Result<VisualizationView, ConfigurationError> {
    let y_column = match &selection.y_column {
        Some(col) => {
            if !dataset.numeric_columns().contains(&col.as_str()) {
                return Err(ConfigurationError::NotNumeric(col.clone()));
            }
            col.clone()
        }
        None => default_y_column(dataset)
            .ok_or(ConfigurationError::NoNumericColumns)?
            .to_string(),
    };
    let y_idx = dataset
        .schema
        .index_of(&y_column)
        .ok_or_else(|| ConfigurationError::MissingColumn(y_column.clone()))?;
    let x_idx = dataset
        .schema
        .index_of(INSTALLS_COLUMN)
        .ok_or_else(|| ConfigurationError::MissingColumn(INSTALLS_COLUMN.to_string()))?;

    let rows = top_rows_by(dataset, y_idx, TOP_N);
    let scale = SequentialScale::from_values(
        rows.iter().filter_map(|&r| dataset.cell(r, y_idx).as_f64()),
    );

    let top: Vec<BarPoint> = rows
        .iter()
        .map(|&row| {
            let value = dataset.cell(row, y_idx).as_f64();
            BarPoint {
                row,
                installs: dataset.cell(row, x_idx).as_i64().unwrap_or_default(),
                value,
                color: match (value, &scale) {
                    (Some(v), Some(s)) => s.color_for(v),
                    _ => Color32::GRAY,
                },
            }
        })
        .collect();

    Ok(VisualizationView {
        x_column: INSTALLS_COLUMN.to_string(),
        y_column,
        highlight_len: top.len().min(HIGHLIGHT_N),
        top,
    })
}

pub fn insights_view(dataset: &Dataset) -> InsightsView {
    if dataset.is_empty() {
        return InsightsView {
            columns: Vec::new(),
            show_guidance: false,
        };
    }
    let columns = dataset
        .schema
        .columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.ty.is_numeric())
        .map(|(idx, c)| ColumnInsight {
            column: c.name.clone(),
            summary: summarize_column(dataset, idx),
        })
        .collect();
    InsightsView {
        columns,
        show_guidance: true,
    }
}
