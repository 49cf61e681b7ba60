use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the dataset. Either one leaves the dashboard on
/// its failure screen.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("cannot read dataset {}", .path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: Installs value {value:?} is not an integer")]
    Parse { row: usize, value: String },
}

/// Problems that make the chart impossible to draw for the current dataset.
/// Only the visualization tab reports these; the other tabs still render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("dataset has no numeric columns to plot")]
    NoNumericColumns,

    #[error("column '{0}' is not numeric")]
    NotNumeric(String),

    #[error("dataset has no '{0}' column")]
    MissingColumn(String),
}
