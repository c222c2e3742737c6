pub mod d400_overview;
pub mod d401_analysis;

use thiserror::Error;

use crate::shared::analytics::AnalyticsError;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    /// Name of the dimension nothing was selected for
    #[error("select at least one {0}")]
    EmptySelection(&'static str),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
