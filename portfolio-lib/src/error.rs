use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to fetch repositories: {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
