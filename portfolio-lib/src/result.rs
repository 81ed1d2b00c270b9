use crate::error::PortfolioError;

pub type PortfolioResult<T> = std::result::Result<T, PortfolioError>;
