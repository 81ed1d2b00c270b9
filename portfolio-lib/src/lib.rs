mod catalog;
mod error;
mod image;
mod logging_middleware;
mod normalizer;
mod object_model;
mod repository_fetcher;
mod result;
mod revalidate_middleware;

pub use self::catalog::{ProjectCatalog, SLIDER_AUTOPLAY};
pub use self::error::PortfolioError;
pub use self::image::{keyword_hash, resolve_image};
pub use self::logging_middleware::LoggingMiddleware;
pub use self::normalizer::{normalize, priority_of};
pub use self::object_model::{Project, RawRepository};
pub use self::repository_fetcher::{credential_from_env, RepositoryFetcher, GITHUB_API_URL};
pub use self::result::PortfolioResult;
pub use self::revalidate_middleware::{RevalidateMiddleware, DEFAULT_REVALIDATE};
