use crate::error::PortfolioError;
use crate::logging_middleware::LoggingMiddleware;
use crate::normalizer::normalize;
use crate::object_model::{Project, RawRepository};
use crate::result::PortfolioResult;
use crate::revalidate_middleware::{RevalidateMiddleware, DEFAULT_REVALIDATE};
use anyhow::anyhow;
use log::{error, Level};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, IntoUrl, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use std::time::Duration;

pub const GITHUB_API_URL: &str = "https://api.github.com/";

const CREDENTIAL_VAR: &str = "GITHUB_TOKEN";

/// Reads the optional API credential from the environment.
pub fn credential_from_env() -> Option<String> {
    std::env::var(CREDENTIAL_VAR).ok().filter(|s| !s.is_empty())
}

pub struct RepositoryFetcher {
    url: Url,
    credential: Option<String>,
    revalidate: Duration,
    log_level: Level,
    client: ClientWithMiddleware,
}

impl RepositoryFetcher {
    pub fn new<U>(url: U, credential: Option<&str>) -> PortfolioResult<Self>
    where
        U: IntoUrl,
    {
        let mut url = url
            .into_url()
            .map_err(|e| PortfolioError::Other(anyhow!(e)))?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            url,
            credential: credential.map(String::from),
            revalidate: DEFAULT_REVALIDATE,
            log_level: Level::Debug,
            client: build_client(DEFAULT_REVALIDATE, Level::Debug),
        })
    }

    /// Overrides how long a successful listing is reused before refetching.
    pub fn with_revalidate(mut self, revalidate: Duration) -> Self {
        self.revalidate = revalidate;
        self.client = build_client(self.revalidate, self.log_level);
        self
    }

    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self.client = build_client(self.revalidate, self.log_level);
        self
    }

    /// Lists the account's repositories, most recently updated first.
    ///
    /// Never fails: any error is logged and an empty list is returned.
    pub async fn fetch(&self, account: &str) -> Vec<RawRepository> {
        match self.try_fetch(account).await {
            Ok(repos) => repos,
            Err(e) => {
                error!("Error fetching GitHub repositories for {account}: {e}");
                Vec::new()
            }
        }
    }

    pub async fn fetch_projects(&self, account: &str) -> Vec<Project> {
        normalize(&self.fetch(account).await)
    }

    pub async fn try_fetch(&self, account: &str) -> PortfolioResult<Vec<RawRepository>> {
        let url = self.repos_url(account)?;

        let mut request_builder = self
            .client
            .get(url)
            .header(USER_AGENT, "portfolio")
            .header(ACCEPT, "application/vnd.github.v3+json");
        if let Some(credential) = &self.credential {
            request_builder = request_builder.header(AUTHORIZATION, format!("token {credential}"));
        }

        let response = request_builder
            .send()
            .await
            .map_err(|e| PortfolioError::Other(anyhow!(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::Status(status));
        }

        response
            .json::<Vec<RawRepository>>()
            .await
            .map_err(|e| PortfolioError::Other(anyhow!(e)))
    }

    fn repos_url(&self, account: &str) -> PortfolioResult<Url> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("API URL {} cannot be a base", self.url))?
            .pop_if_empty()
            .extend(["users", account, "repos"]);
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("direction", "desc");
        Ok(url)
    }
}

fn build_client(revalidate: Duration, log_level: Level) -> ClientWithMiddleware {
    ClientBuilder::new(Client::new())
        .with(LoggingMiddleware::new(log_level))
        .with(RevalidateMiddleware::new(revalidate))
        .build()
}
