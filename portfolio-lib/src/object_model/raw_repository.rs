use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Repository metadata as returned by `GET /users/{account}/repos`.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRepository {
    #[serde(rename = "id")]
    pub id: u64,

    #[serde(rename = "name")]
    pub name: String,

    #[serde(rename = "description")]
    pub description: Option<String>,

    #[serde(rename = "html_url")]
    pub html_url: String,

    #[serde(rename = "clone_url")]
    pub clone_url: String,

    #[serde(rename = "stargazers_count")]
    pub stargazers_count: u64,

    #[serde(rename = "forks_count")]
    pub forks_count: u64,

    #[serde(rename = "language")]
    pub language: Option<String>,

    #[serde(rename = "topics", default)]
    pub topics: Vec<String>,

    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updated_at")]
    pub updated_at: DateTime<Utc>,
}
