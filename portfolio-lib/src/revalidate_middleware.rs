use bytes::Bytes;
use http::{Extensions, HeaderMap, Method, StatusCode};
use log::debug;
use reqwest::{Request, Response, Url};
use reqwest_middleware::{Middleware, Next, Result};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(3600);

/// Marks a response served from memory instead of the network.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Replayed;

struct CachedResponse {
    stored_at: Instant,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl CachedResponse {
    fn to_response(&self) -> Response {
        let mut response = http::Response::new(self.body.clone());
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers.clone();
        Response::from(response)
    }
}

/// Replays successful GET responses until they are older than `max_age`.
pub struct RevalidateMiddleware {
    max_age: Duration,
    entries: Mutex<HashMap<Url, CachedResponse>>,
}

impl RevalidateMiddleware {
    pub fn new(max_age: Duration) -> Self {
        Self {
            max_age,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Drops stale entries, then returns a replay of `url` if it is still fresh.
    fn lookup(&self, url: &Url) -> Option<Response> {
        let mut entries = self.entries.lock().ok()?;
        entries.retain(|_, e| e.stored_at.elapsed() < self.max_age);
        entries.get(url).map(CachedResponse::to_response)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }

    fn store(&self, url: Url, entry: CachedResponse) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(url, entry);
        }
    }
}

impl Default for RevalidateMiddleware {
    fn default() -> Self {
        Self::new(DEFAULT_REVALIDATE)
    }
}

#[async_trait::async_trait]
impl Middleware for RevalidateMiddleware {
    async fn handle(
        &self,
        request: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        if request.method() != Method::GET {
            return next.run(request, extensions).await;
        }

        let url = request.url().clone();
        if let Some(response) = self.lookup(&url) {
            debug!("fresh response for {url}, skipping network");
            extensions.insert(Replayed);
            return Ok(response);
        }

        let response = next.run(request, extensions).await?;
        if !response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        let entry = CachedResponse {
            stored_at: Instant::now(),
            status,
            headers,
            body,
        };
        let replay = entry.to_response();
        self.store(url, entry);
        Ok(replay)
    }
}
