use crate::revalidate_middleware::Replayed;
use http::Extensions;
use log::{log, Level};
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next, Result};
use std::time::{Duration, Instant};

pub struct LoggingMiddleware {
    level: Level,
}

impl LoggingMiddleware {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

fn describe(status: StatusCode, replayed: bool, elapsed: Duration) -> String {
    if replayed {
        format!("{status} replayed within revalidation window")
    } else {
        format!("{status} from network in {}ms", elapsed.as_millis())
    }
}

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        request: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let url = request.url().clone();
        log!(self.level, "listing repositories {} {url}", request.method());
        let started = Instant::now();
        let result = next.run(request, extensions).await;
        match result.as_ref() {
            Ok(response) => log!(
                self.level,
                "{url}: {}",
                describe(
                    response.status(),
                    extensions.get::<Replayed>().is_some(),
                    started.elapsed()
                )
            ),
            Err(e) => log!(self.level, "{url}: request failed {e}"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::describe;
    use reqwest::StatusCode;
    use std::time::Duration;

    #[test]
    fn network_responses_report_latency() {
        assert_eq!(
            describe(StatusCode::OK, false, Duration::from_millis(42)),
            "200 OK from network in 42ms"
        );
    }

    #[test]
    fn replayed_responses_say_so() {
        assert_eq!(
            describe(StatusCode::OK, true, Duration::from_millis(42)),
            "200 OK replayed within revalidation window"
        );
    }
}
