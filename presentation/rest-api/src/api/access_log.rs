use std::time::Instant;

use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

/// Writes one access line per request: method, path, final status and
/// elapsed time. Wraps the API key gate, so rejected requests are logged too.
pub struct AccessLog;

impl<E: Endpoint> Middleware<E> for AccessLog {
    type Output = AccessLogEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        AccessLogEndpoint { inner: ep }
    }
}

pub struct AccessLogEndpoint<E> {
    inner: E,
}

impl<E: Endpoint> Endpoint for AccessLogEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let started = Instant::now();

        let result = self.inner.call(req).await.map(IntoResponse::into_response);

        let status = match &result {
            Ok(response) => response.status(),
            Err(err) => err.status(),
        };
        tracing::info!(
            target: "access",
            %method,
            %path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        result
    }
}
