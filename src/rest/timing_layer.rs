use std::task::{Context, Poll};
use std::time::Instant;
use axum::http::Request;
use futures::future::BoxFuture;
use log::debug;
use tower::{Layer, Service};

/// Logs method, path and duration of every request
#[derive(Clone)]
pub struct TimingLayer;

impl<S> Layer<S> for TimingLayer {
    type Service = TimingMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TimingMiddleware { inner }
    }
}

#[derive(Clone, Debug)]
pub struct TimingMiddleware<S> {
    inner: S
}

impl<S, ReqBody> Service<Request<ReqBody>> for TimingMiddleware<S>
    where
        S: Service<Request<ReqBody>> + 'static,
        S::Future: Send + 'static,
        ReqBody: 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<S::Response, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let timer = Instant::now();
        let future = self.inner.call(req);
        // Measure until the response is complete, not only until the future is created
        Box::pin(async move {
            let result = future.await;
            debug!("{method} {path} took {:?}", timer.elapsed());
            result
        })
    }
}
