//! Tower middleware applying a [`CorsPolicy`] in front of an inner service.

use crate::adapter::{OwnedRequestContext, apply_headers, terminal_response};
use crate::config::{ConfigError, CorsConfig};
use crate::policy::CorsPolicy;
use crate::result::CorsDecision;
use http::{Request, Response};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Layer that wraps services with [`CorsService`]. Clones share one policy.
#[derive(Debug, Clone)]
pub struct CorsLayer {
    policy: Arc<CorsPolicy>,
}

impl CorsLayer {
    pub fn new(policy: CorsPolicy) -> Self {
        Self::from_shared(Arc::new(policy))
    }

    pub fn from_shared(policy: Arc<CorsPolicy>) -> Self {
        Self { policy }
    }

    pub fn from_config(config: CorsConfig) -> Result<Self, ConfigError> {
        CorsPolicy::from_config(config).map(Self::new)
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }
}

impl<S> Layer<S> for CorsLayer {
    type Service = CorsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorsService {
            inner,
            policy: Arc::clone(&self.policy),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CorsService<S> {
    inner: S,
    policy: Arc<CorsPolicy>,
}

impl<S> CorsService<S> {
    pub fn new(policy: Arc<CorsPolicy>, inner: S) -> Self {
        Self { inner, policy }
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CorsService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ReqBody: Send + 'static,
    ResBody: Default + Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let context = OwnedRequestContext::from_request(&request);

        match self.policy.evaluate(&context.as_request_context()) {
            CorsDecision::NotApplicable => Box::pin(self.inner.call(request)),
            CorsDecision::ActualAccepted { headers } => {
                let future = self.inner.call(request);
                Box::pin(async move {
                    let mut response = future.await?;
                    apply_headers(response.headers_mut(), &headers);
                    Ok(response)
                })
            }
            decision => {
                let response = terminal_response(decision);
                Box::pin(async move { Ok(response) })
            }
        }
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;
