use axum::{
    body::{Body, Bytes, HttpBody},
    extract::Request,
    response::Response,
    BoxError,
};
use std::sync::Arc;

use super::interceptor::FaultInterceptor;

/// Fault interception middleware layer
#[derive(Clone)]
pub struct FaultInterceptionLayer {
    interceptor: Arc<FaultInterceptor>,
}

impl FaultInterceptionLayer {
    pub fn new(interceptor: Arc<FaultInterceptor>) -> Self {
        Self { interceptor }
    }
}

impl<S> tower::Layer<S> for FaultInterceptionLayer {
    type Service = FaultInterceptionService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        FaultInterceptionService {
            inner,
            interceptor: Arc::clone(&self.interceptor),
        }
    }
}

/// Fault interception service wrapper
#[derive(Clone)]
pub struct FaultInterceptionService<S> {
    inner: S,
    interceptor: Arc<FaultInterceptor>,
}

impl<S, B> tower::Service<Request> for FaultInterceptionService<S>
where
    S: tower::Service<Request, Response = axum::http::Response<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    B: HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let interceptor = Arc::clone(&self.interceptor);

        Box::pin(async move {
            let response = inner.call(req).await?.map(Body::new);
            Ok(interceptor.process(response))
        })
    }
}
