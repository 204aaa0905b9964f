// Catch-all for failures the handlers did not turn into JSON themselves.
//
// - panics while routing or handling become a 500 JSON response instead of tearing
//   down the worker
// - errors returned by inner services are logged and passed on for actix to render
// - 4xx/5xx responses produced by actix itself (payload limits, extractor failures)
//   are rewritten to `{"error": ...}`

use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::{
        header::{self, HeaderValue},
        StatusCode,
    },
    Error, HttpResponse, ResponseError,
};
use futures_util::future::{FutureExt, LocalBoxFuture};
use std::any::Any;
use std::future::{ready, Ready};
use std::panic::{self, AssertUnwindSafe};

use crate::core::error::AppError;

/// Middleware for consistent error response formatting
pub struct ErrorHandler;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware { service }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Routing and other synchronous service code run inside `call` itself
        let fut = match panic::catch_unwind(AssertUnwindSafe(|| self.service.call(req))) {
            Ok(fut) => fut,
            Err(panic) => return Box::pin(ready(Err(panic_error(panic.as_ref())))),
        };

        Box::pin(async move {
            match AssertUnwindSafe(fut).catch_unwind().await {
                Ok(Ok(res)) => Ok(ensure_json_error(res.map_into_boxed_body())),
                Ok(Err(err)) => {
                    log_error(&err);
                    Err(err)
                }
                Err(panic) => Err(panic_error(panic.as_ref())),
            }
        })
    }
}

/// Turn a caught panic into an internal error, rendered by actix as JSON
fn panic_error(panic: &(dyn Any + Send)) -> Error {
    let message = panic_message(panic);
    tracing::error!(panic = %message, "Request handler panicked");
    AppError::internal(message).into()
}

/// Log an error returned by an inner service
pub fn log_error(err: &Error) {
    let status = err.as_response_error().status_code();
    if status.is_server_error() {
        tracing::error!(status = %status, "Request error: {}", err);
    } else {
        tracing::warn!(status = %status, "Request error: {}", err);
    }
}

/// Build a `{"error": message}` response; 5xx messages get the internal-error prefix
pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    if status.is_server_error() {
        let mut response = AppError::internal(message).error_response();
        *response.status_mut() = status;
        return response;
    }

    HttpResponse::build(status).json(serde_json::json!({ "error": message }))
}

fn ensure_json_error(res: ServiceResponse<BoxBody>) -> ServiceResponse<BoxBody> {
    let status = res.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(res.headers()) {
        return res;
    }

    let message = match res.response().error() {
        Some(err) => err.to_string(),
        None => status.canonical_reason().unwrap_or("Error").to_string(),
    };

    if status.is_server_error() {
        tracing::error!(status = %status, "Replacing non-JSON error body: {}", message);
    }

    let (req, _) = res.into_parts();
    ServiceResponse::new(req, error_response(status, &message))
}

fn is_json(headers: &actix_web::http::header::HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value: &HeaderValue| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false)
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic while handling request".to_string()
    }
}
