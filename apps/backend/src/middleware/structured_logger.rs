//! Access log: one `request_completed` event per request.
//!
//! Level follows the status class: 5xx is `error`, 4xx is `warn`, the rest
//! `info`. Must sit inside `RequestTrace` to pick up the trace id.

use std::future::{ready, Ready};
use std::time::{Duration, Instant};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{Method, StatusCode};
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;

use crate::trace_ctx;

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            AccessRecord {
                method,
                path,
                status,
                elapsed: started.elapsed(),
            }
            .emit();
            result
        })
    }
}

struct AccessRecord {
    method: Method,
    path: String,
    status: StatusCode,
    elapsed: Duration,
}

macro_rules! access_event {
    ($level:ident, $record:ident) => {
        tracing::$level!(
            http.method = %$record.method,
            url.path = %$record.path,
            http.status_code = $record.status.as_u16(),
            duration_us = $record.duration_us(),
            trace_id = %trace_ctx::trace_id(),
            "request_completed"
        )
    };
}

impl AccessRecord {
    fn duration_us(&self) -> u64 {
        u64::try_from(self.elapsed.as_micros()).unwrap_or(u64::MAX)
    }

    fn emit(&self) {
        if self.status.is_server_error() {
            access_event!(error, self);
        } else if self.status.is_client_error() {
            access_event!(warn, self);
        } else {
            access_event!(info, self);
        }
    }
}
