//! Request correlation middleware.
//!
//! [`Trace`] gives every request a fresh [`TraceId`], keeps it in scope while
//! the wrapped service runs, stamps it on the response as the `trace-id`
//! header and emits one structured log line per request.

use std::rc::Rc;
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::http::{Method, StatusCode};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{error, info, warn};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Middleware factory assigning a [`TraceId`] to each request.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Service produced by [`Trace`]; not used directly.
pub struct TraceMiddleware<S> {
    service: Rc<S>,
}

/// What gets logged once a request has been answered.
struct RequestSummary {
    trace_id: TraceId,
    method: Method,
    path: String,
    started: Instant,
}

impl RequestSummary {
    fn start(trace_id: TraceId, req: &ServiceRequest) -> Self {
        Self {
            trace_id,
            method: req.method().clone(),
            path: req.path().to_owned(),
            started: Instant::now(),
        }
    }

    fn finish(self, status: StatusCode) {
        let Self {
            trace_id,
            method,
            path,
            started,
        } = self;
        let elapsed_ms = started.elapsed().as_millis();
        let status = status.as_u16();
        if status >= 500 {
            warn!(%trace_id, %method, path, status, elapsed_ms, "request failed");
        } else {
            info!(%trace_id, %method, path, status, elapsed_ms, "request completed");
        }
    }
}

fn stamp_header<B>(res: &mut ServiceResponse<B>, trace_id: TraceId) {
    match HeaderValue::from_str(&trace_id.to_string()) {
        Ok(value) => {
            res.headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(err) => error!(error = %err, %trace_id, "trace id is not a valid header value"),
    }
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::generate();
        let summary = RequestSummary::start(trace_id, &req);
        let service = Rc::clone(&self.service);
        let pending = TraceId::sync_scope(trace_id, move || service.call(req));

        Box::pin(TraceId::scope(trace_id, async move {
            let mut res = pending.await?;
            stamp_header(&mut res, trace_id);
            summary.finish(res.status());
            Ok(res)
        }))
    }
}
