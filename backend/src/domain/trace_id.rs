//! Correlation identifier carried by every request.
//!
//! The [`Trace`](crate::Trace) middleware installs one per request in Tokio
//! task-local storage. [`Error`](crate::domain::Error) constructors read it
//! back so error bodies name the same identifier as the `trace-id` response
//! header and the request log line. Spawned tasks do not inherit task-locals;
//! run their futures through [`TraceId::scope`].

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

/// Response header carrying the trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// Per-request correlation identifier (a random UUID).
///
/// # Examples
/// ```
/// use backend::TraceId;
///
/// let rt = tokio::runtime::Runtime::new().expect("runtime");
/// let id = TraceId::generate();
/// let seen = rt.block_on(TraceId::scope(id, async { TraceId::current() }));
/// assert_eq!(seen, Some(id));
/// assert!(TraceId::current().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the request being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Drive `fut` with `trace_id` installed as the current identifier.
    pub async fn scope<Fut: Future>(trace_id: Self, fut: Fut) -> Fut::Output {
        CURRENT.scope(trace_id, fut).await
    }

    /// Call `f` with `trace_id` installed as the current identifier.
    ///
    /// Used when constructing a future must already observe the identifier,
    /// as Actix services do some work before returning their future.
    pub fn sync_scope<R>(trace_id: Self, f: impl FnOnce() -> R) -> R {
        CURRENT.sync_scope(trace_id, f)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
