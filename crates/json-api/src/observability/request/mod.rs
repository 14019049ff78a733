//! Request-level logging and request IDs.

mod request_ids;

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::Instrument as _;
use tracing::{error, info, warn};

/// Wraps every request in an `http.request` span and logs its outcome.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLogging {
    slow_threshold: Duration,
}

impl RequestLogging {
    pub(crate) fn new(slow_threshold: Duration) -> Self {
        Self { slow_threshold }
    }
}

#[handler]
impl RequestLogging {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let started = Instant::now();

        let request_id =
            request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

        request_ids::set_request_id_header(res, &request_id);

        let method = req.method().to_string();
        let path = req.uri().path().to_owned();
        let remote_addr = req.remote_addr().to_string();

        let span = tracing::info_span!(
            parent: None,
            "http.request",
            request_id = %request_id,
            method = %method,
            path = %path,
            remote_addr = %remote_addr,
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        );

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;

        let status = request_ids::response_status_or_ok(res.status_code);
        let duration_ms = started.elapsed().as_millis();
        let threshold_ms = self.slow_threshold.as_millis();

        span.record("status", status.as_u16());
        span.record("duration_ms", duration_ms);

        span.in_scope(|| {
            info!(status = status.as_u16(), duration_ms, "request.completed");

            if status.is_server_error() {
                error!(
                    status = status.as_u16(),
                    method = %method,
                    path = %path,
                    request_id = %request_id,
                    "server error response"
                );
            } else if status.is_client_error() {
                warn!(
                    status = status.as_u16(),
                    method = %method,
                    path = %path,
                    request_id = %request_id,
                    "client error response"
                );
            }

            if duration_ms > threshold_ms {
                warn!(
                    method = %method,
                    path = %path,
                    request_id = %request_id,
                    duration_ms,
                    threshold_ms,
                    "slow request detected"
                );
            }
        });
    }
}
