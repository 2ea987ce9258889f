//! Liveness and readiness probes.
//!
//! Liveness only says the worker answers. Readiness additionally requires the
//! listener to be bound and storage to answer a round trip within
//! [`DEFAULT_STORAGE_CHECK_TIMEOUT`], so an orchestrator stops routing traffic
//! while PostgreSQL is unreachable.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use actix_web::{HttpResponse, get, http::header, web};
use tracing::warn;

use crate::domain::ports::StorageProbe;

/// Upper bound on one readiness storage check.
pub const DEFAULT_STORAGE_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// Readiness inputs shared by all workers.
pub struct HealthState {
    accepting: AtomicBool,
    storage: Arc<dyn StorageProbe>,
    storage_check_timeout: Duration,
}

impl HealthState {
    /// Create a state that checks `storage` and is not yet accepting traffic.
    pub fn new(storage: Arc<dyn StorageProbe>) -> Self {
        Self {
            accepting: AtomicBool::new(false),
            storage,
            storage_check_timeout: DEFAULT_STORAGE_CHECK_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_storage_check_timeout(mut self, timeout: Duration) -> Self {
        self.storage_check_timeout = timeout;
        self
    }

    /// Record that the listener is bound.
    pub fn mark_ready(&self) {
        self.accepting.store(true, Ordering::Release);
    }

    /// True once bound and storage answered within the timeout.
    pub async fn is_ready(&self) -> bool {
        if !self.accepting.load(Ordering::Acquire) {
            return false;
        }
        match tokio::time::timeout(self.storage_check_timeout, self.storage.ping()).await {
            Ok(Ok(())) => true,
            Ok(Err(err)) => {
                warn!(error = %err, "readiness: storage unreachable");
                false
            }
            Err(_) => {
                warn!(
                    timeout_ms = u64::try_from(self.storage_check_timeout.as_millis())
                        .unwrap_or(u64::MAX),
                    "readiness: storage check timed out"
                );
                false
            }
        }
    }
}

fn probe_response(probe_ok: bool) -> HttpResponse {
    let mut response = if probe_ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };

    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe: 200 when bound and storage answers, 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is bound and storage is reachable"),
        (status = 503, description = "Server is not bound yet or storage is unreachable")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready().await)
}

/// Liveness probe: 200 whenever a worker can answer.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses((status = 200, description = "Server is alive"))
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    probe_response(true)
}
