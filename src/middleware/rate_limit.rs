use std::{
    collections::HashMap,
    net::{IpAddr, SocketAddr},
    sync::Mutex,
    time::{Duration, Instant},
};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::{error::Error, model::app::AppState};

struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window request counter per client IP.
///
/// A window starts on the first request from an IP; requests beyond the cap
/// within a window are rejected. Lapsed windows are swept on every check, so
/// the map only holds IPs seen within the current window and cannot grow
/// without bound under source-address rotation. State is a plain
/// mutex-guarded map, the only mutable process-wide structure in the server.
pub struct RateLimiter {
    window: Duration,
    max_requests: u32,
    windows: Mutex<HashMap<IpAddr, Window>>,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Counts a request from `ip`. Returns false once the cap for the
    /// current window is exceeded.
    pub fn check(&self, ip: IpAddr) -> bool {
        let now = Instant::now();
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        windows.retain(|_, window| now.duration_since(window.started) < self.window);

        let window = windows.entry(ip).or_insert(Window {
            started: now,
            count: 0,
        });

        window.count += 1;
        window.count <= self.max_requests
    }
}

/// Applies the limiter to `/api/*` requests; everything else passes through.
pub async fn rate_limit(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    if request.uri().path().starts_with("/api") && !state.rate_limiter.check(addr.ip()) {
        warn!(ip = %addr.ip(), path = %request.uri().path(), "request rate limited");
        return Error::RateLimited.into_response();
    }

    next.run(request).await
}
