use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpResponse,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::infrastructure::logger::Logger;

// Burst ceiling applies inside this short window, the main limit inside the
// configured one.
const BURST_WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct RateLimitEntry {
    pub count: u32,
    pub reset_time: Instant,
    pub burst_count: u32,
    pub burst_reset_time: Instant,
}

#[derive(Debug, Clone)]
pub struct RateLimitingMiddleware {
    rate_limit: u32,
    burst_limit: u32,
    window_size: Duration,
}

impl RateLimitingMiddleware {
    pub fn new(rate_limit: u32, burst_limit: u32, window_size: Duration) -> Self {
        Self {
            rate_limit,
            burst_limit,
            window_size,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimitingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = RateLimitingService<S, B>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitingService {
            service: Arc::new(service),
            rate_limit: self.rate_limit,
            burst_limit: self.burst_limit,
            window_size: self.window_size,
            limits: Arc::new(RwLock::new(HashMap::new())),
            _phantom: std::marker::PhantomData,
        }))
    }
}

pub struct RateLimitingService<S, B> {
    service: Arc<S>,
    rate_limit: u32,
    burst_limit: u32,
    window_size: Duration,
    limits: Arc<RwLock<HashMap<String, RateLimitEntry>>>,
    _phantom: std::marker::PhantomData<B>,
}

impl<S, B> Service<ServiceRequest> for RateLimitingService<S, B>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Arc::clone(&self.service);
        let rate_limit = self.rate_limit;
        let burst_limit = self.burst_limit;
        let window_size = self.window_size;
        let limits = Arc::clone(&self.limits);

        Box::pin(async move {
            let client_ip = req
                .connection_info()
                .peer_addr()
                .unwrap_or("unknown")
                .to_string();

            let verdict = {
                let mut limits_guard = limits.write().await;
                check_rate_limit(
                    &client_ip,
                    &mut limits_guard,
                    rate_limit,
                    burst_limit,
                    window_size,
                    Instant::now(),
                )
            };

            if let RateLimitVerdict::Limited { retry_after } = verdict {
                Logger::rate_limit_hit(&client_ip);
                return Ok(req.into_response(
                    HttpResponse::TooManyRequests()
                        .json(serde_json::json!({
                            "error": "Rate limit exceeded",
                            "retry_after": retry_after,
                        }))
                        .map_into_boxed_body(),
                ));
            }

            let res = service.call(req).await?;
            Ok(res.map_into_boxed_body())
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitVerdict {
    Allowed,
    Limited { retry_after: u64 },
}

/// Fixed-window limiter with a one-second burst ceiling on top. Shared by the
/// middleware and by tests that exercise the windowing without HTTP plumbing.
pub fn check_rate_limit(
    client_ip: &str,
    limits: &mut HashMap<String, RateLimitEntry>,
    rate_limit: u32,
    burst_limit: u32,
    window_size: Duration,
    now: Instant,
) -> RateLimitVerdict {
    let entry = limits.entry(client_ip.to_string()).or_insert(RateLimitEntry {
        count: 0,
        reset_time: now + window_size,
        burst_count: 0,
        burst_reset_time: now + BURST_WINDOW,
    });

    if now >= entry.reset_time {
        entry.count = 0;
        entry.reset_time = now + window_size;
    }
    if now >= entry.burst_reset_time {
        entry.burst_count = 0;
        entry.burst_reset_time = now + BURST_WINDOW;
    }

    if entry.burst_count >= burst_limit {
        return RateLimitVerdict::Limited {
            retry_after: entry.burst_reset_time.duration_since(now).as_secs().max(1),
        };
    }
    if entry.count >= rate_limit {
        return RateLimitVerdict::Limited {
            retry_after: entry.reset_time.duration_since(now).as_secs(),
        };
    }

    entry.count += 1;
    entry.burst_count += 1;
    RateLimitVerdict::Allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_limit_enforced() {
        let mut limits = HashMap::new();
        let now = Instant::now();
        let window = Duration::from_secs(60);

        for _ in 0..3 {
            assert_eq!(
                check_rate_limit("1.2.3.4", &mut limits, 3, 100, window, now),
                RateLimitVerdict::Allowed
            );
        }
        assert!(matches!(
            check_rate_limit("1.2.3.4", &mut limits, 3, 100, window, now),
            RateLimitVerdict::Limited { .. }
        ));
    }

    #[test]
    fn test_window_resets() {
        let mut limits = HashMap::new();
        let now = Instant::now();
        let window = Duration::from_secs(60);

        assert_eq!(
            check_rate_limit("1.2.3.4", &mut limits, 1, 100, window, now),
            RateLimitVerdict::Allowed
        );
        assert!(matches!(
            check_rate_limit("1.2.3.4", &mut limits, 1, 100, window, now),
            RateLimitVerdict::Limited { .. }
        ));
        let later = now + window + Duration::from_secs(1);
        assert_eq!(
            check_rate_limit("1.2.3.4", &mut limits, 1, 100, window, later),
            RateLimitVerdict::Allowed
        );
    }

    #[test]
    fn test_burst_ceiling_trips_before_window() {
        let mut limits = HashMap::new();
        let now = Instant::now();
        let window = Duration::from_secs(60);

        for _ in 0..2 {
            assert_eq!(
                check_rate_limit("1.2.3.4", &mut limits, 100, 2, window, now),
                RateLimitVerdict::Allowed
            );
        }
        assert!(matches!(
            check_rate_limit("1.2.3.4", &mut limits, 100, 2, window, now),
            RateLimitVerdict::Limited { .. }
        ));
        // next burst window clears the ceiling, main window still has room
        let later = now + BURST_WINDOW;
        assert_eq!(
            check_rate_limit("1.2.3.4", &mut limits, 100, 2, window, later),
            RateLimitVerdict::Allowed
        );
    }

    #[test]
    fn test_clients_tracked_independently() {
        let mut limits = HashMap::new();
        let now = Instant::now();
        let window = Duration::from_secs(60);

        assert_eq!(
            check_rate_limit("1.1.1.1", &mut limits, 1, 100, window, now),
            RateLimitVerdict::Allowed
        );
        assert_eq!(
            check_rate_limit("2.2.2.2", &mut limits, 1, 100, window, now),
            RateLimitVerdict::Allowed
        );
    }
}
