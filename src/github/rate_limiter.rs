use std::sync::Mutex;
use std::time::{Duration, Instant};

use reqwest::Response;

use crate::error::{Error, Result};

/// Tracks the quota advertised by `x-ratelimit-remaining` /
/// `x-ratelimit-reset` response headers. A request-serving process cannot
/// sleep through a reset window, so an exhausted quota fails the call fast
/// instead of waiting it out.
pub struct RateLimiter {
    state: Mutex<QuotaState>,
}

struct QuotaState {
    remaining: u32,
    reset_at: Option<Instant>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QuotaState {
                remaining: 60,
                reset_at: None,
            }),
        }
    }

    /// Errors with the seconds until reset when the quota is known-exhausted.
    pub fn check(&self) -> Result<()> {
        let state = self.state.lock().unwrap();
        if state.remaining == 0 {
            if let Some(reset_at) = state.reset_at {
                let now = Instant::now();
                if reset_at > now {
                    let wait = (reset_at - now).as_secs().max(1);
                    return Err(Error::RateLimited(wait));
                }
            }
        }
        Ok(())
    }

    pub fn update_from_response(&self, response: &Response) {
        let remaining = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        let Some(remaining) = remaining else {
            return;
        };

        let mut state = self.state.lock().unwrap();
        state.remaining = remaining;

        let reset_timestamp = response
            .headers()
            .get("x-ratelimit-reset")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if let Some(reset_timestamp) = reset_timestamp {
            let now_secs = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            if reset_timestamp > now_secs {
                state.reset_at =
                    Some(Instant::now() + Duration::from_secs(reset_timestamp - now_secs));
            }
        }
    }

    #[cfg(test)]
    fn set_quota(&self, remaining: u32, reset_in: Option<Duration>) {
        let mut state = self.state.lock().unwrap();
        state.remaining = remaining;
        state.reset_at = reset_in.map(|d| Instant::now() + d);
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_limiter_allows_requests() {
        let limiter = RateLimiter::new();
        assert!(limiter.check().is_ok());
    }

    #[test]
    fn test_exhausted_quota_fails_fast() {
        let limiter = RateLimiter::new();
        limiter.set_quota(0, Some(Duration::from_secs(120)));

        match limiter.check() {
            Err(Error::RateLimited(secs)) => assert!(secs >= 1 && secs <= 120),
            other => panic!("expected RateLimited, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_exhausted_quota_past_reset_allows_requests() {
        let limiter = RateLimiter::new();
        limiter.set_quota(0, None);
        assert!(limiter.check().is_ok());
    }
}
