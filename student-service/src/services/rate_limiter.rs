use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

// Past this many tracked callers, expired windows are swept on each check.
const SWEEP_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { remaining: u32 },
    Limited { retry_after: Duration },
}

struct Window {
    started_at: Instant,
    count: u32,
}

/// Fixed-window request counter keyed by caller.
///
/// Each caller gets `max_requests` per window; the window starts at the
/// caller's first request and resets once `window` has elapsed.
pub struct FixedWindowRateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

impl FixedWindowRateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub async fn check(&self, caller: &str) -> RateDecision {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;

        if windows.len() > SWEEP_THRESHOLD {
            let window = self.window;
            windows.retain(|_, w| now.duration_since(w.started_at) < window);
        }

        let entry = windows.entry(caller.to_owned()).or_insert(Window {
            started_at: now,
            count: 0,
        });

        if now.duration_since(entry.started_at) >= self.window {
            entry.started_at = now;
            entry.count = 0;
        }

        if entry.count >= self.max_requests {
            let elapsed = now.duration_since(entry.started_at);
            return RateDecision::Limited {
                retry_after: self.window.saturating_sub(elapsed),
            };
        }

        entry.count += 1;
        RateDecision::Allowed {
            remaining: self.max_requests - entry.count,
        }
    }
}
