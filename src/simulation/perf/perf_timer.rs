#[cfg(target_arch = "wasm32")]
use js_sys;

/// Monotonic wall-clock source, in milliseconds.
///
/// The world reads it on `start()` and on every `tick()`. Hosts that already
/// have a frame timestamp can bypass it with `start_at`/`tick_at`.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// `Date.now()` in the browser, a process-local `Instant` elsewhere
#[derive(Clone, Copy)]
pub struct SystemClock {
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            SystemClock {}
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            SystemClock { origin: std::time::Instant::now() }
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.origin.elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Stopwatch for per-step timings
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    clock: SystemClock,
    start_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let clock = SystemClock::new();
        PerfTimer { start_ms: clock.now_ms(), clock }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.clock.now_ms() - self.start_ms
    }
}
