#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::Instant;
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct FetchStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub requests_completed: u64,
    pub elapsed_ms: u128,
}

/// Per-process stats logged around fetch phases when `--monitor` is on.
#[cfg(feature = "cli")]
pub struct FetchMonitor {
    system: Mutex<System>,
    pid: Pid,
    started: Instant,
    requests: Mutex<u64>,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl FetchMonitor {
    pub fn new(enabled: bool) -> Self {
        let mut system = System::new_with_specifics(RefreshKind::everything());
        system.refresh_all();

        let pid = sysinfo::get_current_pid().expect("Failed to get current PID");

        Self {
            system: Mutex::new(system),
            pid,
            started: Instant::now(),
            requests: Mutex::new(0),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn snapshot(&self) -> Option<FetchStats> {
        if !self.enabled {
            return None;
        }

        let mut system = self.system.lock().ok()?;
        system.refresh_all();
        let process = system.process(self.pid)?;

        Some(FetchStats {
            cpu_usage: process.cpu_usage(),
            memory_usage_mb: process.memory() / 1024 / 1024,
            requests_completed: *self.requests.lock().ok()?,
            elapsed_ms: self.started.elapsed().as_millis(),
        })
    }

    /// Record one finished request and log the current process stats.
    pub fn request_done(&self, phase: &str) {
        if !self.enabled {
            return;
        }
        if let Ok(mut requests) = self.requests.lock() {
            *requests += 1;
        }
        if let Some(stats) = self.snapshot() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB, Requests: {}, Elapsed: {}ms",
                phase,
                stats.cpu_usage,
                stats.memory_usage_mb,
                stats.requests_completed,
                stats.elapsed_ms
            );
        }
    }

    pub fn log_final_stats(&self) {
        if let Some(stats) = self.snapshot() {
            tracing::info!(
                "📊 Final Stats - Requests: {}, Total Time: {}ms, Memory: {}MB",
                stats.requests_completed,
                stats.elapsed_ms,
                stats.memory_usage_mb
            );
        }
    }
}

#[cfg(feature = "cli")]
impl Default for FetchMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// 為非CLI環境提供空實現
#[cfg(not(feature = "cli"))]
pub struct FetchMonitor;

#[cfg(not(feature = "cli"))]
impl FetchMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn is_enabled(&self) -> bool {
        false
    }

    pub fn request_done(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}
}

#[cfg(not(feature = "cli"))]
impl Default for FetchMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
