#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

/// Samples this process's resource usage over one analysis run.
#[cfg(feature = "cli")]
pub struct RunMonitor {
    system: System,
    pid: Option<Pid>,
    start: Instant,
    peak_memory_mb: u64,
}

#[cfg(feature = "cli")]
impl RunMonitor {
    pub fn start() -> Self {
        let mut system = System::new_with_specifics(RefreshKind::everything());
        system.refresh_all();
        Self {
            system,
            pid: sysinfo::get_current_pid().ok(),
            start: Instant::now(),
            peak_memory_mb: 0,
        }
    }

    pub fn sample(&mut self) {
        let Some(pid) = self.pid else { return };
        self.system.refresh_all();
        if let Some(process) = self.system.process(pid) {
            let memory_mb = process.memory() / 1024 / 1024;
            self.peak_memory_mb = self.peak_memory_mb.max(memory_mb);
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// One-line usage summary, logged at the end of the run.
    pub fn report(&mut self) {
        self.sample();
        let Some(pid) = self.pid else {
            tracing::warn!("Resource monitor could not resolve the current PID");
            return;
        };
        let cpu = self
            .system
            .process(pid)
            .map(|p| p.cpu_usage())
            .unwrap_or(0.0);
        tracing::info!(
            "Run finished in {:.1}s (peak memory {} MB, CPU {:.1}%)",
            self.elapsed().as_secs_f64(),
            self.peak_memory_mb,
            cpu
        );
    }
}
