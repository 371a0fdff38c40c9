use crate::domain::model::HostStats;
#[cfg(feature = "cli")]
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

#[cfg(feature = "cli")]
pub struct SystemMonitor {
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// 讀取一次主機狀態；未啟用時回傳 None
    pub fn snapshot(&self) -> Option<HostStats> {
        if !self.enabled {
            return None;
        }

        let system = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::nothing())
                .with_memory(MemoryRefreshKind::nothing().with_ram()),
        );

        let os = System::long_os_version()
            .or_else(System::name)
            .unwrap_or_else(|| "Unknown".to_string());
        let cpu_model = system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty());

        let stats = HostStats {
            os,
            cpu_model,
            free_memory_bytes: system.free_memory(),
            uptime_seconds: System::uptime(),
        };
        tracing::debug!("Host stats snapshot: {:?}", stats);
        Some(stats)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(feature = "cli")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// 非 CLI 環境沒有 sysinfo
#[cfg(not(feature = "cli"))]
#[derive(Default)]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn snapshot(&self) -> Option<HostStats> {
        None
    }

    pub fn is_enabled(&self) -> bool {
        false
    }
}
