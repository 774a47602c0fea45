//! Shared state for the web UI

use anyhow::{Context, Result};

use crate::api::HttpEvaluationService;
use crate::cli::{DashboardConfig, UploadLimits};
use crate::dashboard::Dashboard;

/// State shared by every handler
pub struct AppState {
    pub dashboard: Dashboard<HttpEvaluationService>,
    pub config: DashboardConfig,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let service = HttpEvaluationService::new(&config.service)
            .context("Failed to build evaluation service client")?;

        Ok(Self {
            dashboard: Dashboard::new(service, &config),
            config,
        })
    }

    pub fn limits(&self) -> &UploadLimits {
        self.dashboard.limits()
    }

    /// Largest request body accepted. Leaves headroom over the file limit so
    /// oversized files reach validation and get a proper notification.
    pub fn body_limit(&self) -> usize {
        self.config.uploads.max_file_size_bytes as usize + 1024 * 1024
    }
}
