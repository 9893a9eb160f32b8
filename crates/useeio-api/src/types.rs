use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use useeio_flows::IndexPolicy;

use crate::config::ApiConfig;

/// API state shared by all handlers. It is never mutated after start-up.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub data_dir: Arc<PathBuf>,
    pub index_policy: IndexPolicy,
}

impl ApiState {
    pub fn new<P: Into<PathBuf>>(data_dir: P, index_policy: IndexPolicy) -> Self {
        Self {
            data_dir: Arc::new(data_dir.into()),
            index_policy,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.data_dir.clone(), config.index_policy())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}
