//! Server configuration
//!
//! Every option can be given on the command line or through the environment
//! (including a `.env` file loaded by the binary).

use std::path::PathBuf;

use clap::Parser;
use useeio_flows::IndexPolicy;

/// Default values for the server configuration
pub mod defaults {
    /// Folder holding one sub-folder per model
    pub const DATA_DIR: &str = "data";

    pub const HOST: &str = "0.0.0.0";

    pub const PORT: u16 = 8080;
}

/// Serves the elementary flows of USEEIO models as JSON.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct ApiConfig {
    /// Folder containing one data folder per model
    #[arg(long, env = "USEEIO_DATA_DIR", default_value = defaults::DATA_DIR)]
    pub data_dir: PathBuf,

    /// Address to bind to
    #[arg(long, env = "HOST", default_value = defaults::HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = defaults::PORT)]
    pub port: u16,

    /// Reject flow files whose index column is not a permutation of 0..N
    #[arg(long, env = "USEEIO_STRICT_INDICES")]
    pub strict_indices: bool,
}

impl ApiConfig {
    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn index_policy(&self) -> IndexPolicy {
        if self.strict_indices {
            IndexPolicy::Strict
        } else {
            IndexPolicy::Lenient
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(defaults::DATA_DIR),
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            strict_indices: false,
        }
    }
}
