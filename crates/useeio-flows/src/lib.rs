//! # USEEIO Flows Library
//!
//! Loads the elementary flow reference data of a life-cycle-assessment model
//! from its `flows.csv` file and resolves single flows by id or uuid.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use useeio_flows::{load_flows, model_folder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let folder = model_folder(Path::new("data"), "USEEIOv2.0");
//!     let flows = load_flows(&folder)?;
//!     println!("Loaded {} flows", flows.len());
//!
//!     let co2 = flows.find("CO2")?;
//!     println!("{} is measured in {}", co2.name, co2.unit);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod reader;
pub mod types;

// Re-export commonly used types
pub use error::{ErrorKind, FlowError, Result};
pub use loader::{load_flows, load_flows_with, model_folder, IndexPolicy, FLOWS_FILE_NAME};
pub use types::{Flow, FlowSet};
