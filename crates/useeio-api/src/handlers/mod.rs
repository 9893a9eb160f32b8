pub mod flows;
pub mod health;

pub use flows::{get_flow, list_flows};
pub use health::health_check;
