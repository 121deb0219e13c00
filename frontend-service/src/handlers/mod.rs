pub mod app;
pub mod data;
pub mod metrics;

pub use app::{health_check, index};
pub use data::get_data;
pub use metrics::service_metrics;
