pub mod timestamp;

pub use timestamp::{format_timestamp, utc_timestamp};
