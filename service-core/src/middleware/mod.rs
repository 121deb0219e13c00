pub mod fallback;
pub mod metrics;
pub mod tracing;

pub use self::fallback::{handle_panic, not_found_fallback};
pub use self::metrics::metrics_middleware;
pub use self::tracing::{REQUEST_ID_HEADER, RequestId, make_request_span, request_id_middleware};
