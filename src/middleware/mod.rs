// Request instrumentation: response capture + the metrics/logging middleware

mod capture;
mod instrument;

pub use capture::{capture_response, CaptureBody, ResponseCapture};
pub use instrument::track_http;
