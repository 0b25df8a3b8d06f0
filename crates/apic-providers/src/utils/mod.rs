//! Shared utilities for the client implementations

mod http_response;

pub use http_response::{ApiResponse, ResponseData, extract_response_data};
