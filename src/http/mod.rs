//! HTTP protocol layer module
//!
//! Response builders and content-type lookup shared by the route handlers.

pub mod mime;
pub mod response;

// Re-export commonly used types
pub use response::{build_404_response, build_file_response, build_text_response};
