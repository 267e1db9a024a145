//! Request handler module
//!
//! Route dispatch plus the two responders: the static UI page and the
//! sensor reading.

pub mod router;
pub mod sensor;
pub mod ui;

// Re-export main entry point
pub use router::handle_request;
