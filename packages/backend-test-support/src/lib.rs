//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: logging bootstrap,
//! problem-details assertions and unique test identities.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
