//! Helpers shared by the backend integration tests.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
