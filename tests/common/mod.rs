//! Common test utilities for ridgeline.
//!
//! This module provides shared utilities for the integration tests.

// Re-export all common test utilities
pub mod assertions;
pub mod test_data;
