//! Common test utilities for kona.
//!
//! This module provides shared utilities for testing the kona server.

// Not every integration test binary uses every helper
#![allow(dead_code)]

pub mod assertions;
pub mod http_client;
pub mod server;
pub mod test_data;
