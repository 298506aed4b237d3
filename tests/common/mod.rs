//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Assertion helpers for minified output
//! - Stylesheet fixture creation utilities
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::assertions::*;
//!
//! fn test_output_is_clean() {
//!     assert_fully_minified(".a{top:0}");
//! }
//! ```

pub mod assertions;
pub mod fixtures;
