//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Scalar kinds and their alias suffixes
//! - Logging utilities

pub mod scalar;
pub mod logging;
