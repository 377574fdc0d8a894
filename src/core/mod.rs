//! Core library components.
//!
//! This module contains the reusable logic for loading, validating, and
//! writing release-signing configuration.

pub mod constants;
pub mod credentials;
pub mod project;
pub mod properties;
pub mod variant;
