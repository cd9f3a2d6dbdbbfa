//! Utility modules for qatrack-core.

pub mod validation;
