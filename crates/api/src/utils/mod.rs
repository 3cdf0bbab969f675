//! Shared command utilities

pub mod access;
pub mod logging;
