//! Conversions from infrastructure errors into domain errors

pub mod conversions;
