//! Command orchestration layer

pub mod convert;
pub mod greet;
