//! CLI command implementations

pub mod convert;
pub mod greet;
pub mod registry;
pub mod seed;
