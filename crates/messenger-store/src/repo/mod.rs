//! Repository layer over the registry tables

pub mod hydration;
pub mod registry_repo;

pub use registry_repo::RegistryRepo;
