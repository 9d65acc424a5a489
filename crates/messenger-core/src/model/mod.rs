pub mod entry;
pub mod partition;
pub mod registry;

pub use entry::RegistryEntry;
pub use partition::Partition;
pub use registry::Registry;
