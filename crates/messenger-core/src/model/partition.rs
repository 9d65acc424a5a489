use crate::errors::RegistryError;
use serde::{Deserialize, Serialize};

/// Registry partition
///
/// The registry is split in two. `Configuration` holds operator-seeded
/// defaults and is only written by seed import. `Operational` is the runtime
/// write-back cache: every handled request re-persists its greeting there,
/// and initialization wipes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Configuration,
    Operational,
}

impl Partition {
    /// Stable name used in storage and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::Configuration => "configuration",
            Partition::Operational => "operational",
        }
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Partition {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "configuration" => Ok(Partition::Configuration),
            "operational" => Ok(Partition::Operational),
            other => Err(RegistryError::UnknownPartition {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_round_trip_names() {
        for partition in [Partition::Configuration, Partition::Operational] {
            let parsed = Partition::from_str(partition.as_str()).unwrap();
            assert_eq!(parsed, partition);
        }
    }

    #[test]
    fn test_unknown_partition_rejected() {
        let err = Partition::from_str("archive").unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownPartition {
                value: "archive".to_string()
            }
        );
    }
}
