use serde::Serialize;

pub const CONFIG_SCHEMA: &str = "navigator-config";

/// Which generation of the configuration to produce. The newer revision
/// binds the assets owner filter to the caller's party and reads argument
/// fields through the decode step instead of by direct property access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigRevision {
    V1,
    V2,
}

impl ConfigRevision {
    pub fn major(self) -> u32 {
        match self {
            ConfigRevision::V1 => 1,
            ConfigRevision::V2 => 2,
        }
    }

    pub fn from_major(major: u32) -> Option<Self> {
        match major {
            1 => Some(ConfigRevision::V1),
            2 => Some(ConfigRevision::V2),
            _ => None,
        }
    }
}

/// Schema descriptor the host uses to select a compatible renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaVersion {
    pub schema: &'static str,
    pub major: u32,
    pub minor: u32,
}

impl SchemaVersion {
    pub fn for_revision(revision: ConfigRevision) -> Self {
        Self {
            schema: CONFIG_SCHEMA,
            major: revision.major(),
            minor: 0,
        }
    }
}
