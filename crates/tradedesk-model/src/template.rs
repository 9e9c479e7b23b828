use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Qualifying name of a contract's schema: `Module:Entity`, optionally
/// suffixed with the package it was loaded from (`Module:Entity@package`).
///
/// The qualified form is what status classification and the "type" column
/// run prefix tests against, so it round-trips exactly through
/// Display/FromStr and over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateId {
    module: String,
    entity: String,
    package: Option<String>,
}

impl TemplateId {
    pub fn new(module: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            entity: entity.into(),
            package: None,
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// The full qualified name, e.g. `"Dvp:DvpProposal"`.
    pub fn qualified(&self) -> String {
        match &self.package {
            Some(pkg) => format!("{}:{}@{}", self.module, self.entity, pkg),
            None => format!("{}:{}", self.module, self.entity),
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.entity)?;
        if let Some(pkg) = &self.package {
            write!(f, "@{pkg}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseTemplateIdError(pub String);

impl fmt::Display for ParseTemplateIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid template id: {}", self.0)
    }
}

impl std::error::Error for ParseTemplateIdError {}

impl FromStr for TemplateId {
    type Err = ParseTemplateIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, package) = match s.split_once('@') {
            Some((_, pkg)) if pkg.is_empty() => {
                return Err(ParseTemplateIdError(format!("empty package in '{s}'")));
            }
            Some((name, pkg)) => (name, Some(pkg.to_string())),
            None => (s, None),
        };

        let (module, entity) = name
            .split_once(':')
            .ok_or_else(|| ParseTemplateIdError(format!("expected Module:Entity, got '{s}'")))?;

        if module.is_empty() || entity.is_empty() {
            return Err(ParseTemplateIdError(format!(
                "expected Module:Entity, got '{s}'"
            )));
        }

        Ok(TemplateId {
            module: module.to_string(),
            entity: entity.to_string(),
            package,
        })
    }
}

impl Serialize for TemplateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TemplateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
