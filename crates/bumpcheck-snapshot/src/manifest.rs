use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CargoManifest {
    pub package: Option<Package>,
    pub workspace: Option<WorkspaceSection>,
}

#[derive(Debug, Deserialize)]
pub struct Package {
    pub name: String,
    pub version: Option<VersionField>,
    pub publish: Option<PublishField>,
    pub metadata: Option<MetadataSection>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum VersionField {
    Literal(String),
    Inherited(InheritedVersion),
}

#[derive(Debug, Deserialize)]
pub struct InheritedVersion {
    pub workspace: bool,
}

/// `publish` accepts a boolean or a registry list; an empty list means the
/// package cannot be published anywhere.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PublishField {
    Flag(bool),
    Registries(Vec<String>),
}

impl PublishField {
    pub fn is_publishable(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Registries(registries) => !registries.is_empty(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MetadataSection {
    pub bumpcheck: Option<BTreeMap<String, toml::Value>>,
}

impl MetadataSection {
    /// Flattens the `[package.metadata.bumpcheck]` table into string pairs.
    /// Non-scalar values are ignored.
    pub fn string_pairs(&self) -> BTreeMap<String, String> {
        let mut pairs = BTreeMap::new();
        if let Some(table) = &self.bumpcheck {
            for (key, value) in table {
                let rendered = match value {
                    toml::Value::String(s) => s.clone(),
                    toml::Value::Boolean(b) => b.to_string(),
                    toml::Value::Integer(i) => i.to_string(),
                    _ => continue,
                };
                pairs.insert(key.clone(), rendered);
            }
        }
        pairs
    }
}

#[derive(Debug, Deserialize)]
pub struct WorkspaceSection {
    pub members: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub package: Option<WorkspacePackage>,
}

#[derive(Debug, Deserialize)]
pub struct WorkspacePackage {
    pub version: Option<String>,
}
