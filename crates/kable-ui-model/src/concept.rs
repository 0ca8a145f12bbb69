use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// How a concept is packaged for rendering/installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackagingType {
    Jsonnet,
    Helm,
}

impl Display for PackagingType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jsonnet => write!(f, "jsonnet"),
            Self::Helm => write!(f, "helm"),
        }
    }
}

/// One row of the concept list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub packaging: PackagingType,
    pub version: String,
    pub maintainer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintainer {
    pub name: String,
    pub email: String,
}

/// Declared primitive type of an install-time input. Only strings exist so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    #[serde(rename = "type")]
    pub input_type: InputType,
}

impl InputField {
    #[must_use]
    pub fn string() -> Self {
        Self {
            input_type: InputType::String,
        }
    }
}

/// Install-time inputs split into mandatory and optional named fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputSchema {
    pub mandatory: BTreeMap<String, InputField>,
    pub optional: BTreeMap<String, InputField>,
}

/// The full record behind the concept detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptDetail {
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub maintainer: Maintainer,
    pub version: String,
    #[serde(rename = "type")]
    pub packaging: PackagingType,
    pub inputs: InputSchema,
}

/// The "owning repository" reference shown on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub name: String,
    pub id: String,
}

/// Classification of concepts by release-stability tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaturityCounts {
    pub stable: usize,
    pub beta: usize,
    pub alpha: usize,
}
