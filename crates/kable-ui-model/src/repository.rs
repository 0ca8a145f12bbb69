use serde::{Deserialize, Serialize};

/// A source-code location hosting one or more concepts.
///
/// Duplicates are permitted; no uniqueness constraint is enforced on `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    /// Visibility flag. Repositories are public unless marked otherwise.
    #[serde(default)]
    pub private: bool,
    pub url: String,
    /// Version-control reference pointer, e.g. `refs/heads/master`.
    #[serde(rename = "ref")]
    pub git_ref: String,
}

impl Repository {
    #[must_use]
    pub fn new(name: &str, private: bool, url: &str, git_ref: &str) -> Self {
        Self {
            name: name.to_string(),
            private,
            url: url.to_string(),
            git_ref: git_ref.to_string(),
        }
    }
}

/// Counts derived by classifying a repository slice at request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisibilityCounts {
    pub private: usize,
    pub public: usize,
}

impl VisibilityCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.private + self.public
    }
}

#[must_use]
pub fn count_visibility(repos: &[Repository]) -> VisibilityCounts {
    repos.iter().fold(VisibilityCounts::default(), |mut acc, r| {
        if r.private {
            acc.private += 1;
        } else {
            acc.public += 1;
        }
        acc
    })
}
