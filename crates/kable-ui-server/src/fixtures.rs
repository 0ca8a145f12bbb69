// SPDX-License-Identifier: Apache-2.0

use kable_ui_model::{
    ConceptDetail, ConceptSummary, InputField, InputSchema, Maintainer, MaturityCounts,
    PackagingType, Repository, RepositoryRef,
};
use std::collections::BTreeMap;

/// Narrow accessor over the record sets the pages render. Routing never
/// touches the data directly, so a real backend can replace the fixtures
/// without changing a handler.
pub trait ConceptSource: Send + Sync + 'static {
    fn list_repositories(&self) -> Vec<Repository>;
    fn list_concepts(&self) -> Vec<ConceptSummary>;
    /// The detail record and its owning repository.
    ///
    /// `concept_id` is accepted but not used for selection: the current data
    /// set has a single detail record and the upstream pages echo the raw
    /// identifier back. Kept as-is rather than silently given lookup
    /// semantics.
    fn concept_detail(&self, concept_id: &str) -> (ConceptDetail, RepositoryRef);
}

/// Three maturity tiers for the concept list page. `stable` and `beta` are
/// placeholder values unrelated to the fixture contents; concepts do not
/// carry a maturity field yet.
pub const MATURITY_COUNTS: MaturityCounts = MaturityCounts {
    stable: 2,
    beta: 1,
    alpha: 0,
};

/// The hardcoded mock data set. Records are rebuilt on every call and
/// discarded after rendering.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticFixtures;

impl ConceptSource for StaticFixtures {
    fn list_repositories(&self) -> Vec<Repository> {
        vec![
            Repository::new(
                "Elkoss Combine",
                true,
                "https://github.com/elkcom/concepts",
                "refs/heads/master",
            ),
            Repository::new(
                "Aldrin Labs",
                false,
                "https://github.com/aldrinlabs/infrastructure",
                "refs/heads/master",
            ),
            Repository::new(
                "Serrice Council",
                false,
                "https://github.com/serrice/concepts",
                "refs/heads/master",
            ),
            Repository::new(
                "Hahne Kedar",
                false,
                "https://github.com/hkmanufacturing/infra",
                "refs/heads/master",
            ),
        ]
    }

    fn list_concepts(&self) -> Vec<ConceptSummary> {
        vec![
            summary(
                "storage_postgresql@elkcom",
                "PostgreSQL",
                PackagingType::Jsonnet,
                "1.1.0-beta4",
                "Michele Tarantino",
            ),
            summary(
                "storage_mysql@elkcom",
                "MySQL",
                PackagingType::Jsonnet,
                "1.0.0",
                "Trostan Mírsson",
            ),
            summary(
                "storage_redis@elkcom",
                "Redis",
                PackagingType::Jsonnet,
                "1.3.0",
                "Mateo Valdueza",
            ),
            summary(
                "storage_memcached@aldrinlabs",
                "Memcached",
                PackagingType::Helm,
                "2.3.1",
                "Unknown",
            ),
        ]
    }

    fn concept_detail(&self, _concept_id: &str) -> (ConceptDetail, RepositoryRef) {
        let mandatory: BTreeMap<String, InputField> = ["dbname", "dbuser", "dbpass"]
            .into_iter()
            .map(|field| (field.to_string(), InputField::string()))
            .collect();
        let optional: BTreeMap<String, InputField> =
            [("dbscheme".to_string(), InputField::string())]
                .into_iter()
                .collect();
        let detail = ConceptDetail {
            display_name: "PostgreSQL".to_string(),
            maintainer: Maintainer {
                name: "Ralph Kühnert".to_string(),
                email: "kuehnert.ralph@gmail.com".to_string(),
            },
            version: "1.1.0-beta4".to_string(),
            packaging: PackagingType::Helm,
            inputs: InputSchema {
                mandatory,
                optional,
            },
        };
        let repo = RepositoryRef {
            name: "Elkoss Combine".to_string(),
            id: "elkcom".to_string(),
        };
        (detail, repo)
    }
}

fn summary(
    id: &str,
    name: &str,
    packaging: PackagingType,
    version: &str,
    maintainer: &str,
) -> ConceptSummary {
    ConceptSummary {
        id: id.to_string(),
        name: name.to_string(),
        packaging,
        version: version.to_string(),
        maintainer: maintainer.to_string(),
    }
}
