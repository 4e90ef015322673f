//! Directory backed by a JSON file.
//!
//! ```json
//! {
//!   "organizations": [{"id": 1, "title": "Acme"}],
//!   "tags": [{"id": 7, "title": "Volunteer"}],
//!   "people": [{"id": 1001, "ext_id": "a-17"}]
//! }
//! ```
//!
//! Organization and tag titles match case-insensitively. Internal ids match
//! `id`, external ids match `ext_id` exactly.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use roster_map::{Directory, LookupError, Organization, PersonRef, Tag};
use roster_model::IdFieldKind;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonEntry {
    pub id: u64,
    #[serde(default)]
    pub ext_id: Option<String>,
}

/// In-memory directory loaded once from disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticDirectory {
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub people: Vec<PersonEntry>,
}

impl StaticDirectory {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read directory {}", path.display()))?;
        let directory: Self = serde_json::from_str(&content)
            .with_context(|| format!("parse directory {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            organizations = directory.organizations.len(),
            tags = directory.tags.len(),
            people = directory.people.len(),
            "loaded directory"
        );
        Ok(directory)
    }
}

fn same_title(title: &str, value: &str) -> bool {
    title.trim().to_lowercase() == value.trim().to_lowercase()
}

#[async_trait]
impl Directory for StaticDirectory {
    async fn lookup_organization(&self, name: &str) -> Result<Option<Organization>, LookupError> {
        Ok(self
            .organizations
            .iter()
            .find(|org| same_title(&org.title, name))
            .cloned())
    }

    async fn lookup_tag(&self, label: &str) -> Result<Option<Tag>, LookupError> {
        Ok(self
            .tags
            .iter()
            .find(|tag| same_title(&tag.title, label))
            .cloned())
    }

    async fn lookup_person_id(
        &self,
        value: &str,
        kind: IdFieldKind,
    ) -> Result<Option<PersonRef>, LookupError> {
        let person = match kind {
            IdFieldKind::Internal => value
                .trim()
                .parse::<u64>()
                .ok()
                .and_then(|id| self.people.iter().find(|person| person.id == id)),
            IdFieldKind::External => self
                .people
                .iter()
                .find(|person| person.ext_id.as_deref() == Some(value)),
            IdFieldKind::Undeclared => None,
        };
        Ok(person.map(|person| PersonRef { id: person.id }))
    }
}
