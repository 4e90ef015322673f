//! The directory collaborator.
//!
//! A [`Directory`] answers whether a raw sheet value names something that
//! already exists in the target system. Implementations may be remote and
//! slow; the resolver only relies on the request/response contract below.
//!
//! `Ok(None)` is a miss. `Err` means the directory could not answer at all.

use async_trait::async_trait;
use roster_model::IdFieldKind;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub title: String,
}

/// A person matched by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: u64,
}

/// Lookup service for resolvable columns.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Find an organization by its name.
    async fn lookup_organization(&self, name: &str) -> Result<Option<Organization>, LookupError>;

    /// Find a tag by its label.
    async fn lookup_tag(&self, label: &str) -> Result<Option<Tag>, LookupError>;

    /// Find a person by internal or external identifier.
    async fn lookup_person_id(
        &self,
        value: &str,
        kind: IdFieldKind,
    ) -> Result<Option<PersonRef>, LookupError>;
}
