//! Value resolution for people-import sheets.
//!
//! Organization, tag and identifier columns cannot be checked by syntax alone:
//! their values have to exist in the target system. This crate resolves them:
//!
//! - **Directory** (`directory`): the lookup collaborator, as an async trait
//! - **Resolver** (`resolve`): distinct values, bounded concurrent lookups, aggregate counts
//! - **Tracker** (`tracker`): drops results superseded by newer configuration
//! - **Status** (`status`): per-column mapping feedback
//! - **Values** (`values`): distinct values and counts of one column

mod error;

pub mod directory;
pub mod resolve;
pub mod status;
pub mod tracker;
pub mod values;

pub use directory::{Directory, Organization, PersonRef, Tag};
pub use error::{LookupError, ResolveError, Result};
pub use resolve::{MAX_CONCURRENT_LOOKUPS, ResolveTarget, resolve_column};
pub use status::{MappingStatus, mapping_status};
pub use tracker::{ResolutionTracker, Ticket};
pub use values::{ColumnValues, ValueCount};
