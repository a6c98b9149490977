//! Repository searches and document lookups
//!
//! [`where_clause`] renders search conditions into repository SQL, and
//! [`lookup`] runs the keyword lookups that resolve a user's description to
//! concrete documents or filings.

pub mod lookup;
pub mod where_clause;

use serde::{Deserialize, Serialize};

pub use lookup::{lookup_documents_by_name, lookup_documents_by_path, search_repository_objects};
pub use where_clause::{is_property_identifier, SearchOperator, SearchParameters, SearchProperty};

/// Class searched when the caller names none
pub const DEFAULT_DOCUMENT_CLASS: &str = "Document";

/// `VersionStatus` of a released version
pub const VERSION_STATUS_RELEASED: u8 = 1;
/// `VersionStatus` of an in-process version
pub const VERSION_STATUS_IN_PROCESS: u8 = 2;
/// `VersionStatus` of a reservation
pub const VERSION_STATUS_RESERVATION: u8 = 3;
/// Major version number of a never-released document
pub const INITIAL_MAJOR_VERSION: u32 = 0;
/// Minor version number of a document's first version
pub const INITIAL_MINOR_VERSION: u32 = 1;

/// A document matched by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMatch {
    /// Document id
    pub id: String,
    /// Document name
    pub name: String,
    /// Document class symbolic name
    pub class_name: String,
    /// Match score
    pub score: f64,
}

/// A document filing matched by path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFilingMatch {
    /// Containment relationship id
    pub containment_id: String,
    /// Name the document is filed under
    pub containment_name: String,
    /// Folder path joined with the containment name
    pub containment_path: String,
    /// Document class symbolic name
    pub document_class_name: String,
    /// Document id
    pub document_id: String,
    /// Document name
    pub document_name: String,
    /// Containing folder id
    pub folder_id: String,
    /// Containing folder name
    pub folder_name: String,
    /// Containing folder path
    pub folder_path: String,
    /// Match score
    pub score: f64,
}
