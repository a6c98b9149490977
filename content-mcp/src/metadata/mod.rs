//! Repository class metadata
//!
//! Classes are grouped under the four system root classes (`Document`,
//! `Folder`, `Annotation`, `CustomObject`). The [`MetadataCache`] holds what
//! has been learned so far; the [`MetadataLoader`] fills it lazily:
//!
//! - listing or matching classes of a root populates that root's bucket with
//!   the root class and its first page of subclasses;
//! - asking for a class's properties fetches them once and stores them on the
//!   cached descriptor;
//! - a class whose root is unknown is located by walking its superclass
//!   chain (see [`discovery`]).
//!
//! There is no eviction. [`MetadataCache::reset`] restores the initial state.

pub mod cache;
pub mod discovery;
pub mod loader;
pub mod types;

pub use cache::{ClassBucket, MetadataCache};
pub use discovery::DiscoveryState;
pub use loader::{MetadataLoader, SUBCLASS_PAGE_SIZE};
pub use types::{
    Cardinality, ClassDescriptor, ClassSummary, DataType, PropertyDescriptor, RootClass,
};
