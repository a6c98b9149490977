//! Fuzzy keyword matching
//!
//! Pure functions that resolve user keywords to class names, document names
//! and document filings. Nothing here touches the repository; callers fetch
//! candidates and hand them in.

pub mod path;
pub mod rank;
pub mod scoring;
pub mod similarity;

pub use path::{FiledDocument, FilingCandidate, FolderCandidate, PathScorer};
pub use rank::{rank, ScoredMatch};
pub use scoring::{raw_class_score, score_class, score_name};
pub use similarity::{tokenize, word_similarity};

/// Most class matches returned by `determine_class`
pub const MAX_CLASS_MATCHES: usize = 3;

/// Most document or filing matches returned by a lookup
pub const MAX_SEARCH_RESULTS: usize = 20;
