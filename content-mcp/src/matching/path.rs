//! Scoring document filings against keywords given per path level
//!
//! Every level but the last matches intermediate folders by name; the last
//! level matches the containment name of a filing. A match at a deeper level
//! is weighted by `1 / (level + 1)` and inherits the weighted score of every
//! earlier matched folder whose path prefixes its own.

use super::scoring::score_name;
use serde::Deserialize;

/// A folder returned by an intermediate level search
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderCandidate {
    /// Folder id
    pub id: String,
    /// Folder name
    pub name: String,
    /// Full path of the folder
    pub path_name: String,
}

/// The document side of a filing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiledDocument {
    /// Document class symbolic name
    pub class_name: String,
    /// Document id
    pub id: String,
    /// Document name
    #[serde(default)]
    pub name: String,
}

/// A containment relationship between a folder and a document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingCandidate {
    /// Relationship id
    pub id: String,
    /// Name the document is filed under
    pub containment_name: String,
    /// Containing folder
    pub tail: FolderCandidate,
    /// Filed document
    pub head: FiledDocument,
}

impl FilingCandidate {
    /// Folder path joined with the containment name
    pub fn containment_path(&self) -> String {
        format!("{}/{}", self.tail.path_name, self.containment_name)
    }
}

/// Accumulates folder matches level by level, then scores filings
#[derive(Debug, Clone)]
pub struct PathScorer {
    levels: usize,
    matched: Vec<(FolderCandidate, f64)>,
}

impl PathScorer {
    /// Scorer for a query with `levels` path levels, the last one being the
    /// filing level
    pub fn new(levels: usize) -> Self {
        Self {
            levels,
            matched: Vec::new(),
        }
    }

    /// Folders matched so far, in the order they were matched
    pub fn matched_folders(&self) -> &[(FolderCandidate, f64)] {
        &self.matched
    }

    fn inherited_score(&self, path: &str, weight: f64) -> f64 {
        self.matched
            .iter()
            .filter(|(folder, _)| path.starts_with(folder.path_name.as_str()))
            .map(|(_, score)| score * weight)
            .sum()
    }

    /// Score the folders found for intermediate level `level`
    ///
    /// Folders already matched at an earlier level are skipped. Matches of
    /// this level only become visible as prefixes once the whole level is
    /// scored. Returns the number of folders matched at this level.
    pub fn score_level(
        &mut self,
        level: usize,
        folders: Vec<FolderCandidate>,
        keywords: &[impl AsRef<str>],
    ) -> usize {
        let mut level_matches: Vec<(FolderCandidate, f64)> = Vec::new();
        for folder in folders {
            let seen = self
                .matched
                .iter()
                .chain(level_matches.iter())
                .any(|(matched, _)| matched.id == folder.id);
            if seen {
                tracing::debug!("Previously encountered folder {}", folder.path_name);
                continue;
            }

            let mut score = score_name(&folder.name, keywords);
            if score <= 0.0 {
                continue;
            }
            if level > 0 {
                let weight = 1.0 / (level + 1) as f64;
                score = score * weight + self.inherited_score(&folder.path_name, weight);
            }
            tracing::debug!("Folder {} scored {} at level {}", folder.path_name, score, level);
            level_matches.push((folder, score));
        }
        let count = level_matches.len();
        self.matched.extend(level_matches);
        count
    }

    /// Score a filing against the keywords of the last level
    ///
    /// Returns `None` when the containment name does not match at all.
    pub fn score_filing(&self, filing: &FilingCandidate, keywords: &[impl AsRef<str>]) -> Option<f64> {
        let mut score = score_name(&filing.containment_name, keywords);
        if score <= 0.0 {
            return None;
        }
        if self.levels > 1 {
            let weight = 1.0 / self.levels as f64;
            score = score * weight + self.inherited_score(&filing.containment_path(), weight);
        }
        Some(score)
    }
}
