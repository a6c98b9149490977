//! Keyword lookups of documents and filings, plus property searches

use super::where_clause::{
    build_where_clause, current_version_filter, keyword_conditions, return_properties,
    SearchParameters,
};
use super::{DocumentFilingMatch, DocumentMatch, DEFAULT_DOCUMENT_CLASS};
use crate::error::{ContentMcpError, Result};
use crate::graphql::{array_at, queries, Repository};
use crate::matching::{
    rank, score_name, FilingCandidate, FolderCandidate, PathScorer, ScoredMatch,
    MAX_SEARCH_RESULTS,
};
use crate::metadata::{ClassDescriptor, MetadataLoader};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoundDocument {
    class_name: String,
    id: String,
    #[serde(default)]
    name: Option<String>,
}

fn clean_keywords(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Metadata of `class_name` (or the default document class), which must
/// have a name property
async fn named_document_class(
    metadata: &MetadataLoader,
    class_name: Option<&str>,
) -> Result<(ClassDescriptor, String)> {
    let class_name = class_name
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_DOCUMENT_CLASS);
    let class = metadata.class_metadata(class_name).await?;
    let name_property = class.name_property_symbolic_name.clone().ok_or_else(|| {
        ContentMcpError::validation(format!("Class {class_name} does not have a name property"))
    })?;
    Ok((class, name_property))
}

fn parse_list<T: for<'de> Deserialize<'de>>(data: &Value, pointer: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_value(Value::Array(array_at(data, pointer)))?)
}

/// Documents of a class whose name matches any keyword, best first
///
/// Only released versions, the initial in-process version and the initial
/// reservation are considered.
pub async fn lookup_documents_by_name(
    repository: &Repository,
    metadata: &MetadataLoader,
    keywords: &[String],
    class_name: Option<&str>,
) -> Result<Vec<DocumentMatch>> {
    let keywords = clean_keywords(keywords);
    if keywords.is_empty() {
        return Err(ContentMcpError::validation("At least one keyword is required"));
    }
    let (class, name_property) = named_document_class(metadata, class_name).await?;

    let where_statement = format!(
        "{} AND ({})",
        current_version_filter(),
        keyword_conditions(&name_property, &keywords)
    );
    tracing::debug!("Document name search: {}", where_statement);
    let data = repository
        .query(
            queries::DOCUMENTS_BY_NAME,
            json!({
                "class_name": class.symbolic_name,
                "where_statement": where_statement,
            }),
        )
        .await?;
    let documents: Vec<FoundDocument> = parse_list(&data, "/documents/documents")?;
    tracing::debug!("Name search returned {} documents", documents.len());

    let candidates = documents
        .into_iter()
        .map(|doc| {
            let name = doc.name.unwrap_or_default();
            let score = score_name(&name, &keywords);
            tracing::debug!("Document {} scored {}", name, score);
            ScoredMatch::new(
                DocumentMatch {
                    id: doc.id,
                    name,
                    class_name: doc.class_name,
                    score,
                },
                score,
            )
        })
        .collect();
    let matches: Vec<DocumentMatch> = rank(candidates, MAX_SEARCH_RESULTS)
        .into_iter()
        .map(|m| m.item)
        .collect();

    if matches.is_empty() {
        return Err(ContentMcpError::not_found(format!(
            "No document matching keywords {keywords:?} found in the class '{}'",
            class.symbolic_name
        )));
    }
    Ok(matches)
}

/// Document filings matching keywords given per folder level, best first
///
/// Every level but the last names intermediate folders; the last level
/// names the filing itself.
pub async fn lookup_documents_by_path(
    repository: &Repository,
    metadata: &MetadataLoader,
    keywords_at_path_levels: &[Vec<String>],
    class_name: Option<&str>,
) -> Result<Vec<DocumentFilingMatch>> {
    let levels: Vec<Vec<String>> = keywords_at_path_levels
        .iter()
        .map(|level| clean_keywords(level))
        .collect();
    let Some((filing_keywords, intermediate)) = levels.split_last() else {
        return Err(ContentMcpError::validation(
            "keywords_at_path_levels must contain at least one path level",
        ));
    };
    if filing_keywords.is_empty() {
        return Err(ContentMcpError::validation(
            "The last path level must contain at least one keyword",
        ));
    }
    let (class, _) = named_document_class(metadata, class_name).await?;

    let mut scorer = PathScorer::new(levels.len());
    for (level, keywords) in intermediate.iter().enumerate() {
        if keywords.is_empty() {
            tracing::debug!("No keywords at path level {}", level);
            continue;
        }
        let data = repository
            .query(
                queries::FOLDERS_BY_NAME,
                json!({ "where_statement": keyword_conditions("FolderName", keywords) }),
            )
            .await?;
        let folders: Vec<FolderCandidate> = parse_list(&data, "/folders/folders")?;
        let matched = scorer.score_level(level, folders, keywords);
        tracing::debug!("Matched {} folders at path level {}", matched, level);
    }

    let from_condition = format!(
        "ReferentialContainmentRelationship r INNER JOIN {} d ON r.Head = d.This",
        class.symbolic_name
    );
    let data = repository
        .query(
            queries::DOCUMENT_FILINGS,
            json!({
                "from_condition": from_condition,
                "where_statement": keyword_conditions("r.ContainmentName", filing_keywords),
            }),
        )
        .await?;
    let filings: Vec<FilingCandidate> = parse_list(&data, "/repositoryObjects/independentObjects")?;
    tracing::debug!("Path search returned {} filings", filings.len());

    let candidates = filings
        .into_iter()
        .filter_map(|filing| {
            let score = scorer.score_filing(&filing, filing_keywords)?;
            let containment_path = filing.containment_path();
            tracing::debug!("Filing {} scored {}", containment_path, score);
            Some(ScoredMatch::new(
                DocumentFilingMatch {
                    containment_id: filing.id,
                    containment_name: filing.containment_name,
                    containment_path,
                    document_class_name: filing.head.class_name,
                    document_id: filing.head.id,
                    document_name: filing.head.name,
                    folder_id: filing.tail.id,
                    folder_name: filing.tail.name,
                    folder_path: filing.tail.path_name,
                    score,
                },
                score,
            ))
        })
        .collect();
    let matches: Vec<DocumentFilingMatch> = rank(candidates, MAX_SEARCH_RESULTS)
        .into_iter()
        .map(|m| m.item)
        .collect();

    if matches.is_empty() {
        return Err(ContentMcpError::not_found(format!(
            "No document filings matching the keywords were found in the class '{}'",
            class.symbolic_name
        )));
    }
    Ok(matches)
}

/// Search objects of a class by property conditions
///
/// Returns the raw `repositoryObjects` result with every single-valued,
/// non-object property of the class.
pub async fn search_repository_objects(
    repository: &Repository,
    metadata: &MetadataLoader,
    parameters: &SearchParameters,
) -> Result<Value> {
    let class = metadata.class_metadata(&parameters.search_class).await?;
    let where_statement = build_where_clause(&parameters.search_properties, &class)?;
    tracing::debug!("Search of {}: {}", class.symbolic_name, where_statement);
    repository
        .query(
            queries::REPOSITORY_OBJECT_SEARCH,
            json!({
                "class_name": class.symbolic_name,
                "where_statement": where_statement,
                "return_props": return_properties(&class),
            }),
        )
        .await
}
