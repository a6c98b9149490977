//! Read-through loading of class metadata into the cache
//!
//! The loader owns no state besides its collaborators. Cache locks are taken
//! only around cache reads and writes, never across a repository round trip,
//! so concurrent callers may repeat a query; every write is an idempotent
//! upsert.

use super::cache::MetadataCache;
use super::discovery::{DiscoveryState, MAX_CHAIN_QUERIES};
use super::types::{Cardinality, ClassDescriptor, DataType, PropertyDescriptor, RootClass};
use crate::error::{ContentMcpError, Result};
use crate::graphql::{queries, Repository};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Subclasses fetched when a root bucket is populated
pub const SUBCLASS_PAGE_SIZE: u32 = 500;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClass {
    symbolic_name: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    descriptive_text: Option<String>,
}

impl From<RawClass> for ClassDescriptor {
    fn from(raw: RawClass) -> Self {
        let display_name = raw
            .display_name
            .unwrap_or_else(|| raw.symbolic_name.clone());
        ClassDescriptor::new(
            raw.symbolic_name,
            display_name,
            raw.descriptive_text.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProperty {
    symbolic_name: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    descriptive_text: Option<String>,
    data_type: DataType,
    cardinality: Cardinality,
    #[serde(default)]
    is_searchable: bool,
    #[serde(default)]
    is_system_owned: bool,
    #[serde(default)]
    is_hidden: bool,
}

impl From<RawProperty> for PropertyDescriptor {
    fn from(raw: RawProperty) -> Self {
        let display_name = raw
            .display_name
            .unwrap_or_else(|| raw.symbolic_name.clone());
        PropertyDescriptor {
            symbolic_name: raw.symbolic_name,
            display_name,
            descriptive_text: raw.descriptive_text.unwrap_or_default(),
            data_type: raw.data_type,
            cardinality: raw.cardinality,
            is_searchable: raw.is_searchable,
            is_system_owned: raw.is_system_owned,
            is_hidden: raw.is_hidden,
        }
    }
}

/// Property descriptions and the designated name property of a class node
///
/// `namePropertyIndex` is a zero-based index into `propertyDescriptions`;
/// an absent, null or out-of-range index means the class has no name
/// property.
pub fn parse_properties(class_node: &Value) -> Result<(Vec<PropertyDescriptor>, Option<String>)> {
    let raw: Vec<RawProperty> = match class_node.get("propertyDescriptions") {
        Some(Value::Null) | None => Vec::new(),
        Some(list) => serde_json::from_value(list.clone())?,
    };
    let properties: Vec<PropertyDescriptor> = raw.into_iter().map(Into::into).collect();
    let name_property = class_node
        .get("namePropertyIndex")
        .and_then(Value::as_u64)
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| properties.get(index))
        .map(|p| p.symbolic_name.clone());
    Ok((properties, name_property))
}

/// Loads class metadata from the repository into a shared [`MetadataCache`]
#[derive(Clone)]
pub struct MetadataLoader {
    repository: Repository,
    cache: Arc<RwLock<MetadataCache>>,
}

impl MetadataLoader {
    /// Create a loader filling `cache` from `repository`
    pub fn new(repository: Repository, cache: Arc<RwLock<MetadataCache>>) -> Self {
        Self { repository, cache }
    }

    /// The shared cache
    pub fn cache(&self) -> &Arc<RwLock<MetadataCache>> {
        &self.cache
    }

    async fn fetch_class_node(&self, query: &str, class_name: &str) -> Result<Value> {
        let mut data = self
            .repository
            .query(query, json!({ "class_symbolic_name": class_name }))
            .await?;
        match data.get_mut("classDescription").map(Value::take) {
            Some(node) if node.is_object() => Ok(node),
            _ => Err(ContentMcpError::NotFound(format!(
                "Class '{class_name}' not found"
            ))),
        }
    }

    /// Fill the bucket for `root` with the root class and its first page of
    /// subclasses
    ///
    /// Succeeds without a query when the bucket already has entries.
    /// Subclasses are stored without property descriptions.
    pub async fn populate_root_bucket(&self, root: RootClass) -> Result<()> {
        if self.cache.read().await.is_populated(root.as_str()) {
            tracing::debug!("Root class {} already cached", root);
            return Ok(());
        }

        tracing::info!("Loading classes for root class {}", root);
        let variables = json!({
            "root_class_name": root.as_str(),
            "page_size": SUBCLASS_PAGE_SIZE,
        });
        let data = self
            .repository
            .query(queries::CLASS_AND_SUBCLASSES, variables)
            .await
            .map_err(|e| match e {
                ContentMcpError::Backend(message) => ContentMcpError::Backend(format!(
                    "Failed to retrieve classes for {root}: {message}"
                )),
                other => other,
            })?;

        let root_class: Option<ClassDescriptor> = match data.get("classDescription") {
            Some(node) if node.is_object() => {
                Some(serde_json::from_value::<RawClass>(node.clone())?.into())
            }
            _ => None,
        };
        let subclasses: Vec<ClassDescriptor> = match data.pointer("/subClassDescriptions/classDescriptions") {
            Some(list) if list.is_array() => serde_json::from_value::<Vec<RawClass>>(list.clone())?
                .into_iter()
                .map(Into::into)
                .collect(),
            _ => Vec::new(),
        };

        if root_class.is_none() && subclasses.is_empty() {
            return Err(ContentMcpError::NotFound(format!(
                "No classes found for root class '{root}'"
            )));
        }

        let mut cache = self.cache.write().await;
        cache.ensure_root_class_exists(root.as_str());
        let count = subclasses.len();
        for class in root_class.into_iter().chain(subclasses) {
            let name = class.symbolic_name.clone();
            if cache.get_class_data(root.as_str(), &name).is_none() {
                cache.set_class_data(root.as_str(), &name, class);
            }
        }
        tracing::info!("Cached root class {} with {} subclasses", root, count);
        tracing::debug!("Metadata cache: {}", cache.structure_summary());
        Ok(())
    }

    /// Resolve the root class of `class_name` and populate its bucket
    ///
    /// `prefetched` is the class's own description with its superclass
    /// chain, when the caller already has it.
    pub async fn discover_root_class(
        &self,
        class_name: &str,
        prefetched: Option<&Value>,
    ) -> Result<RootClass> {
        let mut state = DiscoveryState::start(class_name, prefetched);
        let mut queries_issued = 0usize;

        loop {
            state = match state {
                DiscoveryState::FoundRoot(root) => {
                    self.populate_root_bucket(root).await?;
                    return Ok(root);
                }
                DiscoveryState::ChainExhausted => {
                    return Err(ContentMcpError::Discovery {
                        class_name: class_name.to_string(),
                        reason: "the superclass chain ended without reaching a root class"
                            .to_string(),
                    });
                }
                DiscoveryState::QueryFailed(error) => return Err(error),
                DiscoveryState::WalkingChain { next } => {
                    if queries_issued >= MAX_CHAIN_QUERIES {
                        return Err(ContentMcpError::Discovery {
                            class_name: class_name.to_string(),
                            reason: format!(
                                "no root class within {MAX_CHAIN_QUERIES} superclass queries"
                            ),
                        });
                    }
                    queries_issued += 1;
                    tracing::debug!("Fetching superclass chain of {}", next);
                    match self.fetch_class_node(queries::SUPERCLASS_CHAIN, &next).await {
                        Ok(node) => DiscoveryState::start(&next, Some(&node)),
                        Err(error) => DiscoveryState::QueryFailed(error),
                    }
                }
            };
        }
    }

    /// Full metadata of `class_name`, loading and caching it on first use
    pub async fn class_metadata(&self, class_name: &str) -> Result<ClassDescriptor> {
        let known_root = {
            let cache = self.cache.read().await;
            let root = cache
                .find_root_class_for_class(class_name)
                .map(str::to_string);
            if let Some(root) = &root {
                if let Some(class) = cache.get_class_data(root, class_name) {
                    if class.has_properties() {
                        tracing::debug!("Class metadata cache hit for {}", class_name);
                        return Ok(class.clone());
                    }
                }
            }
            root
        };

        let query = if known_root.is_some() {
            queries::CLASS_METADATA
        } else {
            queries::CLASS_METADATA_WITH_SUPERCLASSES
        };
        let node = self.fetch_class_node(query, class_name).await?;
        let (properties, name_property) = parse_properties(&node)?;

        let root = match known_root {
            Some(root) => root,
            None => {
                let root = self.discover_root_class(class_name, Some(&node)).await?;
                let populated = self.cache.read().await.is_populated(root.as_str());
                debug_assert!(populated, "root bucket {root} empty after discovery");
                if !populated {
                    return Err(ContentMcpError::Internal(format!(
                        "root class {root} not cached after discovering it for '{class_name}'"
                    )));
                }
                root.as_str().to_string()
            }
        };

        let mut cache = self.cache.write().await;
        let mut class = match cache.get_class_data(&root, class_name) {
            Some(existing) => existing.clone(),
            None => {
                tracing::debug!(
                    "Class {} was not in the first page of {} subclasses",
                    class_name,
                    root
                );
                serde_json::from_value::<RawClass>(node.clone())
                    .map(ClassDescriptor::from)
                    .unwrap_or_else(|_| ClassDescriptor::new(class_name, class_name, ""))
            }
        };
        class.property_descriptions = properties;
        class.name_property_symbolic_name = name_property;
        tracing::info!(
            "Loaded {} property descriptions for class {}",
            class.property_descriptions.len(),
            class_name
        );
        cache.set_class_data(&root, class_name, class.clone());
        Ok(class)
    }
}
