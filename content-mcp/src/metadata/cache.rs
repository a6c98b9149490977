//! In-memory class metadata cache
//!
//! Two-level store: root class name -> class symbolic name -> descriptor.
//! Both levels keep insertion order. Buckets list the four system roots
//! first in declaration order, then any bucket created later through
//! [`MetadataCache::ensure_root_class_exists`]. Classes inside a bucket stay
//! in the order the repository returned them, so ties between equally
//! scored classes resolve the same way on every call.

use super::types::{ClassDescriptor, RootClass};
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// Classes of one root, keyed by symbolic name, in insertion order
#[derive(Debug, Default)]
pub struct ClassBucket {
    order: Vec<String>,
    classes: HashMap<String, ClassDescriptor>,
}

impl ClassBucket {
    /// Number of classes held
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the bucket holds no class
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Descriptor for `name`
    pub fn get(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }

    /// Whether `name` is held
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Insert or replace `name`
    ///
    /// A replaced class keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, data: ClassDescriptor) {
        let name = name.into();
        if !self.classes.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.classes.insert(name, data);
    }

    /// Remove `name`, returning its descriptor
    pub fn remove(&mut self, name: &str) -> Option<ClassDescriptor> {
        let removed = self.classes.remove(name)?;
        self.order.retain(|n| n != name);
        Some(removed)
    }

    /// Class names in insertion order
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// `(name, descriptor)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ClassDescriptor)> {
        self.order
            .iter()
            .filter_map(|name| self.classes.get(name).map(|class| (name, class)))
    }
}

#[derive(Debug)]
struct RootBucket {
    name: String,
    classes: ClassBucket,
}

impl RootBucket {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            classes: ClassBucket::default(),
        }
    }
}

/// Process-lifetime cache of class descriptors grouped by root class
#[derive(Debug)]
pub struct MetadataCache {
    buckets: Vec<RootBucket>,
}

impl Default for MetadataCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataCache {
    /// Create a cache with the four system root buckets, all empty
    pub fn new() -> Self {
        let buckets = RootClass::ALL
            .iter()
            .map(|root| RootBucket::new(root.as_str()))
            .collect();
        Self { buckets }
    }

    fn bucket(&self, root: &str) -> Option<&RootBucket> {
        self.buckets.iter().find(|b| b.name == root)
    }

    fn bucket_mut(&mut self, root: &str) -> &mut RootBucket {
        let index = match self.buckets.iter().position(|b| b.name == root) {
            Some(index) => index,
            None => {
                tracing::debug!("Creating metadata bucket for root class {}", root);
                self.buckets.push(RootBucket::new(root));
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[index]
    }

    /// Create an empty bucket for `root` unless one exists
    pub fn ensure_root_class_exists(&mut self, root: &str) {
        self.bucket_mut(root);
    }

    /// The bucket for `root`, created empty if absent
    pub fn get_class_cache(&mut self, root: &str) -> &mut ClassBucket {
        &mut self.bucket_mut(root).classes
    }

    /// Read-only view of a bucket
    pub fn class_cache(&self, root: &str) -> Option<&ClassBucket> {
        self.bucket(root).map(|b| &b.classes)
    }

    /// Whether the bucket for `root` exists and holds at least one class
    pub fn is_populated(&self, root: &str) -> bool {
        self.bucket(root).is_some_and(|b| !b.classes.is_empty())
    }

    /// Descriptor for `name` in the bucket for `root`
    pub fn get_class_data(&self, root: &str, name: &str) -> Option<&ClassDescriptor> {
        self.bucket(root).and_then(|b| b.classes.get(name))
    }

    /// Insert or replace `name` in the bucket for `root`
    ///
    /// A symbolic name lives in at most one bucket, so the name is removed
    /// from every other bucket first.
    pub fn set_class_data(&mut self, root: &str, name: &str, data: ClassDescriptor) {
        for bucket in self.buckets.iter_mut().filter(|b| b.name != root) {
            if bucket.classes.remove(name).is_some() {
                tracing::debug!("Moved class {} from root {} to {}", name, bucket.name, root);
            }
        }
        self.bucket_mut(root).classes.insert(name, data);
    }

    /// First root, in bucket order, whose bucket holds `name`
    pub fn find_root_class_for_class(&self, name: &str) -> Option<&str> {
        self.buckets
            .iter()
            .find(|b| b.classes.contains(name))
            .map(|b| b.name.as_str())
    }

    /// Names of all buckets in order
    pub fn get_root_class_keys(&self) -> Vec<String> {
        self.buckets.iter().map(|b| b.name.clone()).collect()
    }

    /// Class names held by the bucket for `root`, in insertion order
    pub fn get_all_keys_for_root(&self, root: &str) -> Vec<String> {
        self.bucket(root)
            .map(|b| b.classes.names().to_vec())
            .unwrap_or_default()
    }

    /// Drop everything and restore the four empty system buckets
    pub fn reset(&mut self) {
        tracing::info!("Resetting metadata cache");
        *self = Self::new();
    }

    /// Snapshot of the cache shape for debug logging
    pub fn structure_summary(&self) -> Value {
        let mut roots = Map::new();
        for bucket in &self.buckets {
            let mut classes = Map::new();
            for (name, class) in bucket.classes.iter() {
                classes.insert(
                    name.clone(),
                    json!({
                        "display_name": class.display_name,
                        "descriptive_text": class.descriptive_text,
                        "property_count": class.property_descriptions.len(),
                    }),
                );
            }
            roots.insert(bucket.name.clone(), Value::Object(classes));
        }
        Value::Object(roots)
    }
}
