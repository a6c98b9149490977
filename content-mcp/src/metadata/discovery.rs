//! Root-class discovery state machine
//!
//! A class whose root bucket is unknown is resolved by walking its superclass
//! chain. Each metadata response carries at most three superclass levels, so
//! the walk may need several round trips. The transitions live here as pure
//! functions over response nodes; [`super::loader::MetadataLoader`] drives
//! them and performs the queries.

use super::types::RootClass;
use crate::error::ContentMcpError;
use serde_json::Value;

/// Upper bound on superclass queries for a single discovery
pub const MAX_CHAIN_QUERIES: usize = 16;

/// State of one discovery run
#[derive(Debug)]
pub enum DiscoveryState {
    /// The chain continues above `next`; query `next` for more levels
    WalkingChain {
        /// Class whose superclasses are not fetched yet
        next: String,
    },
    /// A system root class was reached
    FoundRoot(RootClass),
    /// The chain ended without reaching a system root
    ChainExhausted,
    /// A query in the walk failed
    QueryFailed(ContentMcpError),
}

impl DiscoveryState {
    /// Starting state for `class_name`
    ///
    /// A root class name resolves immediately. Otherwise, when `prefetched`
    /// holds the class's own description with its superclass chain, the walk
    /// starts from that chain; without it the first step queries the class.
    pub fn start(class_name: &str, prefetched: Option<&Value>) -> Self {
        if let Some(root) = RootClass::from_symbolic_name(class_name) {
            return DiscoveryState::FoundRoot(root);
        }
        match prefetched {
            Some(node) => scan_chain(node),
            None => DiscoveryState::WalkingChain {
                next: class_name.to_string(),
            },
        }
    }

    /// Whether no further transition is possible
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DiscoveryState::WalkingChain { .. })
    }
}

/// Next state after reading the superclass chain of a class description
///
/// `class_node` is a `classDescription` object. A level whose
/// `superClassDescription` is `null` is the top of the chain; a level that
/// lacks the member entirely is where the fetched depth ran out.
pub fn scan_chain(class_node: &Value) -> DiscoveryState {
    let mut level = class_node.get("superClassDescription");
    loop {
        let node = match level {
            Some(node) if node.is_object() => node,
            _ => return DiscoveryState::ChainExhausted,
        };
        let Some(name) = node.get("symbolicName").and_then(Value::as_str) else {
            return DiscoveryState::ChainExhausted;
        };
        if let Some(root) = RootClass::from_symbolic_name(name) {
            tracing::debug!("Discovery reached root class {}", root);
            return DiscoveryState::FoundRoot(root);
        }
        match node.get("superClassDescription") {
            None => {
                tracing::debug!("Superclass chain continues above {}", name);
                return DiscoveryState::WalkingChain {
                    next: name.to_string(),
                };
            }
            next => level = next,
        }
    }
}
