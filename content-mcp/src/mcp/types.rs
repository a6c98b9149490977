//! Request and response types for MCP operations
//!
//! Requests are deserialized straight from tool arguments. Responses flatten
//! the repository's `properties { id value }` lists into JSON maps.

use crate::error::{ContentMcpError, Result};
use crate::search::{is_property_identifier, SearchParameters};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request with no parameters
#[derive(Debug, Default, Deserialize)]
pub struct EmptyRequest {}

/// Request naming a root class
#[derive(Debug, Deserialize)]
pub struct RootClassRequest {
    /// One of the root class names
    pub root_class: String,
}

/// Request to match keywords against the classes of a root
#[derive(Debug, Deserialize)]
pub struct DetermineClassRequest {
    /// One of the root class names
    pub root_class: String,
    /// Words describing the wanted class
    pub keywords: Vec<String>,
}

/// Request naming a class
#[derive(Debug, Deserialize)]
pub struct ClassNameRequest {
    /// Class symbolic name
    pub class_symbolic_name: String,
}

/// Request for a property-based repository search
#[derive(Debug, Deserialize)]
pub struct RepositoryObjectSearchRequest {
    /// Class and conditions to search with
    pub search_parameters: SearchParameters,
}

/// Request to find documents by name keywords
#[derive(Debug, Deserialize)]
pub struct LookupByNameRequest {
    /// Words expected in the document name
    pub keywords: Vec<String>,
    /// Document class to search, `Document` when absent
    #[serde(default)]
    pub class_symbolic_name: Option<String>,
}

/// Request to find documents by folder path keywords
#[derive(Debug, Deserialize)]
pub struct LookupByPathRequest {
    /// Keywords per path level, outermost folder first, document name last
    pub keywords_at_path_levels: Vec<Vec<String>>,
    /// Document class to search, `Document` when absent
    #[serde(default)]
    pub class_symbolic_name: Option<String>,
}

/// Request addressing a document by id or path
#[derive(Debug, Deserialize)]
pub struct IdentifierRequest {
    /// Document id or path
    pub identifier: String,
}

/// Request to create a folder
#[derive(Debug, Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name
    pub name: String,
    /// Id or path of the parent folder
    pub parent_folder: String,
    /// Folder class, `Folder` when absent
    #[serde(default)]
    pub class_identifier: Option<String>,
}

/// Request to delete a folder
#[derive(Debug, Deserialize)]
pub struct DeleteFolderRequest {
    /// Folder id or path
    pub id_or_path: String,
}

/// Request naming a folder
#[derive(Debug, Deserialize)]
pub struct FolderRequest {
    /// Folder id or path
    pub folder_id_or_path: String,
}

/// Request to remove a document from a folder
#[derive(Debug, Deserialize)]
pub struct UnfileDocumentRequest {
    /// Folder id or path
    pub folder_id_or_path: String,
    /// Document id
    pub document_id: String,
}

/// Request naming a document by id
#[derive(Debug, Deserialize)]
pub struct DocumentIdRequest {
    /// Document id
    pub document_id: String,
}

/// Request to create a legal hold
#[derive(Debug, Deserialize)]
pub struct CreateHoldRequest {
    /// Display name of the new hold
    pub display_name: String,
}

/// Request to find holds by display name
#[derive(Debug, Deserialize)]
pub struct ListHoldsRequest {
    /// Part of the hold display name
    pub hold_display_name: String,
}

/// Request to place an object on hold
#[derive(Debug, Deserialize)]
pub struct PutOnHoldRequest {
    /// Hold id
    pub hold_id: String,
    /// Class of the object to hold
    pub held_class: String,
    /// Id of the object to hold
    pub held_id: String,
}

/// Request to release an object from a hold
#[derive(Debug, Deserialize)]
pub struct ReleaseFromHoldRequest {
    /// Hold id
    pub hold_id: String,
    /// Id of the held object
    pub held_id: String,
}

/// Request naming a hold object
#[derive(Debug, Deserialize)]
pub struct HoldObjectRequest {
    /// Hold id
    pub hold_object_id: String,
}

/// One property to set, as `identifier` and value
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyValue {
    /// Property symbolic name
    pub identifier: String,
    /// New value, null clears the property
    #[serde(default)]
    pub value: Value,
}

/// Turn property assignments into the repository's `[{Name: value}]` list
///
/// Identifiers must be plain property names.
fn property_assignments(properties: &[PropertyValue]) -> Result<Vec<Value>> {
    properties
        .iter()
        .map(|property| {
            let identifier = property.identifier.trim();
            if !is_property_identifier(identifier) {
                return Err(ContentMcpError::validation(format!(
                    "'{identifier}' is not a valid property name"
                )));
            }
            let mut assignment = Map::new();
            assignment.insert(identifier.to_string(), property.value.clone());
            Ok(Value::Object(assignment))
        })
        .collect()
}

/// Insert `value` under `key` when it is set and not blank
fn insert_text(input: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(text) = value.map(str::trim).filter(|t| !t.is_empty()) {
        input.insert(key.to_string(), Value::String(text.to_string()));
    }
}

/// Properties to set on a document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentProperties {
    /// Sets the class's name property, usually `DocumentTitle`
    #[serde(default)]
    pub name: Option<String>,
    /// Owner
    #[serde(default)]
    pub owner: Option<String>,
    /// Inline text content
    #[serde(default)]
    pub content: Option<String>,
    /// MIME type of the content
    #[serde(default, alias = "mimeType")]
    pub mime_type: Option<String>,
    /// Further properties of the document class
    #[serde(default)]
    pub properties: Vec<PropertyValue>,
}

impl DocumentProperties {
    /// Build the `DocumentPropertiesInput` value
    pub fn to_input(&self) -> Result<Value> {
        let mut input = Map::new();
        insert_text(&mut input, "name", self.name.as_deref());
        insert_text(&mut input, "owner", self.owner.as_deref());
        if let Some(content) = &self.content {
            input.insert("content".to_string(), Value::String(content.clone()));
        }
        insert_text(&mut input, "mimeType", self.mime_type.as_deref());
        if !self.properties.is_empty() {
            input.insert(
                "properties".to_string(),
                Value::Array(property_assignments(&self.properties)?),
            );
        }
        Ok(Value::Object(input))
    }
}

/// Properties to set on a folder
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolderProperties {
    /// New folder name
    #[serde(default)]
    pub name: Option<String>,
    /// Owner
    #[serde(default)]
    pub owner: Option<String>,
    /// Further properties of the folder class
    #[serde(default)]
    pub properties: Vec<PropertyValue>,
}

impl FolderProperties {
    /// Build the `FolderPropertiesInput` value
    pub fn to_input(&self) -> Result<Value> {
        let mut input = Map::new();
        insert_text(&mut input, "name", self.name.as_deref());
        insert_text(&mut input, "owner", self.owner.as_deref());
        if !self.properties.is_empty() {
            input.insert(
                "properties".to_string(),
                Value::Array(property_assignments(&self.properties)?),
            );
        }
        Ok(Value::Object(input))
    }
}

/// How a document version is checked in
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckinAction {
    /// Let the repository classify the content
    #[serde(default, alias = "autoClassify")]
    pub auto_classify: Option<bool>,
    /// Check in a minor instead of a major version
    #[serde(default, alias = "checkinMinorVersion")]
    pub checkin_minor_version: bool,
}

impl CheckinAction {
    /// Build the `SubCheckinActionInput` value
    pub fn to_input(&self) -> Value {
        let mut input = Map::new();
        input.insert(
            "checkinMinorVersion".to_string(),
            Value::Bool(self.checkin_minor_version),
        );
        if let Some(auto_classify) = self.auto_classify {
            input.insert("autoClassify".to_string(), Value::Bool(auto_classify));
        }
        Value::Object(input)
    }
}

/// Request to create a document
#[derive(Debug, Default, Deserialize)]
pub struct CreateDocumentRequest {
    /// Document class, `Document` when absent
    #[serde(default)]
    pub class_identifier: Option<String>,
    /// Id for the new document, generated by the repository when absent
    #[serde(default)]
    pub id: Option<String>,
    /// Initial properties
    #[serde(default)]
    pub document_properties: Option<DocumentProperties>,
    /// Id or path of the folder to file the document in
    #[serde(default)]
    pub file_in_folder_identifier: Option<String>,
    /// Check-in options, a major version when absent
    #[serde(default)]
    pub checkin_action: Option<CheckinAction>,
}

/// Request to update document properties
#[derive(Debug, Deserialize)]
pub struct UpdateDocumentPropertiesRequest {
    /// Document id or path
    pub identifier: String,
    /// Properties to change
    #[serde(default)]
    pub document_properties: Option<DocumentProperties>,
}

/// Request to move a document to another class
#[derive(Debug, Deserialize)]
pub struct UpdateDocumentClassRequest {
    /// Document id or path
    pub identifier: String,
    /// New document class
    pub class_identifier: String,
}

/// Request to check in a reserved document
#[derive(Debug, Deserialize)]
pub struct CheckinDocumentRequest {
    /// Reservation id or document id
    pub identifier: String,
    /// Check-in options, a major version when absent
    #[serde(default)]
    pub checkin_action: Option<CheckinAction>,
    /// Properties to change on check-in
    #[serde(default)]
    pub document_properties: Option<DocumentProperties>,
}

/// Request to update a folder
#[derive(Debug, Deserialize)]
pub struct UpdateFolderRequest {
    /// Folder id or path
    pub identifier: String,
    /// New folder class, unchanged when absent
    #[serde(default)]
    pub class_identifier: Option<String>,
    /// Properties to change
    #[serde(default)]
    pub folder_properties: Option<FolderProperties>,
}

/// Turn a `[{id, value}]` list into a map
pub fn properties_map(properties: &Value) -> Map<String, Value> {
    properties
        .as_array()
        .map(|list| {
            list.iter()
                .filter_map(|entry| {
                    let id = entry.get("id")?.as_str()?;
                    Some((id.to_string(), entry.get("value").cloned().unwrap_or(Value::Null)))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// A repository object with its properties flattened into a map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectView {
    /// Object id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Object name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Class symbolic name
    pub class_name: String,
    /// Property id to value
    pub properties: Map<String, Value>,
}

impl ObjectView {
    /// Build from a GraphQL object node
    ///
    /// The node must carry `className`; `id`, `name` and `properties` are
    /// optional.
    pub fn from_node(node: &Value) -> Result<Self> {
        let class_name = node
            .get("className")
            .and_then(Value::as_str)
            .ok_or_else(|| ContentMcpError::Internal("object without className".to_string()))?;
        let text = |key: &str| node.get(key).and_then(Value::as_str).map(str::to_string);
        Ok(Self {
            id: text("id"),
            name: text("name"),
            class_name: class_name.to_string(),
            properties: node.get("properties").map(properties_map).unwrap_or_default(),
        })
    }

    /// Fill a missing name from the property holding it
    pub fn named_by(mut self, property: &str) -> Self {
        if self.name.is_none() {
            self.name = self
                .properties
                .get(property)
                .and_then(Value::as_str)
                .map(str::to_string);
        }
        self
    }
}

/// Document state after a checkout or a cancelled checkout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationView {
    /// The document
    #[serde(flatten)]
    pub document: ObjectView,
    /// Reservation object, null when not reserved
    pub reservation: Value,
    /// Content elements of the current version
    pub content_elements: Vec<Value>,
}

impl ReservationView {
    /// Build from a checkout or cancel-checkout node
    pub fn from_node(node: &Value) -> Result<Self> {
        Ok(Self {
            document: ObjectView::from_node(node)?,
            reservation: node.get("reservation").cloned().unwrap_or(Value::Null),
            content_elements: crate::graphql::array_at(node, "/currentVersion/contentElements"),
        })
    }
}

/// One version of a version series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DocumentVersion {
    /// Document id of the version
    pub id: String,
    /// Major version number
    pub major_version_number: i64,
    /// Minor version number
    pub minor_version_number: i64,
}

impl DocumentVersion {
    /// `major.minor`
    pub fn label(&self) -> String {
        format!("{}.{}", self.major_version_number, self.minor_version_number)
    }
}

/// Annotation attached to a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct AnnotationView {
    /// Annotation id
    pub id: String,
    /// Annotation class
    pub class_name: String,
    /// Annotation name
    #[serde(default)]
    pub name: Option<String>,
    /// Creating user
    #[serde(default)]
    pub creator: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub date_created: Option<String>,
    /// Last modification timestamp
    #[serde(default)]
    pub date_last_modified: Option<String>,
    /// Owner
    #[serde(default)]
    pub owner: Option<String>,
    /// Free text
    #[serde(default)]
    pub descriptive_text: Option<String>,
    /// Content size in bytes
    #[serde(default)]
    pub content_size: Option<f64>,
    /// MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Index of the annotated content element
    #[serde(default)]
    pub annotated_content_element: Option<i64>,
    /// Content elements of the annotation
    #[serde(default)]
    pub content_elements: Vec<Value>,
}
