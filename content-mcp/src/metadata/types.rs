//! Class and property descriptors as stored in the metadata cache

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of system root classes
///
/// Every repository class descends from exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RootClass {
    /// `Document`
    Document,
    /// `Folder`
    Folder,
    /// `Annotation`
    Annotation,
    /// `CustomObject`
    CustomObject,
}

impl RootClass {
    /// All roots in declaration order
    pub const ALL: [RootClass; 4] = [
        RootClass::Document,
        RootClass::Folder,
        RootClass::Annotation,
        RootClass::CustomObject,
    ];

    /// Symbolic name of the root class in the repository
    pub fn as_str(&self) -> &'static str {
        match self {
            RootClass::Document => "Document",
            RootClass::Folder => "Folder",
            RootClass::Annotation => "Annotation",
            RootClass::CustomObject => "CustomObject",
        }
    }

    /// Match a repository symbolic name against the system roots
    pub fn from_symbolic_name(name: &str) -> Option<RootClass> {
        RootClass::ALL.into_iter().find(|root| root.as_str() == name)
    }
}

impl fmt::Display for RootClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RootClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RootClass::from_symbolic_name(s).ok_or_else(|| {
            format!(
                "'{s}' is not a root class; expected one of {}",
                RootClass::ALL.map(|r| r.as_str()).join(", ")
            )
        })
    }
}

/// Property data type as reported by the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    /// Binary content
    Binary,
    /// Boolean
    Boolean,
    /// Date and time
    #[serde(alias = "DATETIME", alias = "TIME")]
    Date,
    /// Floating point
    #[serde(alias = "FLOAT")]
    Double,
    /// GUID
    Guid,
    /// Integer
    #[serde(alias = "INTEGER")]
    Long,
    /// Object reference
    Object,
    /// String
    String,
    /// Anything the repository adds later
    #[serde(other)]
    Unknown,
}

impl DataType {
    /// Whether values of this type appear unquoted in a `where` clause
    pub fn is_unquoted_literal(&self) -> bool {
        matches!(
            self,
            DataType::Boolean | DataType::Date | DataType::Double | DataType::Long
        )
    }
}

/// Property cardinality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Cardinality {
    /// One value
    Single,
    /// Multi-valued
    List,
    /// Enumeration of objects
    Enum,
}

/// Description of one property on a class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Symbolic name used in queries
    pub symbolic_name: String,
    /// Localized display name
    pub display_name: String,
    /// Localized description
    #[serde(default)]
    pub descriptive_text: String,
    /// Data type
    pub data_type: DataType,
    /// Cardinality
    pub cardinality: Cardinality,
    /// Usable in a `where` clause
    pub is_searchable: bool,
    /// Maintained by the repository
    pub is_system_owned: bool,
    /// Hidden from end users
    pub is_hidden: bool,
}

/// A class known to the repository
///
/// Created without properties when a root bucket is populated; the property
/// list is filled in the first time full metadata is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Unique symbolic name
    pub symbolic_name: String,
    /// Localized display name
    pub display_name: String,
    /// Localized description
    #[serde(default)]
    pub descriptive_text: String,
    /// Property descriptions, empty until loaded
    #[serde(default)]
    pub property_descriptions: Vec<PropertyDescriptor>,
    /// Symbolic name of the property that holds an object's name
    #[serde(default)]
    pub name_property_symbolic_name: Option<String>,
}

impl ClassDescriptor {
    /// Descriptor without property descriptions
    pub fn new(
        symbolic_name: impl Into<String>,
        display_name: impl Into<String>,
        descriptive_text: impl Into<String>,
    ) -> Self {
        Self {
            symbolic_name: symbolic_name.into(),
            display_name: display_name.into(),
            descriptive_text: descriptive_text.into(),
            property_descriptions: Vec::new(),
            name_property_symbolic_name: None,
        }
    }

    /// True once property descriptions have been loaded
    pub fn has_properties(&self) -> bool {
        !self.property_descriptions.is_empty()
    }

    /// Public view without the property list
    pub fn summary(&self) -> ClassSummary {
        ClassSummary {
            symbolic_name: self.symbolic_name.clone(),
            display_name: self.display_name.clone(),
            descriptive_text: self.descriptive_text.clone(),
        }
    }

    /// Look up a property by symbolic name
    pub fn property(&self, symbolic_name: &str) -> Option<&PropertyDescriptor> {
        self.property_descriptions
            .iter()
            .find(|p| p.symbolic_name == symbolic_name)
    }
}

/// Name and descriptions of a class, as returned by the class listing tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Unique symbolic name
    pub symbolic_name: String,
    /// Localized display name
    pub display_name: String,
    /// Localized description
    pub descriptive_text: String,
}
