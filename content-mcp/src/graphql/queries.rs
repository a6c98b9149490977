//! GraphQL documents sent to the repository
//!
//! Every document is named so logs and test doubles can tell them apart, and
//! every one takes the object store as `$object_store_name`.

/// Root class descriptor plus its first page of subclasses
pub const CLASS_AND_SUBCLASSES: &str = r#"
query getClassAndSubclasses($object_store_name: String!, $root_class_name: String!, $page_size: Int!) {
  classDescription(repositoryIdentifier: $object_store_name, identifier: $root_class_name) {
    symbolicName
    displayName
    descriptiveText
  }
  subClassDescriptions(repositoryIdentifier: $object_store_name, identifier: $root_class_name, pageSize: $page_size) {
    classDescriptions {
      symbolicName
      displayName
      descriptiveText
    }
  }
}
"#;

/// Up to three levels of a class's superclass chain
pub const SUPERCLASS_CHAIN: &str = r#"
query getSuperclassChain($object_store_name: String!, $class_symbolic_name: String!) {
  classDescription(repositoryIdentifier: $object_store_name, identifier: $class_symbolic_name) {
    symbolicName
    superClassDescription {
      symbolicName
      superClassDescription {
        symbolicName
        superClassDescription {
          symbolicName
        }
      }
    }
  }
}
"#;

/// Property descriptions of a class
pub const CLASS_METADATA: &str = r#"
query getClassMetadata($object_store_name: String!, $class_symbolic_name: String!) {
  classDescription(repositoryIdentifier: $object_store_name, identifier: $class_symbolic_name) {
    symbolicName
    displayName
    descriptiveText
    namePropertyIndex
    propertyDescriptions {
      symbolicName
      displayName
      descriptiveText
      dataType
      cardinality
      isSearchable
      isSystemOwned
      isHidden
    }
  }
}
"#;

/// Property descriptions of a class together with its superclass chain
pub const CLASS_METADATA_WITH_SUPERCLASSES: &str = r#"
query getClassMetadataWithSuperclasses($object_store_name: String!, $class_symbolic_name: String!) {
  classDescription(repositoryIdentifier: $object_store_name, identifier: $class_symbolic_name) {
    symbolicName
    displayName
    descriptiveText
    namePropertyIndex
    propertyDescriptions {
      symbolicName
      displayName
      descriptiveText
      dataType
      cardinality
      isSearchable
      isSystemOwned
      isHidden
    }
    superClassDescription {
      symbolicName
      superClassDescription {
        symbolicName
        superClassDescription {
          symbolicName
        }
      }
    }
  }
}
"#;

/// Generic property search over any class
pub const REPOSITORY_OBJECT_SEARCH: &str = r#"
query repositoryObjectsSearch($object_store_name: String!, $class_name: String!, $where_statement: String!, $return_props: [String!]) {
  repositoryObjects(repositoryIdentifier: $object_store_name, from: $class_name, where: $where_statement) {
    independentObjects {
      properties(includes: $return_props) {
        label
        value
      }
    }
  }
}
"#;

/// Documents whose name property matches a `where` clause
pub const DOCUMENTS_BY_NAME: &str = r#"
query documentsByNameSearch($object_store_name: String!, $class_name: String!, $where_statement: String!) {
  documents(repositoryIdentifier: $object_store_name, from: $class_name, where: $where_statement) {
    documents {
      className
      id
      name
      majorVersionNumber
      minorVersionNumber
      versionStatus
    }
  }
}
"#;

/// Folders matching a `where` clause, used for intermediate path levels
pub const FOLDERS_BY_NAME: &str = r#"
query intermediateFoldersByNameSearch($object_store_name: String!, $where_statement: String!) {
  folders(repositoryIdentifier: $object_store_name, where: $where_statement) {
    folders {
      id
      name
      pathName
    }
  }
}
"#;

/// Containment relationships joined to documents of a class
pub const DOCUMENT_FILINGS: &str = r#"
query documentsByPathSearch($object_store_name: String!, $from_condition: String!, $where_statement: String!) {
  repositoryObjects(repositoryIdentifier: $object_store_name, from: $from_condition, where: $where_statement) {
    independentObjects {
      className
      ... on ReferentialContainmentRelationship {
        id
        containmentName
        tail {
          className
          id
          name
          pathName
        }
        head {
          className
          id
          name
          ... on Document {
            versionStatus
            minorVersionNumber
            majorVersionNumber
          }
        }
      }
    }
  }
}
"#;

const CONTENT_ELEMENTS: &str = r#"
    reservation {
      isReserved
      id
    }
    currentVersion {
      contentElements {
        ... on ContentTransferType {
          retrievalName
          contentType
          contentSize
          downloadUrl
        }
      }
    }
    properties {
      id
      value
    }
"#;

/// All properties of one document
pub const DOCUMENT_PROPERTIES: &str = r#"
query getDocumentProperties($object_store_name: String!, $identifier: String!) {
  document(repositoryIdentifier: $object_store_name, identifier: $identifier) {
    id
    name
    className
    properties {
      id
      value
    }
  }
}
"#;

/// Versions in a document's version series
pub const DOCUMENT_VERSIONS: &str = r#"
query getDocumentVersions($object_store_name: String!, $identifier: String!) {
  document(repositoryIdentifier: $object_store_name, identifier: $identifier) {
    versionSeries {
      versions {
        versionables {
          id
          majorVersionNumber
          minorVersionNumber
        }
      }
    }
  }
}
"#;

/// Annotations of a document with their content download URLs
pub const DOCUMENT_TEXT_EXTRACT: &str = r#"
query getDocumentTextExtract($object_store_name: String!, $identifier: String!) {
  document(repositoryIdentifier: $object_store_name, identifier: $identifier) {
    annotations {
      annotations {
        id
        name
        className
        annotatedContentElement
        descriptiveText
        contentElements {
          ... on ContentTransfer {
            downloadUrl
            retrievalName
            contentSize
          }
        }
      }
    }
  }
}
"#;

/// Annotations of a document
pub const DOCUMENT_ANNOTATIONS: &str = r#"
query getDocumentAnnotations($object_store_name: String!, $identifier: String!) {
  document(repositoryIdentifier: $object_store_name, identifier: $identifier) {
    annotations {
      annotations {
        className
        creator
        dateCreated
        dateLastModified
        id
        name
        owner
        descriptiveText
        contentSize
        mimeType
        annotatedContentElement
        contentElementsPresent
        contentElements {
          className
          contentType
          elementSequenceNumber
        }
      }
    }
  }
}
"#;

/// Build the checkout / cancel-checkout mutations, which share a selection
fn reservation_mutation(operation: &str, field: &str) -> String {
    format!(
        "mutation {operation}($object_store_name: String!, $identifier: String!) {{\n  \
         {field}(repositoryIdentifier: $object_store_name, identifier: $identifier) {{\n    \
         id\n    className\n{CONTENT_ELEMENTS}  }}\n}}\n"
    )
}

/// Check out a document
pub fn checkout_document() -> String {
    reservation_mutation("checkoutDocument", "checkoutDocument")
}

/// Cancel a document checkout
pub fn cancel_document_checkout() -> String {
    reservation_mutation("cancelDocumentCheckout", "cancelDocumentCheckout")
}

/// Check in a reserved document
pub fn checkin_document() -> String {
    format!(
        "mutation checkinDocument($object_store_name: String!, $identifier: String!, \
         $document_properties: DocumentPropertiesInput, \
         $checkin_action: SubCheckinActionInput!) {{\n  \
         checkinDocument(repositoryIdentifier: $object_store_name, identifier: $identifier, \
         documentProperties: $document_properties, checkinAction: $checkin_action) {{\n    \
         id\n    className\n{CONTENT_ELEMENTS}  }}\n}}\n"
    )
}

/// Create a document, optionally filed in a folder
pub const CREATE_DOCUMENT: &str = r#"
mutation createDocument($object_store_name: String!, $class_identifier: String, $id: ID,
    $document_properties: DocumentPropertiesInput, $file_in_folder_identifier: String,
    $checkin_action: SubCheckinActionInput) {
  createDocument(
    repositoryIdentifier: $object_store_name
    classIdentifier: $class_identifier
    id: $id
    documentProperties: $document_properties
    fileInFolderIdentifier: $file_in_folder_identifier
    checkinAction: $checkin_action
  ) {
    id
    className
    properties {
      id
      value
    }
  }
}
"#;

/// Change a document's properties or class
///
/// Omitted variables leave the matching part of the document unchanged.
pub const UPDATE_DOCUMENT: &str = r#"
mutation updateDocument($object_store_name: String!, $identifier: String!,
    $class_identifier: String, $document_properties: DocumentPropertiesInput) {
  updateDocument(
    repositoryIdentifier: $object_store_name
    identifier: $identifier
    classIdentifier: $class_identifier
    documentProperties: $document_properties
  ) {
    id
    className
    properties {
      id
      value
    }
  }
}
"#;

/// Class of one document
pub const DOCUMENT_CLASS_NAME: &str = r#"
query getDocumentClassName($object_store_name: String!, $identifier: String!) {
  document(repositoryIdentifier: $object_store_name, identifier: $identifier) {
    className
  }
}
"#;

/// Delete one document version
pub const DELETE_DOCUMENT_VERSION: &str = r#"
mutation deleteDocumentVersion($object_store_name: String!, $identifier: String!) {
  deleteDocument(repositoryIdentifier: $object_store_name, identifier: $identifier) {
    id
    className
  }
}
"#;

/// Delete a whole version series
pub const DELETE_VERSION_SERIES: &str = r#"
mutation deleteVersionSeries($object_store_name: String!, $identifier: String!) {
  deleteVersionSeries(repositoryIdentifier: $object_store_name, identifier: $identifier) {
    id
    className
  }
}
"#;

/// Create a folder
pub const CREATE_FOLDER: &str = r#"
mutation createFolder($object_store_name: String!, $class_name: String, $folder_properties: FolderPropertiesInput!) {
  createFolder(repositoryIdentifier: $object_store_name, classIdentifier: $class_name, folderProperties: $folder_properties) {
    id
    className
    properties {
      id
      value
    }
  }
}
"#;

/// Change a folder's properties or class
pub const UPDATE_FOLDER: &str = r#"
mutation updateFolder($object_store_name: String!, $identifier: String!,
    $class_identifier: String, $folder_properties: FolderPropertiesInput) {
  updateFolder(
    repositoryIdentifier: $object_store_name
    identifier: $identifier
    classIdentifier: $class_identifier
    folderProperties: $folder_properties
  ) {
    id
    className
    properties {
      id
      value
    }
  }
}
"#;

/// Delete a folder by id or path
pub const DELETE_FOLDER: &str = r#"
mutation deleteFolder($object_store_name: String!, $identifier: String!) {
  deleteFolder(repositoryIdentifier: $object_store_name, identifier: $identifier) {
    id
    className
  }
}
"#;

/// Resolve a folder path to its id
pub const FOLDER_ID: &str = r#"
query folderId($object_store_name: String!, $identifier: String!) {
  folder(repositoryIdentifier: $object_store_name, identifier: $identifier) {
    id
  }
}
"#;

/// Documents filed in a folder
pub const FOLDER_DOCUMENTS: &str = r#"
query getContainedDocuments($object_store_name: String!, $identifier: String!) {
  folder(repositoryIdentifier: $object_store_name, identifier: $identifier) {
    containedDocuments {
      documents {
        id
        name
        className
        properties {
          id
          value
        }
      }
    }
  }
}
"#;

/// Containment relationships between a folder and a document
pub const FILING_RELATIONSHIPS: &str = r#"
query filingRelationships($object_store_name: String!, $where_statement: String!) {
  repositoryObjects(repositoryIdentifier: $object_store_name, from: "ReferentialContainmentRelationship", where: $where_statement) {
    independentObjects {
      ... on ReferentialContainmentRelationship {
        id
        tail {
          id
        }
        head {
          id
        }
      }
    }
  }
}
"#;

/// Delete a containment relationship
pub const DELETE_FILING: &str = r#"
mutation deleteFiling($object_store_name: String!, $identifier: String!) {
  deleteReferentialContainmentRelationship(repositoryIdentifier: $object_store_name, identifier: $identifier) {
    id
  }
}
"#;

/// Create a legal hold
pub const CREATE_HOLD: &str = r#"
mutation createHold($object_store_name: String!, $class_name: String!, $display_name: String!) {
  changeObject(
    repositoryIdentifier: $object_store_name
    properties: [{ displayName: $display_name }]
    actions: [{ type: CREATE, subCreateAction: { classId: $class_name } }]
  ) {
    className
    properties {
      id
      value
    }
  }
}
"#;

/// Holds whose display name matches a `where` clause
pub const HOLDS_BY_NAME: &str = r#"
query getHoldsGivenAName($object_store_name: String!, $where_statement: String!) {
  repositoryObjects(repositoryIdentifier: $object_store_name, from: "CmHold", where: $where_statement) {
    independentObjects {
      className
      properties(includes: ["Id", "DisplayName", "Creator"]) {
        id
        value
      }
    }
  }
}
"#;

/// Relate an object to a hold
pub const PUT_ON_HOLD: &str = r#"
mutation putObjectOnHold($object_store_name: String!, $hold_identifier: String!, $held_class_name: String!, $held_identifier: String!) {
  changeObject(
    repositoryIdentifier: $object_store_name
    objectProperties: [
      { identifier: "Hold", objectReferenceValue: { identifier: $hold_identifier } }
      { identifier: "HeldObject", objectReferenceValue: { classIdentifier: $held_class_name, identifier: $held_identifier } }
    ]
    actions: [{ type: CREATE, subCreateAction: { classId: "CmHoldRelationship" } }]
  ) {
    className
    properties {
      id
      value
    }
  }
}
"#;

/// Hold relationships matching a `where` clause
pub const HOLD_RELATIONSHIPS: &str = r#"
query getHoldRelationships($object_store_name: String!, $where_statement: String!) {
  repositoryObjects(repositoryIdentifier: $object_store_name, from: "CmHoldRelationship", where: $where_statement) {
    independentObjects {
      className
      properties(includes: ["HeldObject", "Hold", "Id"]) {
        id
        value
      }
    }
  }
}
"#;

/// Delete any object by class and id
pub const DELETE_OBJECT: &str = r#"
mutation deleteObject($object_store_name: String!, $class_name: String!, $identifier: String!) {
  changeObject(
    repositoryIdentifier: $object_store_name
    identifier: $identifier
    classIdentifier: $class_name
    actions: [{ type: DELETE }]
  ) {
    className
    objectReference {
      repositoryIdentifier
      classIdentifier
      identifier
    }
  }
}
"#;
