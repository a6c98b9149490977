//! End-to-end tool flows driven through the MCP server against the mock
//! repository

use content_mcp::prelude::*;
use content_mcp::test_utils::{
    arguments, create_test_context, result_json, with_document_classes, MockGraphqlExecutor,
};
use serde_json::json;
use std::sync::Arc;

fn invoice_metadata(mock: MockGraphqlExecutor) -> MockGraphqlExecutor {
    mock.with_response_for(
        "getClassMetadata",
        "class_symbolic_name",
        "Invoice",
        json!({"data": {"classDescription": {
            "symbolicName": "Invoice",
            "displayName": "Invoice",
            "namePropertyIndex": 0,
            "propertyDescriptions": [
                {"symbolicName": "DocumentTitle", "dataType": "STRING",
                 "cardinality": "SINGLE", "isSearchable": true},
                {"symbolicName": "InvoiceNumber", "displayName": "Invoice Number",
                 "dataType": "STRING", "cardinality": "SINGLE", "isSearchable": true},
                {"symbolicName": "Amount", "dataType": "FLOAT",
                 "cardinality": "SINGLE", "isSearchable": true}
            ]
        }}}),
    )
}

#[tokio::test]
async fn test_class_discovery_flow() {
    let mock = Arc::new(invoice_metadata(with_document_classes(MockGraphqlExecutor::new())));
    let server = McpServer::new(create_test_context(mock.clone()));

    let roots = server
        .call_tool_by_name("list_root_classes", serde_json::Map::new())
        .await
        .unwrap();
    assert_eq!(
        result_json(&roots),
        json!(["Document", "Folder", "Annotation", "CustomObject"])
    );

    let matches = server
        .call_tool_by_name(
            "determine_class",
            arguments(json!({"root_class": "Document", "keywords": ["supplier", "invoice"]})),
        )
        .await
        .unwrap();
    let best = result_json(&matches)[0]["class_description_data"]["symbolic_name"].clone();
    assert_eq!(best, "Invoice");

    let properties = server
        .call_tool_by_name(
            "get_class_property_descriptions",
            arguments(json!({"class_symbolic_name": "Invoice"})),
        )
        .await
        .unwrap();
    let properties = result_json(&properties);
    assert_eq!(properties.as_array().unwrap().len(), 3);
    assert_eq!(properties[1]["symbolic_name"], "InvoiceNumber");

    // Second lookup is served from the cache.
    server
        .call_tool_by_name(
            "get_class_property_descriptions",
            arguments(json!({"class_symbolic_name": "Invoice"})),
        )
        .await
        .unwrap();
    assert_eq!(mock.call_count("getClassAndSubclasses"), 1);
    assert_eq!(mock.call_count("getClassMetadata"), 1);
}

#[tokio::test]
async fn test_searchable_properties_then_search() {
    let mock = Arc::new(
        with_document_classes(MockGraphqlExecutor::new()).with_response(
            "repositoryObjectsSearch",
            json!({"data": {"repositoryObjects": {"independentObjects": []}}}),
        ),
    );
    let server = McpServer::new(create_test_context(mock.clone()));

    let searchable = server
        .call_tool_by_name(
            "get_searchable_property_descriptions",
            arguments(json!({"class_symbolic_name": "Document"})),
        )
        .await
        .unwrap();
    let names: Vec<String> = result_json(&searchable)
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["symbolic_name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["DocumentTitle", "ContentSize"]);

    let result = server
        .call_tool_by_name(
            "repository_object_search",
            arguments(json!({"search_parameters": {
                "search_class": "Document",
                "search_properties": [
                    {"property_name": "DocumentTitle", "property_value": "lease", "operator": "CONTAINS"}
                ]
            }})),
        )
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(false));
    assert_eq!(
        mock.last_variables("repositoryObjectsSearch").unwrap()["where_statement"],
        "DocumentTitle LIKE '%lease%'"
    );
}

#[tokio::test]
async fn test_hold_lifecycle() {
    let mock = Arc::new(
        MockGraphqlExecutor::new()
            .with_response(
                "createHold",
                json!({"data": {"changeObject": {
                    "className": "CmHold",
                    "properties": [{"id": "Id", "value": "{H1}"}]
                }}}),
            )
            .with_response(
                "putObjectOnHold",
                json!({"data": {"changeObject": {
                    "className": "CmHoldRelationship",
                    "properties": [{"id": "Id", "value": "{R1}"}]
                }}}),
            )
            .with_response(
                "getHoldRelationships",
                json!({"data": {"repositoryObjects": {"independentObjects": [{
                    "className": "CmHoldRelationship",
                    "properties": [
                        {"id": "Id", "value": "{R1}"},
                        {"id": "HeldObject", "value": {"identifier": "{D1}"}}
                    ]
                }]}}}),
            )
            .with_response(
                "deleteObject",
                json!({"data": {"changeObject": {
                    "className": "CmHoldRelationship",
                    "objectReference": {"identifier": "{R1}"}
                }}}),
            ),
    );
    let server = McpServer::new(create_test_context(mock.clone()));

    let hold = server
        .call_tool_by_name("create_a_hold", arguments(json!({"display_name": "Audit"})))
        .await
        .unwrap();
    let hold_id = result_json(&hold)["properties"]["Id"]
        .as_str()
        .unwrap()
        .to_string();

    server
        .call_tool_by_name(
            "put_an_object_on_hold",
            arguments(json!({"hold_id": hold_id, "held_class": "Document", "held_id": "{D1}"})),
        )
        .await
        .unwrap();

    let held = server
        .call_tool_by_name(
            "list_held_objects_for_a_hold",
            arguments(json!({"hold_object_id": hold_id})),
        )
        .await
        .unwrap();
    assert_eq!(result_json(&held), json!([{"identifier": "{D1}"}]));

    let released = server
        .call_tool_by_name(
            "release_an_object_from_hold",
            arguments(json!({"hold_id": hold_id, "held_id": "{D1}"})),
        )
        .await
        .unwrap();
    assert_eq!(result_json(&released)["status"], "released");
    assert_eq!(mock.call_count("deleteObject"), 1);
}

#[tokio::test]
async fn test_repository_errors_become_tool_errors() {
    let mock = Arc::new(MockGraphqlExecutor::new().with_response(
        "getDocumentProperties",
        json!({"errors": [{"message": "Access denied"}]}),
    ));
    let server = McpServer::new(create_test_context(mock));

    let result = server
        .call_tool_by_name("get_document_properties", arguments(json!({"identifier": "{D1}"})))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    let payload = result_json(&result);
    assert_eq!(payload["isError"], true);
    assert!(payload["message"].as_str().unwrap().contains("Access denied"));
    assert!(!payload["suggestions"].as_array().unwrap().is_empty());
}

#[test]
fn test_library_version() {
    assert!(!content_mcp::VERSION.is_empty());
}
