mod common;

use std::sync::Arc;

use serde_json::json;

use abr_lookup::domain::registry::{OP_SEARCH_BY_ABN, OP_SEARCH_BY_NAME};
use abr_lookup::prelude::*;

fn candidate(name: &str, abn: &str) -> serde_json::Value {
    json!({
        "abn": { "identifier_value": abn },
        "main_name": { "organisation_name": name }
    })
}

#[tokio::test]
async fn test_name_search_reenriches_candidates_by_abn() {
    let registry = Arc::new(common::StubRegistry::new());
    registry.push_response(Ok(common::wrap_response(json!({
        "search_results_list": {
            "num_records_found": "2",
            "search_results_record": [
                candidate("Sparse One", "99124391073"),
                candidate("Sparse Two", "46110483513")
            ]
        }
    }))));
    registry.push_response(Ok(common::entity_response("Full One", "99124391073")));
    registry.push_response(Ok(common::entity_response("Full Two", "46110483513")));

    let service = common::create_test_service(registry.clone());
    let entities = service
        .search_by_name("Sparse", &NameSearchOptions::default())
        .await
        .unwrap();

    // One name-search call plus one by-ABN call per candidate.
    let operations: Vec<String> = registry.calls().into_iter().map(|(op, _)| op).collect();
    assert_eq!(
        operations,
        vec![OP_SEARCH_BY_NAME, OP_SEARCH_BY_ABN, OP_SEARCH_BY_ABN]
    );

    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].main_name.as_deref(), Some("Full One"));
    assert_eq!(entities[1].main_name.as_deref(), Some("Full Two"));
}

#[tokio::test]
async fn test_name_search_single_result_is_not_a_type_error() {
    // The transport flattens a one-record list to a bare object; this must
    // parse as one candidate instead of faulting.
    let registry = Arc::new(common::StubRegistry::new());
    registry.push_response(Ok(common::wrap_response(json!({
        "search_results_list": {
            "num_records_found": "1",
            "search_results_record": candidate("Only One", "99124391073")
        }
    }))));
    registry.push_response(Ok(common::entity_response("Only One", "99124391073")));

    let service = common::create_test_service(registry);
    let entities = service
        .search_by_name("Only", &NameSearchOptions::default())
        .await
        .unwrap();

    assert_eq!(entities.len(), 1);
}

#[tokio::test]
async fn test_name_search_skip_reenrichment_keeps_sparse_records() {
    let registry = Arc::new(common::StubRegistry::new());
    registry.push_response(Ok(common::wrap_response(json!({
        "search_results_list": {
            "search_results_record": [candidate("Sparse One", "99124391073")]
        }
    }))));

    let options = NameSearchOptions {
        skip_reenrichment: true,
        ..NameSearchOptions::default()
    };

    let service = common::create_test_service(registry.clone());
    let entities = service.search_by_name("Sparse", &options).await.unwrap();

    assert_eq!(registry.call_count(), 1);
    assert_eq!(entities[0].main_name.as_deref(), Some("Sparse One"));
}

#[tokio::test]
async fn test_name_search_exception_aborts_without_partial_results() {
    let registry = Arc::new(common::StubRegistry::new());
    registry.push_response(Ok(common::exception_response("No records found")));

    let service = common::create_test_service(registry);
    let err = service
        .search_by_name("asdf :asdfasdfasdfadsf", &NameSearchOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AbrError::Remote(_)));
}

#[tokio::test]
async fn test_name_search_enrichment_failure_aborts_batch() {
    let registry = Arc::new(common::StubRegistry::new());
    registry.push_response(Ok(common::wrap_response(json!({
        "search_results_list": {
            "search_results_record": [
                candidate("First", "99124391073"),
                candidate("Second", "46110483513")
            ]
        }
    }))));
    // First re-enrichment fails; the second candidate must never be fetched.
    registry.push_response(Ok(common::exception_response("record withdrawn")));

    let service = common::create_test_service(registry.clone());
    let err = service
        .search_by_name("Anything", &NameSearchOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AbrError::Remote(_)));
    assert_eq!(registry.call_count(), 2);
}

#[tokio::test]
async fn test_name_search_message_includes_filters() {
    let registry = Arc::new(common::StubRegistry::new());
    registry.push_response(Ok(common::wrap_response(json!({
        "search_results_list": { "search_results_record": [] }
    }))));

    let options = NameSearchOptions {
        states: vec!["NSW".to_string()],
        postcode: Some("2040".to_string()),
        max_search_results: 3,
        ..NameSearchOptions::default()
    };

    let service = common::create_test_service(registry.clone());
    service.search_by_name("Sony", &options).await.unwrap();

    let (_, message) = registry.calls().remove(0);
    let search = &message["externalNameSearch"];
    assert_eq!(search["name"], "Sony");
    assert_eq!(search["filters"]["stateCode"]["NSW"], "Y");
    assert_eq!(search["filters"]["stateCode"]["VIC"], "N");
    assert_eq!(search["filters"]["postcode"], "2040");
    assert_eq!(search["maxSearchResults"], 3);
}
