use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use storygen_harness::prelude::*;
use storygen_harness::{FieldSpec, FieldType, SchemaCatalog, SchemaDefinition};
use storygen_parser::parse_story;
use storygen_test_utils::AGE_VALIDATION_STORY;

fn age_rejected_schema() -> SchemaCatalog {
    SchemaCatalog::new().with_schema(SchemaDefinition::new(
        "aoaApplicantDataCleansedErrored",
        vec![
            FieldSpec::required("applicantId", FieldType::String),
            FieldSpec::required("errorMessage", FieldType::String),
        ],
    ))
}

#[tokio::test]
async fn harness_built_from_parsed_story() {
    let story = parse_story(AGE_VALIDATION_STORY).unwrap();
    let topology = story.topology();

    let harness = Arc::new(
        MultiServiceHarness::from_topology(&topology)
            .with_schema_validator(Arc::new(age_rejected_schema())),
    );
    let context = ScenarioContext::new();

    // @Before
    harness.setup();
    context.set_harness(Arc::clone(&harness));

    // When
    let service = context.harness().unwrap().service("data cleanse").unwrap();
    let attempt = service
        .invoke(ServiceRequest::post("/applicants", json!({"age": 121})))
        .await;
    assert!(matches!(attempt, Err(HarnessError::NotImplemented { .. })));
    context.set("applicantId", "a-42");

    // the service under test would publish this
    let producer = Arc::clone(&harness);
    let published = tokio::spawn(async move {
        producer.event_bus().record(
            Event::empty("aoaApplicantDataCleansedErrored")
                .with_field("applicantId", "a-42")
                .with_field("errorMessage", "age must not exceed 120"),
        )
    });

    // Then
    let event = harness
        .wait_for_event("aoaApplicantDataCleansedErrored", Duration::from_secs(5))
        .await
        .unwrap();
    assert!(published.await.unwrap());
    assert_eq!(
        event.get("applicantId").and_then(|v| v.as_str()),
        context.get_as::<String>("applicantId").unwrap().as_deref()
    );
    assert_eq!(
        serde_json::Value::Object(event.payload().clone()),
        json!({
            "applicantId": "a-42",
            "errorMessage": "age must not exceed 120",
        })
    );
    harness
        .verify_schema_conformance(&event, &topology.schemas()[0])
        .unwrap();

    // @After
    harness.teardown();
    assert!(harness.service("data cleanse").is_err());
    assert!(harness.events("aoaApplicantDataCleansedErrored").is_empty());
}
