//! Testing utilities for storygen workspace
//!
//! Shared story fixtures, panel builders, and hand-built models.

#![allow(missing_docs)]

use storygen_model::{AcceptanceCriterion, Requirement, Story, ValueStatement};

/// Age validation story with all three sections and colored panel headers
pub const AGE_VALIDATION_STORY: &str = r#"{panel:title=Value Statement | titleBGColor=#b9d9ed}
As a Chase Bank product owner, I want to ensure that users over age of 120 are not allowed to apply for a credit card, so that we
maintain data integrity and comply with realistic age expectations.
{panel}
{panel:title=Requirements | titleBGColor=#b9d9ed}
1. update the "data cleanse" service to validate the applicant's age and produce an error if the age is greater than 120 years
2. ensure that the "aoaApplicantDataCleansedErrored" event is triggered for applicants with an age greater than 120
3. update the avro schema for the "aoaApplicantDataCleansedErrored" event to include an error message specific to age validation failure
{panel}
{panel:title=Acceptance Criteria | titleBGColor=#b9d9ed}
Scenario: User age is valid
Given the applicant's age is less than or equal to 120 years
When the application is processed by the Data Cleanse service
Then the "aoaApplicantDataCleansed" event is produced
{panel}"#;

/// Story with two scenarios and a single plain requirement
pub const MULTI_SCENARIO_STORY: &str = r"{panel:title=Value Statement | titleBGColor=#b9d9ed}
As a user, I want to do something, so that I achieve a goal.
{panel}
{panel:title=Requirements | titleBGColor=#b9d9ed}
1. do something
{panel}
{panel:title=Acceptance Criteria | titleBGColor=#b9d9ed}
Scenario: First scenario
Given a precondition
When an action occurs
Then an outcome happens

Scenario: Second scenario
Given another precondition
When another action occurs
Then another outcome happens
{panel}";

/// Wrap a body in panel markers
pub fn panel(title: &str, body: &str) -> String {
    format!("{{panel:title={title}}}\n{body}\n{{panel}}")
}

pub fn value_statement_panel(persona: &str, goal: &str, benefit: &str) -> String {
    panel(
        "Value Statement",
        &format!("As a {persona}, I want {goal}, so that {benefit}"),
    )
}

pub fn requirements_panel(items: &[&str]) -> String {
    let body: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect();
    panel("Requirements", &body.join("\n"))
}

pub fn acceptance_criteria_panel(body: &str) -> String {
    panel("Acceptance Criteria", body)
}

/// Join panels into one story document
pub fn story_text<S: AsRef<str>>(panels: &[S]) -> String {
    panels
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn criterion(name: &str, given: &[&str], when: &[&str], then: &[&str]) -> AcceptanceCriterion {
    let mut ac = AcceptanceCriterion::new(name);
    given.iter().for_each(|s| ac.push_given(*s));
    when.iter().for_each(|s| ac.push_when(*s));
    then.iter().for_each(|s| ac.push_then(*s));
    ac
}

/// Hand-built story touching one service, one event, and one schema
pub fn create_test_story() -> Story {
    Story::new(
        ValueStatement::new(
            "payments engineer",
            "reject duplicate card payments quickly",
            "customers are never charged twice.",
        ),
        vec![
            Requirement::new(1, r#"update the "payment gateway" service to detect duplicates"#),
            Requirement::new(
                2,
                r#"publish the "paymentRejected" event and register its avro schema"#,
            ),
        ],
        vec![
            criterion(
                "Duplicate payment is rejected",
                &["a payment has already been captured"],
                &["the same payment gets submitted"],
                &["the \"paymentRejected\" event is published", "no charge appears"],
            ),
            criterion(
                "First payment is captured",
                &["a payment has already been captured"],
                &["a new payment is submitted"],
                &["the payment is captured"],
            ),
        ],
    )
}

/// Hand-built story with no requirements and no criteria
pub fn create_minimal_story(goal: &str) -> Story {
    Story::new(
        ValueStatement::new("user", goal, "benefit."),
        Vec::new(),
        Vec::new(),
    )
}
