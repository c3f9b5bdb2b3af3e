//! Story parsing benchmarks.
//!
//! Measures full-story parsing across scenario counts.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use storygen_parser::{parse_story, parsers::PanelExtractor};
use storygen_test_utils::{
    acceptance_criteria_panel, requirements_panel, story_text, value_statement_panel,
    AGE_VALIDATION_STORY,
};

fn story_with_scenarios(count: usize) -> String {
    let scenarios: Vec<String> = (0..count)
        .map(|i| {
            format!(
                "Scenario: scenario {i}\nGiven precondition {i}\nAnd another precondition\n\
                 When the \"order\" request is submitted\nThen the \"orderPlaced\" event is produced"
            )
        })
        .collect();
    story_text(&[
        value_statement_panel("shopper", "to place orders", "I get my goods."),
        requirements_panel(&[
            r#"update the "order" service to accept orders"#,
            r#"publish the "orderPlaced" event with its avro schema"#,
        ]),
        acceptance_criteria_panel(&scenarios.join("\n\n")),
    ])
}

fn bench_panel_extraction(c: &mut Criterion) {
    let extractor = PanelExtractor::new();
    c.bench_function("parse/panels/age_validation", |b| {
        b.iter(|| extractor.extract(black_box(AGE_VALIDATION_STORY)));
    });
}

fn bench_parse_story(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse/story");

    for scenarios in [1usize, 10, 50, 200] {
        let text = story_with_scenarios(scenarios);
        group.bench_with_input(BenchmarkId::from_parameter(scenarios), &text, |b, text| {
            b.iter(|| parse_story(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_panel_extraction, bench_parse_story);
criterion_main!(benches);
