use proptest::prelude::*;
use storygen_parser::{parse_story, ParseError};
use storygen_test_utils::{acceptance_criteria_panel, panel, story_text, value_statement_panel};

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,10}( [a-z]{1,10}){0,3}"
}

proptest! {
    #[test]
    fn any_trailing_panel_is_tolerated(
        persona in word(),
        goal in word(),
        title in "[A-Za-z ]{1,20}",
        body in "[^{}]{0,200}",
    ) {
        let text = story_text(&[
            value_statement_panel(&persona, &goal, "benefit."),
            panel(&title, &body),
        ]);

        let replaces_statement = title.to_lowercase().contains("value statement");
        match parse_story(&text) {
            Ok(story) if !replaces_statement => {
                prop_assert_eq!(story.value_statement().persona(), persona.as_str());
            }
            Ok(_) => {}
            // A second value statement panel with arbitrary prose
            Err(ParseError::InvalidFormat { .. }) => prop_assert!(replaces_statement),
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn arbitrary_section_bodies_parse(
        requirements in "[^{}]{0,300}",
        criteria in "[^{}]{0,300}",
    ) {
        let text = story_text(&[
            value_statement_panel("user", "something", "benefit."),
            panel("Requirements", &requirements),
            acceptance_criteria_panel(&criteria),
        ]);
        prop_assert!(parse_story(&text).is_ok());
    }

    #[test]
    fn parsing_never_panics(text in "\\PC{0,400}") {
        let _ = parse_story(&text);
    }

    #[test]
    fn scenario_count_is_preserved(names in prop::collection::vec(word(), 1..8)) {
        let body: Vec<String> = names
            .iter()
            .map(|name| format!("Scenario: {name}\nGiven g\nWhen w\nThen t"))
            .collect();
        let text = story_text(&[
            value_statement_panel("user", "something", "benefit."),
            acceptance_criteria_panel(&body.join("\n")),
        ]);

        let story = parse_story(&text).unwrap();
        let parsed: Vec<&str> = story
            .acceptance_criteria()
            .iter()
            .map(|ac| ac.scenario_name())
            .collect();
        prop_assert_eq!(parsed, names.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
