//! Java and Gherkin identifiers derived from story text

use once_cell::sync::Lazy;
use regex::Regex;
use storygen_model::StepKeyword;

/// Words of the goal that contribute to the step class name
pub const CLASS_NAME_WORDS: usize = 5;

/// Words of a step that contribute to its method name
pub const METHOD_NAME_WORDS: usize = 6;

const CLASS_SUFFIX: &str = "Steps";

const GIVEN_MARKERS: [&str; 6] = ["is", "are", "has", "have", "exists", "running"];
const WHEN_MARKERS: [&str; 4] = ["processed", "triggered", "called", "submitted"];

static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[^"]*""#).expect("valid quoted text regex"));

/// Feature title: the goal with its first character upper-cased
#[must_use]
pub fn feature_name(goal: &str) -> String {
    let mut chars = goal.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Step class name from the first words of the goal
///
/// Each word keeps only ASCII letters and is title-cased. Words that strip
/// to nothing still use up one of the five slots.
///
/// ```rust
/// use storygen_render::naming::class_name;
///
/// assert_eq!(class_name("ensure that users over age of 120"), "EnsureThatUsersOverAgeSteps");
/// assert_eq!(class_name("add 2 new items"), "AddNewItemsSteps");
/// ```
#[must_use]
pub fn class_name(goal: &str) -> String {
    let mut name: String = goal
        .split_whitespace()
        .take(CLASS_NAME_WORDS)
        .map(|word| {
            let letters: String = word.chars().filter(char::is_ascii_alphabetic).collect();
            title_case(&letters)
        })
        .collect();
    name.push_str(CLASS_SUFFIX);
    name
}

/// Method name from step text
///
/// Quoted substrings become `param`, punctuation is removed, and the first
/// six words are camel-cased.
///
/// ```rust
/// use storygen_render::naming::method_name;
///
/// assert_eq!(
///     method_name(r#"the "aoaApplicantDataCleansed" event is produced"#),
///     "theParamEventIsProduced"
/// );
/// ```
#[must_use]
pub fn method_name(step: &str) -> String {
    let replaced = QUOTED.replace_all(step, "param");
    let cleaned: String = replaced
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
        .collect();

    let mut words = cleaned.split_whitespace().take(METHOD_NAME_WORDS);
    let mut name = words.next().map(str::to_ascii_lowercase).unwrap_or_default();
    for word in words {
        name.push_str(&title_case(word));
    }
    name
}

/// Cucumber annotation for a step
///
/// Keyword markers are matched as lower-cased substrings, so `this` counts
/// as containing `is`.
#[must_use]
pub fn annotation(step: &str) -> StepKeyword {
    let lower = step.to_lowercase();
    if GIVEN_MARKERS.iter().any(|marker| lower.contains(marker)) {
        StepKeyword::Given
    } else if WHEN_MARKERS.iter().any(|marker| lower.contains(marker)) {
        StepKeyword::When
    } else {
        StepKeyword::Then
    }
}

/// Snake-cased form of a camel-cased identifier
pub(crate) fn snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, c) in ident.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    }
}
