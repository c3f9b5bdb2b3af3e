//! Numbered requirement with extracted entity references
//!
//! Service, event and schema names are pulled out of the requirement text
//! once, when the requirement is built:
//! - services: `"<name>" service` (keyword matched case-insensitively)
//! - events: `"<name>" event` where the name is a single word
//! - schemas: the event names with `.avsc` appended, only when the text
//!   mentions an "avro schema"

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static SERVICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)"([^"]+)"\s+service"#).expect("service pattern is valid"));

static EVENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([A-Za-z0-9_]+)"\s+event"#).expect("event pattern is valid"));

const AVRO_SCHEMA_MARKER: &str = "avro schema";
const SCHEMA_EXTENSION: &str = ".avsc";

/// A single numbered requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RequirementSource")]
pub struct Requirement {
    number: u32,
    text: String,
    services: Vec<String>,
    events: Vec<String>,
    schemas: Vec<String>,
}

/// Deserialization goes through the source fields so the derived lists
/// are always recomputed from the text.
#[derive(Deserialize)]
struct RequirementSource {
    number: u32,
    text: String,
}

impl From<RequirementSource> for Requirement {
    fn from(source: RequirementSource) -> Self {
        Self::new(source.number, source.text)
    }
}

impl Requirement {
    /// Create requirement and extract its entity references
    #[must_use]
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        let text = text.into();
        let services = extract_services(&text);
        let events = extract_events(&text);
        let schemas = extract_schemas(&text);

        Self {
            number,
            text,
            services,
            events,
            schemas,
        }
    }

    /// Item number as written in the source list
    #[inline]
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Full requirement text (continuation lines joined with spaces)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Service names in encounter order, duplicates kept
    #[inline]
    #[must_use]
    pub fn services(&self) -> &[String] {
        &self.services
    }

    /// Event names in encounter order, duplicates kept
    #[inline]
    #[must_use]
    pub fn events(&self) -> &[String] {
        &self.events
    }

    /// Avro schema file names in encounter order, duplicates kept
    #[inline]
    #[must_use]
    pub fn schemas(&self) -> &[String] {
        &self.schemas
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} [services={:?}, events={:?}]",
            self.number, self.text, self.services, self.events
        )
    }
}

fn extract_services(text: &str) -> Vec<String> {
    SERVICE_PATTERN
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

fn extract_events(text: &str) -> Vec<String> {
    EVENT_PATTERN
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

fn extract_schemas(text: &str) -> Vec<String> {
    if !text.to_lowercase().contains(AVRO_SCHEMA_MARKER) {
        return Vec::new();
    }

    EVENT_PATTERN
        .captures_iter(text)
        .map(|caps| format!("{}{SCHEMA_EXTENSION}", &caps[1]))
        .collect()
}
