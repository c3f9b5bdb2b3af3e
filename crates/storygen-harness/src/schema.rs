//! Static event schemas

use crate::error::{HarnessError, HarnessResult};
use crate::event::Event;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

const SCHEMA_FILE_SUFFIX: &str = ".avsc";

/// JSON type a payload field must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// JSON string
    String,
    /// Integral JSON number
    Integer,
    /// Any JSON number
    Number,
    /// JSON boolean
    Boolean,
    /// JSON object
    Object,
    /// JSON array
    Array,
    /// Anything but null
    Any,
}

impl FieldType {
    /// Check a non-null value against the type
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Object => value.is_object(),
            FieldType::Array => value.is_array(),
            FieldType::Any => !value.is_null(),
        }
    }
}

/// One payload field requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Payload key
    pub name: String,
    /// Expected type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether the field must be present and non-null
    #[serde(default = "required_by_default")]
    pub required: bool,
}

fn required_by_default() -> bool {
    true
}

impl FieldSpec {
    /// Required field
    #[must_use]
    pub fn required(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: true,
        }
    }

    /// Optional field; null and absence both pass
    #[must_use]
    pub fn optional(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
        }
    }
}

/// Named set of field requirements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// Schema name
    pub name: String,
    /// Field requirements; extra payload fields are allowed
    pub fields: Vec<FieldSpec>,
}

impl SchemaDefinition {
    /// Create definition
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// First violation in the payload, if any
    fn violation(&self, event: &Event) -> Option<String> {
        self.fields.iter().find_map(|spec| {
            match event.get(&spec.name).filter(|value| !value.is_null()) {
                None if spec.required => Some(format!("missing required field {}", spec.name)),
                None => None,
                Some(value) if !spec.field_type.accepts(value) => Some(format!(
                    "field {} expected {:?}, got {value}",
                    spec.name, spec.field_type
                )),
                Some(_) => None,
            }
        })
    }
}

/// Checks events against named schemas
#[cfg_attr(test, mockall::automock)]
pub trait SchemaValidator: Send + Sync {
    /// Validate an event payload
    ///
    /// # Errors
    /// [`HarnessError::UnknownSchema`] or [`HarnessError::SchemaViolation`]
    fn validate(&self, event: &Event, schema_name: &str) -> HarnessResult<()>;
}

/// In-memory schema registry
///
/// Lookups accept either the bare name or the `.avsc` file form produced
/// by story parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaCatalog {
    schemas: HashMap<String, SchemaDefinition>,
}

impl SchemaCatalog {
    /// Empty catalog
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With one schema registered
    #[must_use]
    pub fn with_schema(mut self, schema: SchemaDefinition) -> Self {
        self.register(schema);
        self
    }

    /// Register or replace a schema
    pub fn register(&mut self, schema: SchemaDefinition) {
        self.schemas.insert(schema.name.clone(), schema);
    }

    /// Look up a schema by name or file name
    #[must_use]
    pub fn get(&self, schema_name: &str) -> Option<&SchemaDefinition> {
        self.schemas.get(schema_name).or_else(|| {
            schema_name
                .strip_suffix(SCHEMA_FILE_SUFFIX)
                .and_then(|bare| self.schemas.get(bare))
        })
    }

    /// Number of schemas
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Load a catalog from a JSON object keyed by schema name
    ///
    /// # Errors
    /// Returns the JSON error if the document does not describe a catalog
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl SchemaValidator for SchemaCatalog {
    fn validate(&self, event: &Event, schema_name: &str) -> HarnessResult<()> {
        let schema = self.get(schema_name).ok_or_else(|| HarnessError::UnknownSchema {
            schema: schema_name.to_string(),
        })?;

        match schema.violation(event) {
            Some(reason) => Err(HarnessError::schema_violation(
                event.event_type(),
                schema_name,
                reason,
            )),
            None => Ok(()),
        }
    }
}
