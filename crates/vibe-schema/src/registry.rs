//! Central schema registry for all MatchVibe types.
//!
//! The `SchemaRegistry` builds JSON Schemas from vibe-core types at
//! construction time using [`schemars::schema_for!`] and validates values via
//! `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use serde::Serialize;

use crate::error::SchemaError;

/// Central store of all JSON Schemas in the MatchVibe system.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Returns early from the enclosing function on failure.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, to_schema_value($name, &schema_for!($ty))?);
    };
}

fn to_schema_value<T: Serialize>(name: &str, schema: &T) -> Result<serde_json::Value, SchemaError> {
    serde_json::to_value(schema)
        .map_err(|e| SchemaError::Generation(format!("cannot serialize schema '{name}': {e}")))
}

impl SchemaRegistry {
    /// Build a registry containing every entity and CLI response schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Generation` if a generated schema cannot be
    /// converted to JSON.
    pub fn new() -> Result<Self, SchemaError> {
        let mut schemas = HashMap::new();

        // --- Entity types ---
        register!(schemas, "question", vibe_core::entities::Question);
        register!(schemas, "response", vibe_core::entities::Response);
        register!(
            schemas,
            "response_record",
            vibe_core::entities::ResponseRecord
        );
        register!(schemas, "match_result", vibe_core::entities::MatchResult);
        register!(schemas, "session_input", vibe_core::entities::SessionInput);

        // --- Progress ---
        register!(
            schemas,
            "readiness_report",
            vibe_core::readiness::ReadinessReport
        );

        // --- CLI response types ---
        register!(
            schemas,
            "validation_response",
            vibe_core::responses::ValidationResponse
        );
        register!(
            schemas,
            "evaluation_response",
            vibe_core::responses::EvaluationResponse
        );

        Ok(Self { schemas })
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}
