//! Per-type builder producing validated argument schemas.
//!
//! # Example
//!
//! ```
//! use dcommander::domain::argument::{boolean, number, ValueType};
//!
//! let amount = number("amount").build().unwrap();
//! assert!(amount.is_required());
//!
//! let silent = boolean("silent").optional().default("no").build().unwrap();
//! assert_eq!(silent.value_type(), ValueType::Boolean);
//! assert_eq!(silent.default_value().and_then(|v| v.as_bool()), Some(false));
//! ```

use super::{ArgumentSchema, ValueType};
use crate::domain::foundation::SchemaError;

/// Staging object for one [`ArgumentSchema`].
///
/// Arguments are required unless [`optional`](Self::optional) is called.
/// Defaults are given as raw tokens and converted once, at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSchemaBuilder {
    name: String,
    value_type: ValueType,
    required: bool,
    default: Option<String>,
    // set when `default` was called before `optional`
    default_while_required: bool,
}

impl ArgumentSchemaBuilder {
    /// Creates a builder for a required argument of `value_type`.
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            required: true,
            default: None,
            default_while_required: false,
        }
    }

    /// Builder: Mark the argument as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Builder: Mark the argument as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Builder: Set the raw default used when the argument is omitted.
    ///
    /// Must follow [`optional`](Self::optional); a default given while the
    /// argument is still required fails at build time.
    pub fn default(mut self, raw: impl Into<String>) -> Self {
        self.default_while_required |= self.required;
        self.default = Some(raw.into());
        self
    }

    /// Returns the argument name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validates the declaration and produces the schema.
    ///
    /// # Errors
    ///
    /// - `SchemaError::EmptyName` if the name is empty or whitespace
    /// - `SchemaError::DefaultOnRequired` if the argument is required, or the
    ///   default was given before `optional`
    /// - `SchemaError::InvalidDefault` if the default is not valid for the type
    pub fn build(self) -> Result<ArgumentSchema, SchemaError> {
        if self.name.trim().is_empty() {
            return Err(SchemaError::EmptyName);
        }

        let default = match self.default {
            Some(_) if self.required || self.default_while_required => {
                return Err(SchemaError::DefaultOnRequired { argument: self.name });
            }
            Some(raw) => match self.value_type.convert_value(&raw) {
                Ok(value) => Some(value),
                Err(source) => {
                    return Err(SchemaError::InvalidDefault {
                        argument: self.name,
                        source,
                    });
                }
            },
            None => None,
        };

        tracing::debug!(
            argument = %self.name,
            value_type = %self.value_type,
            required = self.required,
            has_default = default.is_some(),
            "argument schema built"
        );

        Ok(ArgumentSchema::new(
            self.name,
            self.value_type,
            self.required,
            default,
        ))
    }
}

/// Starts a number argument.
pub fn number(name: impl Into<String>) -> ArgumentSchemaBuilder {
    ArgumentSchemaBuilder::new(name, ValueType::Number)
}

/// Starts a string argument.
pub fn string(name: impl Into<String>) -> ArgumentSchemaBuilder {
    ArgumentSchemaBuilder::new(name, ValueType::String)
}

/// Starts a boolean argument.
pub fn boolean(name: impl Into<String>) -> ArgumentSchemaBuilder {
    ArgumentSchemaBuilder::new(name, ValueType::Boolean)
}

/// Starts an object argument.
pub fn object(name: impl Into<String>) -> ArgumentSchemaBuilder {
    ArgumentSchemaBuilder::new(name, ValueType::Object)
}

/// Starts a date argument.
pub fn date(name: impl Into<String>) -> ArgumentSchemaBuilder {
    ArgumentSchemaBuilder::new(name, ValueType::Date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::argument::TypedValue;

    #[test]
    fn arguments_are_required_by_default() {
        let schema = string("reason").build().unwrap();
        assert!(schema.is_required());
        assert!(schema.default_value().is_none());
    }

    #[test]
    fn type_constructors_set_value_type() {
        assert_eq!(number("a").build().unwrap().value_type(), ValueType::Number);
        assert_eq!(string("a").build().unwrap().value_type(), ValueType::String);
        assert_eq!(boolean("a").build().unwrap().value_type(), ValueType::Boolean);
        assert_eq!(object("a").build().unwrap().value_type(), ValueType::Object);
        assert_eq!(date("a").build().unwrap().value_type(), ValueType::Date);
    }

    #[test]
    fn optional_default_is_pre_converted() {
        let schema = number("limit").optional().default("0x20").build().unwrap();
        assert!(!schema.is_required());
        assert_eq!(schema.default_value(), Some(&TypedValue::Number(32)));
    }

    #[test]
    fn build_rejects_empty_name() {
        assert_eq!(string("").build(), Err(SchemaError::EmptyName));
        assert_eq!(string("   ").build(), Err(SchemaError::EmptyName));
    }

    #[test]
    fn build_rejects_default_on_required() {
        let result = boolean("force").default("yes").build();
        assert_eq!(
            result,
            Err(SchemaError::DefaultOnRequired {
                argument: "force".to_string()
            })
        );
    }

    #[test]
    fn required_after_optional_restores_requirement() {
        let result = boolean("force").optional().required().default("yes").build();
        assert!(matches!(result, Err(SchemaError::DefaultOnRequired { .. })));
    }

    #[test]
    fn default_before_optional_fails() {
        let result = boolean("x").default("yes").optional().build();
        assert_eq!(
            result,
            Err(SchemaError::DefaultOnRequired {
                argument: "x".to_string()
            })
        );
    }

    #[test]
    fn build_rejects_default_of_wrong_type() {
        let result = number("count").optional().default("many").build();
        match result {
            Err(SchemaError::InvalidDefault { argument, source }) => {
                assert_eq!(argument, "count");
                assert_eq!(source.raw(), "many");
                assert_eq!(source.expected(), "number");
            }
            other => panic!("Expected InvalidDefault, got {:?}", other),
        }
    }

    #[test]
    fn name_is_available_before_build() {
        assert_eq!(date("until").name(), "until");
    }
}
